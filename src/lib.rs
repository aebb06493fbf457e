//! Choice probabilities for a fixed multinomial logit survey model:
//! linear utilities from embedded data and coefficients, a row-wise
//! logistic transform, and a plain-text results file.

pub mod logit;
pub mod math;
pub mod model;
pub mod output;

use std::path::Path;

pub use logit::{probabilities, utilities, ChoiceError, ProbabilityTable, UtilityTable};
pub use model::{survey_data, survey_parameters, ObservationData, Parameters};
pub use output::{save_probabilities, DEFAULT_OUTPUT_PATH};

/// Runs the full pipeline: compute probabilities and write them to `path`.
pub fn run(
    parameters: &Parameters,
    data: &ObservationData,
    path: impl AsRef<Path>,
) -> Result<(), ChoiceError> {
    let table = probabilities(parameters, data)?;
    save_probabilities(&table, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, survey_data, survey_parameters, ChoiceError, ObservationData};
    use std::fs;

    #[test]
    fn pipeline_writes_one_line_per_alternative() {
        let data = ObservationData {
            x1: vec![2.0],
            x2: vec![8.0],
            sero: vec![0.0],
            s1: vec![3.0],
            av1: vec![1.0],
            av2: vec![1.0],
            av3: vec![1.0],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");

        run(&survey_parameters(), &data, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with("Alternative:1: "));
    }

    #[test]
    fn pipeline_surfaces_the_dimension_guard_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");

        let err = run(&survey_parameters(), &survey_data(), &path).unwrap_err();
        assert!(matches!(err, ChoiceError::DimensionMismatch { .. }));
        assert!(!path.exists());
    }
}
