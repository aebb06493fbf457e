use std::collections::BTreeMap;

use ndarray::Array2;
use thiserror::Error;

use crate::math::logistic::logistic;
use crate::model::{ObservationData, Parameters};

/// The model formula carries seven coefficients.
pub const COEFFS_PER_ALTERNATIVE: usize = 7;

/// Linear utility per alternative index, keyed 1..N.
pub type UtilityTable = BTreeMap<u32, f64>;

/// Softmax output per alternative index, keyed 1..N.
pub type ProbabilityTable = BTreeMap<u32, Array2<f64>>;

#[derive(Debug, Error)]
pub enum ChoiceError {
    #[error(
        "mismatched dimensions between parameters and data: \
         {alternatives} alternatives x 7 coefficients != {parameter_count} parameters"
    )]
    DimensionMismatch {
        alternatives: usize,
        parameter_count: usize,
    },
    #[error("failed to write probabilities: {0}")]
    Io(#[from] std::io::Error),
}

/// Computes the linear utility of every alternative.
///
/// The alternative count is taken from the AV1 column length. The dimension
/// guard requires `alternatives * 7 == parameter count`, so it only passes
/// for a single-alternative dataset with the full seven-coefficient map.
pub fn utilities(
    parameters: &Parameters,
    data: &ObservationData,
) -> Result<UtilityTable, ChoiceError> {
    let alternatives = data.av1.len();
    let parameter_count = parameters.len();

    if alternatives * COEFFS_PER_ALTERNATIVE != parameter_count {
        return Err(ChoiceError::DimensionMismatch {
            alternatives,
            parameter_count,
        });
    }

    let mut table = UtilityTable::new();
    for alt in 1..=alternatives {
        table.insert(alt as u32, utility(parameters, data, alt));
    }
    Ok(table)
}

/// The linear utility formula for one alternative index (1-based).
pub(crate) fn utility(parameters: &Parameters, data: &ObservationData, alt: usize) -> f64 {
    let i = alt - 1;
    parameters.coef("beta01")
        + parameters.coef("beta1") * data.x1[i]
        + parameters.coef("beta2") * data.x2[i]
        + parameters.coef("beta02") * data.sero[i]
        + parameters.coef("beta03") * data.s1[i]
        + parameters.coef("betaS1_13") * data.s1[i] * data.av1[i]
        + parameters.coef("betaS1_23") * data.s1[i] * data.av2[i]
}

/// Computes utilities and pushes each alternative's score through the
/// logistic transform.
///
/// Each utility is a scalar, so each table entry is a 1x1 distribution.
/// Normalization runs within each alternative's promoted row, never across
/// alternatives.
pub fn probabilities(
    parameters: &Parameters,
    data: &ObservationData,
) -> Result<ProbabilityTable, ChoiceError> {
    let v = utilities(parameters, data)?;
    Ok(v.into_iter().map(|(alt, u)| (alt, logistic(u))).collect())
}
