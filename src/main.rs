use choice_logit::{run, survey_data, survey_parameters, ChoiceError, DEFAULT_OUTPUT_PATH};

fn main() -> Result<(), ChoiceError> {
    let parameters = survey_parameters();
    let data = survey_data();

    match run(&parameters, &data, DEFAULT_OUTPUT_PATH) {
        Ok(()) => println!("Probabilities calculated and saved successfully!"),
        // A dimension mismatch is reported but does not fail the run.
        Err(err @ ChoiceError::DimensionMismatch { .. }) => println!("Error: {err}"),
        Err(err) => return Err(err),
    }

    Ok(())
}
