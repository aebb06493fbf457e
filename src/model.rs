use std::collections::BTreeMap;

/// Named model coefficients.
///
/// The survey model uses exactly seven: beta01, beta1, beta2, beta02,
/// beta03, betaS1_13, betaS1_23.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters {
    coefficients: BTreeMap<String, f64>,
}

impl Parameters {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            coefficients: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Looks up a coefficient by name.
    ///
    /// Panics if the coefficient is absent; the model formula only references
    /// the fixed seven names, so a miss is a programming error.
    pub fn coef(&self, name: &str) -> f64 {
        self.coefficients[name]
    }
}

/// Covariate columns, one entry per choice situation.
///
/// Column lengths are not cross-checked; the utility formula indexes them in
/// lockstep and panics on a short column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObservationData {
    pub x1: Vec<f64>,
    pub x2: Vec<f64>,
    pub sero: Vec<f64>,
    pub s1: Vec<f64>,
    pub av1: Vec<f64>,
    pub av2: Vec<f64>,
    pub av3: Vec<f64>,
}

/// The fixed survey coefficients embedded in the program.
pub fn survey_parameters() -> Parameters {
    Parameters::from_pairs([
        ("beta01", 0.1),
        ("beta1", -0.5),
        ("beta2", -0.4),
        ("beta02", 1.0),
        ("beta03", 0.0),
        ("betaS1_13", 0.33),
        ("betaS1_23", 0.58),
    ])
}

/// The fixed survey dataset embedded in the program, ten choice situations.
pub fn survey_data() -> ObservationData {
    ObservationData {
        x1: vec![2.0, 1.0, 3.0, 4.0, 2.0, 1.0, 8.0, 7.0, 3.0, 2.0],
        x2: vec![8.0, 7.0, 4.0, 1.0, 4.0, 7.0, 2.0, 2.0, 3.0, 1.0],
        sero: vec![0.0; 10],
        s1: vec![3.0, 8.0, 4.0, 7.0, 1.0, 6.0, 5.0, 9.0, 2.0, 3.0],
        av1: vec![1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0],
        av2: vec![1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0],
        av3: vec![1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    }
}
