use ndarray::{Array1, Array2, Axis};

/// Utility scores in any of the shapes the logistic transform accepts.
///
/// A scalar is one choice situation with a single category; a row is one
/// choice situation with its categories laid out along the row; a matrix is
/// one independent choice situation per row.
#[derive(Clone, Debug)]
pub enum Scores {
    Scalar(f64),
    Row(Array1<f64>),
    Matrix(Array2<f64>),
}

impl Scores {
    /// Promote to matrix form: a scalar becomes 1x1, a row becomes 1xN.
    pub fn into_matrix(self) -> Array2<f64> {
        match self {
            Scores::Scalar(v) => Array2::from_elem((1, 1), v),
            Scores::Row(row) => row.insert_axis(Axis(0)),
            Scores::Matrix(m) => m,
        }
    }
}

impl From<f64> for Scores {
    fn from(v: f64) -> Self {
        Scores::Scalar(v)
    }
}

impl From<Vec<f64>> for Scores {
    fn from(v: Vec<f64>) -> Self {
        Scores::Row(Array1::from(v))
    }
}

impl From<Array1<f64>> for Scores {
    fn from(row: Array1<f64>) -> Self {
        Scores::Row(row)
    }
}

impl From<Array2<f64>> for Scores {
    fn from(m: Array2<f64>) -> Self {
        Scores::Matrix(m)
    }
}

/// Row-wise softmax: exponentiate every entry and divide by its row sum.
///
/// Each output row is a probability distribution over that row's entries.
/// No max-subtraction is applied, so rows with entries much above ~709
/// overflow `exp` and yield non-finite output.
pub fn logistic(scores: impl Into<Scores>) -> Array2<f64> {
    let x = scores.into().into_matrix();
    let exp = x.mapv(f64::exp);
    let row_sums = exp.sum_axis(Axis(1)).insert_axis(Axis(1));
    exp / &row_sums
}
