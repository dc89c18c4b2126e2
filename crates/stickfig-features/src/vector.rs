//! FeatureVector - fixed-length numeric output of an extractor

/// Output of one extractor: integers or reals depending on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureVector {
    /// Counts, ratios and flags
    Integer(Vec<i32>),
    /// Normalized or continuous descriptors
    Real(Vec<f64>),
}

impl FeatureVector {
    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Integer(v) => v.len(),
            Self::Real(v) => v.len(),
        }
    }

    /// Check if the vector holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Integer values, `None` for a real vector.
    pub fn as_ints(&self) -> Option<&[i32]> {
        match self {
            Self::Integer(v) => Some(v),
            Self::Real(_) => None,
        }
    }

    /// Real values, `None` for an integer vector.
    pub fn as_reals(&self) -> Option<&[f64]> {
        match self {
            Self::Real(v) => Some(v),
            Self::Integer(_) => None,
        }
    }

    /// All values widened to `f64`.
    pub fn to_reals(&self) -> Vec<f64> {
        match self {
            Self::Integer(v) => v.iter().map(|&x| f64::from(x)).collect(),
            Self::Real(v) => v.clone(),
        }
    }

    /// Check whether every value is zero.
    pub fn is_all_zero(&self) -> bool {
        match self {
            Self::Integer(v) => v.iter().all(|&x| x == 0),
            Self::Real(v) => v.iter().all(|&x| x == 0.0),
        }
    }

    /// Check that no value is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Real(v) => v.iter().all(|x| x.is_finite()),
        }
    }
}

impl From<Vec<i32>> for FeatureVector {
    fn from(v: Vec<i32>) -> Self {
        Self::Integer(v)
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(v: Vec<f64>) -> Self {
        Self::Real(v)
    }
}
