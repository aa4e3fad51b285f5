use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} must be strictly positive, got {value}")]
    NotPositive { what: &'static str, value: f64 },

    #[error("Value for {what} must lie in [{lo}, {hi}], got {value}")]
    OutOfInterval {
        what: &'static str,
        value: f64,
        lo: f64,
        hi: f64,
    },
}

impl CoreError {
    /// Name of the offending quantity.
    pub fn what(&self) -> &'static str {
        match self {
            CoreError::NonFinite { what, .. }
            | CoreError::NotPositive { what, .. }
            | CoreError::OutOfInterval { what, .. } => what,
        }
    }

    /// Value that failed the check.
    pub fn value(&self) -> f64 {
        match self {
            CoreError::NonFinite { value, .. }
            | CoreError::NotPositive { value, .. }
            | CoreError::OutOfInterval { value, .. } => *value,
        }
    }
}
