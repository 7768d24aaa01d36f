use coordconv_core::AstroError;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordError {
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Invalid site: {message}")]
    InvalidSite { message: String },

    /// A value is outside the domain where the model is valid, e.g. an altitude
    /// below the refraction floor.
    #[error("{quantity} = {value} is below the valid minimum {min}")]
    OutOfRange {
        quantity: String,
        value: f64,
        min: f64,
    },

    #[error("Observing site required for {frame} coordinates")]
    MissingSite { frame: String },

    #[error("Coordinate operation not supported: {message}")]
    UnsupportedOperation { message: String },

    #[error("Core astronomical calculation failed: {message}")]
    CoreError { message: String },
}

impl CoordError {
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn invalid_site(message: impl Into<String>) -> Self {
        Self::InvalidSite {
            message: message.into(),
        }
    }

    pub fn out_of_range(quantity: impl Into<String>, value: f64, min: f64) -> Self {
        Self::OutOfRange {
            quantity: quantity.into(),
            value,
            min,
        }
    }

    pub fn missing_site(frame: impl Into<String>) -> Self {
        Self::MissingSite {
            frame: frame.into(),
        }
    }

    pub fn unsupported_operation(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    pub fn from_core(error: AstroError) -> Self {
        Self::CoreError {
            message: error.to_string(),
        }
    }

    /// True for errors caused by the refraction floor.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<AstroError> for CoordError {
    fn from(error: AstroError) -> Self {
        Self::from_core(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coordconv_core::MathErrorKind;

    #[test]
    fn test_out_of_range_message() {
        let err = CoordError::out_of_range("apparent altitude", 2.5, 5.0);
        assert!(err.is_out_of_range());
        assert_eq!(
            err.to_string(),
            "apparent altitude = 2.5 is below the valid minimum 5"
        );
    }

    #[test]
    fn test_missing_site() {
        let err = CoordError::missing_site("Obs");
        assert!(err.to_string().contains("Obs"));
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_from_core() {
        let core = AstroError::math_error("op", MathErrorKind::InvalidInput, "zero axis");
        let err: CoordError = core.into();
        assert!(matches!(err, CoordError::CoreError { .. }));
        assert!(err.to_string().contains("zero axis"));
    }
}
