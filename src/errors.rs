use thiserror::Error;

/// An error that can occur while setting up or evaluating an approximation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntegError {
    /// Bounds or their distance are not finite, or bounds are not strictly increasing.
    #[error("Invalid interval [{alpha}, {beta}]: expected finite bounds with alpha < beta")]
    InvalidInterval { alpha: f64, beta: f64 },

    #[error("Invalid subdivision count {0}: expected a positive count within the allowed range")]
    InvalidSubdivisionCount(usize),

    #[error("Invalid subdivision count {0}: expected a positive count")]
    NegativeSubdivisionCount(i64),

    #[error("Invalid scale parameter sigma = {0}: expected a finite value greater than 0")]
    InvalidScaleParameter(f64),

    #[error("Invalid location parameter mu = {0}: expected a finite value")]
    InvalidLocationParameter(f64),

    /// The exact area is zero, so no relative error exists.
    #[error("Reference area {0} is zero, percentage error is undefined")]
    DegenerateReference(f64),

    #[error("Approximated area {total} against reference {reference} gives no finite percentage error")]
    NonFiniteError { total: f64, reference: f64 },
}

/// An error that can occur during parsing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unknown integration rule '{0}'")]
    UnknownRule(String),

    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Parameter has been previously declared.
    #[error("Parameter '{0}' declared more than once")]
    DuplicateParameter(String),

    #[error("Subdivision count '{0}' is not a positive integer")]
    InvalidSubdivisionCount(String),

    #[error("Failed to parse '{input}': {reason}")]
    Syntax { input: String, reason: String },
}

impl From<nom::Err<nom::error::Error<&str>>> for ParseError {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => Self::Syntax {
                input: String::new(),
                reason: "incomplete input".to_string(),
            },
            nom::Err::Error(e) | nom::Err::Failure(e) => Self::Syntax {
                input: e.input.to_string(),
                reason: format!("{:?}", e.code),
            },
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DisplayError {
    #[error("BadInput: {0}")]
    BadInput(String),

    #[error(transparent)]
    Integ(#[from] IntegError),
}

/// Umbrella error for the front end entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProxyError {
    #[error(transparent)]
    Integ(#[from] IntegError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Display(#[from] DisplayError),
}

#[cfg(feature = "python")]
impl From<ProxyError> for pyo3::PyErr {
    fn from(err: ProxyError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
