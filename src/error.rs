//! Error types.
//!
//! - `FitError` is what the library returns: sampling, solving and input parsing
//!   failures, each as its own variant so callers can react to them.
//! - `AppError` is what the `lsq` binary returns: a message plus a process exit code.

/// Failures of the sampling / fitting core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Sampling parameters or sampled values are unusable (zero count, non-finite
    /// bounds or step, `f(x)` undefined at a sample point).
    #[error("Invalid sampling domain: {0}")]
    Domain(String),

    /// The normal-equations system could not be solved for the requested degree.
    ///
    /// Usually there are fewer than `k` distinct x-values, or the grid is empty.
    #[error(
        "Normal-equations matrix is singular; not enough distinct samples for the requested degree. [n: {n}, k: {k}]"
    )]
    SingularSystem {
        /// Number of samples in the grid.
        n: usize,
        /// Number of coefficients requested (degree + 1).
        k: usize,
    },

    /// Text handed to the core could not be turned into a finite number.
    #[error("Invalid value for {field}: '{value}'")]
    InputParse { field: String, value: String },
}

impl FitError {
    pub fn domain(message: impl Into<String>) -> Self {
        FitError::Domain(message.into())
    }

    pub fn input_parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        FitError::InputParse {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result alias used by the library.
pub type Result<T> = std::result::Result<T, FitError>;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let exit_code = match err {
            FitError::InputParse { .. } => 2,
            FitError::Domain(_) => 3,
            FitError::SingularSystem { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
