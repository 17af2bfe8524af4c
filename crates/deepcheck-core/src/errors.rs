use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for
/// programmatic error handling, testing, and structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Assertion outcomes
    /// Expected and actual values are not structurally equal
    AssertionFailed,
    /// Comparison stopped because the nesting depth limit was reached
    DepthLimitExceeded,

    // Input decoding
    /// A JSON/YAML document could not be decoded into a comparable value
    InvalidValue,
    /// A case file is malformed (missing fields, wrong shape)
    InvalidCase,
    /// Comparison options failed validation
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::AssertionFailed => "ERR_ASSERTION_FAILED",
            ExErrorKind::DepthLimitExceeded => "ERR_DEPTH_LIMIT",
            ExErrorKind::InvalidValue => "ERR_INVALID_VALUE",
            ExErrorKind::InvalidCase => "ERR_INVALID_CASE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// operation and value-path context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the path (inside a value or a file) where the error was detected
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for ExError {
    fn from(err: std::io::Error) -> Self {
        ExError::new(ExErrorKind::Io).with_message(err.to_string())
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}

// ========== End Error Facility ==========

/// The single user-visible failure of [`crate::assert_equal`].
///
/// Carries the fully formatted `"{message}: {detail}"` line. The structured
/// divergence that produced it never leaves the assertion boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AssertionFailure {
    kind: ExErrorKind,
    message: String,
}

impl AssertionFailure {
    /// A values-differ failure
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self {
            kind: ExErrorKind::AssertionFailed,
            message: message.into(),
        }
    }

    /// A failure raised because the nesting depth limit was hit
    pub fn depth_limit(message: impl Into<String>) -> Self {
        Self {
            kind: ExErrorKind::DepthLimitExceeded,
            message: message.into(),
        }
    }

    /// Either `AssertionFailed` or `DepthLimitExceeded`
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// The formatted failure line
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the failure, returning the formatted line
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<AssertionFailure> for ExError {
    fn from(failure: AssertionFailure) -> Self {
        ExError::new(failure.kind)
            .with_op("assert_equal")
            .with_message(failure.message)
    }
}
