//! Error types for series synthesis.
//!
//! The synthesis core itself is total over its clamped input domain; errors
//! only arise at the edges where callers hand in untyped input (window
//! selector strings, anchor strings, configuration files).

use std::fmt;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, SeriesError>;

/// Structured context for series errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "parse_window", "load_config")
    pub operation: Option<String>,
    /// The offending input, if any
    pub input: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the offending input.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref input) = self.input {
            parts.push(format!("input={:?}", input));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for series synthesis.
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    /// The caller passed a window selector outside the enumerated set.
    #[error("Invalid window selector: {message} {context}")]
    InvalidWindowSelector {
        message: String,
        context: ErrorContext,
    },

    /// The anchor date could not be parsed.
    #[error("Invalid anchor: {message} {context}")]
    InvalidAnchor {
        message: String,
        context: ErrorContext,
    },

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },
}

impl SeriesError {
    /// Create an invalid window selector error for the given input.
    pub fn invalid_window(input: impl Into<String>) -> Self {
        let input = input.into();
        Self::InvalidWindowSelector {
            message: format!(
                "'{}' is not one of 1d, 1w, 1m, 3m, 6m, 12m",
                input.trim()
            ),
            context: ErrorContext::new("parse_window").with_input(input),
        }
    }

    /// Create an invalid anchor error.
    pub fn invalid_anchor(input: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidAnchor {
            message: "expected a YYYY-MM-DD date".to_string(),
            context: ErrorContext::new("parse_anchor")
                .with_input(input)
                .with_details(details),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a configuration error with context.
    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::InvalidWindowSelector { context, .. } => context,
            Self::InvalidAnchor { context, .. } => context,
            Self::ConfigurationError { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::InvalidWindowSelector { context, .. }
            | Self::InvalidAnchor { context, .. }
            | Self::ConfigurationError { context, .. } => {
                context.operation = Some(operation.into());
            }
        }
        self
    }
}
