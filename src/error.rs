//! Unified error types for netif-tools.
//!
//! Each subsystem has its own error enum; [`NetifError`] wraps them with a
//! chain of context strings describing what was being attempted.

use crate::normalize::NormalizeError;
use crate::openconfig::VerifyError;
use crate::reports::ReportError;
use crate::restconf::ClientError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for netif-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetifError {
    /// Errors while normalizing a payload
    #[error("Normalization failed: {context}")]
    Normalize {
        context: String,
        #[source]
        source: NormalizeError,
    },

    /// Errors talking to NSO
    #[error("Device query failed: {context}")]
    Client {
        context: String,
        #[source]
        source: ClientError,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// Errors loading expected interfaces
    #[error("Verification failed: {context}")]
    Verify {
        context: String,
        #[source]
        source: VerifyError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for netif-tools operations
pub type Result<T> = std::result::Result<T, NetifError>;

impl NetifError {
    /// Create a normalization error with context
    pub fn normalize(context: impl Into<String>, source: NormalizeError) -> Self {
        Self::Normalize {
            context: context.into(),
            source,
        }
    }

    /// Create a client error with context
    pub fn client(context: impl Into<String>, source: ClientError) -> Self {
        Self::Client {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for NetifError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for NetifError {
    fn from(err: serde_json::Error) -> Self {
        Self::normalize(String::new(), NormalizeError::from(err))
    }
}

impl From<NormalizeError> for NetifError {
    fn from(err: NormalizeError) -> Self {
        Self::normalize(String::new(), err)
    }
}

impl From<ClientError> for NetifError {
    fn from(err: ClientError) -> Self {
        Self::client(String::new(), err)
    }
}

impl From<ReportError> for NetifError {
    fn from(err: ReportError) -> Self {
        Self::Report {
            context: String::new(),
            source: err,
        }
    }
}

impl From<VerifyError> for NetifError {
    fn from(err: VerifyError) -> Self {
        Self::Verify {
            context: String::new(),
            source: err,
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost first, so nested calls read as
/// `"loading inventory: reading payload a.json: <cause>"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<NetifError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: NetifError, new_ctx: &str) -> NetifError {
    match err {
        NetifError::Normalize { context, source } => NetifError::Normalize {
            context: chain_context(new_ctx, &context),
            source,
        },
        NetifError::Client { context, source } => NetifError::Client {
            context: chain_context(new_ctx, &context),
            source,
        },
        NetifError::Report { context, source } => NetifError::Report {
            context: chain_context(new_ctx, &context),
            source,
        },
        NetifError::Verify { context, source } => NetifError::Verify {
            context: chain_context(new_ctx, &context),
            source,
        },
        NetifError::Io {
            path,
            message,
            source,
        } => NetifError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        NetifError::Config(msg) => NetifError::Config(chain_context(new_ctx, &msg)),
        NetifError::Validation(msg) => NetifError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// `"new: existing"`, or just `new` when there is no existing context.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| NetifError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| NetifError::Validation(f().into()))
    }
}
