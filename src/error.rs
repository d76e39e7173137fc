//! Error handling types for tree construction and formatting
//!
//! Only structural failures surface here. Malformed mutation requests
//! (empty names, names with spaces) are absorbed as no-ops and never
//! produce an error.

use std::{error::Error, fmt};
use thiserror::Error;

/// Main error type for building entity trees
#[derive(Debug)]
pub struct XmlError {
    /// The specific kind of error
    kind: XmlErrorKind,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlErrorKind {
    Shape(ShapeError),
    AdapterContract(AdapterContractError),
    Format(FormatError),
}

/// The input value does not have the shape of a plain record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A record was expected but a scalar or list was supplied
    #[error("value is not a plain record (found {found})")]
    NotARecord { found: &'static str },
    /// An attribute field carried a record or list instead of a scalar
    #[error("attribute field '{field}' does not hold a scalar (found {found})")]
    NonScalarAttribute { field: String, found: &'static str },
}

/// A formatting configuration that cannot be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("indentation of {spaces} spaces exceeds maximum allowed ({max})")]
    InvalidIndentation { spaces: usize, max: usize },
}

/// Which side of the adapter contract a transform belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Text,
    Entity,
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "String -> String"),
            Self::Entity => write!(f, "Entity -> Entity"),
        }
    }
}

/// An adapter exposed a transform of the wrong kind for where it was used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("adapter '{adapter}' transform '{transform}' is {found}, expected {expected}")]
pub struct AdapterContractError {
    pub adapter: String,
    pub transform: String,
    pub expected: TransformKind,
    pub found: TransformKind,
}

impl XmlError {
    pub fn new(kind: XmlErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    pub fn kind(&self) -> &XmlErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl From<ShapeError> for XmlError {
    fn from(err: ShapeError) -> Self {
        Self::new(XmlErrorKind::Shape(err))
    }
}

impl From<AdapterContractError> for XmlError {
    fn from(err: AdapterContractError) -> Self {
        Self::new(XmlErrorKind::AdapterContract(err))
    }
}

impl From<FormatError> for XmlError {
    fn from(err: FormatError) -> Self {
        Self::new(XmlErrorKind::Format(err))
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            XmlErrorKind::Shape(err) => err.to_string(),
            XmlErrorKind::AdapterContract(err) => err.to_string(),
            XmlErrorKind::Format(err) => err.to_string(),
        };

        write!(f, "Error: {}", base_error)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        Ok(())
    }
}

impl Error for XmlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            XmlErrorKind::Shape(err) => Some(err),
            XmlErrorKind::AdapterContract(err) => Some(err),
            XmlErrorKind::Format(err) => Some(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, XmlError>;
