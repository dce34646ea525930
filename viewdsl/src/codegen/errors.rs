use codemap::Span;
use codemap_diagnostic::{Diagnostic, Level};
use displaydoc::Display;
use std::fmt;

use super::{diag, registry::HelperConstructorSpec};
use crate::metadata::MethodDescriptor;

/// An inconsistency between the widget metadata, the helper constructor
/// registry, and the templates. None of these can be recovered from; the
/// operator has to fix the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenError {
    /// can't find a method `{setter}` (for property `{property}`) for helper constructor `{widget}({spec})`
    MissingSetter {
        widget: String,
        property: String,
        setter: String,
        spec: HelperConstructorSpec,
    },
    /// there are several methods `{setter}` for helper constructor `{widget}({spec})`: {candidates}
    AmbiguousSetter {
        widget: String,
        setter: String,
        spec: HelperConstructorSpec,
        candidates: MethodList,
    },
    /// helper constructors not found for `{widget}` (looked up as `{key}`)
    MissingHelperSpec { widget: String, key: String },
    /// helper constructors are declared for `{widget}` (as `{key}`), but it has no usable constructor
    UnconstructibleWidget {
        widget: String,
        key: String,
        span: Option<Span>,
    },
    /// factory property `{key}` of `{object}` is bound to `{existing}` and can't be rebound to `{new}`
    FactoryKeyCollision {
        object: String,
        key: String,
        existing: String,
        new: String,
    },
    /// template `{name}` is not defined
    UnknownTemplate { name: String },
    /// template `{template}` refers to `{key}`, which has no value
    UnboundPlaceholder { template: String, key: String },
    /// template `{template}` has an unterminated placeholder at byte {offset}
    UnterminatedPlaceholder { template: String, offset: usize },
}

impl std::error::Error for GenError {}

impl GenError {
    /// The registry line this error originates from, if known.
    pub fn span(&self) -> Option<Span> {
        match self {
            GenError::MissingSetter { spec, .. } | GenError::AmbiguousSetter { spec, .. } => {
                spec.span
            }
            GenError::UnconstructibleWidget { span, .. } => *span,
            _ => None,
        }
    }

    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            level: Level::Error,
            message: self.to_string(),
            code: None,
            spans: diag::span_labels(self.span(), None),
        }
    }
}

/// Every error found in one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    pub errors: Vec<GenError>,
}

impl ErrorReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, e: GenError) {
        self.errors.push(e);
    }

    pub fn extend(&mut self, other: ErrorReport) {
        self.errors.extend(other.errors);
    }

    /// `Ok(value)` if nothing was reported.
    pub fn into_result<T>(self, value: T) -> Result<T, ErrorReport> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn emit(&self, diag: &mut diag::Diag) {
        let msgs: Vec<_> = self.errors.iter().map(GenError::to_diagnostic).collect();
        diag.emit(&msgs);
    }
}

impl From<GenError> for ErrorReport {
    fn from(e: GenError) -> Self {
        Self { errors: vec![e] }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            0 => write!(f, "no errors"),
            1 => write!(f, "{}", self.errors[0]),
            n => {
                write!(f, "{} errors:", n)?;
                for e in self.errors.iter() {
                    write!(f, "\n - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ErrorReport {}

/// Methods listed in an error message, e.g. `setValue(int), setValue(long)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodList(pub Vec<MethodDescriptor>);

impl fmt::Display for MethodList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}
