//! Contains the common [`ErrorKind`] trait used by all errors raised while building, simplifying,
//! or evaluating expressions.
//!
//! Errors are grouped into a small number of [`Category`]s so that callers can decide how to
//! react to them without inspecting the concrete kind (for example, an exhausted iteration quota
//! is fatal for the current call, while a type mismatch points at bad input).

use ariadne::{Color, Label, Report, ReportKind};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad family an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// The input was malformed: wrong arity, a type mismatch, an unknown name, or arithmetic that
    /// has no value.
    Input,

    /// The input is well-formed, but asks for a capability that is intentionally not implemented.
    Unsupported,

    /// A resource limit, such as the rewrite quota, was exhausted.
    Exhausted,

    /// The operation was cancelled by the caller.
    Cancelled,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input error"),
            Self::Unsupported => write!(f, "unsupported operation"),
            Self::Exhausted => write!(f, "resource exhausted"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `#[derive(ErrorKind)]` from the `sym-attrs` crate.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the error as a [`dyn Any`], so that it can be downcast to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// The message displayed at the top of the error.
    fn message(&self) -> String;

    /// The text of the labels pointing at each span of the error, in order.
    fn labels(&self) -> Vec<String> {
        Vec::new()
    }

    /// Optional help text, describing what the user can do to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// The category of this error.
    fn category(&self) -> Category;

    /// Builds the report for this error.
    ///
    /// Each span is paired with the label at the same index; spans with no matching label are
    /// still highlighted, just without a message.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map(|span| span.start).unwrap_or(0);
        let mut labels = self.labels().into_iter();
        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.message())
            .with_labels(spans.iter().map(|span| {
                let label = Label::new((src_id, span.clone())).with_color(EXPR);
                match labels.next() {
                    Some(text) if !text.is_empty() => label.with_message(text),
                    _ => label,
                }
            }));

        if let Some(help) = self.help() {
            builder.set_help(help);
        }

        builder.finish()
    }
}

/// An error, optionally associated with regions of source code that can be highlighted.
///
/// Errors raised by the algebra itself carry no spans; a front end that knows where an expression
/// came from can attach them with [`Error::with_spans`] before building a report.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Replaces the spans of this error.
    pub fn with_spans(mut self, spans: Vec<Range<usize>>) -> Self {
        self.spans = spans;
        self
    }

    /// The category of the underlying error kind.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns true if the underlying error kind is of type `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<T>()
    }

    /// Returns a reference to the underlying error kind if it is of type `T`.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl<K: ErrorKind + 'static> From<K> for Error {
    fn from(kind: K) -> Self {
        Self::new(Vec::new(), kind)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())?;
        if let Some(help) = self.kind.help() {
            write!(f, " ({})", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
