//! The kinds of errors raised by this crate.
//!
//! Every kind derives [`ErrorKind`] and is converted into a [`sym_error::Error`] with `?` or
//! [`Into`]. Callers usually only need [`Error::category`](sym_error::Error::category); the
//! concrete kind is available through [`Error::downcast_ref`](sym_error::Error::downcast_ref).

use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::{Category, EXPR};

/// Attempted to divide by an exact zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "division by zero", labels = ["this expression"])]
pub struct DivisionByZero;

/// The expression has no value, such as `0^0`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is an indeterminate form", self.form),
    labels = ["this expression"],
)]
pub struct IndeterminateForm {
    /// The form that was encountered.
    pub form: &'static str,
}

/// The operation is not defined for these operands, such as ordering two complex numbers.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot {}", self.operation),
    labels = ["this expression"],
    help = self.reason,
)]
pub struct InvalidOperation {
    /// What was attempted.
    pub operation: &'static str,

    /// Why it is not defined.
    pub reason: &'static str,
}

/// An operand had the wrong type for the operator it was given to.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply `{}` to a {}", self.op, self.found),
    labels = ["this operand"],
    help = format!("`{}` expects {} operands", self.op, self.expected),
)]
pub struct TypeMismatch {
    /// The operator.
    pub op: &'static str,

    /// The kind of operand the operator expects.
    pub expected: &'static str,

    /// The kind of operand it was given.
    pub found: &'static str,
}

/// An operator or function was given the wrong number of operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "`{}` takes {} argument{}, but {} {} given",
        self.name,
        self.expected,
        if self.expected == 1 { "" } else { "s" },
        self.given,
        if self.given == 1 { "was" } else { "were" },
    ),
    labels = ["this call"],
)]
pub struct WrongArity {
    /// The name of the operator or function.
    pub name: &'static str,

    /// The number of operands it takes.
    pub expected: usize,

    /// The number of operands it was given.
    pub given: usize,
}

/// The function does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", self.name),
    labels = ["this function"],
    help = if self.suggestions.is_empty() {
        format!(
            "the available functions are: {}",
            crate::entity::FUNCTIONS.map(|op| op.name()).join(", ")
        )
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", self.suggestions[0].fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|name| format!("`{}`", name.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownFunction {
    /// The name that was looked up.
    pub name: String,

    /// Similarly named functions that do exist.
    pub suggestions: Vec<&'static str>,
}

/// The name is not one of the known constants.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a known constant", self.name),
    labels = ["this name"],
    help = match self.suggestions.as_slice() {
        [name] => format!("did you mean the constant `{}`?", name.fg(EXPR)),
        _ => format!("the known constants are: {}", crate::consts::NAMES.join(", ")),
    },
)]
pub struct UnknownConstant {
    /// The name that was looked up.
    pub name: String,

    /// Similarly named constants that do exist.
    pub suggestions: Vec<&'static str>,
}

/// A numeric evaluation met a variable with no value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot evaluate an expression containing the variable `{}`", self.variable),
    labels = ["this variable"],
    help = format!("substitute a value for `{}` first", (&self.variable).fg(EXPR)),
)]
pub struct CannotEvaluate {
    /// The name of the free variable.
    pub variable: String,
}

/// A piece operation needed a concrete bound, but the bound was symbolic.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the bound `{}` is not a concrete real number", self.bound),
    labels = ["this bound"],
    help = "substitute values for the variables in the bounds first",
    category = Category::Unsupported,
)]
pub struct SymbolicBound {
    /// The offending bound, formatted.
    pub bound: String,
}

/// The operation is intentionally not implemented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} is not supported", self.feature),
    labels = ["this expression"],
    category = Category::Unsupported,
)]
pub struct NotSupported {
    /// A description of what was requested.
    pub feature: &'static str,
}

/// The simplifier spent its entire iteration quota without reaching a fixed point.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("simplification did not finish within {} iterations", self.limit),
    help = "raise `Ctxt::max_iterations` or simplify a smaller expression",
    category = Category::Exhausted,
)]
pub struct QuotaExceeded {
    /// The quota that was exhausted.
    pub limit: usize,
}

/// The operation was cancelled through its [`CancellationToken`](crate::CancellationToken).
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "the operation was cancelled", category = Category::Cancelled)]
pub struct Cancelled;
