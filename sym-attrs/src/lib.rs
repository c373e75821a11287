//! `#[derive(ErrorKind)]` for the error types of `sym-core`.

mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::Target;
use syn::parse_macro_input;

/// Implements `sym_error::ErrorKind` for a struct from its `#[error(...)]` attribute.
///
/// ```ignore
/// use sym_attrs::ErrorKind;
/// use sym_error::Category;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not defined", variable),
///     labels = ["this variable"],
///     help = "give the variable a value before evaluating",
///     category = Category::Input,
/// )]
/// pub struct CannotEvaluate {
///     variable: String,
/// }
/// ```
///
/// `message` is required and becomes the headline of the report. `labels` is anything iterable
/// whose items implement `Display`; they are matched in order with the spans of the error. `help`
/// is an optional hint, and `category` defaults to `Category::Input` when left out.
///
/// Every tag is an arbitrary expression, evaluated with the named fields of the struct bound as
/// references. Tuple structs are rejected.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as Target);
    let name = &target.name;
    let expanded = quote! {
        impl sym_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    };
    expanded.into()
}
