//! Numeric values of the named constants, computed once at [`PRECISION`](crate::primitive::PRECISION).

use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use rug::Float;
use super::primitive::float;

/// Euler's number.
pub static E: Lazy<Float> = Lazy::new(|| float(1).exp());

pub static PI: Lazy<Float> = Lazy::new(|| float(-1).acos());

/// The names of the constants that [`Variable::constant`](crate::entity::Variable::constant)
/// recognizes.
pub const NAMES: [&str; 2] = ["pi", "e"];

/// Returns the value of the named constant, if it exists.
pub fn value_of(name: &str) -> Option<&'static Float> {
    match name {
        "pi" => Some(&*PI),
        "e" => Some(&*E),
        _ => None,
    }
}

/// Returns the names of the constants whose names are similar to the given name.
pub fn similar_names(name: &str) -> Vec<&'static str> {
    NAMES
        .into_iter()
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .collect()
}
