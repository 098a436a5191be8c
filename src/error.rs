use core::fmt;

/// Error returned when an operation that needs at least one element is
/// invoked on an empty [`BstSet`](crate::BstSet).
///
/// This is a caller-contract violation, distinct from the ordinary
/// "key not found" outcome, which is reported as a plain result value
/// (`Ok(false)` or `Ok(None)`) rather than an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyTreeError;

impl fmt::Display for EmptyTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("operation requires a non-empty tree")
    }
}

impl core::error::Error for EmptyTreeError {}
