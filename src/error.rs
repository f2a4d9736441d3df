//! Error types for set operations.
//!
//! Almost every operation on a [`SuperSet`](crate::set::SuperSet) is total.
//! The one exception is [`reduce`](crate::set::SuperSet::reduce), which has
//! nothing to seed the fold with when the set is empty.

/// Represents an attempt to reduce an empty set without an initial value.
///
/// Use [`fold`](crate::set::SuperSet::fold) and supply an initial value when
/// the set may be empty.
///
/// # Examples
///
/// ```rust
/// use superset::error::EmptyReduceError;
/// use superset::set::SuperSet;
///
/// let empty: SuperSet<i32> = SuperSet::new();
/// let error = empty.reduce(|accumulator, element| accumulator + element);
///
/// assert_eq!(error, Err(EmptyReduceError));
/// assert_eq!(
///     format!("{}", EmptyReduceError),
///     "reduce of empty set with no initial value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyReduceError;

impl std::fmt::Display for EmptyReduceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("reduce of empty set with no initial value")
    }
}

impl std::error::Error for EmptyReduceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_reduce_error_display() {
        assert_eq!(
            format!("{EmptyReduceError}"),
            "reduce of empty set with no initial value"
        );
    }

    #[rstest]
    fn test_empty_reduce_error_debug() {
        let debug_string = format!("{EmptyReduceError:?}");
        assert!(debug_string.contains("EmptyReduceError"));
    }

    #[rstest]
    fn test_empty_reduce_error_source() {
        use std::error::Error;

        assert!(EmptyReduceError.source().is_none());
    }

    #[rstest]
    fn test_empty_reduce_error_is_boxable() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(EmptyReduceError);
        assert_eq!(
            boxed.to_string(),
            "reduce of empty set with no initial value"
        );
    }
}
