//! Insertion-ordered sets.
//!
//! This module provides [`SuperSet`], a mutable set that iterates in the
//! order its elements were first added, together with:
//!
//! - [`SetLike`]: the capability every algebra operand must provide
//! - [`Distinct`]: any finite iterable, gathered into a [`SetLike`] operand
//! - [`Iter`] / [`IntoIter`]: insertion-order iterators
//! - [`DefaultHashBuilder`]: the hasher selected by the crate features
//!
//! # Insertion Order
//!
//! Adding a value that is already present does not move it. Removing a value
//! and adding it again places it at the end.
//!
//! ```rust
//! use superset::set::SuperSet;
//!
//! let mut set = SuperSet::from([1, 2, 3]);
//! set.add(1);
//! assert_eq!(set.to_vec(), vec![1, 2, 3]);
//!
//! set.remove(&1).add(1);
//! assert_eq!(set.to_vec(), vec![2, 3, 1]);
//! ```
//!
//! # Set Algebra
//!
//! ```rust
//! use std::collections::HashSet;
//! use superset::set::SuperSet;
//!
//! let set = SuperSet::from([1, 2, 3]);
//!
//! assert_eq!(set.intersect(&[2, 3, 4, 5]).to_vec(), vec![2, 3]);
//! assert_eq!(set.subtract(&vec![2, 3, 4, 5]).to_vec(), vec![1]);
//!
//! let plain: HashSet<i32> = set.iter().copied().collect();
//! assert!(set.equals(&plain));
//! ```

mod iter;
mod operators;
mod set_like;
mod store;
mod super_set;

pub use iter::IntoIter;
pub use iter::Iter;
pub use set_like::Distinct;
pub use set_like::SetLike;
pub use super_set::DEFAULT_SEPARATOR;
pub use super_set::SuperSet;

/// Hash builder used by [`SuperSet`] when none is given.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`, with the
/// `ahash` feature `ahash::RandomState`, and otherwise the standard library's
/// `RandomState`. `fxhash` takes precedence when both features are enabled.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`SuperSet`] when none is given.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`, with the
/// `ahash` feature `ahash::RandomState`, and otherwise the standard library's
/// `RandomState`. `fxhash` takes precedence when both features are enabled.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`SuperSet`] when none is given.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`, with the
/// `ahash` feature `ahash::RandomState`, and otherwise the standard library's
/// `RandomState`. `fxhash` takes precedence when both features are enabled.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;
