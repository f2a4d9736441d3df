//! # superset
//!
//! An insertion-ordered set augmented with functional operations and
//! classic set algebra.
//!
//! ## Overview
//!
//! [`SuperSet`](set::SuperSet) is a mutable, in-memory set that remembers the
//! order in which its elements were first added. On top of the usual
//! membership operations it provides:
//!
//! - **Functional transforms**: `map`, `filter`, `flat_map`, `reduce`, `fold`,
//!   `find`, `every`, `some`, `join`
//! - **Set algebra**: `union`, `intersect`, `subtract`, `xor`
//! - **Relations**: `is_subset_of`, `is_superset_of`, `is_disjoint_from`, `equals`
//!
//! Algebra and relations accept any [`SetLike`](set::SetLike) operand, so a
//! `SuperSet` can be combined with a `HashSet`, a `BTreeSet`, a `Vec`, a
//! `VecDeque` or a plain array without converting it first. Any other finite
//! iterable goes through [`Distinct`](set::Distinct).
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a sequence in insertion order
//! - `tracing`: trace events for store maintenance and bulk updates
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash::RandomState` as the default hasher
//! - `full`: `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use superset::prelude::*;
//!
//! let left = SuperSet::from([1, 2, 3]);
//! let right = SuperSet::from([2, 3, 4, 5]);
//!
//! assert_eq!(left.union(&right).to_vec(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(left.xor(&right).to_vec(), vec![1, 4, 5]);
//! assert_eq!(left.map(|element| element * element).to_vec(), vec![1, 4, 9]);
//! assert_eq!(left.reduce(|accumulator, element| accumulator + element), Ok(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use superset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::set::*;
}

pub mod error;
pub mod set;
