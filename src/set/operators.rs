//! Operator overloads for set algebra on borrowed sets.
//!
//! | Operator  | Method                        |
//! |-----------|-------------------------------|
//! | `&a \| &b` | [`union`](SuperSet::union)         |
//! | `&a & &b`  | [`intersect`](SuperSet::intersect) |
//! | `&a - &b`  | [`subtract`](SuperSet::subtract)   |
//! | `&a ^ &b`  | [`xor`](SuperSet::xor)             |
//!
//! The result uses the left operand's hash builder.

use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::SuperSet;

impl<T, S1, S2> BitOr<&SuperSet<T, S2>> for &SuperSet<T, S1>
where
    T: Hash + Eq + Clone,
    S1: BuildHasher + Clone,
    S2: BuildHasher,
{
    type Output = SuperSet<T, S1>;

    /// Returns the union of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let left = SuperSet::from([1, 2, 3]);
    /// let right = SuperSet::from([2, 3, 4, 5]);
    /// assert_eq!((&left | &right).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    fn bitor(self, other: &SuperSet<T, S2>) -> Self::Output {
        self.union(other)
    }
}

impl<T, S1, S2> BitAnd<&SuperSet<T, S2>> for &SuperSet<T, S1>
where
    T: Hash + Eq + Clone,
    S1: BuildHasher + Clone,
    S2: BuildHasher,
{
    type Output = SuperSet<T, S1>;

    /// Returns the intersection of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let left = SuperSet::from([1, 2, 3]);
    /// let right = SuperSet::from([2, 3, 4, 5]);
    /// assert_eq!((&left & &right).to_vec(), vec![2, 3]);
    /// ```
    fn bitand(self, other: &SuperSet<T, S2>) -> Self::Output {
        self.intersect(other)
    }
}

impl<T, S1, S2> Sub<&SuperSet<T, S2>> for &SuperSet<T, S1>
where
    T: Hash + Eq + Clone,
    S1: BuildHasher + Clone,
    S2: BuildHasher,
{
    type Output = SuperSet<T, S1>;

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let left = SuperSet::from([1, 2, 3]);
    /// let right = SuperSet::from([2, 3, 4, 5]);
    /// assert_eq!((&left - &right).to_vec(), vec![1]);
    /// ```
    fn sub(self, other: &SuperSet<T, S2>) -> Self::Output {
        self.subtract(other)
    }
}

impl<T, S1, S2> BitXor<&SuperSet<T, S2>> for &SuperSet<T, S1>
where
    T: Hash + Eq + Clone,
    S1: BuildHasher + Clone,
    S2: BuildHasher,
{
    type Output = SuperSet<T, S1>;

    /// Returns the elements present in exactly one of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use superset::set::SuperSet;
    ///
    /// let left = SuperSet::from([1, 2, 3]);
    /// let right = SuperSet::from([2, 3, 4, 5]);
    /// assert_eq!((&left ^ &right).to_vec(), vec![1, 4, 5]);
    /// ```
    fn bitxor(self, other: &SuperSet<T, S2>) -> Self::Output {
        self.xor(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::union(|l: &SuperSet<i32>, r: &SuperSet<i32>| l | r, vec![1, 2, 3, 4, 5])]
    #[case::intersect(|l: &SuperSet<i32>, r: &SuperSet<i32>| l & r, vec![2, 3])]
    #[case::subtract(|l: &SuperSet<i32>, r: &SuperSet<i32>| l - r, vec![1])]
    #[case::xor(|l: &SuperSet<i32>, r: &SuperSet<i32>| l ^ r, vec![1, 4, 5])]
    fn test_operator_matches_fixture(
        #[case] operator: fn(&SuperSet<i32>, &SuperSet<i32>) -> SuperSet<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let left = SuperSet::from([1, 2, 3]);
        let right = SuperSet::from([2, 3, 4, 5]);
        assert_eq!(operator(&left, &right).to_vec(), expected);
    }

    #[rstest]
    fn test_operators_agree_with_methods() {
        let left = SuperSet::from([5, 1, 9, 3]);
        let right = SuperSet::from([3, 7, 5]);
        assert_eq!((&left | &right).to_vec(), left.union(&right).to_vec());
        assert_eq!((&left & &right).to_vec(), left.intersect(&right).to_vec());
        assert_eq!((&left - &right).to_vec(), left.subtract(&right).to_vec());
        assert_eq!((&left ^ &right).to_vec(), left.xor(&right).to_vec());
    }
}
