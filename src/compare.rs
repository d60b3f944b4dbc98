//! The ordering capability a [`Tree`][crate::Tree] is built around.

use std::cmp::Ordering;

/// A strict total order over `T`.
///
/// The comparator is also the tree's context: anything the ordering depends
/// on lives inside the implementing value (or is captured by the closure) and
/// is handed back by [`Tree::comparator`][crate::Tree::comparator].
///
/// The order must stay consistent for the lifetime of the tree. An
/// inconsistent comparator won't cause undefined behavior but lookups may
/// miss elements and the tree may keep "equal" duplicates.
pub trait Comparator<T: ?Sized> {
    /// Orders `a` relative to `b`. `a` is the probe (the element being put,
    /// or the key being looked up) and `b` is an element stored in the tree.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
///
/// # Examples
///
/// ```
/// use avltree::{Natural, Tree};
///
/// let mut tree = Tree::new(Natural);
/// tree.put("b").unwrap();
/// tree.put("a").unwrap();
///
/// assert_eq!(tree.get_smallest(), Some(&"a"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
