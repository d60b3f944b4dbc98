//! Construction-time knobs for a [`Tree`][crate::Tree].

use crate::error::{Error, Result};

/// How a [`Tree`][crate::Tree] records the path of its descents.
///
/// Every insert and delete records the ancestors it walks through so it can
/// fix their balance factors on the way back up. By default that record grows
/// as needed. A bounded record is reserved once per operation with room for
/// `path_capacity` ancestors and fails with [`Error::TooLarge`] instead of
/// growing, which caps the tree's height at `path_capacity + 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// The maximum number of ancestors a single descent may record, or `None`
    /// for no limit.
    pub path_capacity: Option<usize>,
}

impl Config {
    /// A configuration whose descent path grows without a bound.
    pub fn unbounded() -> Self {
        Self {
            path_capacity: None,
        }
    }

    /// A configuration whose descent path holds at most `capacity` ancestors.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{Config, Error, Natural, Tree};
    ///
    /// // Room for a perfect tree of height 3 and nothing more.
    /// let mut tree = Tree::with_config(Natural, Config::bounded(2)).unwrap();
    /// for i in [4, 2, 6, 1, 3, 5, 7] {
    ///     tree.put(i).unwrap();
    /// }
    ///
    /// assert_eq!(tree.put(8), Err(Error::TooLarge));
    /// assert_eq!(tree.len(), 7);
    /// ```
    pub fn bounded(capacity: usize) -> Self {
        Self {
            path_capacity: Some(capacity),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self.path_capacity {
            Some(0) => Err(Error::InvalidArgument),
            _ => Ok(()),
        }
    }
}
