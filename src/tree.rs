//! The [`Tree`] handle and its public operations.
//!
//! # Examples
//!
//! ```
//! use avltree::{Error, Natural, Tree};
//!
//! let mut tree = Tree::new(Natural);
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! tree.put(1).unwrap();
//! tree.put(5).unwrap();
//! assert_eq!(tree.get(&1), Some(&1));
//!
//! // Ordered neighbors of keys that may or may not be stored.
//! assert_eq!(tree.get_greater_than_or_equal(&2), Some(&5));
//! assert_eq!(tree.get_less_than(&5), Some(&1));
//!
//! // Deleting an element hands it back.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.delete(&1), Err(Error::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::compare::{Comparator, Natural};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::node::{extreme, Link, Node};
use crate::path::{descend, node_at, Descent, Direction, Path};
use crate::rebalance;
use crate::splice;

/// An ordered container of `T`s kept as an AVL tree. Elements are ordered by
/// the comparator `C` and no two stored elements compare equal.
#[derive(Clone)]
pub struct Tree<T, C = Natural> {
    comparator: C,
    config: Config,
    pub(crate) root: Link<T>,
    len: usize,
}

impl<T: Ord> Default for Tree<T, Natural> {
    fn default() -> Self {
        Self::new(Natural)
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T, C> Tree<T, C> {
    /// Generate a new, empty `Tree` ordered by `comparator`. The descent path
    /// grows as needed, so the tree never reports [`Error::TooLarge`].
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            config: Config::unbounded(),
            root: None,
            len: 0,
        }
    }

    /// Generate a new, empty `Tree` ordered by `comparator` and configured by
    /// `config`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `config` bounds the descent path to zero
    /// ancestors, which would leave room for a single element at most.
    pub fn with_config(comparator: C, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(comparator)
        })
    }

    /// The comparator, which also serves as the tree's context.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The configuration the tree was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// The number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree, `0` when it's empty. This follows the
    /// taller child at every level so it takes `O(height)`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut link = &self.root;
        while let Some(node) = link {
            height += 1;
            link = if node.balance < 0 {
                &node.left
            } else {
                &node.right
            };
        }
        height
    }

    /// Stores `value`. If an element comparing equal to `value` is already
    /// stored, it is replaced (without touching the tree's shape) and returned.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] when the node or the descent path can't be
    /// allocated, and [`Error::TooLarge`] when the descent outgrows a bounded
    /// path. Either way the tree is left exactly as it was and `value` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let mut tree = Tree::new(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
    ///
    /// assert_eq!(tree.put((1, 'a')), Ok(None));
    /// assert_eq!(tree.put((1, 'b')), Ok(Some((1, 'a'))));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn put(&mut self, value: T) -> Result<Option<T>>
    where
        C: Comparator<T>,
    {
        let mut path = Path::new(self.config.path_capacity)?;
        let slot = match descend(&mut self.root, &self.comparator, &value, &mut path)? {
            Descent::Found(slot) => {
                // SAFETY: The descent stopped at this slot and nothing else
                // borrows the tree.
                let node = unsafe { node_at(slot) };
                return Ok(Some(mem::replace(&mut node.value, value)));
            }
            Descent::Vacant(slot) => slot,
        };

        let leaf = Node::try_new_boxed(value)?;
        // SAFETY: The descent stopped at this empty slot and nothing else
        // borrows the tree. The path only records its ancestors.
        unsafe { *slot.as_ptr() = Some(leaf) };
        rebalance::after_insert(path);
        self.len += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, height = self.height(), "put");

        Ok(None)
    }

    /// Potentially finds the stored element comparing equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{Natural, Tree};
    ///
    /// let mut tree = Tree::new(Natural);
    /// tree.put(2).unwrap();
    ///
    /// assert_eq!(tree.get(&2), Some(&2));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &T) -> Option<&T>
    where
        C: Comparator<T>,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match self.comparator.compare(key, &node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// The smallest stored element comparing greater than or equal to `key`.
    pub fn get_greater_than_or_equal(&self, key: &T) -> Option<&T>
    where
        C: Comparator<T>,
    {
        self.nearest(key, Direction::Right, true)
    }

    /// The greatest stored element comparing less than or equal to `key`.
    pub fn get_less_than_or_equal(&self, key: &T) -> Option<&T>
    where
        C: Comparator<T>,
    {
        self.nearest(key, Direction::Left, true)
    }

    /// The smallest stored element comparing strictly greater than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{Natural, Tree};
    ///
    /// let mut tree = Tree::new(Natural);
    /// for i in [10, 20, 30] {
    ///     tree.put(i).unwrap();
    /// }
    ///
    /// assert_eq!(tree.get_greater_than(&20), Some(&30));
    /// assert_eq!(tree.get_greater_than(&25), Some(&30));
    /// assert_eq!(tree.get_greater_than(&30), None);
    /// ```
    pub fn get_greater_than(&self, key: &T) -> Option<&T>
    where
        C: Comparator<T>,
    {
        self.nearest(key, Direction::Right, false)
    }

    /// The greatest stored element comparing strictly less than `key`.
    pub fn get_less_than(&self, key: &T) -> Option<&T>
    where
        C: Comparator<T>,
    {
        self.nearest(key, Direction::Left, false)
    }

    /// The smallest stored element, or `None` when the tree is empty.
    pub fn get_smallest(&self) -> Option<&T> {
        extreme(&self.root, Direction::Left).map(|node| &node.value)
    }

    /// The greatest stored element, or `None` when the tree is empty.
    pub fn get_greatest(&self) -> Option<&T> {
        extreme(&self.root, Direction::Right).map(|node| &node.value)
    }

    /// Removes the stored element comparing equal to `key` and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no such element is stored, and
    /// [`Error::OutOfMemory`] when the descent path can't be allocated. Either
    /// way the tree is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{Error, Natural, Tree};
    ///
    /// let mut tree = Tree::new(Natural);
    /// tree.put(1).unwrap();
    ///
    /// assert_eq!(tree.delete(&1), Ok(1));
    /// assert_eq!(tree.delete(&1), Err(Error::NotFound));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &T) -> Result<T>
    where
        C: Comparator<T>,
    {
        let mut path = Path::new(self.config.path_capacity)?;
        let target = match descend(&mut self.root, &self.comparator, key, &mut path) {
            Ok(Descent::Found(target)) => target,
            // Every stored element sits within the configured path capacity,
            // so a descent that outgrows it can't be heading for one.
            Ok(Descent::Vacant(_)) | Err(Error::TooLarge) => return Err(Error::NotFound),
            Err(err) => return Err(err),
        };

        // SAFETY: The descent stopped at `target` and nothing else borrows the
        // tree.
        let removed = unsafe { splice::remove(target, &mut path)? };
        rebalance::after_delete(path);
        self.len -= 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, height = self.height(), "delete");

        Ok(removed)
    }

    /// Drops every stored element.
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Removes every stored element, handing each one to `destructor` exactly
    /// once. Children are handed over before their parents.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{Natural, Tree};
    ///
    /// let mut tree = Tree::new(Natural);
    /// for i in 0..5 {
    ///     tree.put(i).unwrap();
    /// }
    ///
    /// let mut destroyed = Vec::new();
    /// tree.clear_with(|value| destroyed.push(value));
    ///
    /// destroyed.sort();
    /// assert_eq!(destroyed, [0, 1, 2, 3, 4]);
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear_with<D>(&mut self, mut destructor: D)
    where
        D: FnMut(T),
    {
        teardown(self.root.take(), &mut destructor);
        self.len = 0;
    }

    /// Consumes the tree, handing every stored element to `destructor` exactly
    /// once.
    pub fn destroy<D>(mut self, destructor: D)
    where
        D: FnMut(T),
    {
        self.clear_with(destructor);
    }

    /// Walks toward `key` remembering the closest element seen on the `side`
    /// of it. An equal element is returned when `inclusive`, otherwise its
    /// neighbor on `side` is found below it or, failing that, among the
    /// elements already passed.
    fn nearest(&self, key: &T, side: Direction, inclusive: bool) -> Option<&T>
    where
        C: Comparator<T>,
    {
        let mut candidate = None;
        let mut link = &self.root;
        while let Some(node) = link {
            let direction = match self.comparator.compare(key, &node.value) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal if inclusive => return Some(&node.value),
                Ordering::Equal => match extreme(node.child(side), side.opposite()) {
                    Some(neighbor) => return Some(&neighbor.value),
                    None => break,
                },
            };
            if direction != side {
                candidate = Some(&node.value);
            }
            link = node.child(direction);
        }
        candidate
    }
}

fn teardown<T, D>(link: Link<T>, destructor: &mut D)
where
    D: FnMut(T),
{
    if let Some(node) = link {
        let Node {
            left, right, value, ..
        } = *node;
        teardown(left, destructor);
        teardown(right, destructor);
        destructor(value);
    }
}
