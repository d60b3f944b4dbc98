//! Tree nodes and the rotations that rebalance them.

use std::alloc::{self, Layout};
use std::fmt;
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::path::Direction;

/// An owned, possibly empty, subtree. Every child slot and the tree's root are
/// `Link`s, and the rebalancing code rewrites slots by replacing the subtree in
/// them.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    /// Height of the right subtree minus height of the left subtree. Always in
    /// `-1..=1` between operations, `-2..=2` while a rotation is pending.
    pub(crate) balance: i8,
    pub(crate) value: T,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("balance", &self.balance)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Node<T> {
    /// Allocates a new leaf holding `value`. Unlike `Box::new`, running out of
    /// memory is reported instead of aborting the process.
    pub(crate) fn try_new_boxed(value: T) -> Result<Box<Self>> {
        let layout = Layout::new::<Self>();
        // SAFETY: `Node` always holds its balance byte so the layout is never
        // zero sized.
        let ptr = unsafe { alloc::alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(Error::OutOfMemory);
        };

        // SAFETY: `ptr` was just allocated by the global allocator with the
        // layout of `Node<T>`, so it's valid for a write and is exactly what
        // `Box::from_raw` expects to own and eventually free.
        unsafe {
            ptr.as_ptr().write(Node {
                left: None,
                right: None,
                balance: 0,
                value,
            });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    pub(crate) fn child(&self, direction: Direction) -> &Link<T> {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> &mut Link<T> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// Walks from `link` toward `direction` until there is no further child and
/// returns the last node seen.
pub(crate) fn extreme<T>(link: &Link<T>, direction: Direction) -> Option<&Node<T>> {
    let mut node = link.as_deref()?;
    while let Some(next) = node.child(direction).as_deref() {
        node = next;
    }
    Some(node)
}

/// Removes the node in `slot`, which must have at most one child, and moves
/// that child (if any) up into the slot. Returns the removed node's value.
///
/// ## Panics
///
/// When `slot` is empty.
pub(crate) fn unlink<T>(slot: &mut Link<T>) -> T {
    let node = slot.take().expect("Unlinking requires a node");
    let Node {
        left, right, value, ..
    } = *node;
    debug_assert!(left.is_none() || right.is_none());
    *slot = left.or(right);
    value
}

/// Rotate `old_root` to the right. This moves the left child up vertically and
/// `old_root` down vertically. Used to rebalance a subtree whose left child is
/// too tall. As such, it must only be called when there _is_ a left child.
///
/// Balance factors are updated incrementally rather than recounted: only the
/// two nodes that change parents are affected, and their new balances follow
/// from their old ones.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///      old_root              new_root
///       /     \               /     \
///  new_root    z   rotate ->  x    old_root
///    / \                             /  \
///   x   y                           y    z
/// ```
pub(crate) fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.left.take().expect("Rotate right => left child");
    old_root.left = new_root.right.take();

    old_root.balance += 1;
    if new_root.balance < 0 {
        old_root.balance -= new_root.balance;
    }

    new_root.balance += 1;
    if old_root.balance > 0 {
        new_root.balance += old_root.balance;
    }

    new_root.right = Some(old_root);
    new_root
}

/// The mirror image of [`rotate_right`]: the right child moves up and
/// `old_root` becomes its left child.
///
/// ## Panics
///
/// When called on a node without a right child.
pub(crate) fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.right.take().expect("Rotate left => right child");
    old_root.right = new_root.left.take();

    old_root.balance -= 1;
    if new_root.balance > 0 {
        old_root.balance -= new_root.balance;
    }

    new_root.balance -= 1;
    if old_root.balance < 0 {
        new_root.balance += old_root.balance;
    }

    new_root.left = Some(old_root);
    new_root
}
