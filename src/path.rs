//! The descent engine shared by insert and delete.
//!
//! A mutating operation walks from the root toward its target and records,
//! for every node it passes, the slot holding that node and the side it went
//! down. Read backwards, that record names the ancestors whose balance factors
//! may need fixing once the structural edit is done.
//!
//! The record holds raw pointers to slots because each slot is borrowed out of
//! the slot recorded before it. All of them stay valid for the lifetime `'a` of
//! the exclusive borrow of the tree's root: rotations only ever rewrite the
//! contents of a slot, and no recorded slot lives inside a node that gets
//! freed while the record is still being consumed.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::compare::Comparator;
use crate::error::{Error, Result};
use crate::node::{Link, Node};

/// Which child of a node a descent went into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One recorded ancestor: the slot holding it and which of its children the
/// descent continued into.
pub(crate) struct Step<T> {
    pub(crate) slot: NonNull<Link<T>>,
    pub(crate) direction: Direction,
}

/// The ancestors visited by one descent, root first.
pub(crate) struct Path<'a, T> {
    steps: Vec<Step<T>>,
    capacity: Option<usize>,
    _tree: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Path<'a, T> {
    /// An empty record. A bounded record reserves all of its room up front so
    /// it never allocates mid-descent.
    pub(crate) fn new(capacity: Option<usize>) -> Result<Self> {
        let mut steps = Vec::new();
        if let Some(capacity) = capacity {
            steps.try_reserve_exact(capacity)?;
        }
        Ok(Self {
            steps,
            capacity,
            _tree: PhantomData,
        })
    }

    /// Records that the descent continued from the node in `slot` toward
    /// `direction`.
    pub(crate) fn push(&mut self, slot: NonNull<Link<T>>, direction: Direction) -> Result<()> {
        match self.capacity {
            Some(capacity) if self.steps.len() >= capacity => return Err(Error::TooLarge),
            Some(_) => {}
            None => self.steps.try_reserve(1)?,
        }
        self.steps.push(Step { slot, direction });
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }

    /// Consumes the record from the deepest ancestor up to the root.
    pub(crate) fn into_rev(self) -> impl Iterator<Item = Step<T>> {
        self.steps.into_iter().rev()
    }
}

/// Borrows the node held by `slot`.
///
/// # Safety
///
/// `slot` must be valid for `'a`, hold a node, and not be aliased by any live
/// reference. Recorded ancestor slots and the slots a descent stops at qualify
/// as long as nothing below them is borrowed any more.
///
/// ## Panics
///
/// When `slot` is empty.
pub(crate) unsafe fn node_at<'a, T>(mut slot: NonNull<Link<T>>) -> &'a mut Node<T> {
    slot.as_mut()
        .as_deref_mut()
        .expect("Recorded slots are never empty")
}

/// Where a descent ended.
pub(crate) enum Descent<T> {
    /// The slot holding the node that compares equal to the key.
    Found(NonNull<Link<T>>),
    /// The empty slot where the key would be linked in.
    Vacant(NonNull<Link<T>>),
}

/// Walks from `root` toward `key`, recording every node passed on the way into
/// `path`. The recorded steps name ancestors from the root down to, but not
/// including, the slot the walk stops at.
///
/// Nothing in the tree is modified, so an error leaves it untouched.
pub(crate) fn descend<'a, T, C>(
    root: &'a mut Link<T>,
    comparator: &C,
    key: &T,
    path: &mut Path<'a, T>,
) -> Result<Descent<T>>
where
    C: Comparator<T> + ?Sized,
{
    let mut slot = NonNull::from(root);
    loop {
        // SAFETY: `slot` is either the root or a child slot of the node we
        // just stepped through, all of which are borrowed for `'a` through
        // `root`. No other reference into the tree is alive.
        let Some(node) = (unsafe { slot.as_mut() }) else {
            return Ok(Descent::Vacant(slot));
        };
        let direction = match comparator.compare(key, &node.value) {
            Ordering::Less => Direction::Left,
            Ordering::Equal => return Ok(Descent::Found(slot)),
            Ordering::Greater => Direction::Right,
        };
        path.push(slot, direction)?;
        slot = NonNull::from(node.child_mut(direction));
    }
}
