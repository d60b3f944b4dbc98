//! Removing a node from the middle of the tree.

use std::mem;
use std::ptr::NonNull;

use crate::error::Result;
use crate::node::{unlink, Link};
use crate::path::{node_at, Direction, Path};

/// Removes the node in `target` and returns its value, recording in `path`
/// every slot below `target` whose balance the removal may change.
///
/// A node with at most one child is unlinked directly. A node with two children
/// stays where it is: the nearest value on its taller side (the successor when
/// both sides are equally tall) is unlinked instead and moved into it.
///
/// All the recording happens before anything is unlinked, so an error leaves
/// the tree untouched.
///
/// # Safety
///
/// `target` must hold a node and be the slot a descent of `path` stopped at.
pub(crate) unsafe fn remove<T>(target: NonNull<Link<T>>, path: &mut Path<'_, T>) -> Result<T> {
    let node = node_at(target);
    if node.left.is_none() || node.right.is_none() {
        return Ok(unlink(&mut *target.as_ptr()));
    }

    let toward = if node.balance >= 0 {
        Direction::Right
    } else {
        Direction::Left
    };
    let inward = toward.opposite();

    path.push(target, toward)?;
    let mut slot = NonNull::from(node.child_mut(toward));
    // Only the value of `node` is touched from here on, once the walk below is
    // done with its children.
    let mut value = NonNull::from(&mut node.value);
    loop {
        let next = node_at(slot);
        if next.child(inward).is_none() {
            break;
        }
        path.push(slot, inward)?;
        slot = NonNull::from(next.child_mut(inward));
    }

    let neighbor = unlink(&mut *slot.as_ptr());
    Ok(mem::replace(value.as_mut(), neighbor))
}
