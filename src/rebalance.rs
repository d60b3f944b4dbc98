//! Bottom-up balance propagation after an insert or a delete.
//!
//! See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
//!
//! Both walks consume the recorded [`Path`] from the deepest ancestor up and
//! stop as soon as a subtree turns out to have kept its height, since nothing
//! above it can be affected. The two stopping rules are mirror images:
//!
//! | new balance | after insert            | after delete              |
//! |-------------|-------------------------|---------------------------|
//! | `0`         | height unchanged, stop  | subtree shrank, continue  |
//! | `±1`        | subtree grew, continue  | height unchanged, stop    |
//! | `±2`        | rotate, then stop       | rotate, stop only if the new root leans (`±1`) |

use crate::node::{rotate_left, rotate_right, Link};
use crate::path::{node_at, Direction, Path};

/// Fixes balance factors along `path` after a leaf was linked in below its
/// last step.
pub(crate) fn after_insert<T>(path: Path<'_, T>) {
    for step in path.into_rev() {
        // SAFETY: See the module docs of `path`. Steps are consumed deepest
        // first and nothing below this slot is touched again.
        let node = unsafe { node_at(step.slot) };
        match step.direction {
            Direction::Left => node.balance -= 1,
            Direction::Right => node.balance += 1,
        }

        match node.balance {
            0 => {
                #[cfg(feature = "tracing")]
                tracing::trace!("insert absorbed without a height change");
                return;
            }
            -1 | 1 => {}
            _ => {
                // SAFETY: As above.
                restore(unsafe { &mut *step.slot.as_ptr() });
                // A rotation after an insert always brings the subtree back to
                // its height from before the insert.
                return;
            }
        }
    }
}

/// Fixes balance factors along `path` after a node was unlinked below its
/// last step.
pub(crate) fn after_delete<T>(path: Path<'_, T>) {
    for step in path.into_rev() {
        // SAFETY: See `after_insert`.
        let node = unsafe { node_at(step.slot) };
        match step.direction {
            Direction::Left => node.balance += 1,
            Direction::Right => node.balance -= 1,
        }

        match node.balance {
            -1 | 1 => {
                #[cfg(feature = "tracing")]
                tracing::trace!("delete absorbed without a height change");
                return;
            }
            0 => {}
            _ => {
                // SAFETY: As above.
                let slot = unsafe { &mut *step.slot.as_ptr() };
                restore(slot);
                let new_root = slot.as_ref().expect("Rotation keeps a subtree root");
                if new_root.balance != 0 {
                    // The heavy child was balanced, so the rotated subtree is as
                    // tall as it was before the delete.
                    return;
                }
            }
        }
    }
}

/// Rotates the subtree in `slot`, whose root has a balance of `±2`, back into
/// shape. A zig-zag (the heavy child leaning the other way) needs the child
/// rotated first.
///
/// ## Panics
///
/// When `slot` is empty or its root isn't heavy on a side that has a child.
pub(crate) fn restore<T>(slot: &mut Link<T>) {
    let mut root = slot.take().expect("Rebalancing requires a subtree root");
    if root.balance < 0 {
        let left = root.left.take().expect("Left heavy => left child");
        root.left = Some(if left.balance > 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!("double rotation: left-right");
            rotate_left(left)
        } else {
            left
        });
        root = rotate_right(root);
    } else {
        let right = root.right.take().expect("Right heavy => right child");
        root.right = Some(if right.balance < 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!("double rotation: right-left");
            rotate_right(right)
        } else {
            right
        });
        root = rotate_left(root);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(new_root_balance = root.balance, "rotated");

    *slot = Some(root);
}
