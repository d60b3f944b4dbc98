use avltree::{Config, Error, Natural, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of puts
/// and deletes we have the same elements in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match *op {
            Op::Put(x) => {
                let replaced = tree.put(x).unwrap();
                assert_eq!(replaced.is_some(), !set.insert(x));
            }
            Op::Delete(x) => {
                let removed = tree.delete(&x);
                if set.remove(&x) {
                    assert_eq!(removed, Ok(x));
                } else {
                    assert_eq!(removed, Err(Error::NotFound));
                }
            }
        }
    }
}

/// Walks the tree in order through its strict neighbor lookups.
fn walk(tree: &Tree<i8>) -> Vec<i8> {
    let mut out = Vec::new();
    let mut next = tree.get_smallest();
    while let Some(&x) = next {
        out.push(x);
        next = tree.get_greater_than(&x);
    }
    out
}

/// The height no AVL tree of `len` nodes may exceed: `⌈1.44 · lg(len + 2)⌉`.
fn height_bound(len: usize) -> usize {
    (1.44 * ((len + 2) as f64).log2()).ceil() as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new(Natural);
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    walk(&tree) == set.iter().copied().collect::<Vec<_>>()
        && tree.len() == set.len()
        && tree.height() <= height_bound(tree.len())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(Natural);
    for x in &xs {
        tree.put(*x).unwrap();
    }

    xs.iter().all(|x| tree.get(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new(Natural);
    for x in &xs {
        tree.put(*x).unwrap();
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.get(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new(Natural);
    for x in &xs {
        tree.put(*x).unwrap();
    }
    let mut stored: BTreeSet<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let expected = if stored.remove(delete) {
            Ok(*delete)
        } else {
            Err(Error::NotFound)
        };
        if tree.delete(delete) != expected {
            return false;
        }
    }

    let mut still_present = xs;
    // We may have put the same value multiple times - drop each one.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.get(x).is_none())
        && still_present.iter().all(|x| tree.get(x).is_some())
}

#[quickcheck]
fn neighbors_match_ranges(xs: Vec<i16>, probes: Vec<i16>) -> bool {
    let mut tree = Tree::new(Natural);
    for x in &xs {
        tree.put(*x).unwrap();
    }
    let set: BTreeSet<_> = xs.into_iter().collect();

    probes.iter().all(|p| {
        tree.get_greater_than_or_equal(p) == set.range(p..).next()
            && tree.get_less_than_or_equal(p) == set.range(..=p).next_back()
            && tree.get_greater_than(p) == set.range(p..).find(|x| *x != p)
            && tree.get_less_than(p) == set.range(..p).next_back()
    })
}

#[quickcheck]
fn destroy_sees_every_element_once(xs: Vec<u8>) -> bool {
    let mut tree = Tree::new(Natural);
    for x in &xs {
        tree.put(*x).unwrap();
    }

    let mut destroyed = Vec::new();
    tree.destroy(|x| destroyed.push(x));
    destroyed.sort_unstable();

    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    destroyed == expected
}

#[quickcheck]
fn bounded_tree_never_outgrows_its_path(xs: Vec<u16>) -> bool {
    let mut tree = Tree::with_config(Natural, Config::bounded(4)).unwrap();
    let mut stored = BTreeSet::new();
    for x in &xs {
        match tree.put(*x) {
            Ok(_) => {
                stored.insert(*x);
            }
            Err(Error::TooLarge) => {}
            Err(err) => panic!("unexpected {err}"),
        }
    }

    tree.height() <= 5
        && tree.len() == stored.len()
        && stored.iter().all(|x| tree.get(x) == Some(x))
}

#[test]
fn ascending_puts_keep_extremes() {
    let mut tree = Tree::new(Natural);
    for x in 1..=7 {
        tree.put(x).unwrap();
        assert!(tree.height() <= height_bound(tree.len()));
    }

    assert_eq!(tree.get_smallest(), Some(&1));
    assert_eq!(tree.get_greatest(), Some(&7));
}

#[test]
fn errors_display() {
    let err: Box<dyn std::error::Error> = Box::new(Error::TooLarge);
    assert_eq!(
        err.to_string(),
        "tree is too tall for the configured path capacity"
    );
}
