//! Balanced assembly of fragments into a single markup string.

use crate::backend::RenderBackend;
use crate::fragment::Fragment;
use crate::role::Role;

/// Assemble pre-order fragments, wrapping role regions in containers.
///
/// A container opens at every fragment with `opens_container` set and closes
/// once the next fragment at the same or a shallower depth arrives, i.e. after
/// the last descendant sharing its role. Remaining containers are closed at
/// the end, so the output is balanced for any tree.
pub fn assemble<B: RenderBackend>(fragments: &[Fragment]) -> String {
    let mut out = String::with_capacity(fragments.len() * 128);
    let mut open: Vec<(usize, Role)> = Vec::new();

    for fragment in fragments {
        while let Some(&(depth, role)) = open.last() {
            if depth < fragment.depth {
                break;
            }
            open.pop();
            B::container_end(role, &mut out);
        }
        if fragment.opens_container {
            B::container_start(fragment.role, &mut out);
            open.push((fragment.depth, fragment.role));
        }
        B::fragment(fragment, &mut out);
    }

    while let Some((_, role)) = open.pop() {
        B::container_end(role, &mut out);
    }
    out
}
