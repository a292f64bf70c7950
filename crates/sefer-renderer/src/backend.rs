//! Render backend trait for format-specific markup.

use crate::fragment::Fragment;
use crate::role::Role;

/// Produces the markup for role containers and individual fragments.
///
/// The traversal and container balancing live in [`assemble`](crate::assemble);
/// a backend only decides what each piece looks like.
pub trait RenderBackend {
    /// Open the container for a region rendered under `role`.
    fn container_start(role: Role, out: &mut String);

    /// Close the container opened by the matching [`container_start`](Self::container_start).
    fn container_end(role: Role, out: &mut String);

    /// Render one fragment: its heading and its role-shaped body.
    fn fragment(fragment: &Fragment, out: &mut String);
}
