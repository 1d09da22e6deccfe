//! Route model and static navigation tree for the documentation site.
//!
//! Path parsing applies the site's redirect rules (section roots go to a
//! default child, unknown paths fall back to home) and never fails; the
//! navigation tree is immutable, two levels deep, and queried only for
//! active-path matching.

mod nav;
mod route;

pub use nav::{navigation, NavNode};
pub use route::{Route, DEFAULT_INSTRUCTION, DEFAULT_MODE};
