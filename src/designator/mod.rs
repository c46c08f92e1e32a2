//! Provenance paths
//!
//! A [`Designator`] is one step ("opacity of", "bound to $x", …). A
//! [`CompoundDesignator`] chains steps from an evaluation root to a value, and
//! a [`DesignatedObject`] pairs an original value with such a path.

mod compound;
mod designator;
mod object;

pub use compound::CompoundDesignator;
pub use designator::Designator;
pub use object::DesignatedObject;
