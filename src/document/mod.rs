//! Document capabilities consumed by the evaluation engine
//!
//! The engine never walks a tree itself. It relies on three capabilities of
//! the elements it is handed:
//!
//! 1. Element identity and equality
//! 2. Descendant query by selector string, in document order
//! 3. Computed style resolution
//!
//! These are captured by the [`Node`] trait. [`tree::Document`] is a small
//! in-memory implementation used to build pages programmatically.

mod errors;
mod selector;
pub(crate) mod style;
pub mod tree;

pub use errors::SelectorError;
pub use selector::{Matchable, SelectorList};
pub use tree::{Document, ElementSpec, TreeElement};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Identity of a node: which document it belongs to and where
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeIdentity {
    /// Document identifier, unique per process
    pub document: u64,
    /// Position of the node inside its document
    pub node: usize,
}

impl NodeIdentity {
    pub fn new(document: u64, node: usize) -> Self {
        Self { document, node }
    }
}

/// An element as seen by the evaluation engine
pub trait Node: fmt::Debug + Send + Sync {
    /// Returns the identity of this element
    fn identity(&self) -> NodeIdentity;

    /// Returns a short human-readable description, e.g. `<h2 id="h2">`
    fn describe(&self) -> String;

    /// Returns the descendants matching `selector`, in document order
    fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementHandle>, SelectorError>;

    /// Returns the computed value of a style property, if it has one
    fn computed_style(&self, property: &str) -> Option<String>;
}

/// Shareable handle to an element
///
/// Two handles are equal iff they designate the same node.
#[derive(Clone)]
pub struct ElementHandle(Arc<dyn Node>);

impl ElementHandle {
    /// Wrap a node
    pub fn new(node: impl Node + 'static) -> Self {
        Self(Arc::new(node))
    }

    /// Returns the identity of the underlying node
    pub fn identity(&self) -> NodeIdentity {
        self.0.identity()
    }

    /// Returns a human-readable description of the element
    pub fn describe(&self) -> String {
        self.0.describe()
    }

    /// Returns the descendants matching `selector`, in document order
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementHandle>, SelectorError> {
        self.0.query_selector_all(selector)
    }

    /// Returns the computed value of a style property
    pub fn computed_style(&self, property: &str) -> Option<String> {
        self.0.computed_style(property)
    }
}

impl From<Arc<dyn Node>> for ElementHandle {
    fn from(node: Arc<dyn Node>) -> Self {
        Self(node)
    }
}

impl PartialEq for ElementHandle {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for ElementHandle {}

impl Hash for ElementHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementHandle({})", self.describe())
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Serialize for ElementHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.describe())
    }
}
