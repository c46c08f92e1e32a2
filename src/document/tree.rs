//! In-memory document tree
//!
//! Documents are immutable once built. Elements are stored flat, in document
//! order, so the descendants of an element occupy a contiguous index range.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::errors::SelectorError;
use super::selector::{Matchable, SelectorList};
use super::style;
use super::{ElementHandle, Node, NodeIdentity};

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Declarative description of an element and its subtree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    children: Vec<ElementSpec>,
}

impl ElementSpec {
    /// Creates an element with the given tag name
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Sets the `id` attribute
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Sets an inline style property
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style
            .insert(property.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Appends a child element
    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child elements
    pub fn children(mut self, children: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

#[derive(Debug)]
struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    parent: Option<usize>,
    /// One past the index of the last descendant
    subtree_end: usize,
}

#[derive(Debug)]
struct DocumentData {
    id: u64,
    nodes: Vec<NodeData>,
}

impl DocumentData {
    fn flatten(&mut self, spec: ElementSpec, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        let ElementSpec {
            tag,
            id,
            classes,
            mut attributes,
            style,
            children,
        } = spec;

        if let Some(id) = &id {
            attributes.insert("id".to_string(), id.clone());
        }
        if !classes.is_empty() {
            attributes.insert("class".to_string(), classes.join(" "));
        }

        self.nodes.push(NodeData {
            tag,
            id,
            classes,
            attributes,
            style,
            parent,
            subtree_end: index + 1,
        });
        for child in children {
            self.flatten(child, Some(index));
        }
        self.nodes[index].subtree_end = self.nodes.len();
        index
    }

    fn computed_style(&self, index: usize, property: &str) -> Option<String> {
        let mut current = Some(index);
        while let Some(i) = current {
            let node = &self.nodes[i];
            if let Some(value) = node.style.get(property) {
                return Some(value.clone());
            }
            if !style::is_inherited(property) {
                break;
            }
            current = node.parent;
        }
        style::initial_value(property).map(str::to_string)
    }

    /// Matches in document order among `range`
    fn select(
        data: &Arc<DocumentData>,
        range: std::ops::Range<usize>,
        selector: &str,
    ) -> Result<Vec<ElementHandle>, SelectorError> {
        let selectors = SelectorList::parse(selector)?;
        Ok(range
            .filter(|&index| selectors.matches(&NodeRef { data, index }))
            .map(|index| ElementHandle::new(TreeElement::new(Arc::clone(data), index)))
            .collect())
    }
}

/// Borrowed view of a node, used for selector matching
#[derive(Clone, Copy)]
struct NodeRef<'a> {
    data: &'a DocumentData,
    index: usize,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a NodeData {
        &self.data.nodes[self.index]
    }
}

impl<'a> Matchable for NodeRef<'a> {
    fn local_name(&self) -> &str {
        &self.node().tag
    }

    fn element_id(&self) -> Option<&str> {
        self.node().id.as_deref()
    }

    fn has_class(&self, class: &str) -> bool {
        self.node().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.node().attributes.get(name).map(String::as_str)
    }

    fn parent_element(&self) -> Option<Self> {
        self.node().parent.map(|index| NodeRef {
            data: self.data,
            index,
        })
    }
}

/// An immutable document
#[derive(Clone)]
pub struct Document {
    data: Arc<DocumentData>,
}

impl Document {
    /// Builds a document whose root element is `root`
    pub fn new(root: ElementSpec) -> Self {
        let mut data = DocumentData {
            id: NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        };
        data.flatten(root, None);
        Self {
            data: Arc::new(data),
        }
    }

    /// Returns the document identifier
    pub fn id(&self) -> u64 {
        self.data.id
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.data.nodes.len()
    }

    /// Returns true if the document has no elements
    pub fn is_empty(&self) -> bool {
        self.data.nodes.is_empty()
    }

    /// Returns the root element
    pub fn root(&self) -> ElementHandle {
        ElementHandle::new(TreeElement::new(Arc::clone(&self.data), 0))
    }

    /// Returns the first element with the given id, in document order
    pub fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.data
            .nodes
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
            .map(|index| ElementHandle::new(TreeElement::new(Arc::clone(&self.data), index)))
    }

    /// Returns every element matching `selector`, root included
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementHandle>, SelectorError> {
        DocumentData::select(&self.data, 0..self.data.nodes.len(), selector)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("id", &self.data.id)
            .field("elements", &self.data.nodes.len())
            .finish()
    }
}

/// An element of an in-memory [`Document`]
#[derive(Clone)]
pub struct TreeElement {
    data: Arc<DocumentData>,
    index: usize,
}

impl TreeElement {
    fn new(data: Arc<DocumentData>, index: usize) -> Self {
        Self { data, index }
    }

    fn node(&self) -> &NodeData {
        &self.data.nodes[self.index]
    }

    /// Returns the lowercase tag name
    pub fn tag_name(&self) -> &str {
        &self.node().tag
    }
}

impl fmt::Debug for TreeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Node for TreeElement {
    fn identity(&self) -> NodeIdentity {
        NodeIdentity::new(self.data.id, self.index)
    }

    fn describe(&self) -> String {
        let node = self.node();
        let mut out = format!("<{}", node.tag);
        if let Some(id) = &node.id {
            out.push_str(&format!(" id=\"{}\"", id));
        }
        if !node.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", node.classes.join(" ")));
        }
        out.push('>');
        out
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementHandle>, SelectorError> {
        let end = self.node().subtree_end;
        DocumentData::select(&self.data, self.index + 1..end, selector)
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        self.data
            .computed_style(self.index, &property.to_ascii_lowercase())
    }
}
