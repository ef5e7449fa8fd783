//! Formula token tree.
//!
//! Nodes live in a slot arena; ownership is expressed by the ordered child sequences (the
//! root sequence or a container's children) plus a parent back-reference on every node.
//! A node is in exactly one sequence at a time.

use compact_str::CompactString;
use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::time::{Duration, Instant};

use super::serialized::{Attrs, SerializedNode};
use super::token_type::{Category, TokenType, TypeKey, TypeRegistry};

mod cursor;
mod output;
mod validate;

pub use cursor::{Cursor, Placement, RenderSlot};

new_key_type! { pub struct NodeId; }

/// A sequence owner: the tree root or a container node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    Root,
    Node(NodeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    UnknownType { name: String },
    NotAContainer { name: String },
    InvalidNodeId,
    NotAContainerNode,
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::UnknownType { name } => write!(f, "invalid type: {name}"),
            FormulaError::NotAContainer { name } => {
                write!(f, "type {name} cannot hold nested elements")
            }
            FormulaError::InvalidNodeId => write!(f, "invalid node id"),
            FormulaError::NotAContainerNode => write!(f, "node is not a container"),
        }
    }
}

impl std::error::Error for FormulaError {}

#[derive(Debug, Clone)]
struct Node {
    serial: u64,
    kind: TypeKey,
    value: Option<CompactString>,
    attrs: Attrs,
    parent: Container,
    children: Option<Vec<NodeId>>,
}

/// Borrowed view of one token.
#[derive(Debug, Clone, Copy)]
pub struct TokenRef<'a> {
    pub id: NodeId,
    pub serial: u64,
    pub kind: TypeKey,
    pub type_name: &'a str,
    pub token_type: &'a dyn TokenType,
    pub value: Option<&'a str>,
    pub attrs: &'a Attrs,
    pub children: Option<&'a [NodeId]>,
}

impl TokenRef<'_> {
    pub fn category(&self) -> Category {
        self.token_type.category()
    }

    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }
}

pub struct FormulaTree {
    id: u64,
    registry: TypeRegistry,
    arena: SlotMap<NodeId, Node>,
    roots: Vec<NodeId>,
    cursor: Cursor,
    next_serial: u64,
    output_delay: Duration,
    pending_output: Option<Instant>,
}

impl FormulaTree {
    pub fn new(id: u64, registry: TypeRegistry) -> Self {
        Self {
            id,
            registry,
            arena: SlotMap::with_key(),
            roots: Vec::new(),
            cursor: Cursor::root_end(0),
            next_serial: 0,
            output_delay: Duration::ZERO,
            pending_output: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of live nodes at any depth.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn token(&self, id: NodeId) -> Option<TokenRef<'_>> {
        let node = self.arena.get(id)?;
        Some(TokenRef {
            id,
            serial: node.serial,
            kind: node.kind,
            type_name: self.registry.name(node.kind),
            token_type: self.registry.get(node.kind),
            value: node.value.as_deref(),
            attrs: &node.attrs,
            children: node.children.as_deref(),
        })
    }

    pub fn category(&self, id: NodeId) -> Option<Category> {
        self.arena
            .get(id)
            .map(|node| self.registry.get(node.kind).category())
    }

    pub fn parent(&self, id: NodeId) -> Option<Container> {
        self.arena.get(id).map(|node| node.parent)
    }

    pub fn is_container_node(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some_and(|node| node.children.is_some())
    }

    /// The ordered sequence owned by `container`.
    pub fn children(&self, container: Container) -> Option<&[NodeId]> {
        self.sequence(container).ok().map(Vec::as_slice)
    }

    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.arena.get(id)?.parent;
        self.sequence(parent)
            .ok()?
            .iter()
            .position(|&child| child == id)
    }

    fn sequence(&self, container: Container) -> Result<&Vec<NodeId>, FormulaError> {
        match container {
            Container::Root => Ok(&self.roots),
            Container::Node(id) => self
                .arena
                .get(id)
                .ok_or(FormulaError::InvalidNodeId)?
                .children
                .as_ref()
                .ok_or(FormulaError::NotAContainerNode),
        }
    }

    fn sequence_mut(&mut self, container: Container) -> Result<&mut Vec<NodeId>, FormulaError> {
        match container {
            Container::Root => Ok(&mut self.roots),
            Container::Node(id) => self
                .arena
                .get_mut(id)
                .ok_or(FormulaError::InvalidNodeId)?
                .children
                .as_mut()
                .ok_or(FormulaError::NotAContainerNode),
        }
    }

    /// Constructs a node of type `type_name` and splices it into `container` at `index`
    /// (clamped to the sequence length). The cursor keeps its logical neighbors.
    pub fn insert(
        &mut self,
        container: Container,
        index: usize,
        type_name: &str,
        value: Option<&str>,
        attrs: Attrs,
    ) -> Result<NodeId, FormulaError> {
        let kind = self
            .registry
            .lookup(type_name)
            .ok_or_else(|| FormulaError::UnknownType {
                name: type_name.to_string(),
            })?;
        let len = self.sequence(container)?.len();
        let index = index.min(len);

        let token_type = self.registry.get(kind);
        let mut merged = token_type.default_attrs();
        merged.extend(attrs);
        let node = Node {
            serial: self.next_serial,
            kind,
            value: token_type.init_value(value),
            attrs: merged,
            parent: container,
            children: token_type.is_container().then(Vec::new),
        };
        self.next_serial += 1;

        let id = self.arena.insert(node);
        self.sequence_mut(container)?.insert(index, id);

        if self.cursor.container == container && self.cursor.index > index {
            self.cursor.index += 1;
        }

        tracing::debug!(tree = self.id, node = ?id, type_name, index, "token inserted");
        self.output();
        Ok(id)
    }

    /// Destroys `id` and its subtree (deepest first), then detaches it from its parent.
    pub fn destroy(&mut self, id: NodeId) -> Result<(), FormulaError> {
        if !self.arena.contains_key(id) {
            return Err(FormulaError::InvalidNodeId);
        }
        self.destroy_subtree(id);
        self.output();
        Ok(())
    }

    fn destroy_subtree(&mut self, id: NodeId) {
        let Some(node) = self.arena.get(id) else {
            return;
        };
        let parent = node.parent;
        let children = node.children.clone().unwrap_or_default();

        for child in children.into_iter().rev() {
            self.destroy_subtree(child);
        }

        let index = self.index_in_parent(id);
        if let (Some(index), Ok(seq)) = (index, self.sequence_mut(parent)) {
            seq.remove(index);
            if self.cursor.container == Container::Node(id) {
                self.cursor = Cursor {
                    container: parent,
                    index,
                };
            } else if self.cursor.container == parent && self.cursor.index > index {
                self.cursor.index -= 1;
            }
        }

        self.arena.remove(id);
        tracing::debug!(tree = self.id, node = ?id, "token destroyed");
    }

    /// Removes every root, deepest nodes first.
    pub fn clear(&mut self) {
        let roots = self.roots.clone();
        for id in roots.into_iter().rev() {
            self.destroy_subtree(id);
        }
        self.roots.clear();
        self.cursor = Cursor::root_end(0);
        self.output();
    }

    /// Plain snapshot of the whole tree, detached from node identities.
    pub fn get_formula(&self) -> Vec<SerializedNode> {
        self.roots
            .iter()
            .map(|&id| self.serialize_node(id))
            .collect()
    }

    fn serialize_node(&self, id: NodeId) -> SerializedNode {
        let node = &self.arena[id];
        SerializedNode {
            kind: self.registry.name(node.kind).to_string(),
            value: node.value.as_ref().map(ToString::to_string),
            attr: node.attrs.clone(),
            elements: node
                .children
                .as_ref()
                .map(|children| children.iter().map(|&c| self.serialize_node(c)).collect()),
        }
    }

    /// Replaces the whole tree with `formula`.
    ///
    /// The input is checked against the registry before anything is destroyed, so an
    /// unknown type leaves the current tree untouched.
    pub fn set_formula(&mut self, formula: &[SerializedNode]) -> Result<(), FormulaError> {
        for node in formula {
            self.check_buildable(node)?;
        }

        self.clear();
        for node in formula {
            self.build(Container::Root, node)?;
        }
        self.cursor = Cursor::root_end(self.roots.len());
        Ok(())
    }

    fn check_buildable(&self, node: &SerializedNode) -> Result<(), FormulaError> {
        let kind = self
            .registry
            .lookup(&node.kind)
            .ok_or_else(|| FormulaError::UnknownType {
                name: node.kind.clone(),
            })?;

        let Some(elements) = node.elements.as_ref().filter(|e| !e.is_empty()) else {
            return Ok(());
        };
        if !self.registry.get(kind).is_container() {
            return Err(FormulaError::NotAContainer {
                name: node.kind.clone(),
            });
        }
        elements.iter().try_for_each(|child| self.check_buildable(child))
    }

    fn build(&mut self, container: Container, node: &SerializedNode) -> Result<(), FormulaError> {
        let id = self.insert(
            container,
            usize::MAX,
            &node.kind,
            node.value.as_deref(),
            node.attr.clone(),
        )?;
        for child in node.elements.iter().flatten() {
            self.build(Container::Node(id), child)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/formula_tree.rs"]
mod tests;
