//! Cursor placement and navigation.

use super::{Container, FormulaError, FormulaTree, NodeId};
use crate::models::serialized::Attrs;
use crate::models::token_type::AfterAdd;

/// Insertion point: a gap between two siblings of one container, `0..=len`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub container: Container,
    pub index: usize,
}

impl Cursor {
    pub fn root_end(len: usize) -> Self {
        Self {
            container: Container::Root,
            index: len,
        }
    }
}

/// Where to put the cursor relative to a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
    /// Inside a container, ahead of its first child.
    Start,
    /// Inside a container, after its last child.
    End,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderSlot {
    Token(NodeId),
    Cursor,
}

impl FormulaTree {
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Cursor) -> Result<(), FormulaError> {
        let len = self.sequence(cursor.container)?.len();
        self.cursor = Cursor {
            container: cursor.container,
            index: cursor.index.min(len),
        };
        Ok(())
    }

    pub fn place_cursor(&mut self, id: NodeId, placement: Placement) -> Result<(), FormulaError> {
        let node = self.arena.get(id).ok_or(FormulaError::InvalidNodeId)?;
        self.cursor = match placement {
            Placement::Before | Placement::After => {
                let parent = node.parent;
                let index = self
                    .index_in_parent(id)
                    .ok_or(FormulaError::InvalidNodeId)?;
                Cursor {
                    container: parent,
                    index: if placement == Placement::After {
                        index + 1
                    } else {
                        index
                    },
                }
            }
            Placement::Start | Placement::End => {
                let len = node
                    .children
                    .as_ref()
                    .ok_or(FormulaError::NotAContainerNode)?
                    .len();
                Cursor {
                    container: Container::Node(id),
                    index: if placement == Placement::End { len } else { 0 },
                }
            }
        };
        Ok(())
    }

    pub fn left_sibling(&self) -> Option<NodeId> {
        let index = self.cursor.index.checked_sub(1)?;
        self.children(self.cursor.container)?.get(index).copied()
    }

    pub fn right_sibling(&self) -> Option<NodeId> {
        self.children(self.cursor.container)?
            .get(self.cursor.index)
            .copied()
    }

    /// Index the next committed token lands at.
    fn insertion_index(&self) -> usize {
        let len = self
            .children(self.cursor.container)
            .map_or(0, |children| children.len());
        // Right after the left sibling, at the right sibling's slot, or appended.
        self.cursor.index.min(len)
    }

    /// Inserts a new token at the cursor and leaves the cursor right after it, unless the
    /// type asks to be entered.
    pub fn add_element_at_cursor(
        &mut self,
        type_name: &str,
        value: &str,
        attrs: Option<Attrs>,
    ) -> Result<NodeId, FormulaError> {
        let container = self.cursor.container;
        let index = self.insertion_index();
        let id = self.insert(
            container,
            index,
            type_name,
            Some(value),
            attrs.unwrap_or_default(),
        )?;
        self.cursor = Cursor {
            container,
            index: index + 1,
        };

        let entered = self
            .token(id)
            .is_some_and(|token| token.token_type.after_add() == AfterAdd::EnterContainer);
        if entered {
            self.place_cursor(id, Placement::End)?;
        }
        Ok(id)
    }

    pub fn move_left(&mut self) -> bool {
        if let Some(left) = self.left_sibling() {
            let placement = if self.is_container_node(left) {
                Placement::End
            } else {
                Placement::Before
            };
            return self.place_cursor(left, placement).is_ok();
        }
        match self.cursor.container {
            Container::Node(parent) => self.place_cursor(parent, Placement::Before).is_ok(),
            Container::Root => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        if let Some(right) = self.right_sibling() {
            let placement = if self.is_container_node(right) {
                Placement::Start
            } else {
                Placement::After
            };
            return self.place_cursor(right, placement).is_ok();
        }
        match self.cursor.container {
            Container::Node(parent) => self.place_cursor(parent, Placement::After).is_ok(),
            Container::Root => false,
        }
    }

    /// Destroys the token left of the cursor.
    pub fn backspace(&mut self) -> bool {
        self.left_sibling()
            .is_some_and(|left| self.destroy(left).is_ok())
    }

    /// Destroys the token right of the cursor.
    pub fn delete_forward(&mut self) -> bool {
        self.right_sibling()
            .is_some_and(|right| self.destroy(right).is_ok())
    }

    /// Children of `container` in logical order, with the cursor slotted between its
    /// neighbors when it sits in this container.
    pub fn render_elements(&self, container: Container) -> Vec<RenderSlot> {
        let Some(children) = self.children(container) else {
            return Vec::new();
        };

        let mut slots: Vec<RenderSlot> = children.iter().map(|&id| RenderSlot::Token(id)).collect();
        if self.cursor.container == container {
            slots.insert(self.cursor.index.min(children.len()), RenderSlot::Cursor);
        }
        slots
    }
}
