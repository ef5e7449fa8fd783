use super::{FormulaTree, NodeId};
use crate::models::token_type::Neighborhood;

impl FormulaTree {
    /// An empty tree is valid.
    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }

    /// First node (depth-first, document order) whose type rejects its position.
    pub fn first_invalid(&self) -> Option<NodeId> {
        self.find_invalid_in(&self.roots)
    }

    fn find_invalid_in(&self, seq: &[NodeId]) -> Option<NodeId> {
        for (i, &id) in seq.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| seq[p]);
            let next = seq.get(i + 1).copied();
            if !self.node_is_valid(id, prev, next) {
                return Some(id);
            }

            let children = self
                .arena
                .get(id)
                .and_then(|node| node.children.as_deref());
            if let Some(bad) = children.and_then(|children| self.find_invalid_in(children)) {
                return Some(bad);
            }
        }
        None
    }

    fn node_is_valid(&self, id: NodeId, prev: Option<NodeId>, next: Option<NodeId>) -> bool {
        let Some(node) = self.arena.get(id) else {
            return false;
        };
        let prev = prev.and_then(|p| self.category(p));
        let next = next.and_then(|n| self.category(n));
        let hood = Neighborhood {
            prev: prev.as_ref(),
            next: next.as_ref(),
            children: node.children.as_ref().map(Vec::len),
        };
        self.registry.get(node.kind).is_valid(&hood)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/models/validate.rs"]
mod tests;
