//! Sequential focus navigation
//!
//! The default action of Tab / Shift+Tab.

use crate::{Document, NodeId};

impl Document {
    /// Tab order: positive `tabindex` ascending, then `tabindex=0` and
    /// natively interactive elements in tree order.
    pub fn sequential_focus_order(&self) -> Vec<NodeId> {
        let mut positive = Vec::new();
        let mut natural = Vec::new();

        for id in self.tree().descendants(NodeId::ROOT) {
            if !self.is_focusable(id) {
                continue;
            }
            match self.element(id).and_then(|el| el.tab_index()) {
                Some(n) if n > 0 => positive.push((n, id)),
                Some(n) if n < 0 => {}
                _ => natural.push(id),
            }
        }

        // Stable: equal indices keep tree order
        positive.sort_by_key(|&(n, _)| n);
        positive.into_iter().map(|(_, id)| id).chain(natural).collect()
    }

    /// Move focus to the next (or previous) element in tab order, wrapping
    /// at either end. Returns the newly focused element.
    pub fn move_focus(&mut self, backwards: bool) -> Option<NodeId> {
        let order = self.sequential_focus_order();
        if order.is_empty() {
            return None;
        }

        let next = match self.focused() {
            Some(current) => match order.iter().position(|&id| id == current) {
                Some(pos) if backwards => order[(pos + order.len() - 1) % order.len()],
                Some(pos) => order[(pos + 1) % order.len()],
                // Focused element is outside the tab order (tabindex=-1):
                // continue from its position in the tree
                None => self.neighbour_in_tree(current, &order, backwards),
            },
            None if backwards => order[order.len() - 1],
            None => order[0],
        };

        self.focus(next).then_some(next)
    }

    fn neighbour_in_tree(&self, current: NodeId, order: &[NodeId], backwards: bool) -> NodeId {
        let tree_order: Vec<NodeId> = self.tree().descendants(NodeId::ROOT).collect();
        let index_of = |id: NodeId| tree_order.iter().position(|&n| n == id);
        let Some(cur) = index_of(current) else {
            return order[0];
        };

        let found = if backwards {
            order
                .iter()
                .copied()
                .filter(|&id| index_of(id).is_some_and(|i| i < cur))
                .max_by_key(|&id| index_of(id))
        } else {
            order
                .iter()
                .copied()
                .filter(|&id| index_of(id).is_some_and(|i| i > cur))
                .min_by_key(|&id| index_of(id))
        };

        found.unwrap_or(if backwards { order[order.len() - 1] } else { order[0] })
    }
}
