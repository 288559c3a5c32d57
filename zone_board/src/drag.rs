//! Drag-reorder controller - live list reordering during a pointer drag.
//!
//! Keeps only the semantic drag state (the dragged row's index); the visual
//! affordance is the drawing layer's concern. The controller never mutates
//! the order directly - it builds a permutation and commits it through
//! `BoardState::reorder`, so set-equality stays enforced in one place.

use crate::board::BoardState;

/// Ephemeral drag session state. Created on drag start, re-settled on every
/// drag-over, destroyed on drag end. Never persisted.
#[derive(Debug, Default)]
pub struct DragController {
    drag_index: Option<usize>,
}

impl DragController {
    pub fn new() -> Self {
        Self { drag_index: None }
    }

    /// Index of the row currently being dragged, if any
    pub fn drag_index(&self) -> Option<usize> {
        self.drag_index
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_index.is_some()
    }

    /// Begin a drag on the row at `index`. Out-of-range indices are ignored.
    pub fn drag_start(&mut self, index: usize, board: &BoardState) {
        if index < board.len() {
            self.drag_index = Some(index);
        }
    }

    /// The pointer is now over the slot at `index`: pull the dragged row out
    /// of the order, reinsert it there, and commit. The dragged row settles
    /// into its hovered slot live. Hovering the row's own slot is a no-op.
    pub fn drag_over(&mut self, index: usize, board: &mut BoardState) {
        let from = match self.drag_index {
            Some(i) => i,
            None => return,
        };
        if index == from || index >= board.len() {
            return;
        }

        let mut new_order: Vec<String> = board.order().to_vec();
        let moved = new_order.remove(from);
        new_order.insert(index, moved);

        if board.reorder(new_order) {
            self.drag_index = Some(index);
        }
    }

    /// End the drag session. Fires whether or not the drop landed anywhere;
    /// the settled order stays as the last drag-over left it.
    pub fn drag_end(&mut self) {
        self.drag_index = None;
    }
}
