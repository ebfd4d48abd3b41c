//! Undo/redo stacks of editor commands.

use crate::commands::EditorCommand;

/// Bounded undo/redo stacks.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<EditorCommand>,
    redo_stack: Vec<EditorCommand>,
    max_depth: usize,
}

impl History {
    /// Create with default depth (100)
    pub fn new() -> Self {
        Self::with_depth(labelkit_core::constants::HISTORY_DEPTH)
    }

    /// Create with custom maximum undo depth
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record an applied command. Clears the redo stack.
    pub fn record(&mut self, command: EditorCommand) {
        tracing::debug!("Recorded '{}' for {}", command.name(), command.target());
        self.redo_stack.clear();
        self.undo_stack.push(command);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    /// Pops the command to undo. The caller reverts it and hands it back
    /// through [`History::push_redo`].
    pub fn pop_undo(&mut self) -> Option<EditorCommand> {
        self.undo_stack.pop()
    }

    pub fn push_redo(&mut self, command: EditorCommand) {
        self.redo_stack.push(command);
    }

    /// Pops the command to redo. The caller re-applies it and hands it back
    /// through [`History::push_undo`].
    pub fn pop_redo(&mut self) -> Option<EditorCommand> {
        self.redo_stack.pop()
    }

    pub fn push_undo(&mut self, command: EditorCommand) {
        self.undo_stack.push(command);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the command the next undo reverts.
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.name())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
