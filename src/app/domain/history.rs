/// A single reversible buffer modification, as reported by the text
/// buffer's modify callback: at byte `pos`, `deleted` was removed and
/// `inserted` was put in its place (either side may be empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOp {
    pub pos: i32,
    pub inserted: String,
    pub deleted: String,
}

/// Bounded undo/redo stack owned by the editor session.
///
/// Ops accumulate in an open group; a group boundary is inserted on each
/// keypress, so one keystroke (or one programmatic insertion) undoes as a
/// unit. When the stack exceeds its depth the oldest group is evicted.
#[derive(Debug)]
pub struct EditHistory {
    undo: Vec<Vec<EditOp>>,
    redo: Vec<Vec<EditOp>>,
    open: Vec<EditOp>,
    depth: usize,
}

pub const DEFAULT_HISTORY_DEPTH: usize = 1000;

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl EditHistory {
    pub fn new(depth: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            open: Vec::new(),
            depth: depth.max(1),
        }
    }

    /// Record a modification into the open group. Any redoable groups are
    /// invalidated by new edits.
    pub fn record(&mut self, op: EditOp) {
        self.redo.clear();
        self.open.push(op);
    }

    /// Close the open group, making it undoable. Called on each keypress
    /// and around programmatic insertions. No-op when nothing is open.
    pub fn break_group(&mut self) {
        if self.open.is_empty() {
            return;
        }
        self.undo.push(std::mem::take(&mut self.open));
        if self.undo.len() > self.depth {
            self.undo.remove(0);
        }
    }

    /// Pop the most recent group for inverse application. Returns `None`
    /// on an empty stack (callers treat that as a silent no-op).
    pub fn undo(&mut self) -> Option<Vec<EditOp>> {
        self.break_group();
        let group = self.undo.pop()?;
        self.redo.push(group.clone());
        Some(group)
    }

    /// Pop the most recently undone group for forward re-application.
    pub fn redo(&mut self) -> Option<Vec<EditOp>> {
        let group = self.redo.pop()?;
        self.undo.push(group.clone());
        Some(group)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.open.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty() || !self.open.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(pos: i32, text: &str) -> EditOp {
        EditOp {
            pos,
            inserted: text.to_string(),
            deleted: String::new(),
        }
    }

    fn delete(pos: i32, text: &str) -> EditOp {
        EditOp {
            pos,
            inserted: String::new(),
            deleted: text.to_string(),
        }
    }

    /// Mirror of the session's buffer application: revert a group.
    fn apply_undo(text: &mut String, group: &[EditOp]) {
        for op in group.iter().rev() {
            let pos = op.pos as usize;
            if !op.inserted.is_empty() {
                text.replace_range(pos..pos + op.inserted.len(), "");
            }
            if !op.deleted.is_empty() {
                text.insert_str(pos, &op.deleted);
            }
        }
    }

    /// Mirror of the session's buffer application: replay a group.
    fn apply_redo(text: &mut String, group: &[EditOp]) {
        for op in group {
            let pos = op.pos as usize;
            if !op.deleted.is_empty() {
                text.replace_range(pos..pos + op.deleted.len(), "");
            }
            if !op.inserted.is_empty() {
                text.insert_str(pos, &op.inserted);
            }
        }
    }

    #[test]
    fn test_empty_stack_is_noop() {
        let mut history = EditHistory::default();
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_reverts_typed_text() {
        let mut history = EditHistory::default();
        let mut text = String::new();

        history.break_group();
        history.record(insert(0, "a"));
        text.insert_str(0, "a");
        history.break_group();
        history.record(insert(1, "b"));
        text.insert_str(1, "b");

        let group = history.undo().unwrap();
        apply_undo(&mut text, &group);
        assert_eq!(text, "a");

        let group = history.undo().unwrap();
        apply_undo(&mut text, &group);
        assert_eq!(text, "");
    }

    #[test]
    fn test_redo_replays_undone_group() {
        let mut history = EditHistory::default();
        let mut text = String::from("hello");

        history.record(delete(0, "hello"));
        text.clear();

        let group = history.undo().unwrap();
        apply_undo(&mut text, &group);
        assert_eq!(text, "hello");

        let group = history.redo().unwrap();
        apply_redo(&mut text, &group);
        assert_eq!(text, "");
    }

    #[test]
    fn test_group_undoes_as_a_unit() {
        let mut history = EditHistory::default();
        let mut text = String::new();

        // One paste reported as two ops, no boundary in between.
        history.record(insert(0, "foo"));
        text.insert_str(0, "foo");
        history.record(insert(3, "bar"));
        text.insert_str(3, "bar");
        history.break_group();

        let group = history.undo().unwrap();
        assert_eq!(group.len(), 2);
        apply_undo(&mut text, &group);
        assert_eq!(text, "");
    }

    #[test]
    fn test_replace_op_round_trips() {
        let mut history = EditHistory::default();
        let mut text = String::from("one two");

        // "two" replaced by "three" in a single op.
        let op = EditOp {
            pos: 4,
            inserted: "three".to_string(),
            deleted: "two".to_string(),
        };
        history.record(op);
        text.replace_range(4..7, "three");
        assert_eq!(text, "one three");

        let group = history.undo().unwrap();
        apply_undo(&mut text, &group);
        assert_eq!(text, "one two");

        let group = history.redo().unwrap();
        apply_redo(&mut text, &group);
        assert_eq!(text, "one three");
    }

    #[test]
    fn test_new_edit_invalidates_redo() {
        let mut history = EditHistory::default();
        history.record(insert(0, "a"));
        history.undo().unwrap();
        assert!(history.can_redo());

        history.record(insert(0, "b"));
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_depth_evicts_oldest_group() {
        let mut history = EditHistory::new(2);
        for i in 0..5 {
            history.record(insert(i, "x"));
            history.break_group();
        }

        assert_eq!(history.undo().unwrap()[0].pos, 4);
        assert_eq!(history.undo().unwrap()[0].pos, 3);
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut history = EditHistory::default();
        history.record(insert(0, "a"));
        history.break_group();
        history.undo().unwrap();
        history.record(insert(0, "b"));

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
