use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::history::{EditHistory, EditOp};
use super::messages::Message;
use crate::app::services::text_metrics::extract_filename;

/// The one open document: an FLTK text buffer, its optional backing file,
/// and the content as of the last successful save or load.
///
/// Dirtiness is derived, not flagged: the document is unsaved exactly when
/// the buffer content differs from the saved snapshot, so typing a change
/// and then reverting it by hand reads as saved again.
pub struct Document {
    pub buffer: TextBuffer,
    pub file_path: Option<String>,
    saved_snapshot: String,
    pub history: Rc<RefCell<EditHistory>>,
    applying_history: Rc<Cell<bool>>,
}

impl Document {
    /// Create an empty, saved document and hook the buffer's modify
    /// callback: every real modification is recorded into the undo
    /// history (unless the history itself is being applied) and announced
    /// on the channel.
    pub fn new(sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let history = Rc::new(RefCell::new(EditHistory::default()));
        let applying_history = Rc::new(Cell::new(false));

        let hist = history.clone();
        let applying = applying_history.clone();
        let buf = buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, deleted_text| {
            if inserted == 0 && deleted == 0 {
                return;
            }
            if !applying.get() {
                let inserted_text = if inserted > 0 {
                    buf.text_range(pos, pos + inserted).unwrap_or_default()
                } else {
                    String::new()
                };
                hist.borrow_mut().record(EditOp {
                    pos,
                    inserted: inserted_text,
                    deleted: deleted_text.to_string(),
                });
            }
            sender.send(Message::BufferModified(pos));
        });

        Self {
            buffer,
            file_path: None,
            saved_snapshot: String::new(),
            history,
            applying_history,
        }
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn is_dirty(&self) -> bool {
        self.text() != self.saved_snapshot
    }

    /// Filename component of the backing path, or "Untitled".
    pub fn display_name(&self) -> String {
        match self.file_path {
            Some(ref path) => extract_filename(path),
            None => "Untitled".to_string(),
        }
    }

    /// Record the current buffer content as the on-disk state.
    pub fn mark_saved(&mut self) {
        self.saved_snapshot = self.text();
    }

    /// Reset to the startup state: empty buffer, no backing file, saved.
    pub fn reset(&mut self) {
        self.replace_buffer("");
        self.file_path = None;
        self.saved_snapshot = String::new();
    }

    /// Replace the whole document with the contents of a file.
    pub fn load(&mut self, path: String, content: &str) {
        self.replace_buffer(content);
        self.file_path = Some(path);
        self.saved_snapshot = content.to_string();
    }

    /// Swap the buffer content wholesale without recording it as an
    /// undoable edit, and drop any history from the previous document.
    fn replace_buffer(&mut self, content: &str) {
        self.applying_history.set(true);
        self.buffer.set_text(content);
        self.applying_history.set(false);
        self.history.borrow_mut().clear();
    }

    /// Revert the most recent edit group. Returns the caret position to
    /// restore, or `None` when there was nothing to undo.
    pub fn undo(&mut self) -> Option<i32> {
        let group = self.history.borrow_mut().undo()?;
        self.applying_history.set(true);
        for op in group.iter().rev() {
            if !op.inserted.is_empty() {
                self.buffer.remove(op.pos, op.pos + op.inserted.len() as i32);
            }
            if !op.deleted.is_empty() {
                self.buffer.insert(op.pos, &op.deleted);
            }
        }
        self.applying_history.set(false);
        group.first().map(|op| op.pos + op.deleted.len() as i32)
    }

    /// Replay the most recently undone edit group. Returns the caret
    /// position to restore, or `None` when there was nothing to redo.
    pub fn redo(&mut self) -> Option<i32> {
        let group = self.history.borrow_mut().redo()?;
        self.applying_history.set(true);
        for op in &group {
            if !op.deleted.is_empty() {
                self.buffer.remove(op.pos, op.pos + op.deleted.len() as i32);
            }
            if !op.inserted.is_empty() {
                self.buffer.insert(op.pos, &op.inserted);
            }
        }
        self.applying_history.set(false);
        group.last().map(|op| op.pos + op.inserted.len() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fltk::app;
    use std::fs;

    fn test_document() -> Document {
        let (sender, _receiver) = app::channel::<Message>();
        Document::new(sender)
    }

    #[test]
    fn test_new_document_is_saved_and_untitled() {
        let doc = test_document();
        assert!(!doc.is_dirty());
        assert_eq!(doc.display_name(), "Untitled");
        assert!(doc.file_path.is_none());
    }

    #[test]
    fn test_dirty_is_derived_from_snapshot() {
        let mut doc = test_document();
        doc.load("/tmp/notes.txt".to_string(), "abc");
        assert!(!doc.is_dirty());
        assert_eq!(doc.display_name(), "notes.txt");

        doc.buffer.insert(3, "x");
        assert!(doc.is_dirty());

        // Reverting the content by hand reads as saved again.
        doc.buffer.remove(3, 4);
        assert!(!doc.is_dirty());

        doc.buffer.insert(0, "y");
        assert!(doc.is_dirty());
        doc.mark_saved();
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_reset_restores_startup_state() {
        let mut doc = test_document();
        doc.load("/tmp/notes.txt".to_string(), "abc");
        doc.buffer.insert(0, "x");

        doc.reset();
        assert_eq!(doc.text(), "");
        assert!(doc.file_path.is_none());
        assert!(!doc.is_dirty());
        assert!(!doc.history.borrow().can_undo());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.txt");
        let original = "line one\nline two\n\ttabbed";

        let mut doc = test_document();
        doc.buffer.set_text(original);
        fs::write(&path, doc.text()).unwrap();

        let read_back = fs::read_to_string(&path).unwrap();
        assert_eq!(read_back, original);

        // Saving again with no intervening edits writes identical bytes.
        fs::write(&path, doc.text()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), original);

        let mut reloaded = test_document();
        reloaded.load(path.to_string_lossy().to_string(), &read_back);
        assert_eq!(reloaded.text(), original);
        assert!(!reloaded.is_dirty());
    }

    #[test]
    fn test_modify_callback_feeds_undo_history() {
        let mut doc = test_document();

        doc.buffer.insert(0, "abc");
        doc.history.borrow_mut().break_group();
        doc.buffer.insert(3, "def");
        doc.history.borrow_mut().break_group();
        assert_eq!(doc.text(), "abcdef");

        assert_eq!(doc.undo(), Some(3));
        assert_eq!(doc.text(), "abc");

        assert_eq!(doc.undo(), Some(0));
        assert_eq!(doc.text(), "");
        assert_eq!(doc.undo(), None);

        assert_eq!(doc.redo(), Some(3));
        assert_eq!(doc.text(), "abc");
        assert_eq!(doc.redo(), Some(6));
        assert_eq!(doc.text(), "abcdef");
        assert_eq!(doc.redo(), None);
    }

    #[test]
    fn test_load_clears_history() {
        let mut doc = test_document();
        doc.buffer.insert(0, "typed");
        doc.history.borrow_mut().break_group();
        assert!(doc.history.borrow().can_undo());

        doc.load("/tmp/other.txt".to_string(), "fresh");
        assert!(!doc.history.borrow().can_undo());
        assert_eq!(doc.undo(), None);
        assert_eq!(doc.text(), "fresh");
    }
}
