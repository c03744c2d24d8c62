use std::fs;
use std::path::Path;

use fltk::{
    app::{self, Sender},
    dialog,
    enums::{Event, EventState, Key},
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};
use log::{info, warn};

use super::domain::{Document, Message, SessionConfig};
use super::services::{pdf, speech, text_metrics};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;

/// The editor session: one document, one window, and every command
/// handler the menu can fire. Owned by the dispatch loop in `main`;
/// nothing here is shared across threads.
pub struct EditorSession {
    pub document: Document,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub status_bar: Frame,
    pub sender: Sender<Message>,
    pub config: SessionConfig,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<String>,
    speech_busy: bool,
}

impl EditorSession {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>) -> Self {
        let document = Document::new(sender);
        let mut session = Self {
            document,
            editor: widgets.text_editor,
            window: widgets.wind,
            menu: widgets.menu,
            status_bar: widgets.status_bar,
            sender,
            config: SessionConfig::default(),
            last_open_directory: None,
            speech_busy: false,
        };
        session.editor.set_buffer(session.document.buffer.clone());
        session.wire_editor_events();
        session.apply_font_size();
        session.apply_theme();
        session.refresh_title();
        session.refresh_status();
        session
    }

    /// Hook editor-level events that the menu table cannot express:
    /// undo-group boundaries on keypress, caret tracking on key/mouse
    /// release, Ctrl+wheel zoom, and interception of the toolkit's native
    /// undo keys so the session history is the only undo stack.
    fn wire_editor_events(&mut self) {
        let sender = self.sender;
        let history = self.document.history.clone();
        self.editor.handle(move |_, event| match event {
            Event::KeyDown => {
                let state = app::event_state();
                if state.contains(EventState::Ctrl) && app::event_key() == Key::from_char('z') {
                    if state.contains(EventState::Shift) {
                        sender.send(Message::EditRedo);
                    } else {
                        sender.send(Message::EditUndo);
                    }
                    return true;
                }
                history.borrow_mut().break_group();
                false
            }
            Event::KeyUp => {
                sender.send(Message::CaretMoved);
                false
            }
            Event::Released => {
                sender.send(Message::CaretMoved);
                false
            }
            Event::MouseWheel if app::event_state().contains(EventState::Ctrl) => {
                match app::event_dy() {
                    app::MouseWheel::Up => sender.send(Message::ZoomIn),
                    app::MouseWheel::Down => sender.send(Message::ZoomOut),
                    _ => {}
                }
                true
            }
            _ => false,
        });
    }

    // --- Display refresh ---

    /// Update the window title based on the document name and saved state
    pub fn refresh_title(&mut self) {
        let prefix = if self.document.is_dirty() { "*" } else { "" };
        self.window.set_label(&format!(
            "{}{} - \u{1fab6} QuillPad",
            prefix,
            self.document.display_name()
        ));
    }

    /// Recompute caret line/column and the character/word counts
    pub fn refresh_status(&mut self) {
        let text = self.document.text();
        let pos = self.editor.insert_position().max(0) as usize;
        self.status_bar
            .set_label(&text_metrics::status_line(&text, pos));
    }

    pub fn on_buffer_modified(&mut self) {
        self.refresh_status();
        self.refresh_title();
    }

    pub fn on_caret_moved(&mut self) {
        self.refresh_status();
        self.refresh_title();
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        if !self.prompt_save_changes() {
            return;
        }
        self.document.reset();
        self.editor.set_insert_position(0);
        self.refresh_title();
        self.refresh_status();
    }

    pub fn file_open(&mut self) {
        if !self.prompt_save_changes() {
            return;
        }
        let Some(path) = native_open_dialog("*.txt", self.last_open_directory.as_deref()) else {
            return;
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                self.remember_directory(&path);
                self.document.load(path, &content);
                self.editor.set_insert_position(0);
                self.editor.show_insert_position();
                self.refresh_title();
                self.refresh_status();
            }
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    /// Write the buffer to the backing file, or fall through to Save As
    /// when the document has never been saved.
    pub fn file_save(&mut self) {
        let Some(path) = self.document.file_path.clone() else {
            self.file_save_as();
            return;
        };
        let text = self.document.text();
        match fs::write(&path, &text) {
            Ok(()) => {
                self.document.mark_saved();
                self.refresh_title();
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(path) = native_save_dialog(
            "*.txt",
            Some("untitled.txt"),
            self.last_open_directory.as_deref(),
        ) else {
            return;
        };
        let text = self.document.text();
        match fs::write(&path, &text) {
            Ok(()) => {
                self.remember_directory(&path);
                self.document.file_path = Some(path);
                self.document.mark_saved();
                self.refresh_title();
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    /// Render the whole buffer as speech into an audio file. The chosen
    /// destination is local to this command; the document's backing path
    /// is never touched, so a later Save still writes the text file.
    pub fn export_to_audio(&mut self) {
        let Some(path) = native_save_dialog(
            "*.mp3",
            Some("untitled.mp3"),
            self.last_open_directory.as_deref(),
        ) else {
            return;
        };
        let text = self.document.text();
        match speech::render_to_file(&text, &path) {
            Ok(()) => info!("exported audio to {}", path),
            Err(e) => dialog::alert_default(&format!("Error exporting audio: {}", e)),
        }
    }

    /// Handle a quit request. Returns `true` if the app should exit.
    pub fn request_quit(&mut self) -> bool {
        self.prompt_save_changes()
    }

    /// The single confirmation gate shared by New, Open, and Exit.
    /// Returns `true` when the pending action may proceed.
    pub fn prompt_save_changes(&mut self) -> bool {
        if !self.document.is_dirty() {
            return true;
        }
        let choice = dialog::choice2_default(
            "Do you want to save changes to your document?",
            "Save",
            "Discard",
            "Cancel",
        );
        match choice {
            Some(0) => {
                self.file_save();
                // Save As may have been cancelled; only proceed if the
                // save actually landed.
                !self.document.is_dirty()
            }
            Some(1) => true,
            _ => false,
        }
    }

    // --- Edit operations ---

    pub fn edit_undo(&mut self) {
        // An empty stack is a silent no-op.
        if let Some(pos) = self.document.undo() {
            self.editor.set_insert_position(pos);
            self.editor.show_insert_position();
        }
        self.refresh_status();
        self.refresh_title();
    }

    pub fn edit_redo(&mut self) {
        if let Some(pos) = self.document.redo() {
            self.editor.set_insert_position(pos);
            self.editor.show_insert_position();
        }
        self.refresh_status();
        self.refresh_title();
    }

    pub fn edit_cut(&mut self) {
        self.editor.cut();
    }

    pub fn edit_copy(&mut self) {
        self.editor.copy();
    }

    pub fn edit_paste(&mut self) {
        self.editor.paste();
    }

    pub fn select_all(&mut self) {
        let len = self.document.buffer.length();
        self.document.buffer.select(0, len);
    }

    pub fn insert_timestamp(&mut self) {
        self.insert_at_caret(&text_metrics::local_timestamp());
    }

    /// Insert text at the caret as a single undo group and move the
    /// caret past it.
    fn insert_at_caret(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.document.history.borrow_mut().break_group();
        let pos = self.editor.insert_position().max(0);
        self.document.buffer.insert(pos, text);
        self.editor.set_insert_position(pos + text.len() as i32);
        self.editor.show_insert_position();
        self.document.history.borrow_mut().break_group();
        self.refresh_status();
        self.refresh_title();
    }

    // --- View operations ---

    pub fn zoom_in(&mut self) {
        self.config.zoom_in();
        self.apply_font_size();
    }

    pub fn zoom_out(&mut self) {
        self.config.zoom_out();
        self.apply_font_size();
    }

    pub fn reset_zoom(&mut self) {
        self.config.reset_zoom();
        self.apply_font_size();
    }

    fn apply_font_size(&mut self) {
        self.editor.set_text_size(self.config.font_size as i32);
        self.editor.redraw();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.config.toggle_dark_mode();
        self.apply_theme();
    }

    pub fn apply_theme(&mut self) {
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.status_bar,
            self.config.dark_mode,
        );
    }

    // --- Smart operations ---

    /// Pick a PDF and insert its text at the caret, page by page in
    /// document order, whitespace collapsed, no separator between pages.
    pub fn pdf_extract(&mut self) {
        let Some(path) = native_open_dialog("*.pdf", self.last_open_directory.as_deref()) else {
            return;
        };
        match pdf::extract_pages(&path) {
            Ok(pages) => {
                self.remember_directory(&path);
                self.insert_at_caret(&pages.concat());
            }
            Err(e) => dialog::alert_default(&format!("Error extracting PDF text: {}", e)),
        }
    }

    /// Speak the whole buffer on a worker thread; completion comes back
    /// as a `SpeechFinished` message so the UI stays responsive.
    pub fn read_aloud(&mut self) {
        if self.speech_busy {
            warn!("read aloud already in progress, ignoring request");
            return;
        }
        self.speech_busy = true;
        let text = self.document.text();
        let sender = self.sender;
        std::thread::spawn(move || {
            let result = speech::speak_blocking(&text);
            sender.send(Message::SpeechFinished(result.err().map(|e| e.to_string())));
        });
    }

    pub fn speech_finished(&mut self, error: Option<String>) {
        self.speech_busy = false;
        if let Some(e) = error {
            dialog::alert_default(&format!("Error reading aloud: {}", e));
        }
    }

    // --- Help ---

    pub fn show_about(&self) {
        show_about_dialog();
    }

    fn remember_directory(&mut self, path: &str) {
        if let Some(parent) = Path::new(path).parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }
}
