//! QuillPad - a minimalist notepad with PDF text extraction and read-aloud.
//!
//! The crate is split into two layers:
//!
//! - [`app`] - session state, domain types, and the services that do the
//!   actual work (file I/O, text metrics, PDF extraction, speech)
//! - [`ui`] - FLTK widget construction: window layout, menu command table,
//!   theming, dialogs
//!
//! The binary in `main.rs` wires the two together: UI events become
//! [`app::Message`] values sent over an FLTK channel, and a single dispatch
//! loop forwards them to the [`app::EditorSession`].

pub mod app;
pub mod ui;

pub use app::domain::{Document, EditHistory, EditOp, Message, SessionConfig};
pub use app::error::{AppError, Result};
pub use app::state::EditorSession;
