//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document (buffer, backing path, saved snapshot)
//! - EditHistory (bounded undo/redo command stack)
//! - Session configuration
//! - Message types for the event system

pub mod config;
pub mod document;
pub mod history;
pub mod messages;

pub use config::SessionConfig;
pub use document::Document;
pub use history::{EditHistory, EditOp};
pub use messages::Message;
