//! UI layer - FLTK widget construction.
//!
//! - `main_window` - window layout (menu bar, editor, status bar)
//! - `menu` - the command table mapping menu paths and shortcuts to messages
//! - `theme` - the fixed light/dark palette
//! - `file_dialogs` - native open/save chooser wrappers
//! - `dialogs` - modal dialogs

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;
