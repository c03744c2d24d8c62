use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::Message;

/// The command table: every menu path, its accelerator, and the message
/// it sends. Handler logic lives entirely in the session; this mapping is
/// the only place UI gestures and commands meet.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Export to Audio...", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileExportAudio) });
    menu.add("File/Exit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Undo", Shortcut::Ctrl | 'z', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Redo", Shortcut::Ctrl | Shortcut::Shift | 'z', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Edit/Select All", Shortcut::Ctrl | 'a', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::SelectAll) });
    menu.add("Edit/Time\\/Date", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::InsertTimestamp) });

    // View
    menu.add("View/Zoom In", Shortcut::Ctrl | '=', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ZoomIn) });
    menu.add("View/Zoom Out", Shortcut::Ctrl | '-', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ZoomOut) });
    menu.add("View/Reset Zoom", Shortcut::Ctrl | '0', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ZoomReset) });
    menu.add("View/Toggle Dark Mode", Shortcut::None, MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // Smart
    menu.add("Smart/Text Extract from PDF...", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::PdfExtract) });
    menu.add("Smart/Read Aloud", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ReadAloud) });

    // Help
    menu.add("Help/About QuillPad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
