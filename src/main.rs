use fltk::{app, enums::Event, prelude::*};
use log::info;

use quill_pad::app::{EditorSession, Message};
use quill_pad::ui::{main_window, menu};

fn main() {
    env_logger::init();
    info!("starting QuillPad {}", env!("CARGO_PKG_VERSION"));

    let fl_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = main_window::build_main_window();
    menu::build_menu(&mut widgets.menu, &sender);

    // Route the window manager's close button through the same save
    // gate as File/Exit.
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });
    widgets.wind.show();

    let mut session = EditorSession::new(widgets, sender);

    while fl_app.wait() {
        let Some(message) = receiver.recv() else {
            continue;
        };
        match message {
            // File
            Message::FileNew => session.file_new(),
            Message::FileOpen => session.file_open(),
            Message::FileSave => session.file_save(),
            Message::FileSaveAs => session.file_save_as(),
            Message::FileExportAudio => session.export_to_audio(),
            Message::FileQuit | Message::WindowClose => {
                if session.request_quit() {
                    info!("exiting");
                    fl_app.quit();
                }
            }

            // Edit
            Message::EditUndo => session.edit_undo(),
            Message::EditRedo => session.edit_redo(),
            Message::EditCut => session.edit_cut(),
            Message::EditCopy => session.edit_copy(),
            Message::EditPaste => session.edit_paste(),
            Message::SelectAll => session.select_all(),
            Message::InsertTimestamp => session.insert_timestamp(),

            // View
            Message::ZoomIn => session.zoom_in(),
            Message::ZoomOut => session.zoom_out(),
            Message::ZoomReset => session.reset_zoom(),
            Message::ToggleDarkMode => session.toggle_dark_mode(),

            // Smart
            Message::PdfExtract => session.pdf_extract(),
            Message::ReadAloud => session.read_aloud(),

            // Help
            Message::ShowAbout => session.show_about(),

            // Editor events
            Message::BufferModified(_) => session.on_buffer_modified(),
            Message::CaretMoved => session.on_caret_moved(),

            // Background results
            Message::SpeechFinished(error) => session.speech_finished(error),
        }
    }
}
