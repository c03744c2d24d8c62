use std::path::Path;

use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Show the native open dialog. Returns `None` when the user cancels.
pub fn native_open_dialog(filter: &str, directory: Option<&str>) -> Option<String> {
    let mut chooser = NativeFileChooser::new(FileDialogType::BrowseFile);
    chooser.set_filter(filter);
    if let Some(dir) = directory {
        let _ = chooser.set_directory(&Path::new(dir));
    }
    chooser.show(); // returns (), blocks until close
    let filename = chooser.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Show the native save dialog with an optional suggested file name.
/// Returns `None` when the user cancels.
pub fn native_save_dialog(
    filter: &str,
    preset_name: Option<&str>,
    directory: Option<&str>,
) -> Option<String> {
    let mut chooser = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    chooser.set_filter(filter);
    if let Some(name) = preset_name {
        chooser.set_preset_file(name);
    }
    if let Some(dir) = directory {
        let _ = chooser.set_directory(&Path::new(dir));
    }
    chooser.show(); // returns (), blocks until close
    let filename = chooser.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
