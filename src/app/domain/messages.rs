/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileExportAudio,
    FileQuit,
    WindowClose,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
    SelectAll,
    InsertTimestamp,

    // View
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleDarkMode,

    // Smart
    PdfExtract,
    ReadAloud,

    // Help
    ShowAbout,

    // Editor events
    /// The text buffer changed; payload is the modification position.
    BufferModified(i32),
    /// The caret may have moved without a buffer change (keys, clicks).
    CaretMoved,

    // Background results
    /// Read-aloud worker finished; `Some` carries the failure message.
    SpeechFinished(Option<String>),
}
