use fltk::{
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_BAR_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub status_bar: Frame,
}

pub fn build_main_window() -> MainWidgets {
    let mut wind = Window::new(100, 100, 640, 480, "Untitled - \u{1fab6} QuillPad");
    wind.set_xclass("QuillPad");

    let mut flex = Flex::new(0, 0, 640, 480, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.set_text_font(Font::Courier);
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    let mut status_bar = Frame::default();
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_align(Align::Left | Align::Inside);
    status_bar.set_label_size(12);
    status_bar.set_label("Line 1, Column 1 | 0 characters | 0 words");
    flex.fixed(&status_bar, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        status_bar,
    }
}
