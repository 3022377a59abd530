use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Author shown on the about page
const AUTHOR: &str = "ysuchao@126.com";

/// About page with version and author, plus a way back to the browser
pub fn view<'a>() -> Element<'a, Message> {
    let content = column![
        text("DBC Viewer").size(32),
        text(format!("Version: {}", APP_VERSION)).size(16),
        text(format!("Author: {}", AUTHOR)).size(16),
        text("A viewer for CAN bus database (.dbc) files.").size(14),
        button(text("Back").size(14))
            .on_press(Message::CloseAbout)
            .padding(10),
    ]
    .spacing(20)
    .padding(40)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_renders() {
        let _element = view();
    }

    #[test]
    fn test_app_version_is_valid() {
        assert!(!APP_VERSION.is_empty());
    }
}
