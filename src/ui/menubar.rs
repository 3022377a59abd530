use iced::widget::{button, container, row, text};
use iced::{Element, Length};

use crate::Message;

/// Top menu bar
///
/// tkinter-style cascading menus do not exist in iced, so File → Open/Exit
/// and Help → About are flattened into a single bar.
pub fn view<'a>() -> Element<'a, Message> {
    let bar = row![
        action("Open…", Message::OpenFile),
        action("About", Message::ShowAbout),
        action("Exit", Message::Exit),
    ]
    .spacing(4);

    container(bar)
        .width(Length::Fill)
        .padding(2)
        .style(container::bordered_box)
        .into()
}

fn action<'a>(label: &'a str, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(14))
        .style(button::text)
        .padding(6)
        .on_press(on_press)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menubar_renders() {
        let _element = view();
    }
}
