use iced::widget::{button, container, row, scrollable, text, Column, Space};
use iced::{Element, Length};

use crate::dbc::model::Document;
use crate::state::selection::Selection;
use crate::Message;

/// Fixed sidebar width, matching the original viewer's tree pane
pub const WIDTH: f32 = 320.0;

/// Sidebar tree: file heading plus collapsible Nodes / Messages groups
pub fn view<'a>(
    document: Option<&'a Document>,
    selection: Selection,
    nodes_expanded: bool,
    messages_expanded: bool,
) -> Element<'a, Message> {
    let Some(document) = document else {
        return container(text("No database loaded.").size(14))
            .width(Length::Fixed(WIDTH))
            .height(Length::Fill)
            .padding(10)
            .style(container::bordered_box)
            .into();
    };

    let mut tree = Column::new()
        .spacing(2)
        .push(text(&document.file_name).size(16));

    tree = tree.push(group_header("Nodes", nodes_expanded, Message::ToggleNodes));
    if nodes_expanded {
        for (index, node) in document.nodes.iter().enumerate() {
            tree = tree.push(leaf(
                node.name.clone(),
                selection == Selection::Node(index),
                Message::SelectNode(index),
            ));
        }
    }

    tree = tree.push(group_header(
        "Messages",
        messages_expanded,
        Message::ToggleMessages,
    ));
    if messages_expanded {
        for (index, message) in document.messages.iter().enumerate() {
            tree = tree.push(leaf(
                message.tree_label(),
                selection == Selection::Message(index),
                Message::SelectMessage(index),
            ));
        }
    }

    container(scrollable(tree).height(Length::Fill))
        .width(Length::Fixed(WIDTH))
        .padding(6)
        .style(container::bordered_box)
        .into()
}

/// Group header row with a disclosure marker
fn group_header<'a>(label: &'a str, expanded: bool, on_press: Message) -> Element<'a, Message> {
    let marker = if expanded { "▾" } else { "▸" };

    button(text(format!("{} {}", marker, label)).size(14))
        .style(button::text)
        .width(Length::Fill)
        .padding(2)
        .on_press(on_press)
        .into()
}

/// Selectable leaf row, indented under its group
fn leaf<'a>(label: String, selected: bool, on_press: Message) -> Element<'a, Message> {
    let style: fn(&iced::Theme, button::Status) -> button::Style = if selected {
        button::primary
    } else {
        button::text
    };

    row![
        Space::with_width(Length::Fixed(14.0)),
        button(text(label).size(13))
            .style(style)
            .width(Length::Fill)
            .padding(2)
            .on_press(on_press),
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbc::model::{MessageRow, NodeRow};

    fn sample_document() -> Document {
        Document {
            file_name: "sample.dbc".to_string(),
            nodes: vec![NodeRow {
                name: "MOTOR".to_string(),
                comment: None,
            }],
            messages: vec![MessageRow {
                name: "ENGINE_STATUS".to_string(),
                frame_id: 291,
                signals: vec![],
            }],
        }
    }

    #[test]
    fn test_sidebar_renders_without_document() {
        let _element = view(None, Selection::None, false, false);
    }

    #[test]
    fn test_sidebar_renders_with_document() {
        let document = sample_document();
        let _element = view(Some(&document), Selection::Message(0), true, true);
    }
}
