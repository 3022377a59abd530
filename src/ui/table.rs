use iced::font::Weight;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{column, container, row, scrollable, text, Column, Row};
use iced::{Element, Font, Length};

use crate::dbc::model::{fmt_number, Document, MessageRow, NodeRow, SignalRow};
use crate::state::selection::Selection;
use crate::Message;

/// Signal table columns in display order, with fixed pixel widths.
///
/// The column set matches the original viewer; the multiplexer and SPN
/// columns it had commented out are omitted.
const SIGNAL_COLUMNS: [(&str, f32); 13] = [
    ("Name", 200.0),
    ("StartBit", 70.0),
    ("Length", 60.0),
    ("ByteOrder", 100.0),
    ("Signed", 60.0),
    ("Initial", 60.0),
    ("Scale", 70.0),
    ("Offset", 70.0),
    ("Minimum", 80.0),
    ("Maximum", 80.0),
    ("Unit", 60.0),
    ("Choices", 300.0),
    ("Comment", 300.0),
];

/// Detail pane: node table, signal table or an empty-state hint
pub fn view<'a>(document: Option<&'a Document>, selection: Selection) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match (document, selection) {
        (Some(document), Selection::Node(index)) if index < document.nodes.len() => {
            node_table(&document.nodes[index])
        }
        (Some(document), Selection::Message(index)) if index < document.messages.len() => {
            signal_table(&document.messages[index])
        }
        _ => hint(),
    };

    container(inner)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(6)
        .style(container::bordered_box)
        .into()
}

/// Name/Comment table for a selected node
fn node_table<'a>(node: &'a NodeRow) -> Element<'a, Message> {
    let header = row![
        header_cell("Name", 200.0),
        header_cell("Comment", 300.0),
    ]
    .spacing(8);

    let data = row![
        cell(node.name.clone(), 200.0),
        cell(node.comment.clone().unwrap_or_default(), 300.0),
    ]
    .spacing(8);

    column![header, data].spacing(4).into()
}

/// One row per signal for a selected message
fn signal_table<'a>(message: &'a MessageRow) -> Element<'a, Message> {
    let mut header = Row::new().spacing(8);
    for (label, width) in SIGNAL_COLUMNS {
        header = header.push(header_cell(label, width));
    }

    let mut rows = Column::new().spacing(2).push(header);
    for signal in &message.signals {
        let mut data = Row::new().spacing(8);
        for (value, (_, width)) in signal_cells(signal).into_iter().zip(SIGNAL_COLUMNS) {
            data = data.push(cell(value, width));
        }
        rows = rows.push(data);
    }

    // Both axes scroll: the signal table is wider than the pane
    scrollable(rows)
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render a signal's decoding parameters in SIGNAL_COLUMNS order
fn signal_cells(signal: &SignalRow) -> [String; 13] {
    [
        signal.name.clone(),
        signal.start_bit.to_string(),
        signal.length.to_string(),
        signal.byte_order.clone(),
        signal.signed.to_string(),
        signal.initial.clone().unwrap_or_default(),
        fmt_number(signal.scale),
        fmt_number(signal.offset),
        fmt_number(signal.minimum),
        fmt_number(signal.maximum),
        signal.unit.clone(),
        signal.choices.clone().unwrap_or_default(),
        signal.comment.clone().unwrap_or_default(),
    ]
}

fn header_cell<'a>(label: &'a str, width: f32) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    text(label)
        .size(13)
        .font(bold)
        .width(Length::Fixed(width))
        .into()
}

fn cell<'a>(value: String, width: f32) -> Element<'a, Message> {
    text(value)
        .size(13)
        .font(Font::MONOSPACE)
        .width(Length::Fixed(width))
        .into()
}

fn hint<'a>() -> Element<'a, Message> {
    container(text("Select a node or message to see its details.").size(14))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
