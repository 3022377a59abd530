/// View rows for the parsed database
///
/// can-dbc keeps comments, value tables and attributes in separate
/// top-level lists keyed by message id and signal name. The UI wants
/// everything pre-resolved per row, so the mapping here walks those
/// lists once at load time and builds plain cloneable structs.

use std::path::Path;

use can_dbc::{
    AttributeValue, AttributeValuedForObjectType, ByteOrder, Comment, MessageId, Signal,
    ValueType, DBC,
};

/// A fully resolved DBC database ready for display
#[derive(Debug, Clone)]
pub struct Document {
    /// File name shown as the tree heading
    pub file_name: String,
    /// Network nodes (BU_), sorted by name
    pub nodes: Vec<NodeRow>,
    /// Messages (BO_), sorted by name
    pub messages: Vec<MessageRow>,
}

/// One network node
#[derive(Debug, Clone)]
pub struct NodeRow {
    pub name: String,
    /// CM_ BU_ comment, if any
    pub comment: Option<String>,
}

/// One message with its resolved signals
#[derive(Debug, Clone)]
pub struct MessageRow {
    pub name: String,
    /// Raw frame identifier (11-bit or 29-bit, without flag bits)
    pub frame_id: u32,
    /// Signals in file declaration order
    pub signals: Vec<SignalRow>,
}

/// One signal with its decoding parameters resolved
#[derive(Debug, Clone)]
pub struct SignalRow {
    pub name: String,
    pub start_bit: u64,
    pub length: u64,
    /// "little_endian" or "big_endian"
    pub byte_order: String,
    pub signed: bool,
    /// GenSigStartValue attribute, already rendered
    pub initial: Option<String>,
    pub scale: f64,
    pub offset: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub unit: String,
    /// VAL_ value table rendered as "0: Off, 1: Running"
    pub choices: Option<String>,
    /// CM_ SG_ comment, if any
    pub comment: Option<String>,
}

impl Document {
    /// Flatten a parsed database into sorted, display-ready rows
    pub fn from_dbc(dbc: &DBC, path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let mut nodes: Vec<NodeRow> = dbc
            .nodes()
            .iter()
            .flat_map(|node| node.0.iter())
            .map(|name| NodeRow {
                name: name.clone(),
                comment: node_comment(dbc, name),
            })
            .collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));

        let mut messages: Vec<MessageRow> = dbc
            .messages()
            .iter()
            .map(|message| MessageRow {
                name: message.message_name().clone(),
                frame_id: raw_frame_id(message.message_id()),
                signals: message
                    .signals()
                    .iter()
                    .map(|signal| SignalRow::resolve(dbc, message.message_id(), signal))
                    .collect(),
            })
            .collect();
        messages.sort_by(|a, b| a.name.cmp(&b.name));

        Document {
            file_name,
            nodes,
            messages,
        }
    }
}

impl MessageRow {
    /// Tree label in the original viewer's format: NAME[291][0x123]
    pub fn tree_label(&self) -> String {
        format!("{}[{}][0x{:X}]", self.name, self.frame_id, self.frame_id)
    }
}

impl SignalRow {
    fn resolve(dbc: &DBC, message_id: &MessageId, signal: &Signal) -> Self {
        SignalRow {
            name: signal.name().clone(),
            start_bit: *signal.start_bit(),
            length: *signal.signal_size(),
            byte_order: byte_order_label(signal.byte_order()).to_string(),
            signed: matches!(signal.value_type(), ValueType::Signed),
            initial: initial_value(dbc, message_id, signal.name()),
            scale: *signal.factor(),
            offset: *signal.offset(),
            minimum: *signal.min(),
            maximum: *signal.max(),
            unit: signal.unit().clone(),
            choices: choices(dbc, message_id, signal.name()),
            comment: signal_comment(dbc, message_id, signal.name()),
        }
    }
}

/// The identifier without the extended-frame flag can-dbc folds into raw()
fn raw_frame_id(id: &MessageId) -> u32 {
    match id {
        MessageId::Standard(id) => u32::from(*id),
        MessageId::Extended(id) => *id,
    }
}

fn byte_order_label(byte_order: &ByteOrder) -> &'static str {
    match byte_order {
        ByteOrder::LittleEndian => "little_endian",
        ByteOrder::BigEndian => "big_endian",
    }
}

fn node_comment(dbc: &DBC, name: &str) -> Option<String> {
    dbc.comments().iter().find_map(|entry| match entry {
        Comment::Node { node_name, comment } if node_name == name => Some(comment.clone()),
        _ => None,
    })
}

fn signal_comment(dbc: &DBC, message_id: &MessageId, name: &str) -> Option<String> {
    dbc.comments().iter().find_map(|entry| match entry {
        Comment::Signal {
            message_id: entry_id,
            signal_name,
            comment,
        } if entry_id == message_id && signal_name == name => Some(comment.clone()),
        _ => None,
    })
}

/// VAL_ entries sorted ascending by raw value, joined like the original
/// viewer did: "0: Off, 1: Running, 2: Fault"
fn choices(dbc: &DBC, message_id: &MessageId, name: &str) -> Option<String> {
    let descriptions = dbc.value_descriptions_for_signal(message_id.clone(), name)?;

    let mut entries: Vec<(f64, String)> = descriptions
        .iter()
        .map(|description| (*description.a(), description.b().clone()))
        .collect();
    entries.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(std::cmp::Ordering::Equal));

    Some(
        entries
            .iter()
            .map(|(value, label)| format!("{}: {}", fmt_number(*value), label))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// A signal's initial raw value travels as the GenSigStartValue
/// attribute (BA_), not as part of the SG_ entry
fn initial_value(dbc: &DBC, message_id: &MessageId, name: &str) -> Option<String> {
    dbc.attribute_values().iter().find_map(|attribute| {
        if attribute.attribute_name() != "GenSigStartValue" {
            return None;
        }
        match attribute.attribute_value() {
            AttributeValuedForObjectType::SignalAttributeValue(entry_id, signal_name, value)
                if entry_id == message_id && signal_name == name =>
            {
                Some(render_attribute(value))
            }
            _ => None,
        }
    })
}

fn render_attribute(value: &AttributeValue) -> String {
    match value {
        AttributeValue::AttributeValueU64(v) => v.to_string(),
        AttributeValue::AttributeValueI64(v) => v.to_string(),
        AttributeValue::AttributeValueF64(v) => fmt_number(*v),
        AttributeValue::AttributeValueCharString(v) => v.clone(),
    }
}

/// Render a DBC number without a trailing ".0" for whole values
pub fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DBC: &str = r#"VERSION "0.1"

NS_ :
    NS_DESC_
    CM_
    BA_DEF_
    BA_
    VAL_
    BA_DEF_DEF_

BS_:

BU_: GATEWAY MOTOR DASHBOARD

BO_ 291 ENGINE_STATUS: 8 MOTOR
 SG_ EngineSpeed : 0|16@1+ (0.125,0) [0|8031.875] "rpm"  GATEWAY,DASHBOARD
 SG_ EngineMode : 16|2@1+ (1,0) [0|3] ""  GATEWAY
 SG_ CoolantTemp : 24|8@1- (1,-40) [-40|215] "degC"  DASHBOARD

BO_ 512 GEARBOX_STATUS: 2 MOTOR
 SG_ GearPosition : 0|4@1+ (1,0) [0|8] ""  DASHBOARD

CM_ BU_ MOTOR "Engine control unit";
CM_ SG_ 291 EngineSpeed "Crankshaft speed as measured at the flywheel";
BA_DEF_ SG_  "GenSigStartValue" INT 0 10000;
BA_DEF_DEF_  "GenSigStartValue" 0;
BA_ "GenSigStartValue" SG_ 291 EngineMode 1;
VAL_ 291 EngineMode 0 "Off" 1 "Running" 2 "Fault" ;
"#;

    fn sample_document() -> Document {
        let dbc = can_dbc::DBC::from_slice(SAMPLE_DBC.as_bytes()).expect("sample should parse");
        Document::from_dbc(&dbc, Path::new("/tmp/sample.dbc"))
    }

    #[test]
    fn test_file_name_is_taken_from_path() {
        assert_eq!(sample_document().file_name, "sample.dbc");
    }

    #[test]
    fn test_nodes_are_sorted_by_name() {
        let document = sample_document();
        let names: Vec<&str> = document.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["DASHBOARD", "GATEWAY", "MOTOR"]);
    }

    #[test]
    fn test_node_comment_resolution() {
        let document = sample_document();
        let motor = document.nodes.iter().find(|n| n.name == "MOTOR").unwrap();
        assert_eq!(motor.comment.as_deref(), Some("Engine control unit"));

        let gateway = document.nodes.iter().find(|n| n.name == "GATEWAY").unwrap();
        assert_eq!(gateway.comment, None);
    }

    #[test]
    fn test_messages_are_sorted_by_name() {
        let document = sample_document();
        let names: Vec<&str> = document.messages.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ENGINE_STATUS", "GEARBOX_STATUS"]);
    }

    #[test]
    fn test_tree_label_shows_decimal_and_hex_id() {
        let document = sample_document();
        assert_eq!(document.messages[0].tree_label(), "ENGINE_STATUS[291][0x123]");
        assert_eq!(document.messages[1].tree_label(), "GEARBOX_STATUS[512][0x200]");
    }

    #[test]
    fn test_signals_keep_declaration_order() {
        let document = sample_document();
        let names: Vec<&str> = document.messages[0]
            .signals
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["EngineSpeed", "EngineMode", "CoolantTemp"]);
    }

    #[test]
    fn test_signal_decoding_parameters() {
        let document = sample_document();
        let speed = &document.messages[0].signals[0];

        assert_eq!(speed.start_bit, 0);
        assert_eq!(speed.length, 16);
        assert_eq!(speed.byte_order, "little_endian");
        assert!(!speed.signed);
        assert_eq!(speed.scale, 0.125);
        assert_eq!(speed.offset, 0.0);
        assert_eq!(speed.minimum, 0.0);
        assert_eq!(speed.maximum, 8031.875);
        assert_eq!(speed.unit, "rpm");
        assert_eq!(
            speed.comment.as_deref(),
            Some("Crankshaft speed as measured at the flywheel")
        );
        assert_eq!(speed.choices, None);
    }

    #[test]
    fn test_signed_signal_and_negative_offset() {
        let document = sample_document();
        let temp = &document.messages[0].signals[2];

        assert!(temp.signed);
        assert_eq!(temp.offset, -40.0);
        assert_eq!(temp.minimum, -40.0);
    }

    #[test]
    fn test_choices_are_rendered_sorted() {
        let document = sample_document();
        let mode = &document.messages[0].signals[1];
        assert_eq!(mode.choices.as_deref(), Some("0: Off, 1: Running, 2: Fault"));
    }

    #[test]
    fn test_initial_value_from_attribute() {
        let document = sample_document();
        let mode = &document.messages[0].signals[1];
        assert_eq!(mode.initial.as_deref(), Some("1"));

        let speed = &document.messages[0].signals[0];
        assert_eq!(speed.initial, None);
    }

    #[test]
    fn test_fmt_number() {
        assert_eq!(fmt_number(0.125), "0.125");
        assert_eq!(fmt_number(1.0), "1");
        assert_eq!(fmt_number(-40.0), "-40");
        assert_eq!(fmt_number(8031.875), "8031.875");
    }
}
