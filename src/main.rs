use iced::widget::{column, row, text};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;

// Declare the application modules
mod dbc;
mod state;
mod ui;

use dbc::model::Document;
use dbc::DbcError;
use state::selection::{Screen, Selection};

/// Main application state
struct DbcViewer {
    /// The currently loaded database, replaced wholesale on re-open
    document: Option<Document>,
    /// Current sidebar selection
    selection: Selection,
    /// Whether the Nodes group is expanded
    nodes_expanded: bool,
    /// Whether the Messages group is expanded
    messages_expanded: bool,
    /// Which top-level view is visible
    screen: Screen,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked File → Open…
    OpenFile,
    /// Background load completed
    DocumentLoaded(Result<Document, DbcError>),
    /// Toggle the Nodes group in the sidebar
    ToggleNodes,
    /// Toggle the Messages group in the sidebar
    ToggleMessages,
    /// User selected a node row
    SelectNode(usize),
    /// User selected a message row
    SelectMessage(usize),
    /// Show the about page
    ShowAbout,
    /// Return from the about page
    CloseAbout,
    /// Quit the application
    Exit,
}

impl DbcViewer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        (
            DbcViewer {
                document: None,
                selection: Selection::None,
                nodes_expanded: false,
                messages_expanded: false,
                screen: Screen::Browser,
                status: String::from("Ready. Open a .dbc file to get started."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFile => {
                // Show the native file picker, filtered like the original viewer
                let file = FileDialog::new()
                    .add_filter("can dbc files", &["dbc"])
                    .set_title("Open DBC File")
                    .pick_file();

                if let Some(path) = file {
                    self.status = format!("Loading {}...", path.display());

                    return Task::perform(
                        dbc::loader::load_document_async(path),
                        Message::DocumentLoaded,
                    );
                }

                // Dialog cancelled
                Task::none()
            }
            Message::DocumentLoaded(Ok(document)) => {
                self.status = format!(
                    "Loaded {}: {} nodes, {} messages.",
                    document.file_name,
                    document.nodes.len(),
                    document.messages.len()
                );

                // Replace wholesale; stale indices must not survive into
                // the new tree
                self.document = Some(document);
                self.selection = Selection::None;
                self.nodes_expanded = false;
                self.messages_expanded = false;

                Task::none()
            }
            Message::DocumentLoaded(Err(error)) => {
                // Keep the previous document visible, just report
                eprintln!("⚠️  {}", error);
                self.status = format!("⚠️  {}", error);

                Task::none()
            }
            Message::ToggleNodes => {
                self.nodes_expanded = !self.nodes_expanded;
                // The original cleared the table when a group header was
                // selected
                self.selection = Selection::None;
                Task::none()
            }
            Message::ToggleMessages => {
                self.messages_expanded = !self.messages_expanded;
                self.selection = Selection::None;
                Task::none()
            }
            Message::SelectNode(index) => {
                self.selection = Selection::Node(index);
                Task::none()
            }
            Message::SelectMessage(index) => {
                self.selection = Selection::Message(index);
                Task::none()
            }
            Message::ShowAbout => {
                self.screen = Screen::About;
                Task::none()
            }
            Message::CloseAbout => {
                self.screen = Screen::Browser;
                Task::none()
            }
            Message::Exit => iced::exit(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        if self.screen == Screen::About {
            return ui::about::view();
        }

        let browser = row![
            ui::sidebar::view(
                self.document.as_ref(),
                self.selection,
                self.nodes_expanded,
                self.messages_expanded,
            ),
            ui::table::view(self.document.as_ref(), self.selection),
        ]
        .spacing(4)
        .height(Length::Fill);

        column![
            ui::menubar::view(),
            browser,
            text(&self.status).size(13),
        ]
        .spacing(4)
        .padding(4)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("DBC Viewer", DbcViewer::update, DbcViewer::view)
        .theme(DbcViewer::theme)
        .window_size((1280.0, 800.0))
        .centered()
        .run_with(DbcViewer::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document(name: &str) -> Document {
        Document {
            file_name: name.to_string(),
            nodes: vec![],
            messages: vec![],
        }
    }

    fn loaded_viewer() -> DbcViewer {
        let (mut app, _) = DbcViewer::new();
        let _ = app.update(Message::DocumentLoaded(Ok(sample_document("first.dbc"))));
        let _ = app.update(Message::ToggleNodes);
        let _ = app.update(Message::ToggleMessages);
        let _ = app.update(Message::SelectMessage(0));
        app
    }

    #[test]
    fn test_reload_replaces_document_and_resets_tree() {
        let mut app = loaded_viewer();
        assert_eq!(app.selection, Selection::Message(0));
        assert!(app.nodes_expanded);
        assert!(app.messages_expanded);

        let _ = app.update(Message::DocumentLoaded(Ok(sample_document("second.dbc"))));

        assert_eq!(app.document.as_ref().unwrap().file_name, "second.dbc");
        assert_eq!(app.selection, Selection::None);
        assert!(!app.nodes_expanded);
        assert!(!app.messages_expanded);
    }

    #[test]
    fn test_failed_load_keeps_document_and_selection() {
        let mut app = loaded_viewer();

        let _ = app.update(Message::DocumentLoaded(Err(DbcError::Parse(
            "unexpected token".to_string(),
        ))));

        assert_eq!(app.document.as_ref().unwrap().file_name, "first.dbc");
        assert_eq!(app.selection, Selection::Message(0));
        assert!(app.nodes_expanded);
        assert!(app.messages_expanded);
        assert!(app.status.contains("unexpected token"));
    }

    #[test]
    fn test_toggling_a_group_clears_selection() {
        let mut app = loaded_viewer();
        assert_eq!(app.selection, Selection::Message(0));

        let _ = app.update(Message::ToggleNodes);

        assert_eq!(app.selection, Selection::None);
    }
}
