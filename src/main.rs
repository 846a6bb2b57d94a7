use iced::keyboard::{self, key};
use iced::widget::{button, column, container, row, scrollable, text, text_editor, Column};
use iced::{Element, Length, Subscription, Task, Theme};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod state;
mod ui;

use config::AppConfig;
use state::data::{Author, AuthorField, Book, BookField, Record};
use state::panel::{Outcome, Panel, PanelMessage};
use state::session::EditSession;
use ui::modal::modal;

/// Main application state
struct Dashboard {
    /// Books table and its modal
    books: Panel<Book>,
    /// Authors table and its modal
    authors: Panel<Author>,
    /// Backing buffer for the multi-line biography input
    biography: text_editor::Content,
    /// Status message to display to the user
    status: String,
    theme: Theme,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    Books(PanelMessage<BookField>),
    Authors(PanelMessage<AuthorField>),
    /// Cursor movement or edit inside the biography editor
    BiographyEdited(text_editor::Action),
    /// Escape pressed or backdrop clicked: cancel whichever modal is open
    Dismiss,
}

impl Dashboard {
    /// Create a new instance of the application
    fn new(theme: Theme) -> (Self, Task<Message>) {
        (
            Dashboard {
                books: Panel::new(),
                authors: Panel::new(),
                biography: text_editor::Content::new(),
                status: "Ready.".to_string(),
                theme,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Books(message) => {
                let outcome = self.books.update(message);
                self.report::<Book>(&outcome);
            }
            Message::Authors(message) => self.update_authors(message),
            Message::BiographyEdited(action) => {
                let is_edit = action.is_edit();
                self.biography.perform(action);

                if is_edit {
                    let value = editor_text(&self.biography);
                    self.update_authors(PanelMessage::FieldChanged(AuthorField::Biography, value));
                }
            }
            Message::Dismiss => {
                if self.books.session().is_visible() {
                    self.books.update(PanelMessage::Cancel);
                }
                if self.authors.session().is_visible() {
                    self.authors.update(PanelMessage::Cancel);
                }
            }
        }

        Task::none()
    }

    fn update_authors(&mut self, message: PanelMessage<AuthorField>) {
        let outcome = self.authors.update(message);

        // Reload the editor buffer whenever a fresh form is opened
        if let Outcome::Opened(_) = outcome {
            let seed = self
                .authors
                .session()
                .form()
                .map(|form| form.value(AuthorField::Biography))
                .unwrap_or_default();
            self.biography = text_editor::Content::with_text(seed);
        }

        self.report::<Author>(&outcome);
    }

    fn report<R: Record>(&mut self, outcome: &Outcome) {
        if let Some(status) = outcome.status(R::KIND) {
            self.status = status;
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let books: Column<Message> = column![
            text("Books").size(28),
            ui::table::view(self.books.store(), Message::Books),
            button("Add Book")
                .on_press(Message::Books(PanelMessage::OpenAdd))
                .style(button::primary)
                .padding(10),
        ]
        .spacing(12)
        .width(Length::Fill);

        let authors: Column<Message> = column![
            text("Authors").size(28),
            ui::table::view(self.authors.store(), Message::Authors),
            button("Add Author")
                .on_press(Message::Authors(PanelMessage::OpenAdd))
                .style(button::primary)
                .padding(10),
        ]
        .spacing(12)
        .width(Length::Fill);

        let footer = text(format!(
            "{}  ·  {} books, {} authors",
            self.status,
            self.books.store().len(),
            self.authors.store().len()
        ))
        .size(14);

        let content = column![
            text("Library Management System").size(40),
            row![books, authors].spacing(30),
            footer,
        ]
        .spacing(24)
        .padding(40);

        let base = container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill);

        if let EditSession::Open { mode, form } = self.books.session() {
            let dialog = ui::form::view(
                *mode,
                form,
                &self.biography,
                Message::Books,
                Message::BiographyEdited,
            );
            return modal(base, dialog, Message::Dismiss);
        }

        if let EditSession::Open { mode, form } = self.authors.session() {
            let dialog = ui::form::view(
                *mode,
                form,
                &self.biography,
                Message::Authors,
                Message::BiographyEdited,
            );
            return modal(base, dialog, Message::Dismiss);
        }

        base.into()
    }

    /// Listen for Escape only while a modal is open
    fn subscription(&self) -> Subscription<Message> {
        if self.books.session().is_visible() || self.authors.session().is_visible() {
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(key::Named::Escape) => Some(Message::Dismiss),
                _ => None,
            })
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

/// Editor contents exactly as typed.
///
/// `Content::text` always ends with a line break, so lines are joined instead.
fn editor_text(content: &text_editor::Content) -> String {
    content
        .lines()
        .map(|line| String::from(&*line))
        .collect::<Vec<String>>()
        .join("\n")
}

fn init_tracing(fallback_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();
}

fn main() -> iced::Result {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.log_level);

    if let Some(e) = config_error {
        warn!(error = %e, "falling back to default configuration");
    }
    info!(
        theme = ?config.theme,
        width = config.window_width,
        height = config.window_height,
        "starting library admin"
    );

    let theme = config.theme.theme();

    iced::application("Library Admin", Dashboard::update, Dashboard::view)
        .theme(Dashboard::theme)
        .subscription(Dashboard::subscription)
        .window_size((config.window_width, config.window_height))
        .centered()
        .run_with(move || Dashboard::new(theme))
}
