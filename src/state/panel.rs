//! One record collection together with its modal edit session
//!
//! Each panel owns a store and a session and is only changed through
//! `Panel::update`, which applies a single user event to both.

use tracing::{debug, info, warn};

use super::data::Record;
use super::session::{EditSession, Mode};
use super::store::{RecordId, RecordStore};
use crate::error::AdminError;

/// Events for one panel (table actions and modal form input)
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMessage<F> {
    /// "Add X" button
    OpenAdd,
    /// Row "Edit" button
    OpenEdit(RecordId),
    /// Row "Delete" button
    Delete(RecordId),
    /// A form input changed
    FieldChanged(F, String),
    /// Form submit button or Enter
    Submit,
    /// Close button, Escape or backdrop click
    Cancel,
}

/// Result of applying a message, used for the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible happened
    Unchanged,
    Opened(Mode),
    /// Form edited; nothing stored yet
    Edited,
    Cancelled,
    Added(String),
    Updated(String),
    Deleted(String),
    /// Submit blocked: these required fields are empty
    Rejected(Vec<&'static str>),
    /// The targeted record no longer exists
    Missing(RecordId),
}

impl Outcome {
    /// Status line text for outcomes worth reporting
    pub fn status(&self, kind: &str) -> Option<String> {
        match self {
            Outcome::Added(summary) => Some(format!("Added {} \"{}\"", kind, summary)),
            Outcome::Updated(summary) => Some(format!("Updated {} \"{}\"", kind, summary)),
            Outcome::Deleted(summary) => Some(format!("Deleted {} \"{}\"", kind, summary)),
            Outcome::Rejected(fields) => Some(format!(
                "Cannot save {}: {} required",
                kind,
                fields.join(", ")
            )),
            Outcome::Missing(id) => Some(format!("The {} {} no longer exists", kind, id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Panel<R: Record> {
    store: RecordStore<R>,
    session: EditSession<R>,
}

impl<R: Record> Default for Panel<R> {
    fn default() -> Self {
        Self {
            store: RecordStore::new(),
            session: EditSession::default(),
        }
    }
}

impl<R: Record> Panel<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn session(&self) -> &EditSession<R> {
        &self.session
    }

    /// Apply one event to the store and session
    pub fn update(&mut self, message: PanelMessage<R::Field>) -> Outcome {
        match message {
            PanelMessage::OpenAdd => {
                self.session.open_add();
                debug!(kind = R::KIND, "opened create session");
                Outcome::Opened(Mode::Create)
            }
            PanelMessage::OpenEdit(id) => match self.store.get(id) {
                Some(record) => {
                    self.session.open_edit(id, record);
                    debug!(kind = R::KIND, %id, "opened edit session");
                    Outcome::Opened(Mode::Edit(id))
                }
                None => {
                    warn!(kind = R::KIND, %id, "edit requested for missing record");
                    Outcome::Missing(id)
                }
            },
            PanelMessage::Delete(id) => match self.store.remove(id) {
                Ok(record) => {
                    if self.session.editing() == Some(id) {
                        self.session.close();
                    }
                    info!(kind = R::KIND, %id, remaining = self.store.len(), "deleted record");
                    Outcome::Deleted(record.summary().to_string())
                }
                Err(e) => {
                    warn!(kind = R::KIND, error = %e, "delete failed");
                    Outcome::Missing(id)
                }
            },
            PanelMessage::FieldChanged(field, value) => match self.session.form_mut() {
                Some(form) => {
                    form.set(field, value);
                    Outcome::Edited
                }
                None => Outcome::Unchanged,
            },
            PanelMessage::Submit => self.submit(),
            PanelMessage::Cancel => {
                if self.session.is_visible() {
                    self.session.close();
                    debug!(kind = R::KIND, "session cancelled");
                    Outcome::Cancelled
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }

    fn submit(&mut self) -> Outcome {
        let EditSession::Open { mode, form } = &mut self.session else {
            return Outcome::Unchanged;
        };
        let mode = *mode;

        let record = match form.validate() {
            Ok(record) => record,
            Err(AdminError::Invalid { fields }) => {
                warn!(kind = R::KIND, ?fields, "submit rejected");
                return Outcome::Rejected(fields);
            }
            Err(e) => {
                warn!(kind = R::KIND, error = %e, "submit failed");
                return Outcome::Unchanged;
            }
        };
        let summary = record.summary().to_string();

        let outcome = match mode {
            Mode::Create => {
                let id = self.store.append(record);
                info!(kind = R::KIND, %id, total = self.store.len(), "added record");
                Outcome::Added(summary)
            }
            Mode::Edit(id) => match self.store.replace(id, record) {
                Ok(()) => {
                    info!(kind = R::KIND, %id, "updated record");
                    Outcome::Updated(summary)
                }
                Err(e) => {
                    warn!(kind = R::KIND, error = %e, "update target vanished");
                    Outcome::Missing(id)
                }
            },
        };

        self.session.close();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Author, AuthorField, Book, BookField};

    fn fill_book(panel: &mut Panel<Book>, book: &Book) {
        for &field in Book::FIELDS {
            panel.update(PanelMessage::FieldChanged(
                field,
                book.value(field).to_string(),
            ));
        }
    }

    fn add_book(panel: &mut Panel<Book>, book: &Book) -> RecordId {
        panel.update(PanelMessage::OpenAdd);
        fill_book(panel, book);
        assert_eq!(
            panel.update(PanelMessage::Submit),
            Outcome::Added(book.title.clone())
        );
        let (id, _) = panel.store().at(panel.store().len() - 1).unwrap();
        id
    }

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new("Dune", "Herbert", "123", "1965"),
            Book::new("Emma", "Austen", "456", "1815"),
            Book::new("Ulysses", "Joyce", "789", "1922"),
        ]
    }

    #[test]
    fn test_add_appends_one_record_and_closes() {
        let mut panel = Panel::new();
        let book = Book::new("Dune", "Herbert", "123", "1965");

        add_book(&mut panel, &book);

        assert_eq!(panel.store().len(), 1);
        assert_eq!(panel.store().at(0).unwrap().1, &book);
        assert!(!panel.session().is_visible());
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut panel = Panel::new();
        let books = sample_books();
        for book in &books {
            add_book(&mut panel, book);
        }
        let (id, _) = panel.store().at(1).unwrap();

        panel.update(PanelMessage::OpenEdit(id));
        assert_eq!(panel.session().form().unwrap().values(), &books[1]);

        panel.update(PanelMessage::FieldChanged(BookField::Title, "Persuasion".into()));
        assert_eq!(
            panel.update(PanelMessage::Submit),
            Outcome::Updated("Persuasion".into())
        );

        let stored: Vec<&Book> = panel.store().records().collect();
        assert_eq!(stored[0], &books[0]);
        assert_eq!(stored[1], &Book::new("Persuasion", "Austen", "456", "1815"));
        assert_eq!(stored[2], &books[2]);
        assert!(!panel.session().is_visible());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut panel = Panel::new();
        let books = sample_books();
        for book in &books {
            add_book(&mut panel, book);
        }
        let (id, _) = panel.store().at(0).unwrap();

        assert_eq!(
            panel.update(PanelMessage::Delete(id)),
            Outcome::Deleted("Dune".into())
        );

        let stored: Vec<&Book> = panel.store().records().collect();
        assert_eq!(stored, vec![&books[1], &books[2]]);
    }

    #[test]
    fn test_blank_submit_is_rejected_without_mutation() {
        let mut panel = Panel::<Book>::new();
        panel.update(PanelMessage::OpenAdd);
        panel.update(PanelMessage::FieldChanged(BookField::Title, "Dune".into()));

        let outcome = panel.update(PanelMessage::Submit);

        assert_eq!(
            outcome,
            Outcome::Rejected(vec!["Author", "ISBN", "Publication Date"])
        );
        assert!(panel.store().is_empty());
        assert!(panel.session().is_visible());
        let form = panel.session().form().unwrap();
        assert_eq!(form.error(BookField::Author).as_deref(), Some("Author is required"));
        assert_eq!(form.error(BookField::Title), None);
    }

    #[test]
    fn test_cancel_never_mutates() {
        let mut panel = Panel::new();
        let book = Book::new("Dune", "Herbert", "123", "1965");
        let id = add_book(&mut panel, &book);

        panel.update(PanelMessage::OpenEdit(id));
        panel.update(PanelMessage::FieldChanged(BookField::Title, "Changed".into()));
        assert_eq!(panel.update(PanelMessage::Cancel), Outcome::Cancelled);

        assert_eq!(panel.store().get(id), Some(&book));
        assert_eq!(panel.session().editing(), None);

        panel.update(PanelMessage::OpenAdd);
        assert!(panel.session().form().unwrap().is_blank());
    }

    #[test]
    fn test_deleting_edited_record_closes_session() {
        let mut panel = Panel::new();
        let id = add_book(&mut panel, &Book::new("Dune", "Herbert", "123", "1965"));

        panel.update(PanelMessage::OpenEdit(id));
        panel.update(PanelMessage::Delete(id));

        assert!(!panel.session().is_visible());
        assert!(panel.store().is_empty());
    }

    #[test]
    fn test_stale_ids_are_reported() {
        let mut panel = Panel::new();
        let id = add_book(&mut panel, &Book::new("Dune", "Herbert", "123", "1965"));
        panel.update(PanelMessage::Delete(id));

        assert_eq!(panel.update(PanelMessage::OpenEdit(id)), Outcome::Missing(id));
        assert_eq!(panel.update(PanelMessage::Delete(id)), Outcome::Missing(id));
        assert!(!panel.session().is_visible());
    }

    #[test]
    fn test_input_without_session_is_ignored() {
        let mut panel = Panel::<Author>::new();
        assert_eq!(
            panel.update(PanelMessage::FieldChanged(AuthorField::Name, "x".into())),
            Outcome::Unchanged
        );
        assert_eq!(panel.update(PanelMessage::Submit), Outcome::Unchanged);
        assert_eq!(panel.update(PanelMessage::Cancel), Outcome::Unchanged);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            Outcome::Added("Dune".into()).status("book").as_deref(),
            Some("Added book \"Dune\"")
        );
        assert_eq!(
            Outcome::Rejected(vec!["Name"]).status("author").as_deref(),
            Some("Cannot save author: Name required")
        );
        assert_eq!(Outcome::Edited.status("book"), None);
    }
}
