//! Shared data structures for the application state
//!
//! These structs represent the records the dashboard manages.
//! Every field is free text: no format is imposed on ISBNs or dates.

use std::fmt::Debug;

/// A record type that can be listed in a table and edited in a modal form.
///
/// Books and authors share all of their table, form and session logic;
/// this trait describes the parts that differ between them.
pub trait Record: Clone + Default + PartialEq + Debug {
    /// Field selector for this record's form inputs and table columns
    type Field: Copy + Eq + Debug + 'static;

    /// Lowercase name used in log lines and status messages (e.g. "book")
    const KIND: &'static str;

    /// Capitalized name used in headings and buttons (e.g. "Book")
    const TITLE: &'static str;

    /// All fields, in table column and form order
    const FIELDS: &'static [Self::Field];

    /// Human-readable label for a field
    fn label(field: Self::Field) -> &'static str;

    /// Whether the field is edited with a multi-line editor
    fn is_multiline(_field: Self::Field) -> bool {
        false
    }

    /// Current value of a field
    fn value(&self, field: Self::Field) -> &str;

    /// Overwrite a field
    fn set(&mut self, field: Self::Field, value: String);

    /// Short description shown in the status line
    fn summary(&self) -> &str;
}

/// A book in the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    /// Free text; not linked to an `Author` record
    pub author: String,
    pub isbn: String,
    pub pub_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
    Isbn,
    PubDate,
}

#[cfg(test)]
impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        pub_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            pub_date: pub_date.into(),
        }
    }
}

impl Record for Book {
    type Field = BookField;

    const KIND: &'static str = "book";
    const TITLE: &'static str = "Book";
    const FIELDS: &'static [BookField] = &[
        BookField::Title,
        BookField::Author,
        BookField::Isbn,
        BookField::PubDate,
    ];

    fn label(field: BookField) -> &'static str {
        match field {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Isbn => "ISBN",
            BookField::PubDate => "Publication Date",
        }
    }

    fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Isbn => &self.isbn,
            BookField::PubDate => &self.pub_date,
        }
    }

    fn set(&mut self, field: BookField, value: String) {
        match field {
            BookField::Title => self.title = value,
            BookField::Author => self.author = value,
            BookField::Isbn => self.isbn = value,
            BookField::PubDate => self.pub_date = value,
        }
    }

    fn summary(&self) -> &str {
        &self.title
    }
}

/// An author profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub birth_date: String,
    /// Multi-line text
    pub biography: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorField {
    Name,
    BirthDate,
    Biography,
}

#[cfg(test)]
impl Author {
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        biography: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            biography: biography.into(),
        }
    }
}

impl Record for Author {
    type Field = AuthorField;

    const KIND: &'static str = "author";
    const TITLE: &'static str = "Author";
    const FIELDS: &'static [AuthorField] = &[
        AuthorField::Name,
        AuthorField::BirthDate,
        AuthorField::Biography,
    ];

    fn label(field: AuthorField) -> &'static str {
        match field {
            AuthorField::Name => "Name",
            AuthorField::BirthDate => "Birth Date",
            AuthorField::Biography => "Biography",
        }
    }

    fn is_multiline(field: AuthorField) -> bool {
        field == AuthorField::Biography
    }

    fn value(&self, field: AuthorField) -> &str {
        match field {
            AuthorField::Name => &self.name,
            AuthorField::BirthDate => &self.birth_date,
            AuthorField::Biography => &self.biography,
        }
    }

    fn set(&mut self, field: AuthorField, value: String) {
        match field {
            AuthorField::Name => self.name = value,
            AuthorField::BirthDate => self.birth_date = value,
            AuthorField::Biography => self.biography = value,
        }
    }

    fn summary(&self) -> &str {
        &self.name
    }
}
