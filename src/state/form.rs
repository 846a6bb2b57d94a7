//! Form values for the add/edit modal
//!
//! A form starts either blank or from a copy of the record being edited.
//! Validation is presence-only: a touched field whose value is empty
//! (ignoring whitespace) is in error. Format is never checked.

use super::data::Record;
use crate::error::AdminError;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<R: Record> {
    values: R,
    touched: Vec<R::Field>,
}

impl<R: Record> Default for FormState<R> {
    fn default() -> Self {
        Self::blank()
    }
}

impl<R: Record> FormState<R> {
    /// A form with every field empty and untouched
    pub fn blank() -> Self {
        Self {
            values: R::default(),
            touched: Vec::new(),
        }
    }

    /// A form seeded from an existing record
    pub fn from_record(record: &R) -> Self {
        Self {
            values: record.clone(),
            touched: Vec::new(),
        }
    }

    pub fn value(&self, field: R::Field) -> &str {
        self.values.value(field)
    }

    /// Update a field and mark it touched
    pub fn set(&mut self, field: R::Field, value: String) {
        self.values.set(field, value);
        self.touch(field);
    }

    pub fn touch(&mut self, field: R::Field) {
        if !self.touched.contains(&field) {
            self.touched.push(field);
        }
    }

    pub fn touch_all(&mut self) {
        for &field in R::FIELDS {
            self.touch(field);
        }
    }

    pub fn is_touched(&self, field: R::Field) -> bool {
        self.touched.contains(&field)
    }

    fn is_missing(&self, field: R::Field) -> bool {
        self.values.value(field).trim().is_empty()
    }

    /// Inline error message for a field, shown only once it is touched
    pub fn error(&self, field: R::Field) -> Option<String> {
        (self.is_touched(field) && self.is_missing(field))
            .then(|| format!("{} is required", R::label(field)))
    }

    /// Labels of every empty field, touched or not
    pub fn missing(&self) -> Vec<&'static str> {
        R::FIELDS
            .iter()
            .filter(|&&field| self.is_missing(field))
            .map(|&field| R::label(field))
            .collect()
    }

    /// Check the form for submission.
    ///
    /// Every field becomes touched so that all inline errors show up.
    pub fn validate(&mut self) -> Result<R, AdminError> {
        self.touch_all();

        let fields = self.missing();
        if fields.is_empty() {
            Ok(self.values.clone())
        } else {
            Err(AdminError::Invalid { fields })
        }
    }
}

#[cfg(test)]
impl<R: Record> FormState<R> {
    pub fn values(&self) -> &R {
        &self.values
    }

    /// Check if no field has been changed from blank
    pub fn is_blank(&self) -> bool {
        self.values == R::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Author, AuthorField, Book, BookField};

    fn filled_book_form() -> FormState<Book> {
        let mut form = FormState::blank();
        form.set(BookField::Title, "Dune".into());
        form.set(BookField::Author, "Herbert".into());
        form.set(BookField::Isbn, "123".into());
        form.set(BookField::PubDate, "1965".into());
        form
    }

    #[test]
    fn test_blank_form_has_no_visible_errors() {
        let form = FormState::<Book>::blank();
        assert!(form.is_blank());
        for &field in Book::FIELDS {
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn test_touched_empty_field_shows_error() {
        let mut form = FormState::<Book>::blank();
        form.set(BookField::Title, "D".into());
        form.set(BookField::Title, String::new());

        assert_eq!(form.error(BookField::Title).as_deref(), Some("Title is required"));
        assert_eq!(form.error(BookField::Author), None);
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut form = FormState::<Author>::blank();
        form.set(AuthorField::Name, "   ".into());
        assert!(form.error(AuthorField::Name).is_some());
    }

    #[test]
    fn test_any_text_is_accepted() {
        let mut form = filled_book_form();
        form.set(BookField::Isbn, "not an isbn".into());
        form.set(BookField::PubDate, "sometime".into());

        let book = form.validate().unwrap();
        assert_eq!(book.isbn, "not an isbn");
        assert_eq!(book.pub_date, "sometime");
    }

    #[test]
    fn test_validate_touches_everything_and_lists_missing() {
        let mut form = FormState::<Book>::blank();
        form.set(BookField::Title, "Dune".into());

        match form.validate() {
            Err(AdminError::Invalid { fields }) => {
                assert_eq!(fields, vec!["Author", "ISBN", "Publication Date"]);
            }
            other => panic!("expected invalid form, got {:?}", other),
        }
        assert!(form.error(BookField::Isbn).is_some());
        assert_eq!(form.error(BookField::Title), None);
    }

    #[test]
    fn test_from_record_copies_values_untouched() {
        let author = Author::new("Frank Herbert", "1920", "Wrote Dune.\nLived in Tacoma.");
        let form = FormState::from_record(&author);

        assert_eq!(form.values(), &author);
        assert!(!form.is_blank());
        for &field in Author::FIELDS {
            assert!(!form.is_touched(field));
        }
    }
}
