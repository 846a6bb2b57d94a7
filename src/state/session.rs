use super::data::Record;
use super::form::FormState;
use super::store::RecordId;

/// What an open session will do on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Append a new record
    Create,
    /// Replace the record with this id
    Edit(RecordId),
}

/// Modal edit session for one record type.
///
/// Closed --open_add--> Open(Create), Closed --open_edit--> Open(Edit).
/// Both open states go back to Closed on submit or cancel.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession<R: Record> {
    Closed,
    Open { mode: Mode, form: FormState<R> },
}

impl<R: Record> Default for EditSession<R> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<R: Record> EditSession<R> {
    /// Open the modal with blank defaults
    pub fn open_add(&mut self) {
        *self = Self::Open {
            mode: Mode::Create,
            form: FormState::blank(),
        };
    }

    /// Open the modal on an existing record
    pub fn open_edit(&mut self, id: RecordId, record: &R) {
        *self = Self::Open {
            mode: Mode::Edit(id),
            form: FormState::from_record(record),
        };
    }

    /// Close the modal, dropping the form and the editing marker
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Self::Open { mode, .. } => Some(*mode),
            Self::Closed => None,
        }
    }

    /// Id of the record being edited; `None` when closed or creating
    pub fn editing(&self) -> Option<RecordId> {
        match self.mode() {
            Some(Mode::Edit(id)) => Some(id),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&FormState<R>> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState<R>> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed => None,
        }
    }
}
