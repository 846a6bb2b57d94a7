use thiserror::Error as ThisError;

use crate::state::store::RecordId;

#[derive(Debug, ThisError)]
pub enum AdminError {
    #[error("{kind} {id} not found")]
    RecordNotFound { kind: &'static str, id: RecordId },

    #[error("Missing required fields: {}", fields.join(", "))]
    Invalid { fields: Vec<&'static str> },

    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),
}

impl From<figment::Error> for AdminError {
    fn from(e: figment::Error) -> Self {
        AdminError::Config(Box::new(e))
    }
}
