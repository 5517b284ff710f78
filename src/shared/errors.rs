use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Navigation menu has no entries")]
    EmptyMenu,

    #[error("Duplicate navigation entry id: {0}")]
    DuplicateEntryId(String),

    #[error("Navigation entry {id} has a blank {field}")]
    BlankField { id: String, field: &'static str },

    #[error("Serialization error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
