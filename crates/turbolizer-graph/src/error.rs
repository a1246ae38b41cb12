#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph already contains a node with id {id}")]
    DuplicateNode { id: u32 },

    #[error("graph does not contain a node with id {id}")]
    UnknownNode { id: u32 },

    #[error("invalid geometry config: {0}")]
    InvalidGeometry(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
