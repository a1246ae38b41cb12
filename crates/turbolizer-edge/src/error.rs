#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge {edge_id} has an endpoint that is not in the graph")]
    MissingEndpoint { edge_id: String },

    #[error("failed to serialize edge path: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
