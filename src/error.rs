pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a border polygon needs at least 3 vertices, got {vertices}")]
    InvalidGeometry { vertices: usize },

    #[error("border data must be a JSON array of border records")]
    NotAnArray,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("year {year} is not on the timeline ({timeline})")]
    UnknownYear { year: i32, timeline: String },

    #[error("no border data to export")]
    EmptyDataset,
}
