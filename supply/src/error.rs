use model::file_io::FileIoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("Share identifier '{0}' is not a positive integer")]
    InvalidShareId(String),
    #[error("Share identifier {0} is listed more than once")]
    DuplicateShareId(u64),
    #[error("Share {id} has unsupported base '{base}'")]
    InvalidBase { id: u64, base: String },
    #[error("Share {id} value '{value}' is not a base-{base} number")]
    InvalidValue { id: u64, base: u32, value: String },
    #[error("Threshold k must be at least 1")]
    ZeroThreshold,
    #[error("Threshold requires {required} shares but the document holds {available}")]
    NotEnoughShares { required: usize, available: usize },
    #[error("Malformed share document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] FileIoError),
}
