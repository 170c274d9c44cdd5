use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to encode configuration of key manager {name}: {source}")]
    KeyManagerEncoding {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
