use thiserror::Error;

#[derive(Error, Debug)]
pub enum FotovaultError {
    #[error("Album name is empty or unchanged")]
    InvalidName,
    #[error("Album not found: {0}")]
    AlbumNotFound(String),
    #[error("Failed to decode image: {0}")]
    DecodeFailure(image::ImageError),
    #[error("Failed to read/write album store file: {0}")]
    StoreIoError(std::io::Error),
    #[error("Failed to serialize/deserialize album store: {0}")]
    StoreSerializationError(serde_json::Error),
}
