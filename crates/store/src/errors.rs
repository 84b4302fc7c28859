use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Object store connection failed")]
    Unavailable,

    #[error("Upload failed: {0}")]
    UploadFailed(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            StoreError::Unavailable
        } else {
            StoreError::UploadFailed(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
