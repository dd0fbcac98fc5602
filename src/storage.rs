use std::path::PathBuf;
use tracing::warn;
use crate::entities::Album;
use crate::error::FotovaultError;

/// The album index is persisted as one JSON array under a single well-known
/// file. Every mutation rewrites the whole document.
pub trait Storage {
    /// `Ok(None)` means no usable document exists and the caller should fall
    /// back to the built-in default album set.
    async fn load(&self) -> Result<Option<Vec<Album>>, FotovaultError>;
    async fn save(&mut self, albums: &[Album]) -> Result<(), FotovaultError>;
}

pub struct FileStorage {
    db_path: PathBuf,
}

impl FileStorage {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl Storage for FileStorage {
    async fn load(&self) -> Result<Option<Vec<Album>>, FotovaultError> {
        if !self.db_path.exists() {
            return Ok(None);
        }
        let file_str = tokio::fs::read_to_string(&self.db_path).await
            .map_err(FotovaultError::StoreIoError)?;
        match serde_json::from_str::<Vec<Album>>(&file_str) {
            Ok(albums) => Ok(Some(albums)),
            Err(e) => {
                warn!("Malformed album index at {}: {}", self.db_path.display(), e);
                Ok(None)
            }
        }
    }

    async fn save(&mut self, albums: &[Album]) -> Result<(), FotovaultError> {
        let serialized = serde_json::to_string(albums)
            .map_err(FotovaultError::StoreSerializationError)?;
        tokio::fs::write(&self.db_path, serialized).await
            .map_err(FotovaultError::StoreIoError)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    albums: Option<Vec<Album>>,
}

impl Storage for InMemoryStorage {
    async fn load(&self) -> Result<Option<Vec<Album>>, FotovaultError> {
        Ok(self.albums.clone())
    }

    async fn save(&mut self, albums: &[Album]) -> Result<(), FotovaultError> {
        self.albums = Some(albums.to_vec());
        Ok(())
    }
}
