use std::collections::HashMap;
use tracing::info;
use crate::entities::{Album, AlbumId, PhotoId, PhotoRecord};
use crate::error::FotovaultError;
use crate::seed;
use crate::storage::Storage;
use crate::utils::str_utils::StringExtensions;

/// Owns the album index and the per-album photo collections, and applies every
/// create/rename/delete mutation against them.
///
/// `Album::count` is derived state: every photo mutation updates it in the same
/// step, by the number of records actually added or removed. Each mutation also
/// rewrites the persisted album index through the storage backend.
pub struct AlbumStore<S: Storage> {
    storage: S,
    albums: Vec<Album>,
    photos: HashMap<AlbumId, Vec<PhotoRecord>>,
}

impl<S: Storage> AlbumStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            albums: Vec::new(),
            photos: HashMap::new(),
        }
    }

    /// Loads the persisted album index (built-in defaults if absent or
    /// malformed), re-derives the in-memory photo collections from sample
    /// data, and reconciles every album count against its collection.
    pub async fn init(&mut self) -> Result<(), FotovaultError> {
        info!("Loading album index...");
        let maybe_albums = self.storage.load().await?;
        self.albums = maybe_albums.unwrap_or_else(seed::default_albums);

        let mut seeded = seed::sample_photos();
        self.photos = self.albums.iter()
            .map(|album| (album.id.clone(), seeded.remove(&album.id).unwrap_or_default()))
            .collect();
        for album in &mut self.albums {
            album.count = self.photos.get(&album.id).map(|x| x.len()).unwrap_or(0);
        }
        info!("Album index loaded: {} albums", self.albums.len());
        Ok(())
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn album(&self, album_id: &str) -> Option<&Album> {
        self.albums.iter().find(|x| x.id == album_id)
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn photos(&self, album_id: &str) -> &[PhotoRecord] {
        self.photos.get(album_id).map(|x| x.as_slice()).unwrap_or(&[])
    }

    pub async fn create_album(&mut self, name: &str) -> Result<Album, FotovaultError> {
        let name = name.normalized_name().ok_or(FotovaultError::InvalidName)?;
        let album = Album::new(name);
        self.albums.push(album.clone());
        self.photos.insert(album.id.clone(), Vec::new());
        self.persist().await?;
        Ok(album)
    }

    pub async fn rename_album(&mut self, album_id: &str, new_name: &str) -> Result<Album, FotovaultError> {
        let new_name = new_name.normalized_name().ok_or(FotovaultError::InvalidName)?;
        let album = self.albums.iter_mut().find(|x| x.id == album_id)
            .ok_or_else(|| FotovaultError::AlbumNotFound(album_id.to_string()))?;
        // A no-op rename would only cause a redundant persistence write.
        if new_name == album.name {
            return Err(FotovaultError::InvalidName);
        }
        album.name = new_name;
        let renamed = album.clone();
        self.persist().await?;
        Ok(renamed)
    }

    pub async fn delete_album(&mut self, album_id: &str) -> Result<Album, FotovaultError> {
        let pos = self.albums.iter().position(|x| x.id == album_id)
            .ok_or_else(|| FotovaultError::AlbumNotFound(album_id.to_string()))?;
        let album = self.albums.remove(pos);
        self.photos.remove(album_id);
        self.persist().await?;
        Ok(album)
    }

    pub async fn delete_all_albums(&mut self) -> Result<(), FotovaultError> {
        self.albums.clear();
        self.photos.clear();
        self.persist().await
    }

    /// Appends `new_photos` in submission order and bumps the album count by
    /// the same amount in the same step.
    pub async fn add_photos(&mut self, album_id: &str, new_photos: Vec<PhotoRecord>) -> Result<usize, FotovaultError> {
        let album = self.albums.iter_mut().find(|x| x.id == album_id)
            .ok_or_else(|| FotovaultError::AlbumNotFound(album_id.to_string()))?;
        let added = new_photos.len();
        album.count += added;
        self.photos.entry(album.id.clone()).or_default().extend(new_photos);
        self.persist().await?;
        Ok(added)
    }

    /// Removes every photo whose id is in `photo_ids`. Stale ids are silently
    /// ignored; the count is decremented by the number actually removed, so a
    /// selection referencing since-deleted photos cannot drift it.
    pub async fn delete_photos(&mut self, album_id: &str, photo_ids: &[PhotoId]) -> Result<usize, FotovaultError> {
        let album = self.albums.iter_mut().find(|x| x.id == album_id)
            .ok_or_else(|| FotovaultError::AlbumNotFound(album_id.to_string()))?;
        let collection = self.photos.entry(album.id.clone()).or_default();
        let before = collection.len();
        collection.retain(|photo| !photo_ids.contains(&photo.id));
        let removed = before - collection.len();
        album.count -= removed;
        self.persist().await?;
        Ok(removed)
    }

    /// Returns whether the photo existed.
    pub async fn delete_single_photo(&mut self, album_id: &str, photo_id: &str) -> Result<bool, FotovaultError> {
        let removed = self.delete_photos(album_id, &[photo_id.to_string()]).await?;
        Ok(removed == 1)
    }

    async fn persist(&mut self) -> Result<(), FotovaultError> {
        self.storage.save(&self.albums).await
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;
    use crate::entities::new_entity_id;
    use crate::storage::InMemoryStorage;
    use chrono::Utc;

    fn empty_store() -> AlbumStore<InMemoryStorage> {
        AlbumStore::new(InMemoryStorage::default())
    }

    fn photo(name: &str) -> PhotoRecord {
        PhotoRecord {
            id: new_entity_id(),
            url: format!("blob:fotovault/{}", name),
            name: name.to_string(),
            width: 800,
            height: 600,
            upload_date: Utc::now(),
        }
    }

    fn assert_count_invariant(store: &AlbumStore<InMemoryStorage>, album_id: &str) {
        let album = store.album(album_id).unwrap();
        assert_eq!(album.count, store.photos(album_id).len());
    }

    #[tokio::test]
    async fn init_falls_back_to_default_albums() {
        let mut store = empty_store();
        store.init().await.unwrap();
        assert_eq!(store.album_count(), 3);
        for album in store.albums().to_vec() {
            assert_count_invariant(&store, &album.id);
            assert!(album.count > 0);
        }
    }

    #[tokio::test]
    async fn init_keeps_persisted_albums_and_reconciles_counts() {
        let mut storage = InMemoryStorage::default();
        let mut stale = Album::new("Archive".to_string());
        stale.count = 42; // drifted on disk; photos are not persisted
        storage.save(&[stale.clone()]).await.unwrap();

        let mut store = AlbumStore::new(storage);
        store.init().await.unwrap();
        assert_eq!(store.album_count(), 1);
        assert_eq!(store.album(&stale.id).unwrap().count, 0);
    }

    #[tokio::test]
    async fn create_album_rejects_blank_name() {
        let mut store = empty_store();
        assert!(matches!(store.create_album("   ").await, Err(FotovaultError::InvalidName)));
        assert_eq!(store.album_count(), 0);
    }

    #[tokio::test]
    async fn create_album_trims_name_and_starts_empty() {
        let mut store = empty_store();
        let album = store.create_album("  Travel  ").await.unwrap();
        assert_eq!(album.name, "Travel");
        assert_eq!(album.count, 0);
        assert!(store.photos(&album.id).is_empty());
    }

    #[tokio::test]
    async fn created_albums_get_distinct_ids() {
        let mut store = empty_store();
        let a = store.create_album("One").await.unwrap();
        let b = store.create_album("Two").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn rename_rejects_noop_and_blank() {
        let mut store = empty_store();
        let album = store.create_album("Travel").await.unwrap();
        assert!(matches!(store.rename_album(&album.id, " Travel ").await, Err(FotovaultError::InvalidName)));
        assert!(matches!(store.rename_album(&album.id, "  ").await, Err(FotovaultError::InvalidName)));
        assert_eq!(store.album(&album.id).unwrap().name, "Travel");
    }

    #[tokio::test]
    async fn rename_preserves_id_and_count() {
        let mut store = empty_store();
        let album = store.create_album("Travel").await.unwrap();
        store.add_photos(&album.id, vec![photo("a.jpg")]).await.unwrap();
        let renamed = store.rename_album(&album.id, "Trips").await.unwrap();
        assert_eq!(renamed.id, album.id);
        assert_eq!(renamed.name, "Trips");
        assert_eq!(renamed.count, 1);
    }

    #[tokio::test]
    async fn delete_photos_ignores_stale_ids_without_count_drift() {
        let mut store = empty_store();
        let album = store.create_album("Travel").await.unwrap();
        let keep = photo("keep.jpg");
        let gone = photo("gone.jpg");
        store.add_photos(&album.id, vec![keep.clone(), gone.clone()]).await.unwrap();

        // One live id, one stale, one that never existed.
        let removed = store.delete_photos(&album.id, &[
            gone.id.clone(),
            "photo-stale".to_string(),
        ]).await.unwrap();
        assert_eq!(removed, 1);
        assert_count_invariant(&store, &album.id);
        assert_eq!(store.photos(&album.id), &[keep]);

        // Deleting the same ids again removes nothing.
        let removed = store.delete_photos(&album.id, &[gone.id]).await.unwrap();
        assert_eq!(removed, 0);
        assert_count_invariant(&store, &album.id);
    }

    #[tokio::test]
    async fn delete_single_photo_reports_existence() {
        let mut store = empty_store();
        let album = store.create_album("Travel").await.unwrap();
        let p = photo("a.jpg");
        store.add_photos(&album.id, vec![p.clone()]).await.unwrap();

        assert!(store.delete_single_photo(&album.id, &p.id).await.unwrap());
        assert!(!store.delete_single_photo(&album.id, &p.id).await.unwrap());
        assert_count_invariant(&store, &album.id);
    }

    #[tokio::test]
    async fn deleted_album_id_is_terminal() {
        let mut store = empty_store();
        let album = store.create_album("Travel").await.unwrap();
        store.delete_album(&album.id).await.unwrap();

        assert!(matches!(store.rename_album(&album.id, "X").await, Err(FotovaultError::AlbumNotFound(_))));
        assert!(matches!(store.delete_album(&album.id).await, Err(FotovaultError::AlbumNotFound(_))));
        assert!(matches!(store.add_photos(&album.id, vec![photo("a.jpg")]).await, Err(FotovaultError::AlbumNotFound(_))));
        assert!(matches!(store.delete_photos(&album.id, &[]).await, Err(FotovaultError::AlbumNotFound(_))));
    }

    #[tokio::test]
    async fn delete_all_albums_wipes_everything() {
        let mut store = empty_store();
        store.init().await.unwrap();
        store.delete_all_albums().await.unwrap();
        assert_eq!(store.album_count(), 0);
        assert!(store.photos("album-1").is_empty());
    }

    #[tokio::test]
    async fn mutations_rewrite_the_persisted_index() {
        let mut store = empty_store();
        let album = store.create_album("Travel").await.unwrap();
        store.rename_album(&album.id, "Trips").await.unwrap();

        // A fresh store over the same backend sees the committed state.
        let storage = std::mem::take(&mut store.storage);
        let mut reopened = AlbumStore::new(storage);
        reopened.init().await.unwrap();
        assert_eq!(reopened.album_count(), 1);
        assert_eq!(reopened.albums()[0].name, "Trips");
    }

    #[tokio::test]
    async fn album_lifecycle_scenario() {
        let mut store = empty_store();
        let album = store.create_album("Travel").await.unwrap();
        assert_eq!(album.count, 0);

        let photos = vec![photo("a.jpg"), photo("b.jpg"), photo("c.jpg")];
        let ordered_ids: Vec<String> = photos.iter().map(|x| x.id.clone()).collect();
        store.add_photos(&album.id, photos).await.unwrap();
        assert_eq!(store.album(&album.id).unwrap().count, 3);
        let stored_ids: Vec<String> = store.photos(&album.id).iter().map(|x| x.id.clone()).collect();
        assert_eq!(stored_ids, ordered_ids);

        // Select two of the three and delete the selection.
        let mut selection = crate::selection::Selection::new();
        selection.enter_selection_mode();
        selection.toggle(&ordered_ids[0]);
        selection.toggle(&ordered_ids[2]);
        let removed = store.delete_photos(&album.id, &selection.ids()).await.unwrap();
        selection.exit_selection_mode();
        assert_eq!(removed, 2);
        assert_eq!(store.album(&album.id).unwrap().count, 1);
        assert_eq!(store.photos(&album.id)[0].id, ordered_ids[1]);

        let renamed = store.rename_album(&album.id, "Trips").await.unwrap();
        assert_eq!(renamed.count, 1);

        store.delete_album(&album.id).await.unwrap();
        assert!(matches!(store.rename_album(&album.id, "X").await, Err(FotovaultError::AlbumNotFound(_))));
    }
}
