use itertools::Itertools;
use tracing::error;
use crate::config::FotovaultConfig;
use crate::selection::Selection;
use crate::storage::FileStorage;
use crate::store::AlbumStore;
use crate::upload::{PendingBatch, PendingFile, Uploader};

async fn open_store(config: &FotovaultConfig) -> AlbumStore<FileStorage> {
    let storage = FileStorage::new(config.db_path.clone());
    let mut store = AlbumStore::new(storage);
    let init_result = store.init().await;
    if init_result.is_err() {
        error!("Failed to initialize album store: {}", init_result.err().unwrap());
        std::process::exit(1);
    }
    store
}

pub async fn list_albums(config: FotovaultConfig) {
    let store = open_store(&config).await;
    if store.album_count() == 0 {
        println!("No albums. Create one with `fotovault create-album <name>`.");
        return;
    }
    for album in store.albums() {
        println!("{}  {} ({} photos)", album.id, album.name, album.count);
    }
}

pub async fn create_album(config: FotovaultConfig, name: &str) {
    let mut store = open_store(&config).await;
    match store.create_album(name).await {
        Ok(album) => println!("Album created: {} ({})", album.name, album.id),
        Err(e) => {
            error!("Failed to create album: {}", e);
            std::process::exit(1);
        }
    }
}

pub async fn rename_album(config: FotovaultConfig, album_id: &str, new_name: &str) {
    let mut store = open_store(&config).await;
    match store.rename_album(album_id, new_name).await {
        Ok(album) => println!("Album renamed: {} ({})", album.name, album.id),
        Err(e) => {
            error!("Failed to rename album: {}", e);
            std::process::exit(1);
        }
    }
}

pub async fn delete_album(config: FotovaultConfig, album_id: &str) {
    let mut store = open_store(&config).await;
    match store.delete_album(album_id).await {
        Ok(album) => println!("Album deleted: {} ({} photos removed)", album.name, album.count),
        Err(e) => {
            error!("Failed to delete album: {}", e);
            std::process::exit(1);
        }
    }
}

pub async fn delete_all_albums(config: FotovaultConfig) {
    let mut store = open_store(&config).await;
    let count = store.album_count();
    if let Err(e) = store.delete_all_albums().await {
        error!("Failed to delete albums: {}", e);
        std::process::exit(1);
    }
    println!("Deleted {} albums", count);
}

pub async fn list_photos(config: FotovaultConfig, album_id: &str) {
    let store = open_store(&config).await;
    let maybe_album = store.album(album_id);
    if maybe_album.is_none() {
        error!("Album not found: {}", album_id);
        std::process::exit(1);
    }
    let album = maybe_album.unwrap();
    println!("{} ({} photos)", album.name, album.count);
    for photo in store.photos(album_id).iter().sorted_by_key(|x| x.upload_date) {
        println!("{}  {}  {}x{}  {}", photo.id, photo.name, photo.width, photo.height, photo.upload_date);
    }
}

pub async fn delete_photos(config: FotovaultConfig, album_id: &str, photo_ids: &[String]) {
    let mut store = open_store(&config).await;

    // Same flow the gallery view uses: toggle each id into a selection, then
    // delete the selection as one bulk operation.
    let mut selection = Selection::new();
    selection.enter_selection_mode();
    for photo_id in photo_ids {
        selection.toggle(photo_id);
    }
    let result = store.delete_photos(album_id, &selection.ids()).await;
    selection.exit_selection_mode();
    match result {
        Ok(removed) => println!("Deleted {} photos", removed),
        Err(e) => {
            error!("Failed to delete photos: {}", e);
            std::process::exit(1);
        }
    }
}

pub async fn upload(config: FotovaultConfig, album_id: &str, filepaths: &[String]) {
    let mut store = open_store(&config).await;
    if store.album(album_id).is_none() {
        error!("Album not found: {}", album_id);
        std::process::exit(1);
    }

    let mut batch = PendingBatch::new();
    for filepath in filepaths {
        let bytes = match std::fs::read(filepath) {
            Ok(x) => x,
            Err(e) => {
                error!("Failed to read {}: {}", filepath, e);
                std::process::exit(1);
            }
        };
        let name = std::path::Path::new(filepath)
            .file_name()
            .map(|x| x.to_string_lossy().to_string())
            .unwrap_or_else(|| filepath.clone());
        let content_type = mime_guess::from_path(filepath).first_or_octet_stream().to_string();
        if !batch.add(PendingFile { name, content_type, bytes }) {
            println!("Skipping non-image file: {}", filepath);
        }
    }
    if batch.is_empty() {
        println!("Nothing to upload");
        return;
    }

    let mut previews = crate::upload::PreviewStore::default();
    let uploader = Uploader::new();
    let records = uploader.upload(batch.files(), &mut previews, |progress| {
        println!("Uploading... {}%", progress);
    }).await;
    batch.clear();

    match store.add_photos(album_id, records).await {
        Ok(added) => println!("Uploaded {} photos into album {}", added, album_id),
        Err(e) => {
            error!("Failed to record uploaded photos: {}", e);
            std::process::exit(1);
        }
    }
}
