use std::collections::HashMap;
use chrono::{DateTime, Utc};
use crate::entities::{Album, AlbumId, PhotoRecord};

/// Built-in album set used when no persisted index exists (or it is
/// unreadable). Ids are stable so the in-memory sample photos can be
/// re-attached across sessions.
pub fn default_albums() -> Vec<Album> {
    vec![
        Album {
            id: "album-1".to_string(),
            name: "Landscapes".to_string(),
            count: 0,
            cover: Some("https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&auto=format&fit=crop".to_string()),
        },
        Album {
            id: "album-2".to_string(),
            name: "Portraits".to_string(),
            count: 0,
            cover: Some("https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=800&auto=format&fit=crop".to_string()),
        },
        Album {
            id: "album-3".to_string(),
            name: "Travel".to_string(),
            count: 0,
            cover: Some("https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=800&auto=format&fit=crop".to_string()),
        },
    ]
}

/// Sample photo records for the default albums. Photos are not persisted, so
/// each session re-derives its photo collections from here.
pub fn sample_photos() -> HashMap<AlbumId, Vec<PhotoRecord>> {
    let mut photos = HashMap::new();
    photos.insert("album-1".to_string(), vec![
        photo("photo-1", "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&auto=format&fit=crop", "Mountain ridge.jpg", 1500, 1000, "2025-04-10T10:30:00Z"),
        photo("photo-2", "https://images.unsplash.com/photo-1454372182658-c712e4c5a1db?w=800&auto=format&fit=crop", "River valley.jpg", 1000, 1500, "2025-04-12T14:20:00Z"),
        photo("photo-3", "https://images.unsplash.com/photo-1470770841072-f978cf4d019e?w=800&auto=format&fit=crop", "Alpine lake.jpg", 1500, 1000, "2025-04-15T09:45:00Z"),
        photo("photo-7", "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=800&auto=format&fit=crop", "Starry night.jpg", 1500, 1000, "2025-04-16T12:30:00Z"),
        photo("photo-8", "https://images.unsplash.com/photo-1542224566-6e85f2e6772f?w=800&auto=format&fit=crop", "Mountain road.jpg", 1000, 1500, "2025-04-17T08:15:00Z"),
    ]);
    photos.insert("album-2".to_string(), vec![
        photo("photo-4", "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=800&auto=format&fit=crop", "Portrait 1.jpg", 1000, 1500, "2025-04-18T16:30:00Z"),
        photo("photo-9", "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?w=800&auto=format&fit=crop", "Portrait 2.jpg", 1000, 1500, "2025-04-19T14:20:00Z"),
        photo("photo-10", "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&auto=format&fit=crop", "Portrait 3.jpg", 1200, 1800, "2025-04-20T10:30:00Z"),
    ]);
    photos.insert("album-3".to_string(), vec![
        photo("photo-5", "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=800&auto=format&fit=crop", "Seashore.jpg", 1500, 1000, "2025-04-20T11:15:00Z"),
        photo("photo-6", "https://images.unsplash.com/photo-1507608616759-54f48f0af0ee?w=800&auto=format&fit=crop", "Narrow street.jpg", 1000, 1500, "2025-04-22T13:40:00Z"),
        photo("photo-11", "https://images.unsplash.com/photo-1520466809213-7b9a56adcd45?w=800&auto=format&fit=crop", "Town square.jpg", 1500, 1000, "2025-04-23T09:45:00Z"),
        photo("photo-12", "https://images.unsplash.com/photo-1552733407-5d5c46c3bb3b?w=800&auto=format&fit=crop", "Venice.jpg", 1000, 1500, "2025-04-24T16:20:00Z"),
        photo("photo-13", "https://images.unsplash.com/photo-1504512485720-7d83a16ee930?w=800&auto=format&fit=crop", "Sunset in Santiago.jpg", 1500, 1000, "2025-04-25T18:30:00Z"),
    ]);
    photos
}

fn photo(id: &str, url: &str, name: &str, width: u32, height: u32, upload_date: &str) -> PhotoRecord {
    let upload_date: DateTime<Utc> = upload_date.parse().expect("sample date is valid RFC 3339");
    PhotoRecord {
        id: id.to_string(),
        url: url.to_string(),
        name: name.to_string(),
        width,
        height,
        upload_date,
    }
}
