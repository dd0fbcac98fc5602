use chrono::{DateTime, Utc};

pub type AlbumId = String;
pub type PhotoId = String;

pub fn new_entity_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(serde::Serialize, serde::Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    /// Derived: always equals the length of this album's photo collection.
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl Album {
    pub fn new(name: String) -> Self {
        Self {
            id: new_entity_id(),
            name,
            count: 0,
            cover: None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PhotoRecord {
    pub id: PhotoId,
    pub url: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub upload_date: DateTime<Utc>,
}
