//! Files and media payloads carried by messages.

use crate::{literal_enum, schema_struct};

schema_struct! {
    /// Identity shared by every downloadable file.
    pub struct FileBase [] {
        /// Identifier usable to download or reuse the file.
        pub file_id: String,
        /// Identifier that stays the same over time and across bots; cannot
        /// be used to download or reuse the file.
        pub file_unique_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_size: Option<i64>,
    }
}

schema_struct! {
    /// One size of a photo or a file/sticker thumbnail.
    pub struct PhotoSize [file: FileBase] {
        pub width: i64,
        pub height: i64,
    }
}

schema_struct! {
    /// Animation file (GIF or H.264/MPEG-4 AVC video without sound).
    pub struct Animation [file: FileBase] {
        pub width: i64,
        pub height: i64,
        pub duration: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<PhotoSize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mime_type: Option<String>,
    }
}

schema_struct! {
    /// Audio file treated as music.
    pub struct Audio [file: FileBase] {
        pub duration: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub performer: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mime_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<PhotoSize>,
    }
}

schema_struct! {
    /// General file.
    pub struct Document [file: FileBase] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<PhotoSize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mime_type: Option<String>,
    }
}

schema_struct! {
    pub struct Video [file: FileBase] {
        pub width: i64,
        pub height: i64,
        pub duration: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<PhotoSize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mime_type: Option<String>,
    }
}

schema_struct! {
    /// Round video message.
    pub struct VideoNote [file: FileBase] {
        /// Width and height (diameter) of the video.
        pub length: i64,
        pub duration: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<PhotoSize>,
    }
}

schema_struct! {
    pub struct Voice [file: FileBase] {
        pub duration: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mime_type: Option<String>,
    }
}

schema_struct! {
    pub struct Contact [] {
        pub phone_number: String,
        pub first_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub user_id: Option<i64>,
        /// Additional data in the form of a vCard.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub vcard: Option<String>,
    }
}

schema_struct! {
    /// Animated emoji with a random value.
    pub struct Dice [] {
        pub emoji: String,
        /// 1-6 for dice and darts, 1-5 for basketball and football, 1-64 for
        /// slot machines.
        pub value: i64,
    }
}

schema_struct! {
    /// A point on the map.
    pub struct Location [] {
        pub longitude: f64,
        pub latitude: f64,
        /// Radius of uncertainty in meters, 0-1500.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub horizontal_accuracy: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub live_period: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heading: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub proximity_alert_radius: Option<i64>,
    }
}

schema_struct! {
    pub struct Venue [] {
        pub location: Location,
        pub title: String,
        pub address: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub foursquare_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub foursquare_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub google_place_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub google_place_type: Option<String>,
    }
}

literal_enum! {
    /// Part of the face a mask is placed relative to.
    pub enum MaskPoint {
        "forehead" => Forehead,
        "eyes" => Eyes,
        "mouth" => Mouth,
        "chin" => Chin,
    }
}

schema_struct! {
    /// Default placement of a mask sticker.
    pub struct MaskPosition [] {
        pub point: MaskPoint,
        pub x_shift: f64,
        pub y_shift: f64,
        pub scale: f64,
    }
}

schema_struct! {
    pub struct Sticker [file: FileBase] {
        pub width: i64,
        pub height: i64,
        pub is_animated: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<PhotoSize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub emoji: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub set_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mask_position: Option<MaskPosition>,
    }
}

schema_struct! {
    pub struct StickerSet [] {
        pub name: String,
        pub title: String,
        pub is_animated: bool,
        pub contains_masks: bool,
        pub stickers: Vec<Sticker>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<PhotoSize>,
    }
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            horizontal_accuracy: None,
            live_period: None,
            heading: None,
            proximity_alert_radius: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live_period.is_some()
    }
}

/// Largest size of a photo, by pixel area.
pub fn largest_photo(sizes: &[PhotoSize]) -> Option<&PhotoSize> {
    sizes.iter().max_by_key(|p| p.width * p.height)
}
