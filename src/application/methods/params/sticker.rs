//! Parameters of the sticker set operations.

use validator::{Validate, ValidationError};

use crate::domain::entities::MaskPosition;
use crate::domain::value_objects::{InputFile, Upload};
use crate::schema_struct;

schema_struct! {
    #[derive(Validate)]
    pub struct GetStickerSet [] {
        pub name: String,
    }
}

schema_struct! {
    /// Upload a PNG once to use it in several sticker sets.
    #[derive(Validate)]
    pub struct UploadStickerFile<F> [] {
        pub user_id: i64,
        pub png_sticker: Upload<F>,
    }
}

schema_struct! {
    /// The sticker image of a new sticker: exactly one of a static PNG or an
    /// animated TGS.
    #[derive(Validate)]
    #[validate(schema(function = "exactly_one_sticker_file"))]
    pub struct StickerFile<F> [] {
        /// PNG, at most 512 kB, one side exactly 512 px.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub png_sticker: Option<InputFile<F>>,
        /// TGS animation; uploads only.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tgs_sticker: Option<Upload<F>>,
    }
}

impl<F> StickerFile<F> {
    pub fn png(file: InputFile<F>) -> Self {
        Self {
            png_sticker: Some(file),
            tgs_sticker: None,
        }
    }

    pub fn tgs(file: F) -> Self {
        Self {
            png_sticker: None,
            tgs_sticker: Some(Upload(file)),
        }
    }
}

fn exactly_one_sticker_file<F>(file: &StickerFile<F>) -> Result<(), ValidationError> {
    if file.png_sticker.is_some() == file.tgs_sticker.is_some() {
        let mut error = ValidationError::new("sticker_file");
        error.message = Some("Exactly one of png_sticker and tgs_sticker is required".into());
        return Err(error);
    }
    Ok(())
}

schema_struct! {
    #[derive(Validate)]
    pub struct CreateNewStickerSet<F> [#[validate(nested)] file: StickerFile<F>] {
        pub user_id: i64,
        /// Must end in `_by_<bot username>`.
        #[validate(length(min = 1, max = 64, message = "Set name must be 1-64 characters"))]
        pub name: String,
        #[validate(length(min = 1, max = 64, message = "Set title must be 1-64 characters"))]
        pub title: String,
        pub emojis: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub contains_masks: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mask_position: Option<MaskPosition>,
    }
}

impl<F> CreateNewStickerSet<F> {
    pub fn new(
        user_id: i64,
        name: impl Into<String>,
        title: impl Into<String>,
        file: StickerFile<F>,
        emojis: impl Into<String>,
    ) -> Self {
        Self {
            file,
            user_id,
            name: name.into(),
            title: title.into(),
            emojis: emojis.into(),
            contains_masks: None,
            mask_position: None,
        }
    }
}

schema_struct! {
    /// Add a sticker to a set created by the bot. Animated stickers only go
    /// into animated sets; a set holds at most 120 stickers.
    #[derive(Validate)]
    pub struct AddStickerToSet<F> [#[validate(nested)] file: StickerFile<F>] {
        pub user_id: i64,
        pub name: String,
        pub emojis: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub mask_position: Option<MaskPosition>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetStickerPositionInSet [] {
        pub sticker: String,
        /// Zero-based.
        pub position: i64,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct DeleteStickerFromSet [] {
        pub sticker: String,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetStickerSetThumb<F> [] {
        pub name: String,
        pub user_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
    }
}
