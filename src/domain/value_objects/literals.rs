//! Closed string literal sets used by parameters.

use crate::literal_enum;

literal_enum! {
    /// Formatting syntax of message text and captions.
    pub enum ParseMode {
        "Markdown" => Markdown,
        "MarkdownV2" => MarkdownV2,
        "HTML" => Html,
    }
}

literal_enum! {
    /// Status shown to the other party while the bot prepares a reply.
    pub enum ChatAction {
        "typing" => Typing,
        "upload_photo" => UploadPhoto,
        "record_video" => RecordVideo,
        "upload_video" => UploadVideo,
        "record_voice" => RecordVoice,
        "upload_voice" => UploadVoice,
        "upload_document" => UploadDocument,
        "find_location" => FindLocation,
        "record_video_note" => RecordVideoNote,
        "upload_video_note" => UploadVideoNote,
    }
}

literal_enum! {
    pub enum PollType {
        "regular" => Regular,
        "quiz" => Quiz,
    }
}
