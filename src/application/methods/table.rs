//! The operation table.
//!
//! Each line reads `method = "wireName": Params => Output`, optionally
//! followed by `by target` when the success branch of the result is chosen
//! by the message target of the input.

use serde::Serialize;

use super::params::*;
use super::{Attachment, EditResult, Method, ResultBranch};
use crate::application::projection::{OperationSpec, Projection, Wrap};
use crate::domain::entities::*;
use crate::domain::value_objects::True;
use crate::shared::error::SchemaError;

/// Uninhabited attachment representation, for reading the table without
/// committing to a concrete `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unbound {}

macro_rules! operations {
    (
        $(
            $(#[$doc:meta])*
            $method:ident = $wire:literal : $params:ty => $output:ty $(, by $selector:ident)? ;
        )*
    ) => {
        $(
            impl<F: Attachment> Method<F> for $params {
                const NAME: &'static str = $wire;
                type Output = $output;
                $( operations!(@selector $selector); )?
            }
        )*

        /// Wire names of every operation, in table order.
        pub const OPERATIONS: &[&str] = &[$($wire),*];

        /// The operation table seen through one projection.
        ///
        /// Implementors supply [`invoke`](Telegram::invoke); each operation is
        /// a provided method that forwards its parameters to it.
        pub trait Telegram<F: Attachment> {
            type View: Projection;

            fn invoke<M: Method<F>>(&self, method: M) -> Wrap<Self::View, M::Output>;

            $(
                $(#[$doc])*
                fn $method(&self, params: $params) -> Wrap<Self::View, $output> {
                    self.invoke(params)
                }
            )*
        }

        /// Descriptors of every operation, with `F` still unsubstituted.
        pub fn describe_operations<F: Attachment>() -> Result<Vec<OperationSpec>, SchemaError> {
            Ok(vec![
                $( OperationSpec::of::<F, $params>(stringify!($method))?, )*
            ])
        }
    };

    (@selector target) => {
        const CONDITIONAL: bool = true;

        fn expected_branch(&self) -> Option<ResultBranch> {
            Some(self.target.expected_branch())
        }

        fn branch_of(output: &Self::Output) -> Option<ResultBranch> {
            Some(output.branch())
        }
    };
}

operations! {
    /// Receive incoming updates by long polling.
    get_updates = "getUpdates": GetUpdates => Vec<Update>;
    set_webhook = "setWebhook": SetWebhook<F> => True;
    delete_webhook = "deleteWebhook": DeleteWebhook => True;
    get_webhook_info = "getWebhookInfo": GetWebhookInfo => WebhookInfo;
    /// Basic information about the bot.
    get_me = "getMe": GetMe => UserFromGetMe;
    log_out = "logOut": LogOut => True;
    close = "close": Close => True;

    send_message = "sendMessage": SendMessage => TextMessage;
    /// Forward a message of any kind; service messages cannot be forwarded.
    forward_message = "forwardMessage": ForwardMessage => Message;
    copy_message = "copyMessage": CopyMessage => MessageId;
    send_photo = "sendPhoto": SendPhoto<F> => PhotoMessage;
    send_audio = "sendAudio": SendAudio<F> => AudioMessage;
    send_document = "sendDocument": SendDocument<F> => DocumentMessage;
    send_video = "sendVideo": SendVideo<F> => VideoMessage;
    send_animation = "sendAnimation": SendAnimation<F> => AnimationMessage;
    send_voice = "sendVoice": SendVoice<F> => VoiceMessage;
    send_video_note = "sendVideoNote": SendVideoNote<F> => VideoNoteMessage;
    /// Send an album; the result lists the sent messages in order.
    send_media_group = "sendMediaGroup": SendMediaGroup<F> => Vec<MediaGroupMessage>;
    send_location = "sendLocation": SendLocation => LocationMessage;
    edit_message_live_location = "editMessageLiveLocation": EditMessageLiveLocation => EditResult<LocationMessage>, by target;
    stop_message_live_location = "stopMessageLiveLocation": StopMessageLiveLocation => EditResult<LocationMessage>, by target;
    send_venue = "sendVenue": SendVenue => VenueMessage;
    send_contact = "sendContact": SendContact => ContactMessage;
    send_poll = "sendPoll": SendPoll => PollMessage;
    send_dice = "sendDice": SendDice => DiceMessage;
    /// Show a status such as "typing" for up to 5 seconds.
    send_chat_action = "sendChatAction": SendChatAction => True;

    get_user_profile_photos = "getUserProfilePhotos": GetUserProfilePhotos => UserProfilePhotos;
    /// Prepare a file for download; the link stays valid for at least an hour.
    get_file = "getFile": GetFile => File;
    kick_chat_member = "kickChatMember": KickChatMember => True;
    unban_chat_member = "unbanChatMember": UnbanChatMember => True;
    restrict_chat_member = "restrictChatMember": RestrictChatMember => True;
    promote_chat_member = "promoteChatMember": PromoteChatMember => True;
    set_chat_administrator_custom_title = "setChatAdministratorCustomTitle": SetChatAdministratorCustomTitle => True;
    set_chat_permissions = "setChatPermissions": SetChatPermissions => True;
    export_chat_invite_link = "exportChatInviteLink": ExportChatInviteLink => String;
    create_chat_invite_link = "createChatInviteLink": CreateChatInviteLink => ChatInviteLink;
    edit_chat_invite_link = "editChatInviteLink": EditChatInviteLink => ChatInviteLink;
    revoke_chat_invite_link = "revokeChatInviteLink": RevokeChatInviteLink => ChatInviteLink;
    set_chat_photo = "setChatPhoto": SetChatPhoto<F> => True;
    delete_chat_photo = "deleteChatPhoto": DeleteChatPhoto => True;
    set_chat_title = "setChatTitle": SetChatTitle => True;
    set_chat_description = "setChatDescription": SetChatDescription => True;
    pin_chat_message = "pinChatMessage": PinChatMessage => True;
    unpin_chat_message = "unpinChatMessage": UnpinChatMessage => True;
    unpin_all_chat_messages = "unpinAllChatMessages": UnpinAllChatMessages => True;
    leave_chat = "leaveChat": LeaveChat => True;
    /// Up-to-date information about a chat, including its detail fields.
    get_chat = "getChat": GetChat => ChatFromGetChat;
    get_chat_administrators = "getChatAdministrators": GetChatAdministrators => Vec<ChatMember>;
    get_chat_members_count = "getChatMembersCount": GetChatMembersCount => i64;
    get_chat_member = "getChatMember": GetChatMember => ChatMember;
    set_chat_sticker_set = "setChatStickerSet": SetChatStickerSet => True;
    delete_chat_sticker_set = "deleteChatStickerSet": DeleteChatStickerSet => True;
    answer_callback_query = "answerCallbackQuery": AnswerCallbackQuery => True;
    set_my_commands = "setMyCommands": SetMyCommands => True;
    get_my_commands = "getMyCommands": GetMyCommands => Vec<BotCommand>;

    edit_message_text = "editMessageText": EditMessageText => EditResult<TextMessage>, by target;
    edit_message_caption = "editMessageCaption": EditMessageCaption => EditResult<CaptionableMessage>, by target;
    edit_message_media = "editMessageMedia": EditMessageMedia<F> => EditResult<MediaMessage>, by target;
    edit_message_reply_markup = "editMessageReplyMarkup": EditMessageReplyMarkup => EditResult<Message>, by target;
    stop_poll = "stopPoll": StopPoll => Poll;
    delete_message = "deleteMessage": DeleteMessage => True;

    send_sticker = "sendSticker": SendSticker<F> => StickerMessage;
    get_sticker_set = "getStickerSet": GetStickerSet => StickerSet;
    upload_sticker_file = "uploadStickerFile": UploadStickerFile<F> => File;
    create_new_sticker_set = "createNewStickerSet": CreateNewStickerSet<F> => True;
    add_sticker_to_set = "addStickerToSet": AddStickerToSet<F> => True;
    set_sticker_position_in_set = "setStickerPositionInSet": SetStickerPositionInSet => True;
    delete_sticker_from_set = "deleteStickerFromSet": DeleteStickerFromSet => True;
    set_sticker_set_thumb = "setStickerSetThumb": SetStickerSetThumb<F> => True;

    /// Send at most 50 results for an inline query.
    answer_inline_query = "answerInlineQuery": AnswerInlineQuery => True;
    send_invoice = "sendInvoice": SendInvoice => InvoiceMessage;
    answer_shipping_query = "answerShippingQuery": AnswerShippingQuery => True;
    answer_pre_checkout_query = "answerPreCheckoutQuery": AnswerPreCheckoutQuery => True;
    send_game = "sendGame": SendGame => GameMessage;
    set_game_score = "setGameScore": SetGameScore => EditResult<GameMessage>, by target;
    get_game_high_scores = "getGameHighScores": GetGameHighScores => Vec<GameHighScore>;
}
