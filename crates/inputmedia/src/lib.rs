//! Typed Telegram Bot API media attachments.
//!
//! Build attachments ([`InputMediaPhoto`], [`InputMediaVideo`], ...), optionally
//! bundle the groupable ones into a [`MediaGroup`], then encode them with a
//! [`MediaEncoder`] into JSON fragments plus the upload parts the request must
//! carry. Sending the request is left to the caller.

pub mod config;
pub mod encode;
pub mod error;
pub mod file;
pub mod group;
pub mod media;
mod multipart;

pub use config::EncoderConfig;
pub use encode::{
    ATTACH_SCHEME, MediaEncoder, MediaFragment, PreparedGroup, PreparedMedia, UploadPart, Uploads,
};
pub use error::{MediaError, MediaResult};
pub use file::{FileReference, InputFile};
pub use group::{GroupMedia, Groupable, MAX_GROUP_SIZE, MIN_GROUP_SIZE, MediaGroup};
pub use media::{
    InputMedia, InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo, MediaKind, ParseMode,
};
