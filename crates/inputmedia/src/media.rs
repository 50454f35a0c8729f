//! Media attachments accepted by `sendMediaGroup` and `editMessageMedia`.
//!
//! See <https://core.telegram.org/bots/api#inputmedia>.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::file::{FileReference, InputFile};

/// The `type` tag of an attachment. Always derived from the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
    Animation,
    Audio,
    Document,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
            MediaKind::Animation => "animation",
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text formatting applied to a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML", alias = "Html", alias = "html")]
    Html,
}

/// Shared builders and accessors for every attachment variant.
macro_rules! media_common {
    ($ty:ident, $kind:expr) => {
        impl $ty {
            pub const KIND: MediaKind = $kind;

            #[must_use]
            pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
                self.caption = Some(caption.into());
                self
            }

            #[must_use]
            pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
                self.parse_mode = Some(parse_mode);
                self
            }

            pub fn kind(&self) -> MediaKind {
                Self::KIND
            }
        }
    };
}

/// A photo. Groupable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMediaPhoto {
    pub media: FileReference,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
}

impl InputMediaPhoto {
    pub fn new(media: impl Into<FileReference>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
        }
    }
}

media_common!(InputMediaPhoto, MediaKind::Photo);

/// A video. Groupable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMediaVideo {
    pub media: FileReference,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub thumb: Option<InputFile>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration: Option<u32>,
    pub supports_streaming: Option<bool>,
}

impl InputMediaVideo {
    pub fn new(media: impl Into<FileReference>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            thumb: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
        }
    }

    #[must_use]
    pub fn with_thumb(mut self, thumb: InputFile) -> Self {
        self.thumb = Some(thumb);
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_supports_streaming(mut self, supports_streaming: bool) -> Self {
        self.supports_streaming = Some(supports_streaming);
        self
    }
}

media_common!(InputMediaVideo, MediaKind::Video);

/// A GIF or soundless H.264/MPEG-4 AVC clip. Cannot be grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMediaAnimation {
    pub media: FileReference,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub thumb: Option<InputFile>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration: Option<u32>,
}

impl InputMediaAnimation {
    pub fn new(media: impl Into<FileReference>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            thumb: None,
            width: None,
            height: None,
            duration: None,
        }
    }

    #[must_use]
    pub fn with_thumb(mut self, thumb: InputFile) -> Self {
        self.thumb = Some(thumb);
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }
}

media_common!(InputMediaAnimation, MediaKind::Animation);

/// An audio file shown as music. Groupable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMediaAudio {
    pub media: FileReference,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub thumb: Option<InputFile>,
    pub duration: Option<u32>,
    pub performer: Option<String>,
    pub title: Option<String>,
}

impl InputMediaAudio {
    pub fn new(media: impl Into<FileReference>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            thumb: None,
            duration: None,
            performer: None,
            title: None,
        }
    }

    #[must_use]
    pub fn with_thumb(mut self, thumb: InputFile) -> Self {
        self.thumb = Some(thumb);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_performer(mut self, performer: impl Into<String>) -> Self {
        self.performer = Some(performer.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

media_common!(InputMediaAudio, MediaKind::Audio);

/// A general file. Groupable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMediaDocument {
    pub media: FileReference,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub thumb: Option<InputFile>,
}

impl InputMediaDocument {
    pub fn new(media: impl Into<FileReference>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            thumb: None,
        }
    }

    #[must_use]
    pub fn with_thumb(mut self, thumb: InputFile) -> Self {
        self.thumb = Some(thumb);
        self
    }
}

media_common!(InputMediaDocument, MediaKind::Document);

/// Any attachment, as accepted by single-media endpoints like `editMessageMedia`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    pub fn kind(&self) -> MediaKind {
        match self {
            InputMedia::Photo(_) => MediaKind::Photo,
            InputMedia::Video(_) => MediaKind::Video,
            InputMedia::Animation(_) => MediaKind::Animation,
            InputMedia::Audio(_) => MediaKind::Audio,
            InputMedia::Document(_) => MediaKind::Document,
        }
    }

    pub fn media(&self) -> &FileReference {
        match self {
            InputMedia::Photo(m) => &m.media,
            InputMedia::Video(m) => &m.media,
            InputMedia::Animation(m) => &m.media,
            InputMedia::Audio(m) => &m.media,
            InputMedia::Document(m) => &m.media,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self {
            InputMedia::Photo(m) => m.caption.as_deref(),
            InputMedia::Video(m) => m.caption.as_deref(),
            InputMedia::Animation(m) => m.caption.as_deref(),
            InputMedia::Audio(m) => m.caption.as_deref(),
            InputMedia::Document(m) => m.caption.as_deref(),
        }
    }

    pub fn parse_mode(&self) -> Option<ParseMode> {
        match self {
            InputMedia::Photo(m) => m.parse_mode,
            InputMedia::Video(m) => m.parse_mode,
            InputMedia::Animation(m) => m.parse_mode,
            InputMedia::Audio(m) => m.parse_mode,
            InputMedia::Document(m) => m.parse_mode,
        }
    }
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(media: InputMediaPhoto) -> Self {
        InputMedia::Photo(media)
    }
}

impl From<InputMediaVideo> for InputMedia {
    fn from(media: InputMediaVideo) -> Self {
        InputMedia::Video(media)
    }
}

impl From<InputMediaAnimation> for InputMedia {
    fn from(media: InputMediaAnimation) -> Self {
        InputMedia::Animation(media)
    }
}

impl From<InputMediaAudio> for InputMedia {
    fn from(media: InputMediaAudio) -> Self {
        InputMedia::Audio(media)
    }
}

impl From<InputMediaDocument> for InputMedia {
    fn from(media: InputMediaDocument) -> Self {
        InputMedia::Document(media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let cases: Vec<(InputMedia, &str)> = vec![
            (InputMediaPhoto::new(FileReference::file_id("p")).into(), "photo"),
            (InputMediaVideo::new(FileReference::file_id("v")).into(), "video"),
            (
                InputMediaAnimation::new(FileReference::file_id("a")).into(),
                "animation",
            ),
            (InputMediaAudio::new(FileReference::file_id("m")).into(), "audio"),
            (
                InputMediaDocument::new(FileReference::file_id("d")).into(),
                "document",
            ),
        ];

        for (media, expected) in cases {
            assert_eq!(media.kind().as_str(), expected);
            assert_eq!(media.kind().to_string(), expected);
        }
    }

    #[test]
    fn variant_kind_matches_enum_kind() {
        let video = InputMediaVideo::new(FileReference::url("http://x/v.mp4"));
        assert_eq!(video.kind(), InputMediaVideo::KIND);
        assert_eq!(InputMedia::from(video).kind(), MediaKind::Video);
    }

    #[test]
    fn builders_set_optional_fields() {
        let audio = InputMediaAudio::new(FileReference::file_id("A1"))
            .with_caption("track")
            .with_parse_mode(ParseMode::MarkdownV2)
            .with_duration(215)
            .with_performer("Band")
            .with_title("Song");

        assert_eq!(audio.caption.as_deref(), Some("track"));
        assert_eq!(audio.parse_mode, Some(ParseMode::MarkdownV2));
        assert_eq!(audio.duration, Some(215));
        assert_eq!(audio.performer.as_deref(), Some("Band"));
        assert_eq!(audio.title.as_deref(), Some("Song"));
        assert_eq!(audio.thumb, None);
    }

    #[test]
    fn shared_accessors_read_through_the_enum() {
        let media: InputMedia = InputMediaDocument::new(FileReference::file_id("D1"))
            .with_caption("report")
            .into();
        assert_eq!(media.media(), &FileReference::file_id("D1"));
        assert_eq!(media.caption(), Some("report"));
        assert_eq!(media.parse_mode(), None);
    }

    #[test]
    fn parse_mode_wire_names() {
        assert_eq!(
            serde_json::to_value(ParseMode::Html).unwrap(),
            serde_json::json!("HTML")
        );
        assert_eq!(
            serde_json::to_value(ParseMode::MarkdownV2).unwrap(),
            serde_json::json!("MarkdownV2")
        );
    }
}
