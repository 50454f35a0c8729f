//! Turns attachments into Bot API JSON fragments plus the binary parts that
//! must travel with them.
//!
//! Files referenced by id or URL are written into the `media` field verbatim.
//! Raw uploads are registered with the request's [`Uploads`] collector and
//! referenced through an `attach://<name>` placeholder, where `<name>` is the
//! multipart field carrying the bytes.

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EncoderConfig;
use crate::error::MediaResult;
use crate::file::{FileReference, InputFile};
use crate::group::{GroupMedia, MediaGroup};
use crate::media::{
    InputMedia, InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo, MediaKind, ParseMode,
};

pub const ATTACH_SCHEME: &str = "attach://";

const UPLOAD_PART_PREFIX: &str = "file";

/// A binary part to send next to the JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    name: String,
    file_name: String,
    data: Bytes,
    mime_type: Option<String>,
}

impl UploadPart {
    /// Multipart field name of this part.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `attach://` token that points at this part from JSON.
    pub fn placeholder(&self) -> String {
        format!("{ATTACH_SCHEME}{}", self.name)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }
}

/// Collects upload parts for a single request.
///
/// Part names are `file0`, `file1`, ... in registration order, so every
/// placeholder handed out by one collector is unique.
#[derive(Debug, Default)]
pub struct Uploads {
    parts: Vec<UploadPart>,
}

impl Uploads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the string to put in a `media` field for `reference`.
    ///
    /// Blank ids and URLs cannot be resolved; they yield an empty string
    /// instead of failing so the rest of the request can still be built.
    pub fn resolve(&mut self, reference: &FileReference) -> String {
        match reference {
            FileReference::FileId(value) | FileReference::Url(value) => {
                if value.trim().is_empty() {
                    warn!(
                        kind = reference.kind(),
                        "Unresolved file reference; sending empty media field"
                    );
                    return String::new();
                }
                value.clone()
            }
            FileReference::Upload(file) => self.attach(file),
        }
    }

    /// Registers `file` as a new part and returns its placeholder.
    pub fn attach(&mut self, file: &InputFile) -> String {
        let part = UploadPart {
            name: format!("{UPLOAD_PART_PREFIX}{}", self.parts.len()),
            file_name: file.file_name().to_string(),
            data: file.data().clone(),
            mime_type: file.mime_type().map(str::to_string),
        };
        let placeholder = part.placeholder();
        self.parts.push(part);
        placeholder
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[UploadPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<UploadPart> {
        self.parts
    }
}

/// JSON object describing one attachment on the wire.
///
/// `media` and `type` are always present. Every other field is written only
/// when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFragment {
    media: String,
    #[serde(rename = "type")]
    kind: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supports_streaming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl MediaFragment {
    fn base(
        kind: MediaKind,
        media: &FileReference,
        caption: Option<&str>,
        parse_mode: Option<ParseMode>,
        uploads: &mut Uploads,
    ) -> Self {
        Self {
            media: uploads.resolve(media),
            kind,
            caption: caption.map(str::to_string),
            parse_mode,
            thumb: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
            performer: None,
            title: None,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn media(&self) -> &str {
        &self.media
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn parse_mode(&self) -> Option<ParseMode> {
        self.parse_mode
    }

    pub fn thumb(&self) -> Option<&str> {
        self.thumb.as_deref()
    }

    /// Renders this fragment as a JSON object string.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> MediaResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn attach_thumb(thumb: Option<&InputFile>, uploads: &mut Uploads) -> Option<String> {
    thumb.map(|file| uploads.attach(file))
}

impl InputMediaPhoto {
    pub fn to_fragment(&self, uploads: &mut Uploads) -> MediaFragment {
        MediaFragment::base(
            Self::KIND,
            &self.media,
            self.caption.as_deref(),
            self.parse_mode,
            uploads,
        )
    }
}

impl InputMediaVideo {
    pub fn to_fragment(&self, uploads: &mut Uploads) -> MediaFragment {
        let mut fragment = MediaFragment::base(
            Self::KIND,
            &self.media,
            self.caption.as_deref(),
            self.parse_mode,
            uploads,
        );
        fragment.thumb = attach_thumb(self.thumb.as_ref(), uploads);
        fragment.width = self.width;
        fragment.height = self.height;
        fragment.duration = self.duration;
        fragment.supports_streaming = self.supports_streaming;
        fragment
    }
}

impl InputMediaAnimation {
    pub fn to_fragment(&self, uploads: &mut Uploads) -> MediaFragment {
        let mut fragment = MediaFragment::base(
            Self::KIND,
            &self.media,
            self.caption.as_deref(),
            self.parse_mode,
            uploads,
        );
        fragment.thumb = attach_thumb(self.thumb.as_ref(), uploads);
        fragment.width = self.width;
        fragment.height = self.height;
        fragment.duration = self.duration;
        fragment
    }
}

impl InputMediaAudio {
    pub fn to_fragment(&self, uploads: &mut Uploads) -> MediaFragment {
        let mut fragment = MediaFragment::base(
            Self::KIND,
            &self.media,
            self.caption.as_deref(),
            self.parse_mode,
            uploads,
        );
        fragment.thumb = attach_thumb(self.thumb.as_ref(), uploads);
        fragment.duration = self.duration;
        fragment.performer.clone_from(&self.performer);
        fragment.title.clone_from(&self.title);
        fragment
    }
}

impl InputMediaDocument {
    pub fn to_fragment(&self, uploads: &mut Uploads) -> MediaFragment {
        let mut fragment = MediaFragment::base(
            Self::KIND,
            &self.media,
            self.caption.as_deref(),
            self.parse_mode,
            uploads,
        );
        fragment.thumb = attach_thumb(self.thumb.as_ref(), uploads);
        fragment
    }
}

impl InputMedia {
    pub fn to_fragment(&self, uploads: &mut Uploads) -> MediaFragment {
        match self {
            InputMedia::Photo(m) => m.to_fragment(uploads),
            InputMedia::Video(m) => m.to_fragment(uploads),
            InputMedia::Animation(m) => m.to_fragment(uploads),
            InputMedia::Audio(m) => m.to_fragment(uploads),
            InputMedia::Document(m) => m.to_fragment(uploads),
        }
    }
}

impl GroupMedia {
    pub fn to_fragment(&self, uploads: &mut Uploads) -> MediaFragment {
        match self {
            GroupMedia::Photo(m) => m.to_fragment(uploads),
            GroupMedia::Video(m) => m.to_fragment(uploads),
            GroupMedia::Audio(m) => m.to_fragment(uploads),
            GroupMedia::Document(m) => m.to_fragment(uploads),
        }
    }
}

/// A single attachment ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedMedia {
    pub(crate) fragment: MediaFragment,
    pub(crate) uploads: Vec<UploadPart>,
}

impl PreparedMedia {
    pub fn fragment(&self) -> &MediaFragment {
        &self.fragment
    }

    pub fn uploads(&self) -> &[UploadPart] {
        &self.uploads
    }

    /// Renders the fragment as a JSON object string.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> MediaResult<String> {
        self.fragment.to_json()
    }

    pub fn into_parts(self) -> (MediaFragment, Vec<UploadPart>) {
        (self.fragment, self.uploads)
    }
}

/// A media group ready for the transport: one fragment per member, in order,
/// plus every upload part referenced by any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedGroup {
    pub(crate) fragments: Vec<MediaFragment>,
    pub(crate) uploads: Vec<UploadPart>,
}

impl PreparedGroup {
    pub fn fragments(&self) -> &[MediaFragment] {
        &self.fragments
    }

    pub fn uploads(&self) -> &[UploadPart] {
        &self.uploads
    }

    /// Renders the fragments as a JSON array string.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> MediaResult<String> {
        Ok(serde_json::to_string(&self.fragments)?)
    }

    pub fn into_parts(self) -> (Vec<MediaFragment>, Vec<UploadPart>) {
        (self.fragments, self.uploads)
    }
}

/// Encodes attachments and groups, applying [`EncoderConfig`] defaults.
#[derive(Debug, Clone, Default)]
pub struct MediaEncoder {
    config: EncoderConfig,
}

impl MediaEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn encode(&self, media: &InputMedia) -> PreparedMedia {
        let mut uploads = Uploads::new();
        let mut fragment = media.to_fragment(&mut uploads);
        self.apply_defaults(&mut fragment);
        debug!(
            kind = %fragment.kind,
            uploads = uploads.len(),
            "Encoded media attachment"
        );
        PreparedMedia {
            fragment,
            uploads: uploads.into_parts(),
        }
    }

    pub fn encode_group(&self, group: &MediaGroup) -> PreparedGroup {
        let mut uploads = Uploads::new();
        let fragments: Vec<MediaFragment> = group
            .iter()
            .map(|member| {
                let mut fragment = member.to_fragment(&mut uploads);
                self.apply_defaults(&mut fragment);
                fragment
            })
            .collect();
        debug!(
            items = fragments.len(),
            uploads = uploads.len(),
            "Encoded media group"
        );
        PreparedGroup {
            fragments,
            uploads: uploads.into_parts(),
        }
    }

    fn apply_defaults(&self, fragment: &mut MediaFragment) {
        if fragment.caption.is_some() && fragment.parse_mode.is_none() {
            fragment.parse_mode = self.config.default_parse_mode;
        }
    }
}
