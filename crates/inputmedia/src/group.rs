//! Bounded, ordered bundles of attachments sent as one `sendMediaGroup` call.

use crate::error::{MediaError, MediaResult};
use crate::media::{
    InputMedia, InputMediaAudio, InputMediaDocument, InputMediaPhoto, InputMediaVideo, MediaKind,
};

pub const MIN_GROUP_SIZE: usize = 2;
pub const MAX_GROUP_SIZE: usize = 10;

mod sealed {
    pub trait Sealed {}
}

/// Marker for attachments that may be sent inside a media group.
///
/// Implemented for photos, videos, audio and documents. Animations are
/// excluded, so they cannot be passed to [`MediaGroup::new`].
pub trait Groupable: sealed::Sealed + Into<GroupMedia> {}

impl sealed::Sealed for InputMediaPhoto {}
impl sealed::Sealed for InputMediaVideo {}
impl sealed::Sealed for InputMediaAudio {}
impl sealed::Sealed for InputMediaDocument {}
impl sealed::Sealed for GroupMedia {}

impl Groupable for InputMediaPhoto {}
impl Groupable for InputMediaVideo {}
impl Groupable for InputMediaAudio {}
impl Groupable for InputMediaDocument {}
impl Groupable for GroupMedia {}

/// One member of a [`MediaGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl GroupMedia {
    pub fn kind(&self) -> MediaKind {
        match self {
            GroupMedia::Photo(_) => MediaKind::Photo,
            GroupMedia::Video(_) => MediaKind::Video,
            GroupMedia::Audio(_) => MediaKind::Audio,
            GroupMedia::Document(_) => MediaKind::Document,
        }
    }
}

impl From<InputMediaPhoto> for GroupMedia {
    fn from(media: InputMediaPhoto) -> Self {
        GroupMedia::Photo(media)
    }
}

impl From<InputMediaVideo> for GroupMedia {
    fn from(media: InputMediaVideo) -> Self {
        GroupMedia::Video(media)
    }
}

impl From<InputMediaAudio> for GroupMedia {
    fn from(media: InputMediaAudio) -> Self {
        GroupMedia::Audio(media)
    }
}

impl From<InputMediaDocument> for GroupMedia {
    fn from(media: InputMediaDocument) -> Self {
        GroupMedia::Document(media)
    }
}

impl From<GroupMedia> for InputMedia {
    fn from(media: GroupMedia) -> Self {
        match media {
            GroupMedia::Photo(m) => InputMedia::Photo(m),
            GroupMedia::Video(m) => InputMedia::Video(m),
            GroupMedia::Audio(m) => InputMedia::Audio(m),
            GroupMedia::Document(m) => InputMedia::Document(m),
        }
    }
}

/// An immutable group of 2 to 10 attachments, kept in caller order.
///
/// Members may be of mixed kinds. No deduplication or reordering happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaGroup {
    items: Vec<GroupMedia>,
}

impl MediaGroup {
    /// Builds a group from the given attachments.
    ///
    /// # Errors
    /// Returns [`MediaError::InvalidGroupSize`] if fewer than 2 or more than
    /// 10 items are given.
    pub fn new<I, M>(items: I) -> MediaResult<Self>
    where
        I: IntoIterator<Item = M>,
        M: Groupable,
    {
        let items: Vec<GroupMedia> = items.into_iter().map(Into::into).collect();
        if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&items.len()) {
            return Err(MediaError::InvalidGroupSize { len: items.len() });
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a group holds at least two items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GroupMedia] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GroupMedia> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<GroupMedia> {
        self.items
    }
}

impl<'a> IntoIterator for &'a MediaGroup {
    type Item = &'a GroupMedia;
    type IntoIter = std::slice::Iter<'a, GroupMedia>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileReference;

    fn photos(n: usize) -> Vec<InputMediaPhoto> {
        (0..n)
            .map(|i| InputMediaPhoto::new(FileReference::file_id(format!("P{i}"))))
            .collect()
    }

    #[test]
    fn rejects_sizes_outside_bounds() {
        for n in [0, 1, 11, 12, 50] {
            let err = MediaGroup::new(photos(n)).unwrap_err();
            assert!(
                matches!(err, MediaError::InvalidGroupSize { len } if len == n),
                "size {n} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_every_size_within_bounds_in_order() {
        for n in MIN_GROUP_SIZE..=MAX_GROUP_SIZE {
            let group = MediaGroup::new(photos(n)).unwrap();
            assert_eq!(group.len(), n);
            for (i, item) in group.iter().enumerate() {
                let GroupMedia::Photo(photo) = item else {
                    panic!("expected photo");
                };
                assert_eq!(photo.media, FileReference::file_id(format!("P{i}")));
            }
        }
    }

    #[test]
    fn mixed_kinds_are_allowed() {
        let items: Vec<GroupMedia> = vec![
            InputMediaPhoto::new(FileReference::file_id("P")).into(),
            InputMediaVideo::new(FileReference::url("http://x/v.mp4")).into(),
        ];
        let group = MediaGroup::new(items).unwrap();
        let kinds: Vec<MediaKind> = group.iter().map(GroupMedia::kind).collect();
        assert_eq!(kinds, vec![MediaKind::Photo, MediaKind::Video]);
    }

    #[test]
    fn single_item_fails() {
        let result = MediaGroup::new([InputMediaPhoto::new(FileReference::file_id("P"))]);
        assert!(matches!(
            result,
            Err(MediaError::InvalidGroupSize { len: 1 })
        ));
    }

    #[test]
    fn group_member_converts_back_to_input_media() {
        let member = GroupMedia::from(InputMediaDocument::new(FileReference::file_id("D")));
        let media = InputMedia::from(member);
        assert_eq!(media.kind(), MediaKind::Document);
    }
}
