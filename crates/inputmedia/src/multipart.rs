//! Packs prepared payloads into `multipart/form-data` bodies.
//!
//! The form carries the JSON under the caller's field name and one part per
//! upload, named so the `attach://` placeholders resolve. Callers add the
//! remaining endpoint fields (`chat_id`, ...) and send it themselves.

use reqwest::Body;
use reqwest::multipart::{Form, Part};

use crate::encode::{PreparedGroup, PreparedMedia, UploadPart};
use crate::error::MediaResult;

impl PreparedMedia {
    /// Builds a form with the fragment JSON under `field` plus its uploads.
    ///
    /// # Errors
    /// Returns an error if JSON rendering fails or an upload carries an
    /// invalid MIME type.
    pub fn into_form(self, field: &str) -> MediaResult<Form> {
        let json = self.to_json()?;
        build_form(field, json, &self.uploads)
    }
}

impl PreparedGroup {
    /// Builds a form with the fragment array under `field` plus all uploads.
    ///
    /// # Errors
    /// Returns an error if JSON rendering fails or an upload carries an
    /// invalid MIME type.
    pub fn into_form(self, field: &str) -> MediaResult<Form> {
        let json = self.to_json()?;
        build_form(field, json, &self.uploads)
    }
}

fn build_form(field: &str, json: String, uploads: &[UploadPart]) -> MediaResult<Form> {
    let mut form = Form::new().text(field.to_string(), json);
    for upload in uploads {
        let name = upload.name().to_string();
        form = form.part(name, upload_part(upload)?);
    }
    Ok(form)
}

fn upload_part(upload: &UploadPart) -> MediaResult<Part> {
    let length = upload.data().len() as u64;
    let mut part = Part::stream_with_length(Body::from(upload.data().clone()), length)
        .file_name(upload.file_name().to_string());
    if let Some(mime) = upload.mime_type()
        && !mime.trim().is_empty()
    {
        part = part.mime_str(mime)?;
    }
    Ok(part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::MediaEncoder;
    use crate::error::MediaError;
    use crate::file::{FileReference, InputFile};
    use crate::media::InputMediaDocument;

    #[test]
    fn invalid_mime_type_is_reported() {
        let file = InputFile::new(vec![1_u8], "a.pdf").with_mime_type("not a mime");
        let prepared =
            MediaEncoder::default().encode(&InputMediaDocument::new(FileReference::from(file)).into());
        let err = prepared.into_form("media").unwrap_err();
        assert!(matches!(err, MediaError::Multipart(_)));
    }

    #[test]
    fn blank_mime_type_is_ignored() {
        let file = InputFile::new(vec![1_u8], "a.pdf").with_mime_type(" ");
        let prepared =
            MediaEncoder::default().encode(&InputMediaDocument::new(FileReference::from(file)).into());
        assert!(prepared.into_form("media").is_ok());
    }
}
