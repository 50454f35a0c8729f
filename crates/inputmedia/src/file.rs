use bytes::Bytes;

/// A local file uploaded alongside the request as its own multipart part.
///
/// The byte buffer is reference counted: encoding a request clones the handle
/// and never copies or mutates the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    file_name: String,
    data: Bytes,
    mime_type: Option<String>,
}

impl InputFile {
    pub fn new(data: impl Into<Bytes>, file_name: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            file_name: file_name.into(),
            mime_type: None,
        }
    }

    /// Sets the content type sent with the upload part.
    ///
    /// The value is passed through as-is; nothing is sniffed from the bytes.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
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

/// How a file is identified to the Bot API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReference {
    /// A file already stored on the server, by its opaque `file_id`.
    FileId(String),
    /// A public URL the server downloads itself.
    Url(String),
    /// Raw bytes uploaded with the request.
    Upload(InputFile),
}

impl FileReference {
    pub fn file_id(id: impl Into<String>) -> Self {
        FileReference::FileId(id.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        FileReference::Url(url.into())
    }

    pub fn upload(data: impl Into<Bytes>, file_name: impl Into<String>) -> Self {
        FileReference::Upload(InputFile::new(data, file_name))
    }

    /// Short label used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            FileReference::FileId(_) => "file_id",
            FileReference::Url(_) => "url",
            FileReference::Upload(_) => "upload",
        }
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, FileReference::Upload(_))
    }
}

impl From<InputFile> for FileReference {
    fn from(file: InputFile) -> Self {
        FileReference::Upload(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_keeps_bytes_and_name() {
        let reference = FileReference::upload(vec![1_u8, 2, 3], "a.pdf");
        let FileReference::Upload(file) = &reference else {
            panic!("expected upload reference");
        };
        assert_eq!(file.file_name(), "a.pdf");
        assert_eq!(file.data().as_ref(), &[1, 2, 3]);
        assert_eq!(file.mime_type(), None);
        assert!(reference.is_upload());
    }

    #[test]
    fn cloning_an_upload_shares_the_buffer() {
        let file = InputFile::new(Bytes::from_static(b"payload"), "p.bin");
        let copy = file.clone();
        assert_eq!(file.data().as_ptr(), copy.data().as_ptr());
    }

    #[test]
    fn kind_labels_each_reference() {
        assert_eq!(FileReference::file_id("F1").kind(), "file_id");
        assert_eq!(FileReference::url("http://x/v.mp4").kind(), "url");
        assert_eq!(FileReference::upload(Vec::<u8>::new(), "x").kind(), "upload");
    }
}
