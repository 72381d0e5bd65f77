//! @acp:module "Submission"
//! @acp:summary "Submission form state, media references and validation"
//! @acp:domain core
//! @acp:layer logic
//!
//! Files are never read or uploaded. A `FileRef` only records what the user
//! picked: name, size and MIME type.

pub mod submitter;

pub use submitter::{Receipt, SubmissionError, Submitter};

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub const MSG_MISSING_NAME: &str = "Пожалуйста, заполните фамилию и имя";
pub const MSG_MISSING_MEDIA: &str = "Пожалуйста, прикрепите хотя бы одно фото или видео";
pub const MSG_SUCCESS: &str = "Задание успешно отправлено!";
pub const MSG_SUCCESS_DETAIL: &str = "Спасибо за выполнение задания программы \"Адал Азамат\"";

/// Which file input a file was attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    fn mime_prefix(self) -> &'static str {
        match self {
            MediaKind::Photo => "image/",
            MediaKind::Video => "video/",
        }
    }

    pub fn accepts(self, mime: &str) -> bool {
        mime.starts_with(self.mime_prefix())
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Photo => write!(f, "фото"),
            MediaKind::Video => write!(f, "видео"),
        }
    }
}

/// @acp:summary "Opaque reference to a user-selected file"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// @acp:summary "Reference a file on disk using only its metadata"
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            ));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            mime: guess_mime(path).to_string(),
            name,
            size: metadata.len(),
        })
    }
}

/// MIME type from the file extension
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "3gp" => "video/3gpp",
        _ => "application/octet-stream",
    }
}

/// Reasons a submission is blocked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", MSG_MISSING_NAME)]
    MissingName,

    #[error("{}", MSG_MISSING_MEDIA)]
    MissingMedia,

    #[error("Файл \"{name}\" ({mime}) не подходит для раздела «{kind}»")]
    WrongMediaKind {
        name: String,
        mime: String,
        kind: MediaKind,
    },
}

/// @acp:summary "Transient form state of the submission page"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub last_name: String,
    pub first_name: String,
    pub photos: Vec<FileRef>,
    pub videos: Vec<FileRef>,
}

impl SubmissionForm {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            ..Default::default()
        }
    }

    pub fn attach(&mut self, kind: MediaKind, file: FileRef) {
        match kind {
            MediaKind::Photo => self.photos.push(file),
            MediaKind::Video => self.videos.push(file),
        }
    }

    /// "Фамилия Имя"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name.trim(), self.first_name.trim())
    }

    /// @acp:summary "Check names first, then attachments"
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.last_name.trim().is_empty() || self.first_name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.photos.is_empty() && self.videos.is_empty() {
            return Err(ValidationError::MissingMedia);
        }

        let attached = self
            .photos
            .iter()
            .map(|f| (MediaKind::Photo, f))
            .chain(self.videos.iter().map(|f| (MediaKind::Video, f)));
        for (kind, file) in attached {
            if !kind.accepts(&file.mime) {
                return Err(ValidationError::WrongMediaKind {
                    name: file.name.clone(),
                    mime: file.mime.clone(),
                    kind,
                });
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
