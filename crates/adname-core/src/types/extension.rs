use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdNameError, Result};

/// File extensions a media-buyer name may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileExtension {
    #[serde(rename = ".mp4")]
    Mp4,
    #[serde(rename = ".png")]
    Png,
    #[serde(rename = ".jpg")]
    Jpg,
    #[serde(rename = ".jpeg")]
    Jpeg,
}

impl FileExtension {
    pub const ALL: &'static [Self] = &[Self::Mp4, Self::Png, Self::Jpg, Self::Jpeg];

    /// Lower-case extension including the leading dot.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mp4 => ".mp4",
            Self::Png => ".png",
            Self::Jpg => ".jpg",
            Self::Jpeg => ".jpeg",
        }
    }

    /// Returns `true` for video containers.
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::Mp4)
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileExtension {
    type Err = AdNameError;

    /// Accepts the extension with or without its leading dot, in any case.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
        match bare.to_ascii_lowercase().as_str() {
            "mp4" => Ok(Self::Mp4),
            "png" => Ok(Self::Png),
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            _ => Err(AdNameError::UnknownCode {
                kind: "file extension",
                code: s.to_string(),
            }),
        }
    }
}
