//! Card skins: layout dimensions and the image/text fallback rule.
//!
//! A skin decides how big a floating card is, how long a message may be, and
//! whether a card shows the visitor's photo or the message in a box.

#[cfg(test)]
#[path = "skin_test.rs"]
mod skin_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Which layout a floating card uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSkin {
    /// Small card; long messages replace the photo.
    #[default]
    Compact,
    /// Larger card that keeps the photo regardless of message length.
    Large,
}

/// What occupies the upper slot of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBody {
    Image,
    MessageBox,
}

impl CardSkin {
    /// Card width in CSS pixels.
    #[must_use]
    pub fn card_width(self) -> f64 {
        match self {
            Self::Compact => 160.0,
            Self::Large => 220.0,
        }
    }

    /// Card height in CSS pixels. Also bounds the random vertical position.
    #[must_use]
    pub fn card_height(self) -> f64 {
        match self {
            Self::Compact => 240.0,
            Self::Large => 300.0,
        }
    }

    /// Size of the image (or message box) slot as `(width, height)`.
    #[must_use]
    pub fn image_box(self) -> (f64, f64) {
        match self {
            Self::Compact => (140.0, 180.0),
            Self::Large => (200.0, 230.0),
        }
    }

    /// `maxlength` of the message input.
    #[must_use]
    pub fn message_max_len(self) -> usize {
        match self {
            Self::Compact => 100,
            Self::Large => 40,
        }
    }

    /// Message length above which the photo gives way to the message box.
    #[must_use]
    pub fn text_fallback_threshold(self) -> Option<usize> {
        match self {
            Self::Compact => Some(13),
            Self::Large => None,
        }
    }

    /// Placeholder shown in the message input.
    #[must_use]
    pub fn message_placeholder(self) -> &'static str {
        match self {
            Self::Compact => "한마디 (13자 넘으면 사진 삭제)",
            Self::Large => "한마디",
        }
    }

    /// Decide whether a card shows its photo or its message.
    ///
    /// Message length is counted in UTF-16 code units, the unit the
    /// browser's `maxlength` uses.
    #[must_use]
    pub fn card_body(self, message: &str, has_image: bool) -> CardBody {
        if !has_image {
            return CardBody::MessageBox;
        }
        match self.text_fallback_threshold() {
            Some(limit) if message.encode_utf16().count() > limit => CardBody::MessageBox,
            _ => CardBody::Image,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for CardSkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardSkin {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "large" => Ok(Self::Large),
            other => Err(ConfigError::UnknownSkin(other.to_owned())),
        }
    }
}
