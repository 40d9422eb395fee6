//! # Name decoder
//!
//! Best-effort reconstruction of [`CreativeFields`] from an existing creative
//! name. Decoding never fails: whatever cannot be recovered is left unset so
//! callers can still show the fields that were.
//!
//! The decoder anchors on the category code. Everything between the creator
//! segment and the category is the product; after the category, the last two
//! segments are the variation and the date and anything in between is the
//! angle.

use std::str::FromStr;
use std::sync::LazyLock;

use tracing::debug;

use super::angle::canonicalize_angle;
use super::tokenizer::{TokenizedName, Tokenizer};
use crate::error::Result;
use crate::types::{AdType, Category, CreativeFields, MediaBuyer, Role, Variation};

/// Token offsets relative to the start of the designer-shaped part of a name.
mod offset {
    pub const FORMAT: usize = 0;
    pub const CREATION: usize = 1;
    pub const PRODUCT_START: usize = 2;
}

/// Which template a name appears to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Starts directly with the format code.
    Designer,
    /// Starts with an ad-type and media-buyer pair.
    MediaBuyer,
}

impl Layout {
    /// Number of tokens preceding the format code.
    #[must_use]
    pub fn prefix_len(self) -> usize {
        match self {
            Self::Designer => 0,
            Self::MediaBuyer => 2,
        }
    }

    /// Role corresponding to this layout.
    #[must_use]
    pub fn role(self) -> Role {
        match self {
            Self::Designer => Role::Designer,
            Self::MediaBuyer => Role::MediaBuyer,
        }
    }
}

/// Configuration for the decoder.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Names with fewer `_` segments than this are not decoded at all
    pub min_tokens: usize,
    /// Whether to recognize a leading `ADTYPE_MEDIABUYER_` pair
    pub detect_media_buyer_layout: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            min_tokens: 6,
            detect_media_buyer_layout: true,
        }
    }
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of segments required to decode.
    pub fn with_min_tokens(mut self, min_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self
    }

    /// Enable or disable media-buyer layout detection.
    pub fn with_layout_detection(mut self, enabled: bool) -> Self {
        self.detect_media_buyer_layout = enabled;
        self
    }
}

/// Heuristic decoder for creative names.
#[derive(Debug, Clone)]
pub struct NameDecoder {
    config: DecoderConfig,
    tokenizer: Tokenizer,
}

impl NameDecoder {
    /// Constructs a decoder with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `AdNameError::RegexError` if the tokenizer's pattern fails to
    /// compile (should never happen with the static pattern).
    pub fn new() -> Result<Self> {
        Self::with_config(DecoderConfig::default())
    }

    /// Constructs a decoder with the given configuration.
    ///
    /// # Errors
    ///
    /// See [`NameDecoder::new`].
    pub fn with_config(config: DecoderConfig) -> Result<Self> {
        Ok(Self {
            config,
            tokenizer: Tokenizer::new()?,
        })
    }

    /// Get the decoder configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes a creative name into whatever fields can be recovered.
    ///
    /// # Examples
    /// ```
    /// use adname_core::codec::NameDecoder;
    /// use adname_core::{Angle, Category, Variation};
    ///
    /// let decoder = NameDecoder::new().unwrap();
    /// let fields = decoder.decode("VI_SS_Ariana.Blossom_NK_UGC_V00_17.02.2026.mp4");
    ///
    /// assert_eq!(fields.product.as_deref(), Some("Ariana Blossom"));
    /// assert_eq!(fields.category, Some(Category::NK));
    /// assert_eq!(fields.angle, Some(Angle::Ugc));
    /// assert_eq!(fields.variation, Some(Variation::Baseline));
    /// ```
    pub fn decode(&self, input: &str) -> CreativeFields {
        let name = self.tokenizer.tokenize(input);
        let mut fields = CreativeFields::new(Role::Designer);
        fields.file_extension = name.extension;

        if name.len() < self.config.min_tokens {
            debug!(input, tokens = name.len(), "too few segments to decode");
            return fields;
        }

        let layout = self.detect_layout(&name);
        let base = layout.prefix_len();
        fields.role = layout.role();
        if layout == Layout::MediaBuyer {
            fields.ad_type = code_at(&name, 0);
            fields.media_buyer = code_at(&name, 1);
        }

        fields.format = code_at(&name, base + offset::FORMAT);
        fields.creation = code_at(&name, base + offset::CREATION);

        let product_start = base + offset::PRODUCT_START;
        let category_index = (product_start..name.len())
            .find(|&i| code_at::<Category>(&name, i).is_some());

        // At least one product segment must precede the category.
        let category_index = match category_index {
            Some(i) if i > product_start => i,
            Some(i) => {
                debug!(input, index = i, "category found before any product segment");
                return fields;
            }
            None => {
                debug!(input, "no category segment");
                return fields;
            }
        };

        fields.product = Some(name.free_text(product_start..category_index));
        fields.category = code_at(&name, category_index);

        let angle_start = category_index + 1;
        if name.len() - angle_start < 2 {
            debug!(input, "missing variation and date segments");
            return fields;
        }
        let variation_index = name.len() - 2;
        let date_index = name.len() - 1;

        fields.angle = Some(canonicalize_angle(
            &name.free_text(angle_start..variation_index),
        ));
        fields.variation = name.normalized(variation_index).and_then(parse_variation);
        fields.date = name.normalized(date_index).map(str::to_string);

        fields
    }

    fn detect_layout(&self, name: &TokenizedName) -> Layout {
        if self.config.detect_media_buyer_layout
            && code_at::<AdType>(name, 0).is_some()
            && code_at::<MediaBuyer>(name, 1).is_some()
        {
            Layout::MediaBuyer
        } else {
            Layout::Designer
        }
    }
}

/// Parses the vocabulary code at `index`, if present and recognized.
fn code_at<T: FromStr>(name: &TokenizedName, index: usize) -> Option<T> {
    name.normalized(index).and_then(|code| code.parse().ok())
}

/// Parses an upper-cased `V..` segment.
///
/// `V00` is the baseline. Otherwise the leading digits after `V` give the
/// number, with anything after them ignored; a number of zero also reads as
/// the baseline. No leading digits, or no `V`, yields `None`.
fn parse_variation(token: &str) -> Option<Variation> {
    let rest = token.strip_prefix('V')?;
    if rest == "00" {
        return Some(Variation::Baseline);
    }

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    match rest[..digits_end].parse::<u32>() {
        Ok(0) => Some(Variation::Baseline),
        Ok(n) => Variation::numbered(n).ok(),
        Err(_) => {
            debug!(token, "unreadable variation number");
            None
        }
    }
}

static DEFAULT_DECODER: LazyLock<NameDecoder> = LazyLock::new(|| {
    NameDecoder::new().expect("extension pattern is a valid static regex")
});

/// Convenience function to decode a creative name with default settings.
pub fn decode(input: &str) -> CreativeFields {
    DEFAULT_DECODER.decode(input)
}
