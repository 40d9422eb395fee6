use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::angle::Angle;
use super::extension::FileExtension;
use super::variation::Variation;
use super::vocab::{AdType, Category, Creator, Format, MediaBuyer, Role};
use crate::error::{AdNameError, Result};

/// Date layout used inside creative names.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// The metadata carried by a creative name.
///
/// Produced fresh by every decode and consumed by every encode; the codec
/// never mutates an existing value. `None` means "not selected" on the way
/// in and "not recovered" on the way out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeFields {
    /// Which template the name follows.
    pub role: Role,

    /// Creative format (`VI`, `IA`, `IC`).
    pub format: Option<Format>,

    /// Creator code.
    pub creation: Option<Creator>,

    /// Product name in display form (words separated by spaces).
    pub product: Option<String>,

    /// Product category.
    pub category: Option<Category>,

    /// Creative angle; custom text lives in [`Angle::Other`].
    pub angle: Option<Angle>,

    /// Variation marker.
    pub variation: Option<Variation>,

    /// Creative date, `DD.MM.YYYY`.
    pub date: Option<String>,

    /// Media buyer initials (media-buyer names only).
    pub media_buyer: Option<MediaBuyer>,

    /// Ad type (media-buyer names only).
    pub ad_type: Option<AdType>,

    /// File extension (media-buyer names only).
    pub file_extension: Option<FileExtension>,
}

impl CreativeFields {
    /// Creates an empty field set for the given role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Returns `true` if every segment the role's template needs is set.
    ///
    /// Encoding an incomplete field set still works; it just leaves empty
    /// segments in the name.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let common = self.format.is_some()
            && self.creation.is_some()
            && self.product.as_deref().is_some_and(|p| !p.trim().is_empty())
            && self.category.is_some()
            && self.angle.is_some();

        match self.role {
            Role::Designer => common,
            Role::MediaBuyer => {
                common
                    && self.ad_type.is_some()
                    && self.media_buyer.is_some()
                    && self.date.as_deref().is_some_and(|d| !d.is_empty())
            }
        }
    }

    /// Checks the syntactic shape of free-form fields before encoding.
    ///
    /// # Errors
    ///
    /// Returns `AdNameError::InvalidDate` if `date` is set but is not a real
    /// `DD.MM.YYYY` calendar date.
    pub fn validate(&self) -> Result<()> {
        if let Some(date) = self.date.as_deref().filter(|d| !d.is_empty()) {
            validate_date(date)?;
        }
        Ok(())
    }
}

/// Checks that `date` is a real calendar date written as `DD.MM.YYYY`.
///
/// # Errors
///
/// Returns `AdNameError::InvalidDate` otherwise.
pub fn validate_date(date: &str) -> Result<()> {
    let well_shaped = date.len() == 10
        && date
            .char_indices()
            .all(|(i, c)| if i == 2 || i == 5 { c == '.' } else { c.is_ascii_digit() });

    if well_shaped && NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok() {
        Ok(())
    } else {
        Err(AdNameError::InvalidDate {
            date: date.to_string(),
        })
    }
}

impl std::fmt::Display for CreativeFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CreativeFields(role={}", self.role)?;
        if let Some(format) = self.format {
            write!(f, ", format={format}")?;
        }
        if let Some(creation) = self.creation {
            write!(f, ", creation={creation}")?;
        }
        if let Some(ref product) = self.product {
            write!(f, ", product={product:?}")?;
        }
        if let Some(category) = self.category {
            write!(f, ", category={category}")?;
        }
        if let Some(ref angle) = self.angle {
            write!(f, ", angle={angle:?}")?;
        }
        if let Some(variation) = self.variation {
            write!(f, ", variation={variation}")?;
        }
        if let Some(ref date) = self.date {
            write!(f, ", date={date}")?;
        }
        if let Some(ext) = self.file_extension {
            write!(f, ", ext={ext}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_designer() -> CreativeFields {
        CreativeFields {
            format: Some(Format::VI),
            creation: Some(Creator::SS),
            product: Some("Ariana Blossom".into()),
            category: Some(Category::NK),
            angle: Some(Angle::Ugc),
            ..CreativeFields::new(Role::Designer)
        }
    }

    #[test]
    fn new_fields_are_empty() {
        let fields = CreativeFields::new(Role::MediaBuyer);
        assert_eq!(fields.role, Role::MediaBuyer);
        assert!(fields.format.is_none());
        assert!(fields.angle.is_none());
        assert!(fields.file_extension.is_none());
        assert!(!fields.is_complete());
    }

    #[test]
    fn completeness_depends_on_role() {
        let designer = complete_designer();
        assert!(designer.is_complete());

        let buyer = CreativeFields {
            role: Role::MediaBuyer,
            ..designer.clone()
        };
        assert!(!buyer.is_complete());

        let buyer = CreativeFields {
            ad_type: Some(AdType::NC),
            media_buyer: Some(MediaBuyer::TG),
            date: Some("17.02.2026".into()),
            ..buyer
        };
        assert!(buyer.is_complete());
    }

    #[test]
    fn blank_product_is_incomplete() {
        let fields = CreativeFields {
            product: Some("   ".into()),
            ..complete_designer()
        };
        assert!(!fields.is_complete());
    }

    #[test]
    fn validate_accepts_real_dates() {
        assert!(validate_date("17.02.2026").is_ok());
        assert!(validate_date("29.02.2024").is_ok());

        let fields = CreativeFields {
            date: Some("01.01.2030".into()),
            ..complete_designer()
        };
        assert!(fields.validate().is_ok());
        assert!(complete_designer().validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_dates() {
        for bad in ["2026-02-17", "1.2.2026", "31.02.2026", "17.02.26", "aa.bb.cccc"] {
            assert!(
                matches!(validate_date(bad), Err(AdNameError::InvalidDate { .. })),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn fields_display() {
        let fields = CreativeFields {
            variation: Some(Variation::Baseline),
            ..complete_designer()
        };
        let display = fields.to_string();
        assert!(display.contains("role=Designer"));
        assert!(display.contains("format=VI"));
        assert!(display.contains("\"Ariana Blossom\""));
        assert!(display.contains("V00"));
    }

    #[test]
    fn fields_serialization_roundtrip() {
        let fields = CreativeFields {
            role: Role::MediaBuyer,
            angle: Some(Angle::Other("Gift Guide".into())),
            variation: Some(Variation::numbered(4).unwrap()),
            date: Some("17.02.2026".into()),
            media_buyer: Some(MediaBuyer::AK),
            ad_type: Some(AdType::SC),
            file_extension: Some(FileExtension::Png),
            ..complete_designer()
        };

        let json = serde_json::to_string_pretty(&fields).unwrap();
        let back: CreativeFields = serde_json::from_str(&json).unwrap();
        assert_eq!(fields, back);
    }
}
