use std::fmt;

use serde::{Deserialize, Serialize};

/// The persuasive framing of a creative.
///
/// Canonical angles have fixed labels; anything else is carried verbatim in
/// [`Angle::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Angle {
    #[serde(rename = "UGC")]
    Ugc,
    #[serde(rename = "EGC")]
    Egc,
    #[serde(rename = "Single Image")]
    SingleImage,
    Storytelling,
    #[serde(rename = "Customer Testimonial")]
    CustomerTestimonial,
    /// Free-text angle outside the canonical set.
    Other(String),
}

impl Angle {
    /// The canonical angles, in picker order.
    pub const CANONICAL: &'static [Angle] = &[
        Angle::Ugc,
        Angle::Egc,
        Angle::SingleImage,
        Angle::Storytelling,
        Angle::CustomerTestimonial,
    ];

    /// Display label. Custom angles report `Other`.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Ugc => "UGC",
            Self::Egc => "EGC",
            Self::SingleImage => "Single Image",
            Self::Storytelling => "Storytelling",
            Self::CustomerTestimonial => "Customer Testimonial",
            Self::Other(_) => "Other",
        }
    }

    /// Returns `true` if the angle is outside the canonical set.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Other(_))
    }

    /// The custom text, if any.
    #[must_use]
    pub fn custom_text(&self) -> Option<&str> {
        match self {
            Self::Other(text) => Some(text),
            _ => None,
        }
    }

    /// Text that goes into a name before dot-formatting: the custom text for
    /// [`Angle::Other`], the label otherwise.
    #[must_use]
    pub fn source_text(&self) -> &str {
        match self {
            Self::Other(text) => text,
            canonical => canonical.label(),
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_angle_reports_other_label() {
        let angle = Angle::Other("Behind the scenes".into());
        assert!(angle.is_custom());
        assert_eq!(angle.label(), "Other");
        assert_eq!(angle.custom_text(), Some("Behind the scenes"));
        assert_eq!(angle.source_text(), "Behind the scenes");
    }

    #[test]
    fn canonical_angles_are_not_custom() {
        for angle in Angle::CANONICAL {
            assert!(!angle.is_custom());
            assert_eq!(angle.custom_text(), None);
            assert_eq!(angle.source_text(), angle.label());
        }
    }

    #[test]
    fn serializes_with_labels() {
        assert_eq!(
            serde_json::to_string(&Angle::SingleImage).unwrap(),
            "\"Single Image\""
        );
        let custom = Angle::Other("Unboxing".into());
        let json = serde_json::to_string(&custom).unwrap();
        let back: Angle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, custom);
    }
}
