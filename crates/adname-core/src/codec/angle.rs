//! # Angle canonicalization
//!
//! Maps free-form angle text (typed by a user or recovered from a name) onto
//! the canonical [`Angle`] set.

use tracing::trace;

use crate::types::Angle;

/// Classifies raw angle text.
///
/// Matching ignores case and all whitespace, and accepts dotted spellings
/// such as `Single.Image`. Text outside the table becomes
/// [`Angle::Other`] holding the input verbatim.
///
/// # Examples
/// ```
/// use adname_core::codec::canonicalize_angle;
/// use adname_core::Angle;
///
/// assert_eq!(canonicalize_angle("single image"), Angle::SingleImage);
/// assert_eq!(canonicalize_angle("Testimonial"), Angle::CustomerTestimonial);
/// assert_eq!(canonicalize_angle("Unboxing"), Angle::Other("Unboxing".into()));
/// ```
pub fn canonicalize_angle(raw: &str) -> Angle {
    let key: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    let angle = match key.as_str() {
        "UGC" => Angle::Ugc,
        "EGC" => Angle::Egc,
        "SINGLEIMAGE" | "SINGLE.IMAGE" => Angle::SingleImage,
        "STORYTELLING" => Angle::Storytelling,
        "TESTIMONIAL" | "CUSTOMERTESTIMONIAL" | "CUSTOMER.TESTIMONIAL" => {
            Angle::CustomerTestimonial
        }
        _ => Angle::Other(raw.to_string()),
    };

    trace!(raw, label = angle.label(), "canonicalized angle");
    angle
}
