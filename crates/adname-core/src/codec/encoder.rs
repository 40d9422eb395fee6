//! # Name encoder
//!
//! Assembles a creative name from a [`CreativeFields`] value. Unset fields
//! leave empty segments (`VI__Ring_...`) rather than being compacted away.

use tracing::debug;

use super::entity::format_entity;
use crate::types::{CreativeFields, Role, Variation};

/// Encodes `fields` into a creative name.
///
/// `today` is the caller's current date in `DD.MM.YYYY` form. Designer names
/// are always stamped with it; media-buyer names keep `fields.date`. Empty
/// dates drop the date segment together with its delimiter.
///
/// # Examples
/// ```
/// use adname_core::{encode, Angle, Category, CreativeFields, Creator, Format, Role, Variation};
///
/// let fields = CreativeFields {
///     format: Some(Format::IA),
///     creation: Some(Creator::AS),
///     product: Some("Ariana Blossom".into()),
///     category: Some(Category::RG),
///     angle: Some(Angle::Storytelling),
///     variation: Some(Variation::numbered(3).unwrap()),
///     ..CreativeFields::new(Role::Designer)
/// };
///
/// assert_eq!(
///     encode(&fields, "01.01.2030"),
///     "IA_AS_Ariana.Blossom_RG_Storytelling_V03_01.01.2030"
/// );
/// ```
pub fn encode(fields: &CreativeFields, today: &str) -> String {
    let format = code_or_empty(fields.format);
    let creation = code_or_empty(fields.creation);
    let product = format_entity(fields.product.as_deref().unwrap_or_default());
    let category = code_or_empty(fields.category);
    let angle = format_entity(fields.angle.as_ref().map_or("", |a| a.source_text()));
    let variation = fields.variation.unwrap_or(Variation::Baseline);

    let date = match fields.role {
        Role::MediaBuyer => fields.date.as_deref().unwrap_or_default(),
        Role::Designer => today,
    };
    let date_suffix = if date.is_empty() {
        String::new()
    } else {
        format!("_{date}")
    };

    let name = match fields.role {
        Role::Designer => {
            format!("{format}_{creation}_{product}_{category}_{angle}_{variation}{date_suffix}")
        }
        Role::MediaBuyer => {
            let ad_type = code_or_empty(fields.ad_type);
            let media_buyer = code_or_empty(fields.media_buyer);
            let extension = fields.file_extension.map_or("", |e| e.as_str());
            format!(
                "{ad_type}_{media_buyer}_{format}_{creation}_{product}_{category}_{angle}_{variation}{date_suffix}{extension}"
            )
        }
    };

    debug!(role = %fields.role, %name, "encoded creative name");
    name
}

fn code_or_empty<T: ToString>(code: Option<T>) -> String {
    code.map(|c| c.to_string()).unwrap_or_default()
}
