pub mod angle;
pub mod decoder;
pub mod encoder;
pub mod entity;
pub mod tokenizer;

pub use angle::canonicalize_angle;
pub use decoder::{decode, DecoderConfig, Layout, NameDecoder};
pub use encoder::encode;
pub use entity::format_entity;
pub use tokenizer::{Token, TokenizedName, Tokenizer, DELIMITER};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AdType, Angle, Category, CreativeFields, Creator, FileExtension, Format, MediaBuyer, Role,
        Variation,
    };

    fn media_buyer_fields(
        product: &str,
        angle: Angle,
        category: Category,
        extension: FileExtension,
    ) -> CreativeFields {
        CreativeFields {
            role: Role::MediaBuyer,
            format: Some(Format::IC),
            creation: Some(Creator::LP),
            product: Some(product.into()),
            category: Some(category),
            angle: Some(angle),
            variation: Some(Variation::numbered(12).unwrap()),
            date: Some("17.02.2026".into()),
            media_buyer: Some(MediaBuyer::AK),
            ad_type: Some(AdType::SC),
            file_extension: Some(extension),
        }
    }

    fn normalize_spaces(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
    }

    #[test]
    fn media_buyer_round_trip() {
        let cases = [
            ("Ariana Blossom", Angle::Ugc, Category::NK, FileExtension::Mp4),
            ("  pearl   drop ", Angle::SingleImage, Category::ER, FileExtension::Png),
            ("Charm", Angle::CustomerTestimonial, Category::SHS, FileExtension::Jpeg),
            ("rose gold band", Angle::Other("Gift Guide".into()), Category::RG, FileExtension::Jpg),
        ];

        for (product, angle, category, extension) in cases {
            let fields = media_buyer_fields(product, angle.clone(), category, extension);
            let name = encode(&fields, "01.01.2030");
            let back = decode(&name);

            assert_eq!(back.role, Role::MediaBuyer, "{name}");
            assert_eq!(back.ad_type, fields.ad_type, "{name}");
            assert_eq!(back.media_buyer, fields.media_buyer, "{name}");
            assert_eq!(back.format, fields.format, "{name}");
            assert_eq!(back.creation, fields.creation, "{name}");
            assert_eq!(back.category, fields.category, "{name}");
            assert_eq!(back.file_extension, fields.file_extension, "{name}");
            assert_eq!(back.variation, fields.variation, "{name}");
            assert_eq!(back.date, fields.date, "{name}");
            assert_eq!(
                normalize_spaces(back.product.as_deref().unwrap()),
                normalize_spaces(product),
                "{name}"
            );
            assert_eq!(back.angle.as_ref().map(Angle::is_custom), Some(angle.is_custom()));
            assert_eq!(back.angle.as_ref().map(Angle::label), Some(angle.label()));
        }
    }

    #[test]
    fn custom_angle_round_trip_keeps_text() {
        let fields = media_buyer_fields(
            "Ring",
            Angle::Other("behind the scenes".into()),
            Category::RG,
            FileExtension::Mp4,
        );
        let back = decode(&encode(&fields, ""));
        assert_eq!(back.angle, Some(Angle::Other("Behind The Scenes".into())));
    }

    #[test]
    fn designer_name_restamped_for_media_buyer() {
        let designer = decode("VI_SS_Ariana.Blossom_NK_UGC_V00_17.02.2026.mp4");
        let restamped = CreativeFields {
            role: Role::MediaBuyer,
            ad_type: Some(AdType::NC),
            media_buyer: Some(MediaBuyer::TG),
            ..designer
        };

        assert_eq!(
            encode(&restamped, "01.01.2030"),
            "NC_TG_VI_SS_Ariana.Blossom_NK_Ugc_V00_17.02.2026.mp4"
        );
    }

    #[test]
    fn designer_round_trip_uses_today() {
        let fields = CreativeFields {
            format: Some(Format::VI),
            creation: Some(Creator::AI),
            product: Some("Layered Necklace".into()),
            category: Some(Category::NK),
            angle: Some(Angle::Storytelling),
            variation: Some(Variation::Baseline),
            date: Some("17.02.2026".into()),
            ..CreativeFields::new(Role::Designer)
        };
        let back = decode(&encode(&fields, "05.06.2030"));

        assert_eq!(back.role, Role::Designer);
        assert_eq!(back.product.as_deref(), Some("Layered Necklace"));
        assert_eq!(back.angle, Some(Angle::Storytelling));
        assert_eq!(back.variation, Some(Variation::Baseline));
        assert_eq!(back.date.as_deref(), Some("05.06.2030"));
    }
}
