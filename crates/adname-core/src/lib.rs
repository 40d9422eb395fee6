//! # adname core
//!
//! Encoder and heuristic decoder for the structured filenames used to track
//! advertising creatives, e.g. `VI_SS_Ariana.Blossom_NK_UGC_V00_17.02.2026.mp4`.
//!
//! ## Quick Start
//!
//! ```rust
//! use adname_core::{decode, encode, AdType, MediaBuyer, Role, CreativeFields};
//!
//! let designer = decode("VI_SS_Ariana.Blossom_NK_UGC_V00_17.02.2026.mp4");
//! assert_eq!(designer.product.as_deref(), Some("Ariana Blossom"));
//!
//! let restamped = CreativeFields {
//!     role: Role::MediaBuyer,
//!     ad_type: Some(AdType::NC),
//!     media_buyer: Some(MediaBuyer::TG),
//!     ..designer
//! };
//! assert_eq!(
//!     encode(&restamped, "01.01.2030"),
//!     "NC_TG_VI_SS_Ariana.Blossom_NK_Ugc_V00_17.02.2026.mp4"
//! );
//! ```
pub mod codec;
pub mod error;
pub mod types;

// Re-export primary API
pub use codec::{
    canonicalize_angle, decode, encode, format_entity, DecoderConfig, Layout, NameDecoder,
    Tokenizer,
};
pub use error::{AdNameError, Result};
pub use types::fields::{validate_date, DATE_FORMAT};
pub use types::{
    AdType, Angle, Category, CreativeFields, Creator, FileExtension, Format, MediaBuyer, Role,
    Variation,
};
