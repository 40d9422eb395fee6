pub mod angle;
pub mod extension;
pub mod fields;
pub mod variation;
pub mod vocab;

pub use angle::Angle;
pub use extension::FileExtension;
pub use fields::CreativeFields;
pub use variation::Variation;
pub use vocab::{AdType, Category, Creator, Format, MediaBuyer, Role};
