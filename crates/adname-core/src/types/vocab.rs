use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdNameError, Result};

/// Declares a closed vocabulary of upper-case codes.
///
/// Each variant name *is* its code, so `Display`, `FromStr` and serde all
/// agree on the same spelling. Parsing is case-insensitive and ignores
/// surrounding whitespace.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl $name {
            /// Every code in the vocabulary, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The code as it appears in a creative name.
            #[must_use]
            pub fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            /// Human-readable label for pickers and reports.
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = AdNameError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $(stringify!($variant) => Ok(Self::$variant),)+
                    _ => Err(AdNameError::UnknownCode {
                        kind: $kind,
                        code: s.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Creative format (first segment of a designer name).
    pub enum Format ("format") {
        VI => "Video Image",
        IA => "Static Image",
        IC => "Carousel",
    }
}

vocabulary! {
    /// Who or what produced the creative.
    pub enum Creator ("creation") {
        SS => "Satnam Singh",
        AS => "Amisha Sofat",
        MS => "Manisha Sunar",
        SP => "Spied",
        LP => "Landing Page",
        WM => "What More",
        CA => "Catalogue",
        AI => "AI Tool",
    }
}

vocabulary! {
    /// Product category. The decoder anchors on these codes to find where
    /// the free-text product ends.
    pub enum Category ("category") {
        AN => "Anklet",
        BR => "Bracelet",
        ER => "Earring",
        NK => "Necklace",
        RG => "Ring",
        ST => "Set",
        SHS => "Shoulder Strap",
    }
}

vocabulary! {
    /// Ad type, leading segment of a media-buyer name.
    pub enum AdType ("ad type") {
        NC => "New Creative",
        SC => "Scaling",
    }
}

vocabulary! {
    /// Media buyer initials, second segment of a media-buyer name.
    pub enum MediaBuyer ("media buyer") {
        TG => "Tanmoy Gantoit",
        AK => "Amit Kashyap",
    }
}

/// Which template a creative name follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// `FORMAT_CREATOR_PRODUCT_CATEGORY_ANGLE_VNN_DATE`, stamped with today's date.
    #[default]
    Designer,
    /// `ADTYPE_MEDIABUYER_` prefix, original date kept, file extension appended.
    MediaBuyer,
}

impl Role {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Designer => "Designer",
            Self::MediaBuyer => "Media buyer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = AdNameError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "designer" => Ok(Self::Designer),
            "mediabuyer" | "buyer" => Ok(Self::MediaBuyer),
            _ => Err(AdNameError::UnknownCode {
                kind: "role",
                code: s.to_string(),
            }),
        }
    }
}
