mod gga;
mod rmc;

pub use gga::{FixRecord, decode_gga};
pub use rmc::{MotionRecord, decode_rmc};

macro_rules! indicator_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $byte:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Maps an indicator byte to its variant.
            pub fn from_byte(byte: u8) -> Option<Self> {
                match byte {
                    $($byte => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The indicator byte as it appears in a sentence.
            pub fn as_byte(self) -> u8 {
                match self {
                    $(Self::$variant => $byte,)*
                }
            }
        }
    };
}

indicator_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        b'A' => Valid,
        /// V - Invalid
        b'V' => Invalid,
    }
}

indicator_enum! {
    /// Quality of the GPS fix
    #[derive(Default)]
    pub enum Quality {
        /// 0 - Fix not available
        #[default]
        b'0' => NoFix,
        /// 1 - GPS fix
        b'1' => GPSFix,
        /// 2 - Differential GPS fix
        b'2' => DGPSFix,
        /// 3 - PPS fix
        b'3' => PPSFix,
        /// 4 - Real Time Kinematic
        b'4' => RTK,
        /// 5 - Float RTK
        b'5' => FloatRTK,
        /// 6 - estimated (dead reckoning)
        b'6' => Estimated,
        /// 7 - Manual input mode
        b'7' => Manual,
        /// 8 - Simulation mode
        b'8' => Simulation,
    }
}

impl Quality {
    /// Whether the GGA decoder accepts this quality as a usable fix.
    pub fn is_fix(self) -> bool {
        matches!(self, Quality::GPSFix | Quality::DGPSFix | Quality::Estimated)
    }
}
