//! Zodiac signs on the ecliptic, 30 degrees each starting at 0° Aries.

use crate::coordinates::normalize_degrees;
use serde::{Deserialize, Serialize};

pub const SIGN_SPAN_DEG: f64 = 30.0;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    #[default]
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign index 0-11 (Aries = 0)
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Sign {
        Self::ALL[(index % 12) as usize]
    }

    /// Longitude at which this sign begins
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * SIGN_SPAN_DEG
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }
}

/// Sign containing the given longitude
pub fn sign_of(longitude: f64) -> Sign {
    let lon = normalize_degrees(longitude);
    Sign::from_index((lon / SIGN_SPAN_DEG).floor() as u8)
}

/// Position within the sign, in [0, 30)
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % SIGN_SPAN_DEG
}
