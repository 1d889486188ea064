use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Western tropical zodiac sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
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

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign for a one-based month and day-of-month
    ///
    /// Every (month, day) pair maps to exactly one sign. Anything outside the
    /// eleven explicit ranges is Capricorn (Dec 22 - Jan 19).
    pub fn from_month_day(month: u32, day: u32) -> Self {
        use ZodiacSign::*;

        match (month, day) {
            (1, 20..) | (2, 0..=18) => Aquarius,
            (2, 19..) | (3, 0..=20) => Pisces,
            (3, 21..) | (4, 0..=19) => Aries,
            (4, 20..) | (5, 0..=20) => Taurus,
            (5, 21..) | (6, 0..=20) => Gemini,
            (6, 21..) | (7, 0..=22) => Cancer,
            (7, 23..) | (8, 0..=22) => Leo,
            (8, 23..) | (9, 0..=22) => Virgo,
            (9, 23..) | (10, 0..=22) => Libra,
            (10, 23..) | (11, 0..=21) => Scorpio,
            (11, 22..) | (12, 0..=21) => Sagittarius,
            _ => Capricorn,
        }
    }

    #[inline]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month_day(date.month(), date.day())
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score used when a sign pair has no table entry
pub const DEFAULT_ZODIAC_COMPATIBILITY: u8 = 70;

/// Hand-authored compatibility table, rows and columns in `ZodiacSign::ALL` order
///
/// Kept exactly as authored; lookups are keyed (row, column).
const COMPATIBILITY: [[u8; 12]; 12] = [
    //  Ari Tau Gem Can Leo Vir Lib Sco Sag Cap Aqu Pis
    [70, 60, 85, 65, 90, 50, 80, 70, 90, 55, 75, 65], // Aries
    [60, 80, 55, 90, 70, 95, 75, 85, 50, 95, 60, 85], // Taurus
    [85, 55, 75, 60, 85, 75, 90, 60, 85, 50, 90, 65], // Gemini
    [65, 90, 60, 85, 65, 80, 60, 95, 55, 75, 50, 95], // Cancer
    [90, 70, 85, 65, 80, 60, 90, 70, 90, 55, 70, 65], // Leo
    [50, 95, 75, 80, 60, 75, 65, 85, 55, 90, 60, 80], // Virgo
    [80, 75, 90, 60, 90, 65, 75, 70, 85, 65, 90, 70], // Libra
    [70, 85, 60, 95, 70, 85, 70, 85, 60, 85, 55, 95], // Scorpio
    [90, 50, 85, 55, 90, 55, 85, 60, 80, 65, 90, 60], // Sagittarius
    [55, 95, 50, 75, 55, 90, 65, 85, 65, 80, 70, 85], // Capricorn
    [75, 60, 90, 50, 70, 60, 90, 55, 90, 70, 80, 75], // Aquarius
    [65, 85, 65, 95, 65, 80, 70, 95, 60, 85, 75, 85], // Pisces
];

/// Base compatibility for an ordered sign pair
#[inline]
pub fn compatibility(first: ZodiacSign, second: ZodiacSign) -> u8 {
    COMPATIBILITY
        .get(first.index())
        .and_then(|row| row.get(second.index()))
        .copied()
        .unwrap_or(DEFAULT_ZODIAC_COMPATIBILITY)
}
