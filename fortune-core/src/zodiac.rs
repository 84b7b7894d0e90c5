//! Zodiac sign catalog and calendar-range resolution.

use std::fmt;

/// A month/day pair on the zodiac calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// `month * 100 + day`, the ordering key used by range tests.
    pub const fn encoded(self) -> u32 {
        self.month * 100 + self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}月{}日", self.month, self.day)
    }
}

/// One of the twelve zodiac signs.
#[derive(Debug, PartialEq, Eq)]
pub struct ZodiacSign {
    /// Localized display name
    pub name: &'static str,
    /// Stable identifier, also used for cache keys and API queries
    pub english_key: &'static str,
    pub start: MonthDay,
    pub end: MonthDay,
}

impl ZodiacSign {
    /// Check whether a date falls into this sign's range.
    ///
    /// Ranges whose start sorts after their end wrap around the new year.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let current = MonthDay::new(month, day).encoded();
        let start = self.start.encoded();
        let end = self.end.encoded();

        if start <= end {
            return current >= start && current <= end;
        }

        current >= start || current <= end
    }

    /// Lowercased key sent to the horoscope API.
    pub fn api_key(&self) -> String {
        self.english_key.to_lowercase()
    }

    /// `牡羊座 (Aries)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.english_key)
    }

    /// `期間: 3月21日 - 4月19日`
    pub fn range_text(&self) -> String {
        format!("期間: {} - {}", self.start, self.end)
    }
}

/// The fixed catalog, in the order the resolver scans it.
pub static ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign { name: "牡羊座", english_key: "Aries", start: MonthDay::new(3, 21), end: MonthDay::new(4, 19) },
    ZodiacSign { name: "牡牛座", english_key: "Taurus", start: MonthDay::new(4, 20), end: MonthDay::new(5, 20) },
    ZodiacSign { name: "双子座", english_key: "Gemini", start: MonthDay::new(5, 21), end: MonthDay::new(6, 21) },
    ZodiacSign { name: "蟹座", english_key: "Cancer", start: MonthDay::new(6, 22), end: MonthDay::new(7, 22) },
    ZodiacSign { name: "獅子座", english_key: "Leo", start: MonthDay::new(7, 23), end: MonthDay::new(8, 22) },
    ZodiacSign { name: "乙女座", english_key: "Virgo", start: MonthDay::new(8, 23), end: MonthDay::new(9, 22) },
    ZodiacSign { name: "天秤座", english_key: "Libra", start: MonthDay::new(9, 23), end: MonthDay::new(10, 23) },
    ZodiacSign { name: "蠍座", english_key: "Scorpio", start: MonthDay::new(10, 24), end: MonthDay::new(11, 22) },
    ZodiacSign { name: "射手座", english_key: "Sagittarius", start: MonthDay::new(11, 23), end: MonthDay::new(12, 21) },
    ZodiacSign { name: "山羊座", english_key: "Capricorn", start: MonthDay::new(12, 22), end: MonthDay::new(1, 19) },
    ZodiacSign { name: "水瓶座", english_key: "Aquarius", start: MonthDay::new(1, 20), end: MonthDay::new(2, 18) },
    ZodiacSign { name: "魚座", english_key: "Pisces", start: MonthDay::new(2, 19), end: MonthDay::new(3, 20) },
];

/// Resolve the sign for a month/day pair.
///
/// Days are not validated against month lengths, so `(2, 30)` resolves like
/// any other February date.
pub fn find_zodiac(month: u32, day: u32) -> Option<&'static ZodiacSign> {
    ZODIAC_SIGNS.iter().find(|sign| sign.contains(month, day))
}

/// Look up a sign by its english key, ignoring case.
pub fn sign_by_key(key: &str) -> Option<&'static ZodiacSign> {
    let key = key.trim();
    ZODIAC_SIGNS
        .iter()
        .find(|sign| sign.english_key.eq_ignore_ascii_case(key))
}
