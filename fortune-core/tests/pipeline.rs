// tests/pipeline.rs
//
// End-to-end checks of the normalization pipeline through the public API.
//
use chrono::{DateTime, FixedOffset, NaiveDate};
use fortune_core::{
    find_zodiac, normalize_horoscope, sign_by_key, sign_for_birthdate, FortuneError, ZODIAC_SIGNS,
};
use proptest::prelude::*;
use serde_json::json;

fn fixed_now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-02-14T07:00:00+09:00").unwrap()
}

#[test]
fn every_day_of_a_leap_year_has_exactly_one_sign() {
    let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    while day <= end {
        use chrono::Datelike;
        let matches = ZODIAC_SIGNS
            .iter()
            .filter(|sign| sign.contains(day.month(), day.day()))
            .count();
        assert_eq!(matches, 1, "{day} matched {matches} signs");
        day = day.succ_opt().unwrap();
    }
}

proptest! {
    #[test]
    fn resolved_sign_contains_the_date(month in 1u32..=12, day in 1u32..=31) {
        let sign = find_zodiac(month, day).expect("catalog covers the year");
        prop_assert!(sign.contains(month, day));
    }
}

#[test]
fn birthdate_to_fortune() {
    let sign = sign_for_birthdate("1992-04-20").unwrap();
    assert_eq!(sign.english_key, "Taurus");

    let payload = json!({
        "data": {
            "date": "Feb 14, 2025",
            "horoscope": "Steady progress.",
            "ratings": { "overall": 80, "love": 84 },
            "luckyColour": "Amber",
            "lucky_hour": "7 AM"
        }
    });

    let fortune = normalize_horoscope(&payload, sign, &fixed_now()).unwrap();
    assert_eq!(fortune.date, "2025年2月14日");
    assert_eq!(fortune.overall, "Steady progress.");
    assert_eq!(fortune.color, "Amber");
    assert!(fortune.action.contains("7 AM"));
    assert_eq!(fortune.scores.overall, Some(4.0));
    assert_eq!(fortune.scores.love, Some(4.2));
    assert_eq!(fortune.scores.money, None);
    assert!(fortune.love.starts_with("牡牛座の"));
}

#[test]
fn text_field_matches_before_nested_score_path() {
    let sign = sign_by_key("Taurus").unwrap();
    let payload = json!({ "data": { "ratings": { "love": "4,2" } } });

    let fortune = normalize_horoscope(&payload, sign, &fixed_now()).unwrap();
    assert_eq!(fortune.love, "4,2");
    assert_eq!(fortune.scores.love, Some(4.2));
}

#[test]
fn invalid_birthdate_has_user_message() {
    let err = sign_for_birthdate("04/20/1992").unwrap_err();
    assert!(matches!(err, FortuneError::InvalidBirthdate(_)));
    assert_eq!(err.user_message(), "生年月日の形式が正しくありません。");
}

#[test]
fn fortune_serializes_with_null_scores() {
    let sign = sign_by_key("Pisces").unwrap();
    let fortune = normalize_horoscope(&json!({ "love": "ok" }), sign, &fixed_now()).unwrap();
    let value = serde_json::to_value(&fortune).unwrap();

    assert_eq!(value["love"], "ok");
    assert!(value["scores"]["love"].is_null());
    assert_eq!(value["color"], "ディープブルー");
}
