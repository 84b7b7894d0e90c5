//! Horoscope payload normalization.
//!
//! Turns whatever the horoscope API returned into a [`FortuneRecord`]. Each
//! field is looked up under several names seen across horoscope APIs; missing
//! fields fall back to generated content instead of failing the request.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use tracing::debug;

use crate::display::display_date;
use crate::error::{FortuneError, Result};
use crate::fallback::fallback_fortune;
use crate::fortune::{FortuneRecord, Scores};
use crate::sources::SourceList;
use crate::zodiac::ZodiacSign;

pub const OVERALL_PATHS: &[&str] = &["overall", "general", "general_text", "description", "prediction", "horoscope"];
pub const LOVE_PATHS: &[&str] = &["love", "love.text", "romance", "romance_text", "love_prediction"];
pub const WORK_PATHS: &[&str] = &["work", "career", "career_text", "business", "professional"];
pub const MONEY_PATHS: &[&str] = &["money", "finance", "financial", "wealth", "money_text"];
pub const COLOR_PATHS: &[&str] = &["color", "lucky_color", "luckyColour", "luckycolour"];
pub const ACTION_PATHS: &[&str] = &["lucky_action", "action", "lucky_activity", "luckyAction"];
pub const LUCKY_TIME_PATHS: &[&str] = &["lucky_time", "luckyTime", "lucky_hour"];
pub const DATE_PATHS: &[&str] = &["current_date", "date", "today", "meta.date", "metadata.date"];

pub const OVERALL_SCORE_PATHS: &[&str] =
    &["overall_score", "overall.score", "scores.overall", "ratings.overall", "score", "rating"];
pub const LOVE_SCORE_PATHS: &[&str] = &["love_score", "love.score", "scores.love", "ratings.love", "romance_score"];
pub const WORK_SCORE_PATHS: &[&str] = &["work_score", "work.score", "scores.work", "ratings.work", "career_score"];
pub const MONEY_SCORE_PATHS: &[&str] =
    &["money_score", "money.score", "scores.money", "ratings.money", "finance_score"];

/// Sentence used as the lucky action when only a lucky time is known.
pub fn lucky_time_action(lucky_time: &str) -> String {
    format!("ラッキータイムは「{lucky_time}」。その時間帯に動くとチャンスをつかめます。")
}

/// Normalize a raw API payload for a sign.
///
/// `now` stands in for the current instant wherever the payload has no date,
/// so the same inputs always produce the same record.
pub fn normalize_horoscope(
    payload: &Value,
    sign: &ZodiacSign,
    now: &DateTime<FixedOffset>,
) -> Result<FortuneRecord> {
    if !payload.is_object() {
        return Err(FortuneError::InvalidPayload);
    }

    let sources = SourceList::flatten(payload);
    let fallback = fallback_fortune(Some(sign), now);
    debug!(sign = sign.english_key, sources = sources.len(), "normalizing horoscope payload");

    let text = |paths: &[&str], default: String| sources.first_string(paths).unwrap_or(default);

    let overall = text(OVERALL_PATHS, fallback.overall);
    let love = text(LOVE_PATHS, fallback.love);
    let work = text(WORK_PATHS, fallback.work);
    let money = text(MONEY_PATHS, fallback.money);
    let color = text(COLOR_PATHS, fallback.color);

    // Direct action, then a lucky time sentence, then the sign's suggestion
    let action = sources
        .first_string(ACTION_PATHS)
        .or_else(|| sources.first_string(LUCKY_TIME_PATHS).map(|time| lucky_time_action(&time)))
        .unwrap_or(fallback.action);

    let date = display_date(sources.first_string(DATE_PATHS).as_deref(), now);

    let scores = Scores {
        overall: sources.first_score(OVERALL_SCORE_PATHS),
        love: sources.first_score(LOVE_SCORE_PATHS),
        work: sources.first_score(WORK_SCORE_PATHS),
        money: sources.first_score(MONEY_SCORE_PATHS),
    };

    Ok(FortuneRecord {
        date,
        overall,
        love,
        work,
        money,
        color,
        action,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::sign_by_key;
    use serde_json::json;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-01T09:30:00+09:00").unwrap()
    }

    fn aries() -> &'static ZodiacSign {
        sign_by_key("Aries").unwrap()
    }

    #[test]
    fn rejects_non_object_payloads() {
        for payload in [json!([1, 2]), json!("text"), json!(3), Value::Null] {
            assert_eq!(normalize_horoscope(&payload, aries(), &now()), Err(FortuneError::InvalidPayload));
        }
    }

    #[test]
    fn lucky_time_becomes_action() {
        let payload = json!({ "overall": "fine", "love_score": 90, "lucky_time": "18:00" });
        let fortune = normalize_horoscope(&payload, aries(), &now()).unwrap();

        assert_eq!(fortune.overall, "fine");
        assert!(fortune.action.contains("18:00"));
        assert_eq!(fortune.scores.love, Some(4.5));
        assert_eq!(fortune.scores.work, None);
        assert_eq!(fortune.scores.overall, None);
    }

    #[test]
    fn direct_action_wins_over_lucky_time() {
        let payload = json!({ "lucky_time": "18:00", "details": { "action": "Call a friend" } });
        let fortune = normalize_horoscope(&payload, aries(), &now()).unwrap();
        assert_eq!(fortune.action, "Call a friend");
    }

    #[test]
    fn empty_object_yields_fallback_content() {
        let fortune = normalize_horoscope(&json!({}), aries(), &now()).unwrap();
        let fallback = fallback_fortune(Some(aries()), &now());
        assert_eq!(fortune, fallback);
    }

    #[test]
    fn nested_payload_shapes_are_understood() {
        let payload = json!({
            "success": true,
            "data": {
                "date": "2024-03-21",
                "horoscope_data": "Things line up.",
                "love": { "text": "Say it.", "score": 8 },
                "career": "Ship it.",
                "finance": "Save it.",
                "lucky_color": "Teal",
                "scores": { "work": "72%", "money": 3 }
            }
        });
        let fortune = normalize_horoscope(&payload, aries(), &now()).unwrap();

        assert_eq!(fortune.date, "2024年3月21日");
        assert_eq!(fortune.love, "Say it.");
        assert_eq!(fortune.work, "Ship it.");
        assert_eq!(fortune.money, "Save it.");
        assert_eq!(fortune.color, "Teal");
        assert_eq!(fortune.scores.love, Some(0.4));
        assert_eq!(fortune.scores.work, Some(3.6));
        assert_eq!(fortune.scores.money, Some(3.0));
        // `horoscope_data` is not a known name, so overall falls back
        assert!(fortune.overall.starts_with("牡羊座の"));
    }

    #[test]
    fn missing_date_renders_now() {
        let fortune = normalize_horoscope(&json!({ "overall": "x" }), aries(), &now()).unwrap();
        assert_eq!(fortune.date, "2024年6月1日");
    }

    #[test]
    fn normalization_is_repeatable() {
        let payload = json!({ "general": "calm", "meta": { "date": "tomorrow" }, "rating": "4" });
        let first = normalize_horoscope(&payload, aries(), &now()).unwrap();
        let second = normalize_horoscope(&payload, aries(), &now()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.date, "tomorrow");
        assert_eq!(first.scores.overall, Some(4.0));
    }
}
