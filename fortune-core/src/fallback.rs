//! Deterministic placeholder fortunes.

use chrono::{DateTime, FixedOffset};

use crate::display::long_date;
use crate::fortune::{FortuneRecord, Scores};
use crate::zodiac::ZodiacSign;

/// Lucky color and action suggested for a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub color: &'static str,
    pub action: &'static str,
}

/// Used when no sign is known or the sign has no table entry.
pub const DEFAULT_SUGGESTION: Suggestion = Suggestion {
    color: "ミッドナイトブルー",
    action: "寝る前に今日の感謝を3つメモする",
};

/// Subject used in templates when the sign is unknown.
pub const DEFAULT_LABEL: &str = "あなた";

static SUGGESTIONS: [(&str, Suggestion); 12] = [
    ("Aries", Suggestion { color: "フレイムレッド", action: "朝一番に短いストレッチでエネルギーを整える" }),
    ("Taurus", Suggestion { color: "フォレストグリーン", action: "お気に入りの香りでリラックスする時間を取る" }),
    ("Gemini", Suggestion { color: "アクアブルー", action: "気になっていた人にメッセージを送ってみる" }),
    ("Cancer", Suggestion { color: "ムーンホワイト", action: "温かい飲み物をゆっくり味わって心を整える" }),
    ("Leo", Suggestion { color: "サンゴールド", action: "鏡の前で今日の目標を声に出して宣言する" }),
    ("Virgo", Suggestion { color: "セージグリーン", action: "デスク周りを5分だけ整えて集中力を高める" }),
    ("Libra", Suggestion { color: "ローズピンク", action: "お気に入りの音楽を流しながら姿勢を正す" }),
    ("Scorpio", Suggestion { color: "ワインレッド", action: "深呼吸を3回行い、意識を内側に向ける" }),
    ("Sagittarius", Suggestion { color: "ロイヤルパープル", action: "気になっていた本や記事を開いて視野を広げる" }),
    ("Capricorn", Suggestion { color: "チャコールグレー", action: "今日のタスクを紙に書き出して優先順位を付ける" }),
    ("Aquarius", Suggestion { color: "ターコイズ", action: "新しいアイデアをメモアプリに残しておく" }),
    ("Pisces", Suggestion { color: "ディープブルー", action: "好きな音楽を聴きながら5分だけ瞑想する" }),
];

/// Suggestion for a sign key, if the table has one.
pub fn suggestion_for(english_key: &str) -> Option<Suggestion> {
    SUGGESTIONS
        .iter()
        .find(|(key, _)| *key == english_key)
        .map(|(_, suggestion)| *suggestion)
}

/// Build a complete fortune from templates.
///
/// Every text field is filled, every score is `None`, and `date` is `now`.
pub fn fallback_fortune(sign: Option<&ZodiacSign>, now: &DateTime<FixedOffset>) -> FortuneRecord {
    let label = sign.map(|s| s.name).unwrap_or(DEFAULT_LABEL);
    let suggestion = sign
        .and_then(|s| suggestion_for(s.english_key))
        .unwrap_or(DEFAULT_SUGGESTION);

    FortuneRecord {
        date: long_date(now),
        overall: format!("{label}の直感が冴える一日。気になったことには素早く行動すると流れをつかめます。"),
        love: format!("{label}の優しさが伝わるタイミング。小さな感謝を言葉にしてみましょう。"),
        work: format!("{label}の集中力が高まる日。最初にタスクの優先順位を整えると効率的に進められます。"),
        money: format!("{label}の堅実さが光ります。日常のルーティンを整えることで運気の底上げに。"),
        color: suggestion.color.to_string(),
        action: suggestion.action.to_string(),
        scores: Scores::default(),
    }
}
