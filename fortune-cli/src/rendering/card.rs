use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Padding, Style},
};

use fortune_core::{FortuneRecord, SCORE_MAX};
use fortune_service::{Delivery, Origin};

/// Render a delivery as a card on stdout.
pub fn render_fortune_card(delivery: &Delivery) {
    println!("{}", fortune_card(delivery));
}

/// Build the card text: sign header, status line, then the fortune table.
pub fn fortune_card(delivery: &Delivery) -> String {
    let sign = delivery.sign;
    let mut lines = vec![
        sign.label().bold().to_string(),
        sign.range_text().dimmed().to_string(),
    ];

    if let Some(status) = status_line(&delivery.origin) {
        lines.push(status);
    }

    lines.push(fortune_table(&delivery.fortune));
    lines.join("\n")
}

fn status_line(origin: &Origin) -> Option<String> {
    match origin {
        Origin::Fresh => None,
        Origin::Cached => Some("キャッシュから表示しています".dimmed().to_string()),
        Origin::Fallback(error) => Some(error.user_message().red().to_string()),
    }
}

fn fortune_table(fortune: &FortuneRecord) -> String {
    let scores = &fortune.scores;
    let rows = [
        ("今日の占い", fortune.date.clone()),
        ("総合運", with_score(&fortune.overall, scores.overall)),
        ("恋愛運", with_score(&fortune.love, scores.love)),
        ("仕事運", with_score(&fortune.work, scores.work)),
        ("金運", with_score(&fortune.money, scores.money)),
        ("ラッキーカラー", fortune.color.clone()),
        ("ラッキーアクション", fortune.action.clone()),
    ];

    let mut builder = Builder::new();
    for (key, value) in rows {
        builder.push_record(vec![format!("{}:", key.cyan().bold()), value]);
    }

    let style = Style::rounded().remove_horizontals().remove_vertical();

    builder
        .build()
        .with(style)
        .with(Padding::new(1, 2, 0, 0))
        .to_string()
}

fn with_score(text: &str, score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{}\n{} {score:.2}", text, stars(score)),
        None => text.to_string(),
    }
}

/// Five-star gauge, rounding to the nearest whole star.
pub fn stars(score: f64) -> String {
    let filled = score.clamp(0.0, SCORE_MAX).round() as usize;
    let empty = SCORE_MAX as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
