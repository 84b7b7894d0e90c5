pub mod card;

use anyhow::Result;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, themes::Colorization, Color, Style},
};

use fortune_core::ZODIAC_SIGNS;
use fortune_service::{Delivery, Origin};

/// Machine-readable form of a delivery.
pub fn delivery_json(delivery: &Delivery) -> Result<Value> {
    let (origin, message) = match &delivery.origin {
        Origin::Fresh => ("fresh", None),
        Origin::Cached => ("cached", None),
        Origin::Fallback(error) => ("fallback", Some(error.user_message())),
    };

    Ok(json!({
        "sign": {
            "key": delivery.sign.english_key,
            "name": delivery.sign.name,
            "range": delivery.sign.range_text(),
        },
        "origin": origin,
        "message": message,
        "fortune": serde_json::to_value(&delivery.fortune)?,
    }))
}

/// Print a delivery as a card or as JSON.
pub fn render_delivery(delivery: &Delivery, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&delivery_json(delivery)?)?);
    } else {
        card::render_fortune_card(delivery);
    }
    Ok(())
}

/// Print the sign catalog.
pub fn render_signs(as_json: bool) -> Result<()> {
    if as_json {
        let signs: Vec<Value> = ZODIAC_SIGNS
            .iter()
            .map(|sign| {
                json!({
                    "key": sign.english_key,
                    "name": sign.name,
                    "start": { "month": sign.start.month, "day": sign.start.day },
                    "end": { "month": sign.end.month, "day": sign.end.day },
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&signs)?);
        return Ok(());
    }

    let mut builder = Builder::new();
    builder.push_record(vec!["SIGN".to_string(), "KEY".to_string(), "RANGE".to_string()]);
    for sign in &ZODIAC_SIGNS {
        builder.push_record(vec![
            sign.name.to_string(),
            sign.english_key.to_string(),
            format!("{} - {}", sign.start, sign.end),
        ]);
    }

    let mut table = builder.build();
    println!("{}", table
        .with(Colorization::exact([Color::FG_CYAN], Rows::first()))
        .with(Style::rounded()));

    Ok(())
}
