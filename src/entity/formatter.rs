//! Entity formatter - formats annotated scan output

use crate::entity::types::{Entities, Entity, EntityType};
use crate::utils::hex::to_hex;

#[cfg(feature = "colored-output")]
use colored::Colorize;

/// Format entities as text with inline UTF-8 renderings of GBK SSIDs
pub fn format_text(entities: &Entities, use_color: bool) -> String {
    let mut result = String::new();

    for entity in &entities.entities {
        result.push_str(&entity.text);

        if let Some(ref utf8) = entity.utf8 {
            result.push_str(&format!(" [{}]", highlight(utf8, use_color)));
        }
    }

    result
}

#[cfg(feature = "colored-output")]
fn highlight(text: &str, use_color: bool) -> String {
    if use_color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(not(feature = "colored-output"))]
fn highlight(text: &str, _use_color: bool) -> String {
    text.to_string()
}

/// Format entities as JSON
pub fn format_json(entities: &Entities) -> Result<String, serde_json::Error> {
    use serde_json::json;

    let items: Vec<_> = entities
        .entities
        .iter()
        .filter(|e| e.entity_type != EntityType::Plain)
        .map(|e| {
            json!({
                "text": e.text,
                "position": {
                    "start": e.location.0,
                    "end": e.location.1,
                },
                "hex": e.bytes.as_deref().map(to_hex),
                "gbk": e.gbk,
                "utf8": e.utf8,
            })
        })
        .collect();

    serde_json::to_string_pretty(&json!({
        "entities": items
    }))
}

/// Format single entity information
pub fn format_entity(entity: &Entity) -> String {
    match (&entity.bytes, &entity.utf8) {
        (Some(bytes), Some(utf8)) => format!("{} ({}) -> {}", entity.text, to_hex(bytes), utf8),
        (Some(bytes), None) => format!("{} ({})", entity.text, to_hex(bytes)),
        _ => entity.text.clone(),
    }
}
