//! Spanish narration text for evaluated operations
//!
//! The core only formats the text ("5 más 5 es igual a 10"); speaking it is
//! the audio sink's job, fire-and-forget.

use super::history::Operation;

fn operator_word(token: &str) -> Option<&'static str> {
    match token {
        "+" => Some("más"),
        "-" => Some("menos"),
        "×" => Some("por"),
        "÷" => Some("entre"),
        _ => None,
    }
}

/// Format a number for narration: integers without a trailing ".0"
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Render an evaluated operation as narration text.
pub fn narrate_operation(operation: &Operation) -> String {
    let mut parts: Vec<String> = Vec::new();
    for token in &operation.tokens {
        match operator_word(token) {
            Some(word) => parts.push(word.to_string()),
            None => parts.push(token.clone()),
        }
    }
    parts.push("es igual a".to_string());
    parts.push(format_number(operation.result));
    parts.join(" ")
}
