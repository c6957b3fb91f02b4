//! Shared formatting utilities for the UI layer.

use chrono::{Datelike, NaiveDate};

/// Format a date the way the `id-ID` locale writes short dates: `15/1/2024`.
///
/// Day and month are not zero-padded.
pub fn format_deadline(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Age range with the Indonesian unit, e.g. "20-30 tahun".
pub fn format_age_range(range: &str) -> String {
    format!("{} tahun", range.trim())
}

/// Up to two uppercase initials from a display name, for avatar fallbacks.
///
/// "Dewi Lestari" → "DL", "andi" → "A", "" → "?".
pub fn initials_from_name(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// Turn the local part of an email address into a display name:
/// "dewi.lestari@example.com" → "Dewi Lestari".
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
