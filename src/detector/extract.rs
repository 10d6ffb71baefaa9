use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registry::ModelRegistry;

/// Alpha-style body numbers: `a7iii`, `a6400`, `sony a7m3`.
static SONY_MODEL_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:sony\s*)?(a[0-9][a-z0-9]{0,7})\b").expect("static regex")
});

/// Compact RX-series numbers: `rx100m7`, `rx1rii`, `rx10iv`.
static SONY_RX_MODEL_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:sony\s*)?(rx(?:1r?|10|100)[a-z0-9]{0,8})\b").expect("static regex")
});

static FOUR_DIGIT_ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^a(\d{4})$").expect("static regex"));

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-]+").expect("static regex"));
static A7_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^a7m([2-6])$").expect("static regex"));
static A7_LINE_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^a7([crs])m([2-6])$").expect("static regex"));
static A9_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^a9m([23])$").expect("static regex"));

/// Every canonical model named in `text`, first-seen order, with generic
/// families dropped when one of their specific descendants is also present.
///
/// `text` is expected lower-cased. Curated patterns run first, then the
/// Alpha token fallback (only when "sony" appears), then the RX fallback.
pub fn extract_models(text: &str) -> Vec<String> {
    let registry = ModelRegistry::global();

    let mut matched: Vec<String> = registry
        .models()
        .filter(|(_, patterns)| patterns.iter().any(|p| p.is_match(text)))
        .map(|(model, _)| model.to_string())
        .collect();

    if text.contains("sony") {
        for caps in SONY_MODEL_TOKEN.captures_iter(text) {
            let token = normalize_sony_token(&caps[1]);
            let fallback = registry
                .sony_token_alias(&token)
                .map(str::to_string)
                .or_else(|| {
                    FOUR_DIGIT_ALPHA
                        .captures(&token)
                        .map(|digits| format!("sony_a{}", &digits[1]))
                });
            if let Some(model) = fallback {
                push_unique(&mut matched, model);
            }
        }
    }

    for caps in SONY_RX_MODEL_TOKEN.captures_iter(text) {
        let token = normalize_rx_token(&caps[1]);
        if let Some(model) = registry.rx_token_alias(&token) {
            push_unique(&mut matched, model.to_string());
        }
    }

    suppress_generic_models(matched, registry)
}

fn push_unique(matched: &mut Vec<String>, model: String) {
    if !matched.contains(&model) {
        matched.push(model);
    }
}

fn suppress_generic_models(matched: Vec<String>, registry: &ModelRegistry) -> Vec<String> {
    let mut present: HashSet<&str> = matched.iter().map(String::as_str).collect();
    for (generic, specific) in registry.generic_overrides() {
        if present.contains(generic) && specific.iter().any(|s| present.contains(s)) {
            present.remove(generic);
        }
    }
    let keep: HashSet<String> = present.into_iter().map(str::to_string).collect();
    matched.into_iter().filter(|m| keep.contains(m)).collect()
}

/// Collapses mark shorthand: `a7m3` -> `a73`, `a7rm4` -> `a7r4`,
/// `a9m2` -> `a92`, `a1m2` -> `a1ii`.
pub fn normalize_sony_token(token: &str) -> String {
    let normalized = SEPARATORS.replace_all(&token.to_lowercase(), "").into_owned();
    let normalized = A7_MARK.replace(&normalized, "a7$1").into_owned();
    let normalized = A7_LINE_MARK.replace(&normalized, "a7$1$2").into_owned();
    let normalized = A9_MARK.replace(&normalized, "a9$1").into_owned();
    if normalized == "a1m2" {
        return "a1ii".to_string();
    }
    normalized
}

pub fn normalize_rx_token(token: &str) -> String {
    SEPARATORS
        .replace_all(&token.to_lowercase(), "")
        .replace("mark", "")
}
