//! Model pattern registry: the static table of recognisable camera models,
//! their recognition patterns, and the alias tables used to resolve free text.
//!
//! Built once on first use and shared read-only for the life of the process.

mod aliases;
mod patterns;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use aliases::{GENERIC_MODEL_OVERRIDES, RX_TOKEN_ALIASES, SONY_TOKEN_ALIASES, TARGET_MODEL_ALIASES};
use patterns::MODEL_PATTERNS;

static REGISTRY: Lazy<ModelRegistry> = Lazy::new(ModelRegistry::build);

static NON_ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex"));

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// One case-insensitive recognition pattern.
///
/// Sources may end in `BODY(?!GUARD)\b`. The `regex` crate has no lookaround,
/// so such a source is split: `BODY\b` is searched, and a hit only counts when
/// `GUARD` does not match right where it ends. Every candidate start position
/// is tried, so a rejected `a7` in "a7iii" does not hide a later bare "a7".
#[derive(Debug)]
pub struct Pattern {
    body: Regex,
    guard: Option<Regex>,
}

impl Pattern {
    pub fn compile(source: &str) -> Result<Self, regex::Error> {
        let Some((body, guard)) = split_negative_lookahead(source) else {
            return Ok(Self {
                body: Regex::new(&format!("(?i){source}"))?,
                guard: None,
            });
        };
        Ok(Self {
            body: Regex::new(&format!("(?i){body}"))?,
            guard: Some(Regex::new(&format!("(?i)^(?:{guard})"))?),
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        let Some(guard) = &self.guard else {
            return self.body.is_match(text);
        };

        let mut at = 0;
        while let Some(m) = self.body.find_at(text, at) {
            if !guard.is_match(&text[m.end()..]) {
                return true;
            }
            let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            at = m.start() + step;
            if at > text.len() {
                break;
            }
        }
        false
    }
}

/// Splits `PREFIX(?!GUARD)SUFFIX` into (`PREFIX SUFFIX`, `GUARD`).
fn split_negative_lookahead(source: &str) -> Option<(String, &str)> {
    let open = source.find("(?!")?;
    let inner_start = open + 3;
    let mut depth = 1usize;
    for (offset, ch) in source[inner_start..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let close = inner_start + offset;
                    let body = format!("{}{}", &source[..open], &source[close + 1..]);
                    return Some((body, &source[inner_start..close]));
                }
            }
            _ => {}
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

pub struct ModelRegistry {
    /// Curated table, in declaration order.
    models: Vec<(&'static str, Vec<Pattern>)>,
    target_aliases: HashMap<&'static str, &'static str>,
    sony_aliases: HashMap<&'static str, &'static str>,
    rx_aliases: HashMap<&'static str, &'static str>,
}

impl ModelRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static ModelRegistry {
        &REGISTRY
    }

    fn build() -> Self {
        let models = MODEL_PATTERNS
            .iter()
            .map(|(model, sources)| {
                let compiled = sources
                    .iter()
                    .map(|src| Pattern::compile(src).expect("static model pattern"))
                    .collect();
                (*model, compiled)
            })
            .collect();

        Self {
            models,
            target_aliases: TARGET_MODEL_ALIASES.iter().copied().collect(),
            sony_aliases: SONY_TOKEN_ALIASES.iter().copied().collect(),
            rx_aliases: RX_TOKEN_ALIASES.iter().copied().collect(),
        }
    }

    /// Curated models with their patterns, in table order.
    pub fn models(&self) -> impl Iterator<Item = (&'static str, &[Pattern])> + '_ {
        self.models.iter().map(|(model, pats)| (*model, pats.as_slice()))
    }

    pub fn patterns_for(&self, model: &str) -> Option<&[Pattern]> {
        self.models
            .iter()
            .find(|(m, _)| *m == model)
            .map(|(_, pats)| pats.as_slice())
    }

    /// Alias lookup for an already-normalised item name.
    pub fn alias_for(&self, normalized: &str) -> Option<&'static str> {
        self.target_aliases.get(normalized).copied()
    }

    pub fn sony_token_alias(&self, token: &str) -> Option<&'static str> {
        self.sony_aliases.get(token).copied()
    }

    pub fn rx_token_alias(&self, token: &str) -> Option<&'static str> {
        self.rx_aliases.get(token).copied()
    }

    /// Generic families and their suppressing descendants, in check order.
    pub fn generic_overrides(&self) -> &'static [(&'static str, &'static [&'static str])] {
        GENERIC_MODEL_OVERRIDES
    }

    /// Specific descendants that suppress `model`; empty for non-generic models.
    pub fn generic_overrides_for(&self, model: &str) -> &'static [&'static str] {
        GENERIC_MODEL_OVERRIDES
            .iter()
            .find(|(generic, _)| *generic == model)
            .map_or(&[], |(_, specific)| *specific)
    }

    /// Resolves a free-text search item to a canonical model: alias table
    /// first, then the first curated model id contained in the normalised name.
    pub fn resolve_target(&self, item_name: &str) -> Option<&'static str> {
        let normalized = normalize_item_name(item_name);
        if let Some(model) = self.alias_for(&normalized) {
            return Some(model);
        }
        self.models
            .iter()
            .map(|(model, _)| *model)
            .find(|model| normalized.contains(model))
    }
}

/// Lowercase slug with every non-alphanumeric run collapsed to `_`.
pub fn normalize_item_name(item_name: &str) -> String {
    NON_ALNUM_RUN
        .replace_all(&item_name.to_lowercase(), "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(model: &str, text: &str) -> bool {
        ModelRegistry::global()
            .patterns_for(model)
            .unwrap()
            .iter()
            .any(|p| p.is_match(text))
    }

    #[test]
    fn splits_trailing_lookahead() {
        let (body, guard) = split_negative_lookahead(r"\ba9(?!\s*(ii|iii|2|3)|ii|iii|2|3)\b").unwrap();
        assert_eq!(body, r"\ba9\b");
        assert_eq!(guard, r"\s*(ii|iii|2|3)|ii|iii|2|3");
        assert!(split_negative_lookahead(r"\bfx3\b").is_none());
    }

    #[test]
    fn base_pattern_excludes_suffix_variants() {
        assert!(matches("sony_a7", "sony a7 body only"));
        assert!(!matches("sony_a7", "sony a7iii body"));
        assert!(!matches("sony_a7", "sony a7 iii body"));
        assert!(!matches("sony_a7", "a7c2 for sale"));
        assert!(matches("sony_a7iii", "sony a7 iii body"));
    }

    #[test]
    fn rejected_candidate_does_not_hide_a_later_one() {
        assert!(matches("sony_a7", "trading my a7 iii for an a7 body"));
    }

    #[test]
    fn ricoh_hdf_variants_are_distinct() {
        assert!(matches("ricoh_gr3hdf", "ricoh gr3 hdf"));
        assert!(!matches("ricoh_gr3", "ricoh gr3 hdf"));
        assert!(!matches("ricoh_gr3", "ricoh gr3x"));
        assert!(matches("ricoh_gr3x", "ricoh gr3x"));
        assert!(!matches("ricoh_gr3x", "ricoh gr3x hdf"));
        assert!(matches("ricoh_gr3xhdf", "ricoh gr3xhdf"));
    }

    #[test]
    fn rx100_va_is_not_rx100_v() {
        assert!(matches("sony_rx100va", "rx100va"));
        assert!(!matches("sony_rx100v", "rx100va"));
        assert!(matches("sony_rx100v", "rx100 v"));
        assert!(!matches("sony_rx100", "rx100 v"));
    }

    #[test]
    fn patterns_are_case_insensitive() {
        assert!(matches("sony_fx30", "Sony FX30"));
    }

    #[test]
    fn resolves_target_via_alias_then_substring() {
        let registry = ModelRegistry::global();
        assert_eq!(registry.resolve_target("Sony A7CII"), Some("sony_a7c2"));
        assert_eq!(registry.resolve_target("Sony A7C II"), Some("sony_a7c"));
        assert_eq!(registry.resolve_target("sony_a7c2"), Some("sony_a7c2"));
        assert_eq!(registry.resolve_target("gr3 hdf"), Some("ricoh_gr3hdf"));
        assert_eq!(registry.resolve_target("used sony_a7c2 body"), Some("sony_a7c2"));
        assert_eq!(registry.resolve_target("canon r6"), None);
    }

    #[test]
    fn overrides_are_declared_for_generic_families() {
        let registry = ModelRegistry::global();
        assert!(registry.generic_overrides_for("sony_a7").contains(&"sony_a7iii"));
        assert!(registry.generic_overrides_for("sony_a7iii").is_empty());
    }

    #[test]
    fn normalizes_item_names_to_slugs() {
        assert_eq!(normalize_item_name("  Sony A7C-II!! "), "sony_a7c_ii");
        assert_eq!(normalize_item_name("Ricoh GR III"), "ricoh_gr_iii");
    }
}
