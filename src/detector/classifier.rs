use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{confidence, UNKNOWN_MODEL};
use crate::detector::extract::extract_models;
use crate::registry::{normalize_item_name, ModelRegistry};
use crate::types::{ClassificationResult, Listing, ListingType};

static ACCESSORY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\bquick[\s-]?release\b",
        r"\bplate\b",
        r"\bgrip\b",
        r"\bhandgrip\b",
        r"\bl[-\s]?shape\b",
        r"\bl[-\s]?bracket\b",
        r"\bcage\b",
        r"\brig\b",
        r"\bmount\b",
        r"\badapter\b",
        r"\bbattery\b",
        r"\bcharger\b",
        r"\bcase\b",
        r"\bstrap\b",
        r"\btripod\b",
        r"\bgimbal\b",
        r"\bhot[\s-]?shoe\b",
    ])
});

static LENS_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[r"\blens\b", r"\b\d{2,3}\s?mm\b", r"\bf/\d"]));

static CAMERA_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\bcamera\b",
        r"\bmirrorless\b",
        r"\bcamera body\b",
        r"\bbody only\b",
    ])
});

static COMPATIBILITY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\bfor\s+(sony|alpha|a7|zv|rx|ilce)",
        r"\bcompatible with\b",
        r"\bworks with\b",
        r"\bfits?\b",
    ])
});

fn compile_all(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|src| Regex::new(&format!("(?i){src}")).expect("static keyword pattern"))
        .collect()
}

fn contains_any(text: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

/// Listing category by precedence: accessory keywords, then compatibility
/// phrasing around a model, then lens keywords, then any model or camera
/// phrasing. Camera phrasing vetoes the compatibility and lens rules.
pub fn detect_listing_type(text: &str, matched_models: &[String]) -> ListingType {
    let camera_phrasing = contains_any(text, &CAMERA_PATTERNS);

    if contains_any(text, &ACCESSORY_PATTERNS) {
        return ListingType::Accessory;
    }
    if !matched_models.is_empty() && contains_any(text, &COMPATIBILITY_PATTERNS) && !camera_phrasing
    {
        return ListingType::Accessory;
    }
    if contains_any(text, &LENS_PATTERNS) && !camera_phrasing {
        return ListingType::Lens;
    }
    if !matched_models.is_empty() || camera_phrasing {
        return ListingType::CameraBody;
    }
    ListingType::Other
}

/// Classify lower-cased listing text against the model the search was for.
///
/// `item_name` is the free-text search item; it is resolved to a target model
/// through the registry. Never fails: no signal at all is a low-confidence
/// `unknown` verdict.
pub fn classify(text: &str, item_name: &str) -> ClassificationResult {
    let target = ModelRegistry::global().resolve_target(item_name);
    let matched_models = extract_models(text);
    let listing_type = detect_listing_type(text, &matched_models);

    let target_matched = target.filter(|t| matched_models.iter().any(|m| m == t));

    let detected_model = match (target_matched, matched_models.first()) {
        (Some(t), _) => t.to_string(),
        (None, Some(first)) => first.clone(),
        (None, None) => UNKNOWN_MODEL.to_string(),
    };

    let (is_target_exact, confidence, reason) = match target_matched {
        Some(t) if matched_models.len() == 1 && listing_type == ListingType::CameraBody => (
            true,
            confidence::EXACT,
            format!(
                "Detected exact target camera model {t} in title/description \
                 without conflicting model signals."
            ),
        ),
        Some(t) if listing_type != ListingType::CameraBody => (
            false,
            confidence::TARGET_NOT_BODY,
            format!(
                "Detected {listing_type} that references target model {t}, \
                 not a target camera body."
            ),
        ),
        _ if !matched_models.is_empty() => (
            false,
            confidence::MODEL_SIGNAL,
            format!(
                "Detected model signal(s): {}. Target model is {}, \
                 so this listing is not an exact match.",
                matched_models.join(", "),
                target.unwrap_or(UNKNOWN_MODEL),
            ),
        ),
        _ => (
            false,
            confidence::NO_SIGNAL,
            "Could not detect a reliable camera model in title/description; \
             marked as non-exact by default."
                .to_string(),
        ),
    };

    ClassificationResult {
        detected_model,
        listing_type,
        is_target_exact,
        confidence,
        reason,
        matched_models,
    }
}

pub fn classify_listing(listing: &Listing, item_name: &str) -> ClassificationResult {
    classify(&listing.combined_text(), item_name)
}

/// Item name an observation is stored under: the detected model when there
/// is one, so listings found by different searches aggregate together.
pub fn canonical_item_name(item_name: &str, detected_model: &str) -> String {
    if !detected_model.is_empty() && detected_model != UNKNOWN_MODEL {
        return detected_model.to_string();
    }
    normalize_item_name(item_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(title: &str, description: &str, item: &str) -> ClassificationResult {
        let listing = Listing {
            title: title.to_string(),
            description: description.to_string(),
            ..Listing::default()
        };
        classify_listing(&listing, item)
    }

    #[test]
    fn lone_target_body_is_exact() {
        let result = run("Sony A7C II", "Sony A7C II body only.", "sony_a7c2");
        assert_eq!(result.detected_model, "sony_a7c2");
        assert_eq!(result.listing_type, ListingType::CameraBody);
        assert!(result.is_target_exact);
        assert_eq!(result.confidence, 0.98);
    }

    #[test]
    fn quick_release_plate_is_accessory() {
        let result = classify("quick release plate for sony a7c ii", "sony_a7c2");
        assert_eq!(result.listing_type, ListingType::Accessory);
        assert!(!result.is_target_exact);
        assert_eq!(result.confidence, 0.92);
        assert!(result.reason.contains("accessory"));
        assert!(result.reason.contains("not a target camera body"));
    }

    #[test]
    fn compatibility_phrasing_without_camera_words_is_accessory() {
        let result = classify("screen protector fits sony a7iii", "sony a7iii");
        assert_eq!(result.listing_type, ListingType::Accessory);
        assert_eq!(result.detected_model, "sony_a7iii");
    }

    #[test]
    fn camera_words_veto_compatibility_rule() {
        let result = classify("sony a6400 camera, fits in my bag", "sony_a6400");
        assert_eq!(result.listing_type, ListingType::CameraBody);
        assert!(result.is_target_exact);
    }

    #[test]
    fn lens_keywords_classify_as_lens() {
        let result = classify("sony fe 50mm f/1.8", "sony_a7c2");
        assert_eq!(result.listing_type, ListingType::Lens);
        assert_eq!(result.detected_model, UNKNOWN_MODEL);
        assert_eq!(result.confidence, 0.35);
    }

    #[test]
    fn other_model_is_reported_but_not_exact() {
        let result = run("Sony RX1R compact camera", "Sony RX1R camera body.", "sony_a7c2");
        assert_eq!(result.detected_model, "sony_rx1r");
        assert!(!result.is_target_exact);
        assert_eq!(result.confidence, 0.95);
        assert!(result.reason.contains("sony_rx1r"));
        assert!(result.reason.contains("Target model is sony_a7c2"));
    }

    #[test]
    fn target_plus_other_model_is_not_exact() {
        let result = classify("sony a7c ii or sony a6400 body", "sony_a7c2");
        assert_eq!(result.detected_model, "sony_a7c2");
        assert!(!result.is_target_exact);
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn generic_only_text_detects_generic_model() {
        let result = run("Sony A7C full-frame camera", "Sony A7C camera body.", "sony_a7c2");
        assert_eq!(result.detected_model, "sony_a7c");
        assert_eq!(result.listing_type, ListingType::CameraBody);
        assert!(!result.is_target_exact);
    }

    #[test]
    fn unresolvable_target_reports_unknown_in_reason() {
        let result = classify("ricoh gr3 body only", "film camera");
        assert_eq!(result.detected_model, "ricoh_gr3");
        assert!(!result.is_target_exact);
        assert!(result.reason.contains("Target model is unknown"));
    }

    #[test]
    fn no_signal_is_other_with_low_confidence() {
        let result = classify("vintage leather sofa", "sony_a7c2");
        assert_eq!(result.detected_model, UNKNOWN_MODEL);
        assert_eq!(result.listing_type, ListingType::Other);
        assert_eq!(result.confidence, 0.35);
        assert!(result.matched_models.is_empty());
    }

    #[test]
    fn canonical_item_name_prefers_detected_model() {
        assert_eq!(canonical_item_name("Sony A7C II", "sony_a7c2"), "sony_a7c2");
        assert_eq!(canonical_item_name("Sony A7C II", UNKNOWN_MODEL), "sony_a7c_ii");
    }
}
