use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing handed over by the scraper
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub marketplace: String,
    pub id: String,
    pub title: String,
    /// Price exactly as displayed, e.g. "$1,900" or "CA$1,800 | CA$2,000".
    pub price: String,
    pub post_url: String,
    pub location: String,
    pub seller: String,
    pub condition: String,
    pub description: String,
}

impl Listing {
    /// Lower-cased title and description joined by a single space.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description)
            .trim()
            .to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// Availability bucket
// ---------------------------------------------------------------------------

/// Marketplace-reported state of a listing when it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    In,
    Out,
    /// Any other bucket the marketplace exposes ("all", "pending", ...).
    Other(String),
}

impl Availability {
    pub fn as_str(&self) -> &str {
        match self {
            Availability::In => "in",
            Availability::Out => "out",
            Availability::Other(s) => s,
        }
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Availability::Out)
    }
}

impl From<&str> for Availability {
    fn from(s: &str) -> Self {
        match s {
            "in" => Availability::In,
            "out" => Availability::Out,
            other => Availability::Other(other.to_string()),
        }
    }
}

impl From<String> for Availability {
    fn from(s: String) -> Self {
        Availability::from(s.as_str())
    }
}

impl From<Availability> for String {
    fn from(a: Availability) -> Self {
        a.as_str().to_string()
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    CameraBody,
    Lens,
    Accessory,
    Other,
}

impl ListingType {
    /// Reads a stored label; anything unrecognised is `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "camera_body" => ListingType::CameraBody,
            "lens" => ListingType::Lens,
            "accessory" => ListingType::Accessory,
            _ => ListingType::Other,
        }
    }
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ListingType::CameraBody => "camera_body",
            ListingType::Lens => "lens",
            ListingType::Accessory => "accessory",
            ListingType::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// Verdict attached to an observation at write time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Canonical model id, or "unknown".
    pub detected_model: String,
    pub listing_type: ListingType,
    pub is_target_exact: bool,
    pub confidence: f64,
    pub reason: String,
    /// Every model the text matched after generic suppression. Not persisted.
    pub matched_models: Vec<String>,
}

// ---------------------------------------------------------------------------
// Sold-time estimation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoldTimeMethod {
    /// No active observation ever preceded the first "out" one.
    FirstSeenOutOfStock,
    /// Halfway between the last active and the first "out" observation.
    MidpointLastActiveAndFirstSold,
}

impl SoldTimeMethod {
    /// Reads a stored method; missing or unrecognised labels fall back to
    /// `FirstSeenOutOfStock`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("midpoint_last_active_and_first_sold") => {
                SoldTimeMethod::MidpointLastActiveAndFirstSold
            }
            _ => SoldTimeMethod::FirstSeenOutOfStock,
        }
    }
}

impl std::fmt::Display for SoldTimeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoldTimeMethod::FirstSeenOutOfStock => write!(f, "first_seen_out_of_stock"),
            SoldTimeMethod::MidpointLastActiveAndFirstSold => {
                write!(f, "midpoint_last_active_and_first_sold")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoldTimeEstimate {
    pub sold_estimated_at: DateTime<Utc>,
    pub method: SoldTimeMethod,
}

// ---------------------------------------------------------------------------
// Stored observations
// ---------------------------------------------------------------------------

/// Search context the scraper was in when it saw a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationContext {
    /// Free-text item name being searched ("sony_a7c2", "Ricoh GR III", ...).
    pub item_name: String,
    pub search_city: String,
    pub search_phrase: String,
    pub availability: Availability,
}

/// A listing as it was stored at one observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSnapshot {
    pub listing: Listing,
    /// Detected model, or the normalised search item when detection failed.
    pub item_name: String,
    pub search_city: String,
    pub search_phrase: String,
    pub availability: Availability,
    pub observed_at: DateTime<Utc>,
    pub price_value: Option<f64>,
    pub currency: Option<String>,
    pub detected_model: String,
    pub listing_type: ListingType,
    pub is_target_exact: bool,
    pub classification_confidence: Option<f64>,
    pub classification_reason: Option<String>,
    pub sold_estimate: Option<SoldTimeEstimate>,
}

// ---------------------------------------------------------------------------
// Market price summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPriceSummary {
    pub item_name: String,
    pub marketplace: String,
    pub search_city: String,
    pub window_days: u32,
    pub sample_size: i64,
    /// Mean sold price of the deduplicated sample.
    pub msrp_estimate: Option<f64>,
    /// Most frequent currency in the sample.
    pub currency: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_round_trips_through_labels() {
        assert_eq!(Availability::from("out"), Availability::Out);
        assert_eq!(Availability::from("in"), Availability::In);
        assert_eq!(Availability::from("all"), Availability::Other("all".to_string()));
        assert_eq!(Availability::Other("all".to_string()).to_string(), "all");
        assert!(!Availability::from("all").is_out());
    }

    #[test]
    fn combined_text_is_lowercased_and_trimmed() {
        let listing = Listing {
            title: "Sony A7C II".to_string(),
            description: String::new(),
            ..Listing::default()
        };
        assert_eq!(listing.combined_text(), "sony a7c ii");
    }

    #[test]
    fn missing_sold_method_defaults_to_first_seen() {
        assert_eq!(SoldTimeMethod::from_label(None), SoldTimeMethod::FirstSeenOutOfStock);
        assert_eq!(
            SoldTimeMethod::from_label(Some("midpoint_last_active_and_first_sold")),
            SoldTimeMethod::MidpointLastActiveAndFirstSold
        );
    }
}
