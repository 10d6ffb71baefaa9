pub mod classifier;
pub mod extract;

pub use classifier::{canonical_item_name, classify, classify_listing, detect_listing_type};
pub use extract::extract_models;
