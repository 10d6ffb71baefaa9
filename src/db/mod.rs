pub mod models;
pub mod price;
pub mod schema;
pub mod sold_time;
pub mod writer;

pub use price::parse_price;
pub use writer::ObservationStore;
