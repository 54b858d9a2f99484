/// Data layer: reading city trip logs and applying the month/day filter.
pub mod loader;

pub use loader::{load_data, read_trips};
