pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::{DayFilter, Filter, FilterMode, MonthFilter};
pub use trip::{Schema, TripRecord, TripTable};
