pub mod banner;
pub mod messages;
pub mod report;
