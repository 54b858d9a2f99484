pub mod prompt;
pub mod resolver;
pub mod sample;
pub mod session;
pub mod stats;
