pub mod claims;
pub mod error;
pub mod settings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
