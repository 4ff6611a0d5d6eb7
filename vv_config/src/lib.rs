pub mod error;
pub mod loader;
pub mod store;

pub use error::ConfigError;
pub use loader::{load_file, parse_content, Format};
pub use store::{VendorConfig, VendorConfigSet};
