pub mod errors;
pub mod lookup;
pub mod slug;

pub use errors::{AtelierError, ConfigError, ThemeError};
pub use lookup::Lookup;
pub use slug::is_valid_slug;

pub type Result<T> = std::result::Result<T, AtelierError>;
