//! Dashboard settings kept in `.asrdash/config.toml`.

mod errors;
mod io;
mod types;

pub use errors::ConfigError;
pub use io::{CONFIG_FILE_NAME, config_path, load_or_default, load_from_path, save_to_path};
pub use types::{AppSettings, DataSettings, DisplaySettings};
