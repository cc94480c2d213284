//! Layout settings persisted as TOML in the user's config directory.

mod service;

pub use service::SettingsService;
