// Settings service
// Reads and writes user preferences as TOML

mod service;

pub use service::SettingsService;
