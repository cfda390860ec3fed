#[cfg(feature = "document")]
pub mod document;

#[cfg(feature = "fs")]
pub mod fs;

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(feature = "settings")]
pub mod settings;

#[cfg(feature = "settings")]
pub use settings::SettingsMerger;
