//! Shared types for working with a Miyoo Mini style SD card: the directory
//! layout, emulator launcher configs, and per-card layout rules.

pub mod emu_config;
pub mod error;
pub mod layout;
pub mod rules;
pub mod util;

pub use emu_config::EmuConfig;
pub use error::ConfigError;
pub use layout::SdCard;
pub use rules::LayoutRules;
