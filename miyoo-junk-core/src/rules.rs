//! Per-card layout rules: which consoles to skip, config aliases, and
//! which console stores titles as folders of discs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Consoles whose folders don't follow the one-file-per-ROM layout.
const DEFAULT_SKIP: &[&str] = &["DOS", "PORTS", "PICO"];

/// ROM folder names whose launcher config lives under a different name.
const DEFAULT_ALIASES: &[(&str, &str)] = &[("PS", "PSX")];

const DEFAULT_MULTI_DISC_CONSOLE: &str = "PS";

/// Layout rules applied when scanning a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutRules {
    /// ROM folders never audited.
    pub skip: Vec<String>,

    /// ROM folder whose titles are directories of disc images.
    pub multi_disc_console: String,

    /// ROM folder name → `Emu/` config folder name.
    pub aliases: BTreeMap<String, String>,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP.iter().map(|s| s.to_string()).collect(),
            multi_disc_console: DEFAULT_MULTI_DISC_CONSOLE.to_string(),
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl LayoutRules {
    pub fn is_skipped(&self, console: &str) -> bool {
        self.skip.iter().any(|s| s == console)
    }

    /// Name of the `Emu/` folder holding this console's config.
    pub fn config_name<'a>(&'a self, console: &'a str) -> &'a str {
        self.aliases
            .get(console)
            .map(String::as_str)
            .unwrap_or(console)
    }

    pub fn is_multi_disc(&self, console: &str) -> bool {
        self.multi_disc_console == console
    }
}
