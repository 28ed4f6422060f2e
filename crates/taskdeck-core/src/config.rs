use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::form::validate_fields;
use crate::overlay::OverlayOptions;
use crate::task::{TaskFields, seed_fields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiOptions {
    /// Mirror `ui_debug` events to the browser console.
    pub debug_log: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self { debug_log: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub drawer: OverlayOptions,
    pub ui: UiOptions,
    seed: Option<Vec<TaskFields>>,
}

impl AppConfig {
    /// Parses the document and checks every `[[seed]]` entry against the
    /// same required-field rule the form applies.
    #[tracing::instrument(skip(raw))]
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let cfg: AppConfig = toml::from_str(raw).context("failed to parse taskdeck config")?;

        for (idx, fields) in cfg.seed.iter().flatten().enumerate() {
            validate_fields(fields)
                .with_context(|| format!("invalid [[seed]] entry {idx} in taskdeck config"))?;
        }

        debug!(
            side = ?cfg.drawer.side,
            size = ?cfg.drawer.size,
            custom_seed = cfg.seed.is_some(),
            "loaded config"
        );
        Ok(cfg)
    }

    /// Configured seed records, or the built-in pair when none are given.
    pub fn seed(&self) -> Vec<TaskFields> {
        self.seed.clone().unwrap_or_else(seed_fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::form::FormField;
    use crate::overlay::{Side, Size};

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = AppConfig::from_toml_str("").expect("parse empty config");
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.seed(), seed_fields());
        assert!(cfg.ui.debug_log);
    }

    #[test]
    fn reads_drawer_and_seed_tables() {
        let raw = r#"
[drawer]
side = "left"
size = "lg"
close_on_backdrop = false

[ui]
debug_log = false

[[seed]]
title = "Water plants"
description = "Balcony and kitchen"
isCompleted = true
date = "2025-10-01"

[[seed]]
title = "Call mom"
description = "Sunday"
"#;
        let cfg = AppConfig::from_toml_str(raw).expect("parse config");

        assert_eq!(cfg.drawer.side, Side::Left);
        assert_eq!(cfg.drawer.size, Size::Lg);
        assert!(!cfg.drawer.close_on_backdrop);
        assert!(!cfg.ui.debug_log);

        let seed = cfg.seed();
        assert_eq!(seed.len(), 2);
        assert!(seed[0].is_completed);
        assert!(!seed[1].is_completed);
        assert_eq!(seed[1].date, "");
    }

    #[test]
    fn partial_drawer_table_keeps_other_defaults() {
        let cfg = AppConfig::from_toml_str("[drawer]\nsize = \"sm\"\n").expect("parse config");
        assert_eq!(cfg.drawer.side, Side::Right);
        assert_eq!(cfg.drawer.size, Size::Sm);
        assert!(cfg.drawer.close_on_backdrop);
    }

    #[test]
    fn bad_side_is_an_error() {
        let err = AppConfig::from_toml_str("[drawer]\nside = \"middle\"\n").expect_err("unknown side");
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[test]
    fn seed_entry_with_empty_fields_is_rejected() {
        let err = AppConfig::from_toml_str("[[seed]]\ntitle = \"\"\ndescription = \"\"\n")
            .expect_err("empty seed title");
        assert!(format!("{err:#}").contains("invalid [[seed]] entry 0"));
        assert_eq!(
            err.downcast_ref::<FormError>(),
            Some(&FormError::ValidationMissing(FormField::Title))
        );
    }

    #[test]
    fn seed_entry_missing_description_names_its_index() {
        let raw = r#"
[[seed]]
title = "Gym"
description = "Legs"

[[seed]]
title = "Read"
description = ""
"#;
        let err = AppConfig::from_toml_str(raw).expect_err("empty seed description");
        assert!(format!("{err:#}").contains("invalid [[seed]] entry 1"));
        assert_eq!(
            err.downcast_ref::<FormError>(),
            Some(&FormError::ValidationMissing(FormField::Description))
        );
    }
}
