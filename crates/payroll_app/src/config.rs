use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use payroll_core::{PayrollConfig, UnknownTitlePolicy};
use payroll_logging::payroll_info;

use crate::cli::Cli;

/// Built-in rules unless a RON file is given. Fields missing from the file keep their defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<PayrollConfig> {
    let Some(path) = path else {
        return Ok(PayrollConfig::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: PayrollConfig =
        ron::from_str(&content).with_context(|| format!("parsing config {}", path.display()))?;
    payroll_info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Folds command-line switches into the loaded config.
pub fn apply_overrides(config: &mut PayrollConfig, cli: &Cli) -> anyhow::Result<()> {
    if cli.strict {
        config.unknown_title = UnknownTitlePolicy::Fail;
    }
    if let Some(base) = &cli.api_base {
        config.api_base = base.clone();
    }
    if !cli.desks.is_empty() {
        for wanted in &cli.desks {
            if !config.desks.iter().any(|d| d.name.eq_ignore_ascii_case(wanted)) {
                bail!("unknown desk {wanted:?}");
            }
        }
        for desk in &mut config.desks {
            desk.enabled = cli.desks.iter().any(|w| w.eq_ignore_ascii_case(&desk.name));
        }
    }
    Ok(())
}

pub fn render_config(config: &PayrollConfig) -> anyhow::Result<String> {
    let pretty = ron::ser::PrettyConfig::new();
    ron::ser::to_string_pretty(config, pretty).context("serializing config")
}
