use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Rate;

pub const DEFAULT_API_BASE: &str = "https://pittnews.com";

/// An editorial desk, mapped to its WordPress category id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desk {
    pub category_id: u32,
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Every title listed here is paid `rate` per character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub rate: Rate,
    pub titles: Vec<String>,
}

impl RateTier {
    fn new(rate: f64, titles: &[&str]) -> Self {
        Self {
            rate: Rate::from_dollars(rate),
            titles: titles.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// What to do with a job title that matches no tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownTitlePolicy {
    /// Abort the desk with an "unknown job title" error.
    Fail,
    /// Pay nothing for the article and log a warning.
    #[default]
    ZeroRate,
}

/// Read-only payroll rules for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Site root; the posts endpoint is appended to it.
    pub api_base: String,
    pub desks: Vec<Desk>,
    /// Writer display name -> canonical job title, consulted for placeholder bylines.
    pub writer_directory: BTreeMap<String, String>,
    /// Checked in order; the first tier listing the title wins.
    pub rate_tiers: Vec<RateTier>,
    pub placeholder_title: String,
    /// Byline shared by several editors; its articles carry no job title.
    pub multi_writer_label: String,
    pub unknown_title: UnknownTitlePolicy,
    /// First day of the month counted towards the pay period.
    pub window_start_day: u32,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        let writer_directory = [
            ("Jon Moss", "News Editor"),
            ("Neena Hagen", "Senior Staff Writer"),
        ]
        .into_iter()
        .map(|(writer, title)| (writer.to_string(), title.to_string()))
        .collect();

        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            desks: vec![Desk {
                category_id: 31,
                name: "News".to_string(),
                enabled: true,
            }],
            writer_directory,
            rate_tiers: vec![
                RateTier::new(0.0, &["Editor-in-chief", "News Editor", "For The Pitt News"]),
                RateTier::new(0.0025, &["Staff Writer"]),
                RateTier::new(
                    0.0035,
                    &["Senior Staff Writers", "Senior Staff Writer", "Contributing Editor"],
                ),
            ],
            placeholder_title: "The Pitt News Staff".to_string(),
            multi_writer_label: "News Editors".to_string(),
            unknown_title: UnknownTitlePolicy::default(),
            window_start_day: 1,
        }
    }
}

impl PayrollConfig {
    pub fn enabled_desks(&self) -> impl Iterator<Item = &Desk> {
        self.desks.iter().filter(|desk| desk.enabled)
    }
}
