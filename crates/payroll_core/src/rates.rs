use payroll_logging::payroll_warn;
use thiserror::Error;

use crate::config::{PayrollConfig, UnknownTitlePolicy};
use crate::money::Rate;

/// Placeholder titles are followed through the writer directory at most this many times.
pub const MAX_DIRECTORY_DEPTH: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayError {
    #[error("need to define job title for writer: {writer}")]
    MissingDirectoryEntry { writer: String },
    #[error("unknown job title {title:?} for writer {writer}")]
    UnknownJobTitle { writer: String, title: String },
    #[error("job title for writer {writer} still unresolved after directory lookup ({title:?})")]
    ResolutionDepthExceeded { writer: String, title: String },
}

/// Maps a (writer, job title) pair to a per-character rate.
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    config: &'a PayrollConfig,
}

impl<'a> RateResolver<'a> {
    pub fn new(config: &'a PayrollConfig) -> Self {
        Self { config }
    }

    pub fn resolve(&self, writer: &str, job_title: &str) -> Result<Rate, PayError> {
        self.resolve_at_depth(writer, job_title, 0)
    }

    fn resolve_at_depth(
        &self,
        writer: &str,
        job_title: &str,
        depth: usize,
    ) -> Result<Rate, PayError> {
        let title = job_title.trim();

        // Multi-writer bylines are recorded without a title and are never paid.
        if title.is_empty() {
            return Ok(Rate::ZERO);
        }

        if let Some(rate) = self.tier_rate(title) {
            return Ok(rate);
        }

        if title == self.config.placeholder_title.trim() {
            if depth >= MAX_DIRECTORY_DEPTH {
                return Err(PayError::ResolutionDepthExceeded {
                    writer: writer.to_string(),
                    title: title.to_string(),
                });
            }
            let assigned = self.config.writer_directory.get(writer.trim()).ok_or_else(|| {
                PayError::MissingDirectoryEntry {
                    writer: writer.to_string(),
                }
            })?;
            return self.resolve_at_depth(writer, assigned, depth + 1);
        }

        match self.config.unknown_title {
            UnknownTitlePolicy::Fail => Err(PayError::UnknownJobTitle {
                writer: writer.to_string(),
                title: title.to_string(),
            }),
            UnknownTitlePolicy::ZeroRate => {
                payroll_warn!("Unknown job title {:?} for {}; paying 0", title, writer);
                Ok(Rate::ZERO)
            }
        }
    }

    fn tier_rate(&self, title: &str) -> Option<Rate> {
        self.config
            .rate_tiers
            .iter()
            .find(|tier| tier.titles.iter().any(|t| t.trim() == title))
            .map(|tier| tier.rate)
    }
}
