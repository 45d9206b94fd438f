use std::collections::HashMap;

use chrono::NaiveDateTime;
use payroll_logging::payroll_debug;

use crate::config::PayrollConfig;
use crate::post::Post;

/// Turns an HTML fragment into the text a reader would see.
pub trait TextExtractor: Send + Sync {
    fn text(&self, html: &str) -> String;
}

/// Visible character count of a post body.
///
/// Counted in UTF-16 code units, less a fixed one-character adjustment that
/// applies to every body, so `<p>Hello</p>` counts as 4.
pub fn character_count(extractor: &dyn TextExtractor, body_html: &str) -> u64 {
    let text = extractor.text(body_html);
    (text.encode_utf16().count() as u64).saturating_sub(1)
}

/// One article credited to one writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionRecord {
    pub published: NaiveDateTime,
    /// `M/D/YYYY`, as printed in the report.
    pub date: String,
    pub headline: String,
    pub characters: u64,
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterEntry<R> {
    pub writer: String,
    pub records: Vec<R>,
}

/// Records grouped by writer, in order of each writer's first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger<R> {
    entries: Vec<WriterEntry<R>>,
    index: HashMap<String, usize>,
}

impl<R> Default for Ledger<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<R> Ledger<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, writer: &str, record: R) {
        let slot = match self.index.get(writer) {
            Some(&slot) => slot,
            None => {
                self.entries.push(WriterEntry {
                    writer: writer.to_string(),
                    records: Vec::new(),
                });
                let slot = self.entries.len() - 1;
                self.index.insert(writer.to_string(), slot);
                slot
            }
        };
        self.entries[slot].records.push(record);
    }

    pub fn get(&self, writer: &str) -> Option<&WriterEntry<R>> {
        self.index.get(writer).map(|&slot| &self.entries[slot])
    }

    pub fn entries(&self) -> &[WriterEntry<R>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<WriterEntry<R>> {
        self.entries
    }

    pub fn writer_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Credits every post to each writer on its byline.
pub fn attribute_posts(
    posts: &[Post],
    config: &PayrollConfig,
    extractor: &dyn TextExtractor,
) -> Ledger<AttributionRecord> {
    let mut ledger = Ledger::new();

    for post in posts {
        let characters = character_count(extractor, &post.content.rendered);
        let headline = extractor.text(&post.title.rendered).trim().to_string();
        let date = post.date.format("%-m/%-d/%Y").to_string();

        for writer in post.writers().map(str::trim).filter(|w| !w.is_empty()) {
            let job_title = if writer == config.multi_writer_label {
                String::new()
            } else {
                post.job_title().to_string()
            };
            ledger.push(
                writer,
                AttributionRecord {
                    published: post.date,
                    date: date.clone(),
                    headline: headline.clone(),
                    characters,
                    job_title,
                },
            );
        }
    }

    payroll_debug!(
        "Attributed {} posts to {} writers",
        posts.len(),
        ledger.writer_count()
    );
    ledger
}
