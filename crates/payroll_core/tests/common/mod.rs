#![allow(dead_code)]

use std::sync::Once;

use chrono::NaiveDateTime;
use payroll_core::{CustomFields, Post, Rendered, TextExtractor};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(payroll_logging::initialize_for_tests);
}

/// Drops everything between `<` and `>`; enough for the fixtures below.
pub struct TagStripper;

impl TextExtractor for TagStripper {
    fn text(&self, html: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out
    }
}

pub fn at(stamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S").unwrap()
}

/// A post whose body renders to exactly `characters` counted characters.
pub fn post(date: &str, title: &str, writers: &[&str], job_title: &str, characters: usize) -> Post {
    Post {
        date: at(date),
        content: Rendered {
            rendered: format!("<p>{}</p>\n", "x".repeat(characters)),
        },
        title: Rendered {
            rendered: title.to_string(),
        },
        custom_fields: CustomFields {
            writer: writers.iter().map(|w| w.to_string()).collect(),
            jobtitle: vec![job_title.to_string()],
        },
    }
}
