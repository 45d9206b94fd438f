#![allow(dead_code)]

use std::sync::Once;

use serde_json::{json, Value};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(payroll_logging::initialize_for_tests);
}

/// A post as the WordPress REST API returns it; the body text counts as `characters`.
pub fn wp_post(date: &str, title: &str, writers: &[&str], job_title: &str, characters: usize) -> Value {
    json!({
        "id": 1,
        "date": date,
        "date_gmt": date,
        "content": {
            "rendered": format!("<p>{}</p>\n", "x".repeat(characters)),
            "protected": false
        },
        "title": { "rendered": title },
        "custom_fields": {
            "writer": writers,
            "jobtitle": [job_title]
        }
    })
}
