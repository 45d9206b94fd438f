use std::collections::HashSet;

use payroll_core::DeskReport;

/// Excel rejects longer sheet names.
pub const MAX_SHEET_NAME_CHARS: usize = 31;

/// `Pays-{MonthName}-{Desk}.xlsx`, with the desk name made filesystem safe.
pub fn report_filename(report: &DeskReport) -> String {
    format!(
        "Pays-{}-{}.xlsx",
        report.period.month_name(),
        sanitize_file_part(&report.desk)
    )
}

/// One valid, unique sheet name per writer, in the same order.
pub fn sheet_names<'a>(writers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    writers
        .into_iter()
        .map(|writer| {
            let base = sanitize_sheet_name(writer);
            let mut candidate = base.clone();
            let mut n = 2;
            while !taken.insert(candidate.to_lowercase()) {
                let suffix = format!(" ({n})");
                let keep = MAX_SHEET_NAME_CHARS - suffix.chars().count();
                candidate = format!("{}{}", truncate_chars(&base, keep), suffix);
                n += 1;
            }
            candidate
        })
        .collect()
}

fn sanitize_sheet_name(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden_in_sheet(c) { '_' } else { c })
        .collect();
    // Truncate before trimming so a cut can't leave a trailing apostrophe.
    let truncated = truncate_chars(&cleaned, MAX_SHEET_NAME_CHARS);
    let mut name = trim_sheet_edges(&truncated).to_string();
    if name.is_empty() {
        return "Writer".to_string();
    }
    // Reserved by Excel.
    if name.eq_ignore_ascii_case("History") {
        name.push('_');
    }
    name
}

/// Excel rejects names that start or end with an apostrophe.
fn trim_sheet_edges(name: &str) -> &str {
    name.trim_matches(|c: char| c == '\'' || c.is_whitespace())
}

fn sanitize_file_part(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden_in_file(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]);
    if cleaned.is_empty() {
        "Desk".to_string()
    } else {
        cleaned.to_string()
    }
}

fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

fn is_forbidden_in_sheet(c: char) -> bool {
    matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\' | '\0'..='\u{1F}')
}

fn is_forbidden_in_file(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
