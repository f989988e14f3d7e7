use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

fn title_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"#\+TITLE:\s*(.+)").unwrap())
}

/// Display title for a document: the `#+TITLE:` text on its first line,
/// or the file name without its extension when there is none.
pub fn document_title(path: &Path) -> String {
    match first_line_title(path) {
        Some(title) => title,
        None => path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string(),
    }
}

fn first_line_title(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut line = String::new();
    // Invalid UTF-8 errors out here and degrades to the stem fallback.
    BufReader::new(file).read_line(&mut line).ok()?;
    let captures = title_marker().captures(&line)?;
    Some(captures[1].trim().to_string())
}
