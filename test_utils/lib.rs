use std::fs;
use std::path::{Path, PathBuf};

/// Writes `contents` to `file_name` inside `dir` and returns the full path.
pub fn write_source_file(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("Failed to write source file");
    path
}

/// A rendered `<span>` tag, broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTag {
    pub font: u32,
    pub count: usize,
    pub word: String,
}

/// Extracts every tag line of a rendered cloud, in document order.
pub fn parse_rendered_tags(html: &str) -> Vec<RenderedTag> {
    html.lines()
        .filter(|line| line.starts_with("<span"))
        .map(|line| {
            let font = between(line, "class=\"f", "\"")
                .parse()
                .expect("Font class should be numeric");
            let count = between(line, "title=\"count: ", "\"")
                .parse()
                .expect("Count should be numeric");
            let word = between(line, "\">", "</span>").to_string();

            RenderedTag { font, count, word }
        })
        .collect()
}

fn between<'a>(line: &'a str, start: &str, end: &str) -> &'a str {
    let from = line.find(start).expect("Start marker not found") + start.len();
    let to = line[from..].find(end).expect("End marker not found") + from;
    &line[from..to]
}
