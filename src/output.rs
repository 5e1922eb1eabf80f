//! Result post-processing: filename slugs, timestamped result files, console
//! markdown rendering, and interactive prompts for the CLI entry points.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::error::CrewError;

/// Build a filename-safe slug: keep letters, numbers, spaces, dashes,
/// underscores, and dots; spaces become underscores.
pub fn slugify(text: &str) -> String {
    let slug: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-'))
        .collect::<String>()
        .trim()
        .replace(' ', "_");

    if slug.is_empty() {
        "result".to_string()
    } else {
        slug
    }
}

/// Write a crew result as `<dir>/YYYYMMDD_HHMMSS_<slug>.md` with a title and
/// generated-at header. Returns the written path.
pub fn write_result_file(dir: impl AsRef<Path>, topic: &str, body: &str) -> Result<PathBuf, CrewError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let now = chrono::Local::now();
    let filename = format!("{}_{}.md", now.format("%Y%m%d_%H%M%S"), slugify(topic));
    let path = dir.join(filename);

    let mut content = format!("# {topic}\n\n*Generated:* {}\n\n", now.to_rfc3339());
    content.push_str(body);
    std::fs::write(&path, content)?;

    Ok(path)
}

/// Render markdown to the terminal with ANSI styling.
///
/// Line-based and intentionally small: headings, bullets, and code fences,
/// with `**bold**` inline. Enough for a readable final-result preview.
pub fn render_markdown(text: &str) {
    let mut in_code_block = false;

    for line in text.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            println!("{}", line.dimmed());
            continue;
        }
        if in_code_block {
            println!("{}", line.yellow());
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix("### ") {
            println!("{}", heading.bold());
        } else if let Some(heading) = trimmed.strip_prefix("## ") {
            println!("{}", heading.cyan().bold());
        } else if let Some(heading) = trimmed.strip_prefix("# ") {
            println!("{}", heading.cyan().bold().underline());
        } else if let Some(item) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            println!("  {} {}", "•".cyan(), style_inline(item));
        } else {
            println!("{}", style_inline(line));
        }
    }
}

/// Apply `**bold**` styling within a line
fn style_inline(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut rest = line;
    let mut bold = false;

    while let Some(pos) = rest.find("**") {
        let (before, after) = rest.split_at(pos);
        if bold {
            result.push_str(&before.bold().to_string());
        } else {
            result.push_str(before);
        }
        bold = !bold;
        rest = &after[2..];
    }
    // unbalanced marker: emit the remainder unstyled
    result.push_str(rest);
    result
}

/// Prompt on stdout and read one trimmed line from stdin
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label} ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Interpret a y/n answer the way the original prompts did
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "1" | "true" | "t"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_keeps_safe_characters() {
        assert_eq!(slugify("Rust in 2026!"), "Rust_in_2026");
        assert_eq!(slugify("a/b\\c:d"), "abcd");
        assert_eq!(slugify("file.name-v2_ok"), "file.name-v2_ok");
    }

    #[test]
    fn slugify_empty_falls_back() {
        assert_eq!(slugify("///"), "result");
        assert_eq!(slugify(""), "result");
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "YES", " true ", "1", "t"] {
            assert!(is_affirmative(answer), "{answer:?} should be affirmative");
        }
        for answer in ["n", "no", "", "maybe"] {
            assert!(!is_affirmative(answer), "{answer:?} should be negative");
        }
    }

    #[test]
    fn result_file_has_header_and_slug() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_result_file(dir.path(), "My Topic", "body text").unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with("_My_Topic.md"), "unexpected name: {name}");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# My Topic\n"));
        assert!(content.contains("*Generated:*"));
        assert!(content.ends_with("body text"));
    }

    #[test]
    fn inline_bold_styling_is_balanced() {
        // with colors disabled in test envs the text must pass through intact
        let styled = style_inline("a **b** c");
        assert!(styled.contains('a') && styled.contains('b') && styled.contains('c'));
        assert_eq!(style_inline("no markers"), "no markers");
    }
}
