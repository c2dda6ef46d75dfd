//! Text extraction from various file formats

use crate::error::{Result, ResumeProfilerError};
use pulldown_cmark::{html, Parser};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeProfilerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            // Fall back to lossy decoding for non-UTF-8 exports.
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                let bytes = fs::read(path)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Err(e) => Err(ResumeProfilerError::Io(e)),
        }
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

pub struct JsonExtractor;

impl TextExtractor for JsonExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;

        let mut fragments = Vec::new();
        flatten_json(&value, &mut fragments);
        Ok(fragments.join(" "))
    }
}

// Recursively flatten JSON content into string fragments, keys included,
// so structured resumes ({"skills": ["python", ...]}) stay searchable.
fn flatten_json(value: &Value, fragments: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                fragments.push(key.clone());
                flatten_json(val, fragments);
            }
        }
        Value::Array(items) => {
            for item in items {
                flatten_json(item, fragments);
            }
        }
        Value::String(s) => fragments.push(s.clone()),
        Value::Null => {}
        other => fragments.push(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_strips_tags() {
        let extractor = MarkdownExtractor;
        let text = extractor.html_to_text("<h1>Skills</h1><p>Python and <b>SQL</b></p>");
        assert!(text.contains("Skills"));
        assert!(text.contains("Python and SQL"));
        assert!(!text.contains("<h1>"));
    }

    #[test]
    fn test_json_flattening() {
        let value: Value = serde_json::from_str(
            r#"{"name": "Jane", "skills": ["python", "sql"], "years": 5, "note": null}"#,
        )
        .unwrap();
        let mut fragments = Vec::new();
        flatten_json(&value, &mut fragments);
        let text = fragments.join(" ");

        assert!(text.contains("python"));
        assert!(text.contains("sql"));
        assert!(text.contains("Jane"));
        assert!(text.contains("5"));
        assert!(!text.contains("null"));
    }
}
