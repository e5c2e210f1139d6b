use crate::app::models::Entry;

pub struct OutputGenerator;

impl OutputGenerator {
    /// Renders the snapshot document: a `<relative/path>` header, a blank
    /// line, the file content, and a trailing newline per entry, with
    /// consecutive entries separated by exactly one blank line.
    pub fn render(entries: &[Entry]) -> String {
        let blocks: Vec<String> = entries
            .iter()
            .map(|entry| format!("<{}>\n\n{}\n", entry.relative_path, entry.content))
            .collect();

        blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, content: &str) -> Entry {
        Entry {
            relative_path: path.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn renders_header_blank_line_content() {
        let out = OutputGenerator::render(&[entry("a.ts", "x")]);
        assert_eq!(out, "<a.ts>\n\nx\n");
    }

    #[test]
    fn joins_entries_with_one_blank_line() {
        let out = OutputGenerator::render(&[entry("a.ts", "x"), entry("readme.md", "z")]);
        assert_eq!(out, "<a.ts>\n\nx\n\n\n<readme.md>\n\nz\n");
    }

    #[test]
    fn empty_collection_renders_empty_document() {
        assert_eq!(OutputGenerator::render(&[]), "");
    }
}
