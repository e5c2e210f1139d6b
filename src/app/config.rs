use std::collections::HashSet;

/// Directory names pruned wherever they appear below the root.
const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "target",
    ".git",
    ".vscode",
    ".idea",
    "__pycache__",
];

/// File names never collected, regardless of extension.
const EXCLUDED_FILES: &[&str] = &["package-lock.json"];

/// Extensions accepted for collection (leading dot, case-sensitive).
const INCLUDED_EXTENSIONS: &[&str] = &[
    ".js", ".json", ".cjs", ".ts", ".tsx", ".css", ".html", ".md", ".svg", ".rs", ".toml",
];

/// File names accepted even though they carry no matching extension.
const INCLUDED_FILES: &[&str] = &[
    ".gitignore",
    "eslint.config.js",
    "vite.config.ts",
    "tailwind.config.cjs",
    "postcss.config.cjs",
];

const OUTPUT_FILE: &str = "app.txt";

/// Immutable selection rules, fixed at startup and passed explicitly to the
/// scanner rather than living in process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    pub excluded_dirs: HashSet<String>,
    pub excluded_files: HashSet<String>,
    pub included_extensions: HashSet<String>,
    pub included_files: HashSet<String>,
    pub output_file: String,
}

impl Config {
    pub fn new() -> Self {
        let mut excluded_files: HashSet<String> =
            EXCLUDED_FILES.iter().map(|s| s.to_string()).collect();
        // The previous run's output must never be re-ingested.
        excluded_files.insert(OUTPUT_FILE.to_string());

        Self {
            excluded_dirs: EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_files,
            included_extensions: INCLUDED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            included_files: INCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
            output_file: OUTPUT_FILE.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_file_is_self_excluded() {
        let config = Config::new();
        assert!(config.excluded_files.contains(&config.output_file));
    }

    #[test]
    fn extensions_carry_a_leading_dot() {
        let config = Config::new();
        assert!(config.included_extensions.iter().all(|e| e.starts_with('.')));
    }
}
