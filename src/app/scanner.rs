use crate::app::config::Config;
use crate::app::models::Entry;
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Scanner<'a> {
    root: PathBuf,
    config: &'a Config,
}

impl<'a> Scanner<'a> {
    pub fn new(root: PathBuf, config: &'a Config) -> Self {
        Self { root, config }
    }

    /// Walks the tree, pruning excluded directories before descending into
    /// them, and reads every selected file into an `Entry`. Per-file read
    /// failures are logged and skipped; they never abort the walk.
    pub fn collect_entries(&self) -> Vec<Entry> {
        let mut selected = Vec::new();

        let root = self.root.clone();
        let excluded_dirs = self.config.excluded_dirs.clone();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            // Pruned directories are dropped here, so their subtrees are
            // never visited at all.
            .filter_entry(move |entry| {
                if !entry.file_type().map_or(false, |ft| ft.is_dir()) {
                    return true;
                }
                diff_paths(entry.path(), &root)
                    .map_or(true, |relative| !is_pruned(&relative, &excluded_dirs))
            })
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Error walking entry: {}", err);
                    continue;
                }
            };
            if entry.file_type().map_or(true, |ft| ft.is_dir()) {
                continue;
            }
            let path = entry.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n,
                None => continue,
            };
            if !selects_file(name, self.config) {
                continue;
            }
            if let Some(relative) = diff_paths(path, &self.root) {
                selected.push((relative, path.to_path_buf()));
            }
        }

        // Path order fixes both the within-directory file order and the
        // directory-to-directory order, so repeated runs over an unchanged
        // tree produce byte-identical output.
        selected.sort_by(|a, b| a.0.cmp(&b.0));

        let mut entries = Vec::new();
        for (relative, path) in selected {
            match fs::read(&path) {
                Ok(bytes) => {
                    let relative_path = normalize_separators(&relative);
                    log::info!("+ {}", relative_path);
                    entries.push(Entry {
                        relative_path,
                        // Invalid UTF-8 is replaced rather than fatal.
                        content: String::from_utf8_lossy(&bytes).into_owned(),
                    });
                }
                Err(err) => {
                    log::warn!("- Skipping {}: {}", relative.display(), err);
                }
            }
        }

        entries
    }
}

/// A directory is pruned when any segment of its root-relative path equals
/// an excluded name, so nested build output is skipped wherever it appears.
fn is_pruned(relative: &Path, excluded_dirs: &HashSet<String>) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map_or(false, |segment| excluded_dirs.contains(segment))
    })
}

/// Inclusion rule for a single file name: the exclude list wins, then an
/// exact-name match, then the extension allow-list.
fn selects_file(name: &str, config: &Config) -> bool {
    if config.excluded_files.contains(name) {
        return false;
    }
    if config.included_files.contains(name) {
        return true;
    }
    match extension_of(name) {
        Some(ext) => config.included_extensions.contains(ext),
        None => false,
    }
}

/// Root-relative path rendered with `/` separators on every platform.
fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Substring from the last dot, including the dot. A lone leading dot, as
/// in `.gitignore`, names a hidden file rather than an extension.
fn extension_of(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(&name[idx..]),
        _ => None,
    }
}
