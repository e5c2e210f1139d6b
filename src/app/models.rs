/// A single collected file, destined for the snapshot document.
#[derive(Debug)]
pub struct Entry {
    /// Root-relative path with `/` separators.
    pub relative_path: String,
    pub content: String,
}
