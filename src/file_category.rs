//! Extension-based categorization of downloaded files.
//!
//! A [`CategoryTable`] is an ordered list of named categories, each owning a set
//! of lowercase extensions (with the leading dot). Lookup walks the table in
//! definition order and the first category containing the extension wins;
//! anything unmatched lands in the catch-all category.
//!
//! # Examples
//!
//! ```
//! use downsort::file_category::CategoryTable;
//!
//! let table = CategoryTable::default();
//! assert_eq!(table.classify("report.PDF"), "Documents");
//! assert_eq!(table.classify("backup.tar.xz"), "Compressed");
//! assert_eq!(table.classify("mystery.xyz"), "Others");
//! ```

/// Name of the catch-all category.
pub const OTHERS: &str = "Others";

/// Holding folder for stray subdirectories.
pub const FOLDERS_DIR: &str = "Folders";

/// A named bucket of extensions sharing a destination subfolder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    extensions: Vec<String>,
}

impl Category {
    /// Creates a category. Extensions are normalized to lowercase.
    pub fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|ext| ext.to_lowercase()).collect(),
        }
    }

    /// The category name, which is also its directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns true if any of the candidate extensions belongs to this category.
    fn matches(&self, candidates: &[String]) -> bool {
        candidates
            .iter()
            .any(|candidate| self.extensions.iter().any(|ext| ext == candidate))
    }
}

/// Ordered, immutable mapping from category name to extensions.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<Category>,
    catch_all: String,
}

impl CategoryTable {
    /// Builds a table from categories in lookup order plus the catch-all name.
    ///
    /// The catch-all is the result for every unmatched file, so it never needs
    /// an entry of its own in `categories`.
    pub fn new(categories: Vec<Category>, catch_all: &str) -> Self {
        Self {
            categories,
            catch_all: catch_all.to_string(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn catch_all(&self) -> &str {
        &self.catch_all
    }

    /// Returns true if `name` is a folder this table manages (any category or
    /// the catch-all).
    pub fn is_category_name(&self, name: &str) -> bool {
        name == self.catch_all || self.categories.iter().any(|c| c.name == name)
    }

    /// Classifies a file by name.
    ///
    /// Both the final suffix (`.gz`) and the two-part suffix (`.tar.gz`) are
    /// offered to each category, so compound entries such as `.tar.xz` can
    /// match while plain `.gz` still does.
    pub fn classify(&self, file_name: &str) -> &str {
        let candidates = candidate_extensions(file_name);
        if candidates.is_empty() {
            return &self.catch_all;
        }

        self.categories
            .iter()
            .find(|category| category.matches(&candidates))
            .map(|category| category.name.as_str())
            .unwrap_or(self.catch_all.as_str())
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(
            vec![
                Category::new(
                    "Documents",
                    &[
                        ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".odt", ".ott",
                    ],
                ),
                Category::new(
                    "Text Files",
                    &[
                        ".txt", ".log", ".ini", ".conf", ".csv", ".json", ".xml", ".yml",
                        ".yaml", ".rmf", ".md",
                    ],
                ),
                Category::new(
                    "Pictures",
                    &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp"],
                ),
                Category::new("Audio", &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a"]),
                Category::new("Videos", &[".mp4", ".avi", ".mkv", ".mov", ".webm"]),
                Category::new(
                    "Compressed",
                    &[
                        ".zip", ".tar", ".gz", ".rar", ".7z", ".bz2", ".tar.xz", ".jar",
                    ],
                ),
                Category::new(
                    "Programs",
                    &[".deb", ".AppImage", ".exe", ".msi", ".sh", ".bat"],
                ),
                Category::new(
                    "Code",
                    &[".py", ".js", ".html", ".css", ".cpp", ".c", ".java"],
                ),
                Category::new("Torrent", &[".torrent"]),
                Category::new("Patch Files", &[".bps", ".ups"]),
            ],
            OTHERS,
        )
    }
}

/// Returns the lowercase extension of a file name, including the leading dot.
///
/// A leading dot does not start an extension (`.bashrc` has none) and a name
/// ending in a dot has none either.
///
/// ```
/// use downsort::file_category::extension_of;
///
/// assert_eq!(extension_of("Photo.JPG").as_deref(), Some(".jpg"));
/// assert_eq!(extension_of("archive.tar.gz").as_deref(), Some(".gz"));
/// assert_eq!(extension_of("README"), None);
/// ```
pub fn extension_of(file_name: &str) -> Option<String> {
    let dot = file_name.rfind('.')?;
    if dot == 0 || dot + 1 == file_name.len() {
        return None;
    }
    Some(file_name[dot..].to_lowercase())
}

/// Two-part suffix such as `.tar.xz`, if the name has one.
fn compound_extension_of(file_name: &str) -> Option<String> {
    let last = file_name.rfind('.')?;
    let first = file_name[..last].rfind('.')?;
    if first == 0 || first + 1 == last || last + 1 == file_name.len() {
        return None;
    }
    Some(file_name[first..].to_lowercase())
}

fn candidate_extensions(file_name: &str) -> Vec<String> {
    compound_extension_of(file_name)
        .into_iter()
        .chain(extension_of(file_name))
        .collect()
}
