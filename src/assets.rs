//! Result icons: one small text-art image per category.
//!
//! Icons are optional. A failed load is reported and logged by the caller
//! but never blocks the result screen.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Category;

/// A loaded icon: rows of text drawn top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub category: Category,
    pub rows: Vec<String>,
}

/// Errors emitted while loading an icon.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read icon {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("icon {} is empty", path.display())]
    Empty { path: PathBuf },
}

/// Anything that can produce the icon for a category.
pub trait IconSource {
    fn load(&self, category: Category) -> Result<Icon, AssetError>;
}

/// File name of each category's icon.
pub fn icon_file_name(category: Category) -> &'static str {
    match category {
        Category::Visual => "eyes.txt",
        Category::Auditory => "ears.txt",
        Category::Tactile => "hands.txt",
    }
}

/// User-facing notice shown when an icon cannot be loaded.
pub fn unavailable_notice(category: Category) -> String {
    format!("Error: Could not load image for {} processing style.", category)
}

/// Default icon directory, e.g. `~/.local/share/style-quiz/icons`.
pub fn default_icon_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("style-quiz")
        .join("icons")
}

// ============================================================================
// DIRECTORY SOURCE
// ============================================================================

/// Loads `<dir>/eyes.txt`, `<dir>/ears.txt` and `<dir>/hands.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDir {
    dir: PathBuf,
}

impl IconDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(icon_file_name(category))
    }
}

impl Default for IconDir {
    fn default() -> Self {
        Self::new(default_icon_dir())
    }
}

impl IconSource for IconDir {
    fn load(&self, category: Category) -> Result<Icon, AssetError> {
        let path = self.path_for(category);
        let text = fs::read_to_string(&path).map_err(|source| AssetError::Read {
            path: path.clone(),
            source,
        })?;

        let rows = parse_rows(&text);
        if rows.is_empty() {
            return Err(AssetError::Empty { path });
        }
        Ok(Icon { category, rows })
    }
}

/// Split icon text into rows, dropping trailing whitespace and
/// leading/trailing blank lines.
fn parse_rows(text: &str) -> Vec<String> {
    let rows: Vec<&str> = text.lines().map(str::trim_end).collect();
    let first = rows.iter().position(|r| !r.is_empty());
    let last = rows.iter().rposition(|r| !r.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => rows[first..=last].iter().map(|r| r.to_string()).collect(),
        _ => Vec::new(),
    }
}

// ============================================================================
// BUILT-IN SOURCE
// ============================================================================

/// Icons compiled into the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinIcons;

impl IconSource for BuiltinIcons {
    fn load(&self, category: Category) -> Result<Icon, AssetError> {
        let rows: &[&str] = match category {
            Category::Visual => &[" .-.   .-. ", "( o ) ( o )", " '-'   '-' "],
            Category::Auditory => &[" .--. ", "(  _ \\", " ) ( )", "(__/ /", "   '' "],
            Category::Tactile => &["  _ _ _  ", " | | | |_", " |     / ", "  \\___/  "],
        };
        Ok(Icon {
            category,
            rows: rows.iter().map(|r| r.to_string()).collect(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_names_match_categories() {
        assert_eq!(icon_file_name(Category::Visual), "eyes.txt");
        assert_eq!(icon_file_name(Category::Auditory), "ears.txt");
        assert_eq!(icon_file_name(Category::Tactile), "hands.txt");
    }

    #[test]
    fn default_dir_is_namespaced() {
        let dir = default_icon_dir();
        assert!(dir.ends_with("style-quiz/icons"));
    }

    #[test]
    fn loads_icon_from_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ears.txt"), "\n  ((  \n  ))  \n\n").unwrap();

        let icon = IconDir::new(tmp.path()).load(Category::Auditory).unwrap();
        assert_eq!(icon.category, Category::Auditory);
        assert_eq!(icon.rows, vec!["  ((", "  ))"]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = IconDir::new(tmp.path()).load(Category::Visual).unwrap_err();
        match err {
            AssetError::Read { path, .. } => assert!(path.ends_with("eyes.txt")),
            other => panic!("Expected Read, got {:?}", other),
        }
    }

    #[test]
    fn blank_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("hands.txt"), "  \n\n").unwrap();
        let err = IconDir::new(tmp.path()).load(Category::Tactile).unwrap_err();
        assert!(matches!(err, AssetError::Empty { .. }));
    }

    #[test]
    fn builtin_icons_exist_for_every_category() {
        for category in Category::ALL {
            let icon = BuiltinIcons.load(category).unwrap();
            assert_eq!(icon.category, category);
            assert!(!icon.rows.is_empty());
        }
    }

    #[test]
    fn notice_names_the_style() {
        assert_eq!(
            unavailable_notice(Category::Tactile),
            "Error: Could not load image for Tactile processing style."
        );
    }
}
