use crate::types::Entry;
use anyhow::{Context, Result};
use log::debug;
use std::fs::Metadata;
use std::path::Path;
use walkdir::WalkDir;

/// Enumerate the immediate children of `dir`, capturing each child's name
/// and byte size. Children come back in name order. Symlinks are not
/// followed. Any read or stat failure aborts the whole listing.
pub fn list_dir(dir: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for child in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let child =
            child.with_context(|| format!("cannot read directory {}", dir.display()))?;
        let metadata = child
            .metadata()
            .with_context(|| format!("cannot stat {}", child.path().display()))?;

        entries.push(Entry {
            name: child.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
        });
    }

    debug!("listed {} entries under {}", entries.len(), dir.display());
    Ok(entries)
}

/// Build the single entry reported when the target is a regular file.
pub fn file_entry(path: &Path, metadata: &Metadata) -> Entry {
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );

    Entry {
        name,
        size: metadata.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_immediate_children_with_sizes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), vec![0u8; 500]).unwrap();
        fs::write(dir.path().join("b.txt"), vec![0u8; 2_500]).unwrap();

        let entries = list_dir(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.txt");
        assert_eq!(entries[0].size, 500);
        assert_eq!(entries[1].name, "b.txt");
        assert_eq!(entries[1].size, 2_500);
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("nested.txt"), vec![0u8; 100]).unwrap();

        let entries = list_dir(dir.path()).unwrap();
        // The subdirectory itself is listed; its contents are not.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "sub");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("no-such-dir");
        assert!(list_dir(&gone).is_err());
    }

    #[test]
    fn file_entry_reports_base_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lone.bin");
        fs::write(&path, vec![0u8; 1_234]).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        let entry = file_entry(&path, &metadata);
        assert_eq!(entry.name, "lone.bin");
        assert_eq!(entry.size, 1_234);
    }
}
