use freq_lens_common::Result;
use std::path::{Path, PathBuf};

fn is_delimited(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("csv") | Some("tsv")
    )
}

pub fn scan_directory(base: &Path) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();
    scan_recursive(base, &mut results)?;
    results.sort();
    Ok(results)
}

fn scan_recursive(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            scan_recursive(&path, out)?;
        } else if is_delimited(&path) {
            out.push(path);
        }
    }
    Ok(())
}

/// resolve a path string: single file, directory, or glob pattern
pub fn resolve_paths(input: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(input);
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if path.is_dir() {
        return scan_directory(path);
    }
    let mut results = Vec::new();
    if let Ok(entries) = glob::glob(input) {
        for entry in entries.flatten() {
            if entry.is_file() && is_delimited(&entry) {
                results.push(entry);
            }
        }
    }
    results.sort();
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resolves_single_file_regardless_of_extension() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let paths = resolve_paths(tmp.path().to_str().unwrap()).unwrap();
        assert_eq!(paths, vec![tmp.path().to_path_buf()]);
    }

    #[test]
    fn scans_directories_recursively_for_delimited_files() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(dir.path().join("a.csv"), "x\n1\n").unwrap();
        fs::write(sub.join("b.tsv"), "x\n1\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "nope").unwrap();
        let paths = resolve_paths(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| is_delimited(p)));
    }

    #[test]
    fn glob_pattern_matches_csv_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.csv"), "x\n1\n").unwrap();
        fs::write(dir.path().join("two.csv"), "x\n2\n").unwrap();
        fs::write(dir.path().join("skip.json"), "{}").unwrap();
        let pattern = format!("{}/*.csv", dir.path().display());
        let paths = resolve_paths(&pattern).unwrap();
        assert_eq!(paths.len(), 2);
    }
}
