//! Atomic file output

use crate::error::{Error, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Stem used when sanitizing leaves nothing.
pub const DEFAULT_FILE_STEM: &str = "output";

/// Keep alphanumerics, spaces, dots and underscores; drop trailing
/// whitespace. Falls back to [`DEFAULT_FILE_STEM`].
pub fn sanitize_file_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '_'))
        .collect();
    let cleaned = cleaned.trim_end();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        DEFAULT_FILE_STEM.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Write `path` through a temp file in the same directory, then rename it
/// into place. Missing parent directories are created. On error the temp
/// file is removed and `path` is left untouched.
///
/// Returns the number of bytes written.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<u64>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        write(&mut out)?;
        out.flush()?;
    }
    tmp.as_file().sync_all()?;
    let bytes = tmp.as_file().metadata()?.len();

    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(bytes)
}

/// `dir/<sanitized stem>.<extension>`
pub fn export_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{extension}", sanitize_file_stem(stem)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("match_stats", "match_stats")]
    #[case("Real Madrid vs. Barça", "Real Madrid vs. Barça")]
    #[case("../../etc/passwd", "....etcpasswd")]
    #[case("lineups 2024/25  ", "lineups 202425")]
    #[case("", "output")]
    #[case("???", "output")]
    #[case("..", "output")]
    fn test_sanitize_file_stem(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_file_stem(input), expected);
    }

    #[test]
    fn test_export_path() {
        let path = export_path(Path::new("out"), "shots/map", "csv");
        assert_eq!(path, Path::new("out").join("shotsmap.csv"));
    }

    #[test]
    fn test_write_atomic_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.txt");

        let bytes = write_atomic(&path, |w| {
            w.write_all(b"hello")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(bytes, 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_atomic_failure_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, "old").unwrap();

        let result = write_atomic(&path, |w| {
            w.write_all(b"partial")?;
            Err(Error::NotTabular("scalar".into()))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
