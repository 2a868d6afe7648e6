//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::remove_file(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_remove_round_trip() {
        let dir = std::env::temp_dir().join("depfix_live_fs_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.txt");

        let fs = LiveFileSystem;
        fs.write(&path, "hello").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
        fs.remove_file(&path).unwrap();
        assert!(!fs.exists(&path));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_missing_file_errors() {
        let fs = LiveFileSystem;
        let result = fs.read_to_string(Path::new("/nonexistent/depfix/file.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn remove_missing_file_errors() {
        let fs = LiveFileSystem;
        let result = fs.remove_file(Path::new("/nonexistent/depfix/file.txt"));
        assert!(result.is_err());
    }
}
