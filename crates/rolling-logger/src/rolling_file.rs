//! Size-bounded log file.
//!
//! Writes go to `<dir>/<name>.log`. Once the file would grow past
//! `max_bytes` it is shifted to `<name>.log.1`, older files move up by one,
//! and anything beyond `<name>.log.<max_files>` is dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct RollingFile {
    dir: PathBuf,
    name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    /// Open (or append to) the active log file, creating `dir` if needed
    pub fn open(dir: impl AsRef<Path>, name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.log", name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir,
            name: name.to_string(),
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    /// Path of the active file
    pub fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.name))
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.log.{}", self.name, index))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files > 0 {
            let oldest = self.rotated_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_files).rev() {
                let from = self.rotated_path(index);
                if from.exists() {
                    fs::rename(&from, self.rotated_path(index + 1))?;
                }
            }
            fs::rename(self.active_path(), self.rotated_path(1))?;
        }
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.active_path())?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: PathBuf) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn test_writes_to_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "roadmap", 1024, 2).unwrap();
        file.write_all(b"hello\n").unwrap();
        file.flush().unwrap();
        assert_eq!(read(dir.path().join("roadmap.log")), "hello\n");
    }

    #[test]
    fn test_rotates_past_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "roadmap", 8, 2).unwrap();
        file.write_all(b"first\n").unwrap();
        file.write_all(b"second\n").unwrap();
        file.write_all(b"third\n").unwrap();
        file.flush().unwrap();

        assert_eq!(read(dir.path().join("roadmap.log")), "third\n");
        assert_eq!(read(dir.path().join("roadmap.log.1")), "second\n");
        assert_eq!(read(dir.path().join("roadmap.log.2")), "first\n");
    }

    #[test]
    fn test_drops_files_beyond_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "roadmap", 4, 1).unwrap();
        for line in ["aaaa\n", "bbbb\n", "cccc\n"] {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(read(dir.path().join("roadmap.log")), "cccc\n");
        assert_eq!(read(dir.path().join("roadmap.log.1")), "bbbb\n");
        assert!(!dir.path().join("roadmap.log.2").exists());
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut file = RollingFile::open(dir.path(), "roadmap", 1024, 1).unwrap();
            file.write_all(b"one\n").unwrap();
        }
        let mut file = RollingFile::open(dir.path(), "roadmap", 1024, 1).unwrap();
        file.write_all(b"two\n").unwrap();
        file.flush().unwrap();
        assert_eq!(read(dir.path().join("roadmap.log")), "one\ntwo\n");
    }
}
