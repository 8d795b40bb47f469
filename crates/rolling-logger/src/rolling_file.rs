//! Size-rolled log file
//!
//! `<app>.log` is the live file. When a write would push it past the size
//! limit it becomes `<app>.1.log`, older files shift up by one and anything
//! beyond `max_files` is removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

pub struct RollingFile {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        let mut rolling = Self {
            dir: dir.to_path_buf(),
            app_name: app_name.to_string(),
            max_bytes: max_bytes.max(1),
            max_files: max_files.max(1),
            file,
            written,
        };
        rolling.write_banner()?;
        Ok(rolling)
    }

    /// Path of the live file (`index == 0`) or of a rotated one
    pub fn path(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.app_name))
        } else {
            self.dir.join(format!("{}.{}.log", self.app_name, index))
        }
    }

    fn write_banner(&mut self) -> io::Result<()> {
        let banner = format!(
            "---- {} log opened {} ----\n",
            self.app_name,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        );
        self.file.write_all(banner.as_bytes())?;
        self.written += banner.len() as u64;
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let oldest = self.path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = self.path(index);
            if from.exists() {
                fs::rename(&from, self.path(index + 1))?;
            }
        }
        fs::rename(self.path(0), self.path(1))?;

        self.file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(self.path(0))?;
        self.written = 0;
        self.write_banner()
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// `MakeWriter` handle shared by the fmt layer
#[derive(Clone)]
pub struct SharedRollingFile(Arc<Mutex<RollingFile>>);

impl SharedRollingFile {
    pub fn new(file: RollingFile) -> Self {
        Self(Arc::new(Mutex::new(file)))
    }
}

pub struct RollingFileGuard<'a>(MutexGuard<'a, RollingFile>);

impl Write for RollingFileGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedRollingFile {
    type Writer = RollingFileGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        // a panic while writing a log line must not silence logging for good
        RollingFileGuard(self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}
