#![cfg(test)]

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub struct ConfigEnvGuard {
    original: Option<OsString>,
}

impl ConfigEnvGuard {
    const KEY: &'static str = "XDG_CONFIG_HOME";

    pub fn set(path: &Path) -> Self {
        let original = env::var_os(Self::KEY);
        env::set_var(Self::KEY, path);
        Self { original }
    }
}

impl Drop for ConfigEnvGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            env::set_var(Self::KEY, original);
        } else {
            env::remove_var(Self::KEY);
        }
    }
}

pub fn write_fixture(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(name);
    fs::write(&file_path, content).expect("failed to write shortcut fixture");
    file_path
}

/// Yields `data`, then fails every later read.
pub struct FailingReader {
    data: &'static [u8],
}

impl FailingReader {
    pub fn new(data: &'static [u8]) -> Self {
        Self { data }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::other("device went away"));
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
