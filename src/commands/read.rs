use crate::cli::ReadArgs;
use crate::commands::{CommandContext, CommandExecutor};
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use webshortcut::ShortcutContents;

/// Outcome of reading one shortcut file.
#[derive(Debug, Serialize)]
pub(crate) struct ReadReport {
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ReadReport {
    pub(crate) fn new(path: &Path, result: webshortcut::Result<ShortcutContents>) -> Self {
        let (name, url, error) = match result {
            Ok(contents) => (
                Some(contents.name().to_string()),
                Some(contents.into_url()),
                None,
            ),
            Err(err) => (None, None, Some(err.to_string())),
        };
        Self {
            path: path.to_path_buf(),
            name,
            url,
            error,
        }
    }

    pub(crate) fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// One line of human-readable output.
    pub(crate) fn write_line<W: Write>(&self, out: &mut W, url_only: bool) -> io::Result<()> {
        match (&self.name, &self.url, &self.error) {
            (_, Some(url), None) if url_only => writeln!(out, "{url}"),
            (Some(name), Some(url), None) => {
                writeln!(out, "{}: {name} -> {url}", self.path.display())
            }
            (_, _, Some(error)) => writeln!(out, "{}: error: {error}", self.path.display()),
            _ => Ok(()),
        }
    }
}

pub struct ReadCommand {
    args: ReadArgs,
}

impl ReadCommand {
    pub fn new(args: ReadArgs) -> Self {
        Self { args }
    }

    fn run<W: Write>(self, out: &mut W) -> Result<()> {
        let reports: Vec<ReadReport> = self
            .args
            .paths
            .iter()
            .map(|path| ReadReport::new(path, webshortcut::read(path)))
            .collect();

        if self.args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
        } else {
            for report in reports.iter().filter(|report| report.is_ok()) {
                report.write_line(out, self.args.url_only)?;
            }
            for report in reports.iter().filter(|report| !report.is_ok()) {
                report.write_line(&mut io::stderr(), false)?;
            }
        }

        let failed = reports.iter().filter(|report| !report.is_ok()).count();
        if failed > 0 {
            anyhow::bail!("{failed} of {} shortcuts could not be read", reports.len());
        }
        Ok(())
    }
}

impl CommandExecutor for ReadCommand {
    fn execute(self, _ctx: &CommandContext) -> Result<()> {
        self.run(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read_args(paths: Vec<PathBuf>, json: bool, url_only: bool) -> ReadArgs {
        ReadArgs {
            paths,
            json,
            url_only,
        }
    }

    #[test]
    fn test_read_prints_name_and_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Example.url");
        fs::write(&path, "[InternetShortcut]\r\nURL=http://example.com/\r\n").unwrap();

        let mut out = Vec::new();
        ReadCommand::new(read_args(vec![path.clone()], false, false))
            .run(&mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!("{}: Example -> http://example.com/\n", path.display())
        );
    }

    #[test]
    fn test_read_url_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Example.desktop");
        fs::write(&path, "[Desktop Entry]\nURL=http://example.com/desktop\n").unwrap();

        let mut out = Vec::new();
        ReadCommand::new(read_args(vec![path], false, true))
            .run(&mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "http://example.com/desktop\n"
        );
    }

    #[test]
    fn test_read_json_reports_failures() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.url");
        let bad = temp_dir.path().join("bad.url");
        fs::write(&good, "[InternetShortcut]\nURL=http://example.com/\n").unwrap();
        fs::write(&bad, "[InternetShortcut]\n").unwrap();

        let mut out = Vec::new();
        let result = ReadCommand::new(read_args(vec![good, bad], true, false)).run(&mut out);
        assert!(result.is_err());

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["name"], "good");
        assert_eq!(entries[0]["url"], "http://example.com/");
        assert!(entries[0].get("error").is_none());
        assert!(entries[1]["error"].is_string());
        assert!(entries[1].get("url").is_none());
    }
}
