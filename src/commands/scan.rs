use crate::cli::ScanArgs;
use crate::commands::read::ReadReport;
use crate::commands::{CommandContext, CommandExecutor};
use anyhow::Result;
use log::{debug, warn};
use std::io::{self, Write};
use walkdir::{DirEntry, WalkDir};
use webshortcut::has_valid_extension;

pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    pub fn new(args: ScanArgs) -> Self {
        Self { args }
    }

    fn collect_reports(&self) -> Vec<ReadReport> {
        let mut reports = Vec::new();

        for entry in WalkDir::new(&self.args.dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry: {err}");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !has_valid_extension(path) {
                continue;
            }

            debug!("reading shortcut {}", path.display());
            reports.push(ReadReport::new(path, webshortcut::read(path)));
        }

        reports
    }

    fn run<W: Write>(self, out: &mut W) -> Result<()> {
        if !self.args.dir.is_dir() {
            anyhow::bail!("{} is not a directory", self.args.dir.display());
        }

        let reports = self.collect_reports();

        if self.args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
        } else {
            for report in &reports {
                report.write_line(out, false)?;
            }
            let failed = reports.iter().filter(|report| !report.is_ok()).count();
            writeln!(
                out,
                "\nFound {} shortcuts ({failed} unreadable)",
                reports.len()
            )?;
        }

        Ok(())
    }
}

/// Dot-prefixed files and directories below the scan root.
fn is_hidden(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    entry.depth() > 0 && name.starts_with('.')
}

impl CommandExecutor for ScanCommand {
    fn execute(self, _ctx: &CommandContext) -> Result<()> {
        self.run(&mut io::stdout().lock())
    }
}
