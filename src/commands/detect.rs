use crate::cli::DetectArgs;
use crate::commands::{CommandContext, CommandExecutor};
use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::io::{self, Write};
use webshortcut::read_url_trial_and_error_with_capacity;

pub struct DetectCommand {
    args: DetectArgs,
}

impl DetectCommand {
    pub fn new(args: DetectArgs) -> Self {
        Self { args }
    }

    fn run<W: Write>(self, ctx: &CommandContext, out: &mut W) -> Result<()> {
        let capacity = self
            .args
            .buffer_size
            .unwrap_or(ctx.config().trial_buffer_size);
        debug!("detecting shortcut format with a {capacity} byte rewind buffer");

        let (source, url) = match &self.args.path {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                let url = read_url_trial_and_error_with_capacity(file, capacity)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                (path.display().to_string(), url)
            }
            None => {
                let url = read_url_trial_and_error_with_capacity(io::stdin().lock(), capacity)
                    .context("Failed to read shortcut from standard input")?;
                ("-".to_string(), url)
            }
        };

        if self.args.json {
            let output = serde_json::json!({
                "source": source,
                "url": url,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        } else {
            writeln!(out, "{url}")?;
        }
        Ok(())
    }
}

impl CommandExecutor for DetectCommand {
    fn execute(self, ctx: &CommandContext) -> Result<()> {
        self.run(ctx, &mut io::stdout().lock())
    }
}
