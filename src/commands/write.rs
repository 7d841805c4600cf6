use crate::cli::WriteArgs;
use crate::commands::{CommandContext, CommandExecutor};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct WriteCommand {
    args: WriteArgs,
}

impl WriteCommand {
    pub fn new(args: WriteArgs) -> Self {
        Self { args }
    }

    fn run<W: Write>(self, ctx: &CommandContext, out: &mut W) -> Result<()> {
        let writer = ctx.writer(self.args.format);
        let url = self.args.url.trim();
        if url.is_empty() {
            anyhow::bail!("URL cannot be empty");
        }
        let name = self.args.name.as_deref().unwrap_or(url);

        if self.args.stdout {
            writer.write(out, name, url)?;
            return Ok(());
        }

        let path = match self.args.output {
            Some(path) => path,
            None => {
                let file_name =
                    writer.create_full_filename(name, ctx.config().max_filename_length)?;
                self.args
                    .dir
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(file_name)
            }
        };

        write_shortcut(&path, writer, name, url)?;
        writeln!(out, "Created {writer} shortcut at {}", path.display())?;
        Ok(())
    }
}

fn write_shortcut(
    path: &Path,
    writer: webshortcut::ShortcutWriter,
    name: &str,
    url: &str,
) -> Result<()> {
    writer
        .write_file(path, name, url)
        .with_context(|| format!("Failed to write {}", path.display()))
}

impl CommandExecutor for WriteCommand {
    fn execute(self, ctx: &CommandContext) -> Result<()> {
        self.run(ctx, &mut io::stdout().lock())
    }
}
