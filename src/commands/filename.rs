use crate::cli::FilenameArgs;
use crate::commands::{CommandContext, CommandExecutor};
use anyhow::Result;
use std::io::{self, Write};

pub struct FilenameCommand {
    args: FilenameArgs,
}

impl FilenameCommand {
    pub fn new(args: FilenameArgs) -> Self {
        Self { args }
    }

    fn run<W: Write>(self, ctx: &CommandContext, out: &mut W) -> Result<()> {
        let writer = ctx.writer(self.args.format);
        let max_length = self
            .args
            .max_length
            .unwrap_or(ctx.config().max_filename_length);

        let file_name = if self.args.base {
            writer.create_base_filename(&self.args.name, max_length)?
        } else {
            writer.create_full_filename(&self.args.name, max_length)?
        };
        writeln!(out, "{file_name}")?;
        Ok(())
    }
}

impl CommandExecutor for FilenameCommand {
    fn execute(self, ctx: &CommandContext) -> Result<()> {
        self.run(ctx, &mut io::stdout().lock())
    }
}
