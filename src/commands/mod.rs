use crate::cli::Command;
use anyhow::Result;
use webshortcut::config::Config;

mod completions;
mod context;
mod detect;
mod filename;
mod read;
mod scan;
mod write;

pub use completions::CompletionsCommand;
pub use context::CommandContext;
pub use detect::DetectCommand;
pub use filename::FilenameCommand;
pub use read::ReadCommand;
pub use scan::ScanCommand;
pub use write::WriteCommand;

pub trait CommandExecutor {
    fn execute(self, ctx: &CommandContext) -> Result<()>;
}

pub fn dispatch(command: Command, config: Config) -> Result<()> {
    let ctx = CommandContext::new(config);

    match command {
        Command::Read(args) => ReadCommand::new(args).execute(&ctx),
        Command::Detect(args) => DetectCommand::new(args).execute(&ctx),
        Command::Write(args) => WriteCommand::new(args).execute(&ctx),
        Command::Filename(args) => FilenameCommand::new(args).execute(&ctx),
        Command::Scan(args) => ScanCommand::new(args).execute(&ctx),
        Command::Completions(args) => CompletionsCommand::new(args).execute(&ctx),
    }
}
