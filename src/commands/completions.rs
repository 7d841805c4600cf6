use crate::cli::{Cli, CompletionsArgs};
use crate::commands::{CommandContext, CommandExecutor};
use anyhow::Result;
use clap::CommandFactory;
use std::fs;

pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl CommandExecutor for CompletionsCommand {
    fn execute(self, _ctx: &CommandContext) -> Result<()> {
        let mut command = Cli::command();
        let shell = self.args.shell;
        let bin_name = self.args.bin_name;

        match self.args.output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut file = fs::File::create(&path)?;
                clap_complete::generate(shell, &mut command, bin_name, &mut file);
                println!("Generated {shell} completions at {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout();
                clap_complete::generate(shell, &mut command, bin_name, &mut stdout);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;
    use tempfile::TempDir;

    #[test]
    fn test_completions_written_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("webshortcut.bash");

        CompletionsCommand::new(CompletionsArgs {
            shell: Shell::Bash,
            output: Some(path.clone()),
            bin_name: "webshortcut".to_string(),
        })
        .execute(&CommandContext::default())
        .unwrap();

        let script = fs::read_to_string(&path).unwrap();
        assert!(script.contains("webshortcut"));
    }
}
