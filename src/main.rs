use anyhow::Result;
use clap::{CommandFactory, Parser};
use webshortcut::config::Config;

mod cli;
mod commands;

// Build info module
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

use cli::Cli;

fn init_logging(verbose: bool) {
    let filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn generate_config(custom_path: Option<&std::path::Path>) -> Result<()> {
    let config = Config::default();
    let path = match custom_path {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => {
            config.save()?;
            Config::config_path()
        }
    };
    println!("Generated default configuration at: {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    clap_complete::CompleteEnv::with_factory(|| Cli::command().name("webshortcut"))
        .completer("webshortcut")
        .complete();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.build_info {
        cli::show_build_info();
        return Ok(());
    }

    if cli.generate_config {
        return generate_config(cli.config.as_deref());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load(cli.config);
    commands::dispatch(command, config)
}
