use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;
use webshortcut::ShortcutWriter;

#[derive(Parser, Debug)]
#[command(
    version = crate::built_info::PKG_VERSION,
    about = "Read and write web shortcut files (.url, .website, .desktop, .webloc)",
    long_about = None
)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Show build information
    #[arg(long)]
    pub build_info: bool,

    /// Generate default configuration file
    #[arg(long)]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Read shortcut files, choosing the format from each file's extension.
    Read(ReadArgs),
    /// Read a shortcut of unknown format from a file or standard input.
    Detect(DetectArgs),
    /// Write a new shortcut file.
    Write(WriteArgs),
    /// Print the file name a new shortcut would be given.
    Filename(FilenameArgs),
    /// Read every shortcut found under a directory.
    Scan(ScanArgs),
    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

/// Output format accepted by `--format`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum WriteFormat {
    Url,
    Desktop,
    WeblocBinary,
    WeblocXml,
}

impl From<WriteFormat> for ShortcutWriter {
    fn from(format: WriteFormat) -> Self {
        match format {
            WriteFormat::Url => ShortcutWriter::Url,
            WriteFormat::Desktop => ShortcutWriter::Desktop,
            WriteFormat::WeblocBinary => ShortcutWriter::WeblocBinary,
            WriteFormat::WeblocXml => ShortcutWriter::WeblocXml,
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReadArgs {
    /// Shortcut files to read.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
    /// Output JSON.
    #[arg(long, conflicts_with = "url_only")]
    pub json: bool,
    /// Print only the URL of each shortcut.
    #[arg(long)]
    pub url_only: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DetectArgs {
    /// File to read; standard input when omitted. The extension is ignored.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
    /// Bytes retained for rewinding between format attempts.
    #[arg(long, value_name = "BYTES")]
    pub buffer_size: Option<usize>,
    /// Output JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct WriteArgs {
    /// Target URL.
    #[arg(long)]
    pub url: String,
    /// Display name; also used to derive the file name.
    #[arg(long)]
    pub name: Option<String>,
    /// Shortcut format; defaults to the configured writer.
    #[arg(long, value_enum)]
    pub format: Option<WriteFormat>,
    /// Directory to create the shortcut in.
    #[arg(long, value_name = "DIR", conflicts_with_all = ["output", "stdout"])]
    pub dir: Option<PathBuf>,
    /// Exact path of the shortcut to create.
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Write the shortcut to standard output instead of a file.
    #[arg(long)]
    pub stdout: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct FilenameArgs {
    /// Shortcut name to turn into a file name.
    pub name: String,
    /// Shortcut format whose extension is used; defaults to the configured writer.
    #[arg(long, value_enum)]
    pub format: Option<WriteFormat>,
    /// Maximum file name length, extension included.
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
    /// Print the name without its extension.
    #[arg(long)]
    pub base: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ScanArgs {
    /// Directory to walk.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
    /// Output JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
    /// Write the script to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Binary name used in the generated script.
    #[arg(long, default_value = "webshortcut")]
    pub bin_name: String,
}

pub fn show_build_info() {
    println!("Version: {}", crate::built_info::PKG_VERSION);
    println!("Built: {}", crate::built_info::BUILT_TIME_UTC);

    if let Some(hash) = crate::built_info::GIT_COMMIT_HASH {
        println!("Commit: {hash}");
    } else {
        println!("Commit: unknown");
    }

    if let Some(hash_short) = crate::built_info::GIT_COMMIT_HASH_SHORT {
        println!("Commit (short): {hash_short}");
    }

    if let Some(branch) = crate::built_info::GIT_HEAD_REF {
        println!("Branch: {branch}");
    } else {
        println!("Branch: unknown");
    }

    println!("Target: {}", crate::built_info::TARGET);
    println!("Rustc: {}", crate::built_info::RUSTC_VERSION);

    match crate::built_info::GIT_DIRTY {
        Some(true) => println!("Git status: dirty (uncommitted changes)"),
        Some(false) => println!("Git status: clean"),
        None => println!("Git status: unknown"),
    }

    println!("Profile: {}", crate::built_info::PROFILE);
}
