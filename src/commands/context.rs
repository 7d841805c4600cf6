use crate::cli::WriteFormat;
use webshortcut::config::Config;
use webshortcut::ShortcutWriter;

#[derive(Debug, Default)]
pub struct CommandContext {
    config: Config,
}

impl CommandContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The requested writer, or the configured default.
    pub fn writer(&self, format: Option<WriteFormat>) -> ShortcutWriter {
        format
            .map(ShortcutWriter::from)
            .unwrap_or(self.config.default_writer)
    }
}
