use std::io::{self, Write};

/// Write a FreeDesktop `Type=Link` entry. Desktop entry files are always UTF-8.
///
/// `URL` appears both first and last: some consumers only look at one end of the group.
pub fn write<W: Write>(sink: &mut W, name: &str, url: &str) -> io::Result<()> {
    writeln!(sink, "[Desktop Entry]")?;
    writeln!(sink, "URL={url}")?;
    writeln!(sink, "Encoding=UTF-8")?;
    writeln!(sink, "Name={name}")?;
    writeln!(sink, "Type=Link")?;
    writeln!(sink, "URL={url}")?;
    Ok(())
}
