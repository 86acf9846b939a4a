//! Terminal rendering for rich or plain output
//!
//! Authored text (menus, prompts, headings) may carry inline markdown and
//! goes through a termimad skin: the styled skin when color is enabled, a
//! style-free skin otherwise so plain output shows no markup. Data from the
//! database is written verbatim and never parsed as markdown.

use std::io::{self, Write};

use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let skin = if rich_enabled {
            let mut skin = MadSkin::default();
            skin.bold.set_fg(Color::Green);
            skin.italic.set_fg(Color::Magenta);
            skin.inline_code.set_fg(Color::Cyan);
            skin.inline_code.set_bg(Color::AnsiValue(236));
            skin
        } else {
            MadSkin::no_style()
        };

        Self { rich_enabled, skin }
    }

    /// Render authored markdown, one line at a time
    pub fn markdown<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        for line in markdown.lines() {
            writeln!(out, "{}", self.skin.inline(line))?;
        }
        Ok(())
    }

    /// Write text verbatim
    pub fn text<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        write!(out, "{text}")
    }

    /// Write a banner line, blue when color is enabled
    pub fn banner<W: Write>(&self, out: &mut W, line: &str) -> io::Result<()> {
        if self.rich_enabled {
            writeln!(out, "{}", line.blue())
        } else {
            writeln!(out, "{line}")
        }
    }

    /// Write an error line, red when color is enabled
    pub fn error<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        let line = format!("❌ {message}");
        if self.rich_enabled {
            writeln!(out, "{}", line.red())
        } else {
            writeln!(out, "{line}")
        }
    }

    /// Write a prompt without a trailing newline and flush it
    pub fn prompt<W: Write>(&self, out: &mut W, prompt: &str) -> io::Result<()> {
        if self.rich_enabled {
            write!(out, "{}", prompt.bold())?;
        } else {
            write!(out, "{prompt}")?;
        }
        out.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
