//! Colored terminal output for publishing progress

use std::io::{self, Write};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    quiet: bool,
}

impl OutputManager {
    /// Create a new output manager; `quiet` hides progress lines
    pub fn new(quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            quiet,
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) -> io::Result<()> {
        self.marked(Color::Cyan, "ℹ", message, false)
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.marked(Color::Green, "✓", message, false)
    }

    /// Print a warning message (shown even in quiet mode)
    pub fn warn(&self, message: &str) -> io::Result<()> {
        let mut buffer = self.stdout.buffer();
        write_marked(&mut buffer, Color::Yellow, "⚠", message, true)?;
        self.stdout.print(&buffer)
    }

    /// Print an error message to stderr (always shown)
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();

        if write_marked(&mut buffer, Color::Red, "✗", message, true).is_err()
            || stderr.print(&buffer).is_err()
        {
            println!("[STDERR ERROR] ✗ {}", message);
        }
    }

    /// Print a section header
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.stdout.buffer();
        writeln!(&mut buffer)?;
        buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(&mut buffer, "═══ {} ═══", title)?;
        buffer.reset()?;
        self.stdout.print(&buffer)
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.plain(&format!("    {message}"))
    }

    /// Print a plain message (respects quiet mode)
    pub fn println(&self, message: &str) -> io::Result<()> {
        self.plain(message)
    }

    /// Print a result line (shown even in quiet mode)
    pub fn result(&self, message: &str) -> io::Result<()> {
        let mut buffer = self.stdout.buffer();
        writeln!(&mut buffer, "{}", message)?;
        self.stdout.print(&buffer)
    }

    fn plain(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.result(message)
    }

    fn marked(&self, color: Color, symbol: &str, message: &str, tint: bool) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.stdout.buffer();
        write_marked(&mut buffer, color, symbol, message, tint)?;
        self.stdout.print(&buffer)
    }
}

/// Bold colored `symbol`, then `message`, colored too when `tint` is set
fn write_marked(
    buffer: &mut Buffer,
    color: Color,
    symbol: &str,
    message: &str,
    tint: bool,
) -> io::Result<()> {
    buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(buffer, "{symbol}")?;
    buffer.reset()?;
    if tint {
        buffer.set_color(ColorSpec::new().set_fg(Some(color)))?;
    }
    writeln!(buffer, " {message}")?;
    buffer.reset()
}
