//! Colored terminal report: usage block, digests, and the verdict line.

use crate::algorithm::Algorithm;
use std::io::{self, Write};

/// Label printed in front of every digest.
pub const CHECKSUM_LABEL: &str = "Checksum\t: ";

/// Named ANSI SGR styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Reset,
    Cyan,
    Default,
    DarkGray,
    LightRed,
    LightGreen,
}

impl Style {
    pub fn sgr(self) -> u8 {
        match self {
            Style::Reset => 0,
            Style::Cyan => 36,
            Style::Default => 39,
            Style::DarkGray => 90,
            Style::LightRed => 91,
            Style::LightGreen => 92,
        }
    }
}

/// Wrap `text` in the escape sequence for `style`, followed by a reset.
pub fn paint(style: Style, text: &str) -> String {
    format!("\x1b[0;{}m{}\x1b[0m", style.sgr(), text)
}

/// Result of comparing the computed digest with the user's one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

impl Verdict {
    /// Exact comparison; letter case matters.
    pub fn of(computed: &str, expected: &str) -> Verdict {
        if computed == expected {
            Verdict::Match
        } else {
            Verdict::Mismatch
        }
    }
}

pub struct Renderer<W: Write> {
    out: W,
    color: bool,
}

impl Renderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Renderer::new(io::stdout(), color)
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, style: Style, text: &str) -> io::Result<()> {
        if self.color {
            self.out.write_all(paint(style, text).as_bytes())
        } else {
            self.out.write_all(text.as_bytes())
        }
    }

    /// Help block listing every algorithm in registry order.
    pub fn usage(&mut self, algorithms: &[Algorithm]) -> io::Result<()> {
        self.write(Style::DarkGray, "/**\n")?;
        self.write(
            Style::DarkGray,
            " * You can specify algorithm with cli argument\n",
        )?;
        self.write(
            Style::DarkGray,
            &format!(
                " * Otherwise by default {} will be used\n",
                Algorithm::DEFAULT.name().to_ascii_uppercase()
            ),
        )?;
        for algorithm in algorithms {
            self.write(Style::DarkGray, &format!(" * sumcheck -a {}\n", algorithm))?;
        }
        self.write(Style::DarkGray, " */\n")?;
        self.out.flush()
    }

    /// Question shown before reading a line; flushed since it has no newline.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.write(Style::Default, text)?;
        self.out.flush()
    }

    /// Print a labeled digest with digits highlighted.
    pub fn checksum(&mut self, label: &str, digest: &str) -> io::Result<()> {
        self.write(Style::Default, label)?;
        let mut buf = [0u8; 4];
        for c in digest.chars() {
            let style = if c.is_ascii_digit() {
                Style::Cyan
            } else {
                Style::Default
            };
            self.write(style, c.encode_utf8(&mut buf))?;
        }
        self.write(Style::Reset, "\n")?;
        self.out.flush()
    }

    /// Compare two digests and print the outcome.
    pub fn verdict(&mut self, computed: &str, expected: &str) -> io::Result<Verdict> {
        let verdict = Verdict::of(computed, expected);
        match verdict {
            Verdict::Match => self.write(Style::LightGreen, "✓ Checksums match\n")?,
            Verdict::Mismatch => self.write(Style::LightRed, "✕ Checksums DO NOT match\n")?,
        }
        self.out.flush()?;
        Ok(verdict)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.write(Style::LightRed, &format!("{message}\n"))?;
        self.out.flush()
    }
}

/// Remove SGR escape sequences, leaving the visible text. Used to inspect
/// captured reports in tests.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
