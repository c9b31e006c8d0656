//! Terminal/CLI section printer
//!
//! This module provides terminal output for extracted sections, with
//! colored formatting, so a run can be checked without opening the pages.
//!
//! # Example
//!
//! ```no_run
//! use docsite_etch::printer::EtchPrinter;
//! use docsite_etch::section::Section;
//!
//! let sections: Vec<Section> = vec![];
//! let printer = EtchPrinter::new("Context", &sections, true);
//! println!("{}", printer);
//! ```

use crate::section::Section;
use crate::signature::{short_signature, signature, Flavor};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Terminal section printer
///
/// Prints the sections of one source file: kind and compact signature,
/// then the full Markdown signature and the summary, then the members.
pub struct EtchPrinter<'a> {
    /// Source file title
    title: &'a str,
    /// Sections to print
    sections: &'a [Section],
    /// Whether to use colored output
    use_color: bool,
}

impl<'a> EtchPrinter<'a> {
    /// Create a new printer
    pub fn new(title: &'a str, sections: &'a [Section], use_color: bool) -> Self {
        Self {
            title,
            sections,
            use_color,
        }
    }

    /// Members shown under a section, static first
    fn members(section: &Section) -> impl Iterator<Item = &Section> {
        section
            .members
            .static_members
            .iter()
            .chain(section.members.instance.iter())
    }

    /// Format sections for Display trait
    pub fn format(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{}", self.styled_gray(&format!("# {}\n", self.title)))?;

        for section in self.sections {
            self.format_section(f, section, 0)?;
            for member in Self::members(section) {
                self.format_section(f, member, 1)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }

    fn format_section(&self, f: &mut Formatter<'_>, section: &Section, indent: usize) -> FmtResult {
        let ind = Indent(indent);
        let kind = kind_label(section);

        if kind.is_empty() {
            writeln!(f, "{}{}", ind, self.styled_bold(&short_signature(section)))?;
        } else {
            writeln!(
                f,
                "{}{} {}",
                ind,
                self.styled_magenta(&kind),
                self.styled_bold(&short_signature(section))
            )?;
        }

        let full = signature(section, Flavor::Markdown);
        if full != section.name {
            writeln!(f, "{}{}", Indent(indent + 1), self.styled_cyan(&full))?;
        }
        if let Some(summary) = section.summary() {
            writeln!(f, "{}{}", Indent(indent + 1), self.styled_gray(summary))?;
        }

        Ok(())
    }

    /// Print directly to stdout with colors
    pub fn print_to_stdout(&self) {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        if let Err(e) = self.write_colored(&mut stdout) {
            tracing::error!("Error printing sections: {}", e);
        }
    }

    /// Write with colors to a WriteColor implementor
    fn write_colored<W: WriteColor>(&self, w: &mut W) -> io::Result<()> {
        self.write_gray(w, &format!("# {}\n", self.title))?;
        writeln!(w)?;

        for section in self.sections {
            self.write_section_colored(w, section, 0)?;
            for member in Self::members(section) {
                self.write_section_colored(w, member, 1)?;
            }
            writeln!(w)?;
        }

        Ok(())
    }

    fn write_section_colored<W: WriteColor>(
        &self,
        w: &mut W,
        section: &Section,
        indent: usize,
    ) -> io::Result<()> {
        let kind = kind_label(section);

        write!(w, "{}", Indent(indent))?;
        if !kind.is_empty() {
            self.write_magenta(w, &kind)?;
            write!(w, " ")?;
        }
        self.write_bold(w, &short_signature(section))?;
        writeln!(w)?;

        let full = signature(section, Flavor::Markdown);
        if full != section.name {
            write!(w, "{}", Indent(indent + 1))?;
            self.write_cyan(w, &full)?;
            writeln!(w)?;
        }
        if let Some(summary) = section.summary() {
            write!(w, "{}", Indent(indent + 1))?;
            self.write_gray(w, summary)?;
            writeln!(w)?;
        }

        Ok(())
    }

    // === Color helper methods ===

    fn write_cyan<W: WriteColor>(&self, w: &mut W, s: &str) -> io::Result<()> {
        w.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(w, "{}", s)?;
        w.reset()
    }

    fn write_magenta<W: WriteColor>(&self, w: &mut W, s: &str) -> io::Result<()> {
        w.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(w, "{}", s)?;
        w.reset()
    }

    fn write_bold<W: WriteColor>(&self, w: &mut W, s: &str) -> io::Result<()> {
        w.set_color(ColorSpec::new().set_bold(true))?;
        write!(w, "{}", s)?;
        w.reset()
    }

    fn write_gray<W: WriteColor>(&self, w: &mut W, s: &str) -> io::Result<()> {
        w.set_color(ColorSpec::new().set_fg(Some(Color::White)).set_dimmed(true))?;
        write!(w, "{}", s)?;
        w.reset()
    }

    // === Style helpers for Display trait (no colors in fmt) ===

    fn styled_cyan(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[36m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }

    fn styled_magenta(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[35m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }

    fn styled_bold(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[1m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }

    fn styled_gray(&self, s: &str) -> String {
        if self.use_color {
            format!("\x1b[90m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }
}

impl Display for EtchPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.format(f)
    }
}

/// Kind keyword with a `static` marker for static members
fn kind_label(section: &Section) -> String {
    let kind = section.kind_name();
    match section.scope.as_deref() {
        Some("static") if kind.is_empty() => "static".to_string(),
        Some("static") => format!("static {}", kind),
        _ => kind.to_string(),
    }
}

/// Indentation helper
struct Indent(usize);

impl Display for Indent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for _ in 0..self.0 {
            write!(f, "  ")?;
        }
        Ok(())
    }
}
