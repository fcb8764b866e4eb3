//! Banner printed around every report.

use std::io::Write;

const SEPARATOR: &str = "## -----------------------------------";

pub fn header(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "## {title}")?;
    writeln!(out, "{SEPARATOR}")
}

pub fn footer(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "##")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "##")
}
