use std::io::{self, Write};

use tracing_subscriber::EnvFilter;
use utf16_probe::CodeUnitBuf;

fn probe<W: Write>(
    out: &mut W,
    title: &str,
    note: &str,
    string: &CodeUnitBuf,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "({})", note)?;
    writeln!(out, "{}", string.len())?;
    writeln!(out, "{}", string)?;
    writeln!(out, "{}", string.describe())?;
    writeln!(out)
}

fn prefixed(units: &[u16]) -> CodeUnitBuf {
    let mut string = CodeUnitBuf::from_str("ABC: ");
    string.extend(units.iter().copied());
    string
}

fn fenced(unit: u16) -> CodeUnitBuf {
    let mut string = CodeUnitBuf::from_str("|");
    string.push_unit(unit);
    string.push_str("|");
    string
}

fn run<W: Write>(out: &mut W) -> io::Result<()> {
    probe(
        out,
        "This is a string with a surrogate pair:",
        "not a counter-example; this is a well formed Unicode string",
        &prefixed(&[0xD83D, 0xDCA9]),
    )?;
    probe(
        out,
        "This is a string with a lone surrogate:",
        "counter-example; this is NOT a well formed Unicode string",
        &prefixed(&[0xD83D]),
    )?;
    probe(
        out,
        "This is a lone surrogate between two ASCII characters:",
        "counter-example; the lone surrogate still counts as one code unit",
        &fenced(0xD83D),
    )
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out)?;
    out.flush()
}
