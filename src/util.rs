// util.rs

use std::io::{self, Write};

/// Write one line, treating a closed pipe as success.
pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Write `items` as a right-aligned numbered list starting at 1.
pub fn write_numbered<W, I>(mut w: W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    for (i, item) in items.into_iter().enumerate() {
        writeln_ignore_broken_pipe(&mut w, format!("{:>5}  {}", i + 1, item))?;
    }
    Ok(())
}
