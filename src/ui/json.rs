use std::io::{self, Write};

/// Write a single NDJSON line.
pub fn write_line(out: &mut impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Write a JSON value as one NDJSON line.
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    write_line(out, &line)
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    write_event(&mut io::stdout().lock(), &event)
}

/// Emit an already serialized event line to stdout.
pub fn emit_line(line: &str) -> io::Result<()> {
    write_line(&mut io::stdout().lock(), line)
}
