//!
//! # Report Rendering
//!
//! Two external renderings of the violation sequence:
//! a line-oriented diagnostic per record, and a CSV table with fixed columns
//! `type,layer,object,bbox,rule,actual,delta,status`.
//!
//! Both write through an injected [Write] sink rather than a redirected
//! global stream, so they can be pointed at stdout, a file, or an in-memory
//! buffer alike.
//!

// Std-Lib
use std::io::{BufWriter, Write};
use std::path::Path;

// Local imports
use crate::error::DrcResult;
use crate::violation::Violations;

/// Write one diagnostic line per record to `w`
pub fn write_diagnostics(w: &mut impl Write, violations: &Violations) -> std::io::Result<()> {
    for v in violations.records() {
        writeln!(w, "{}", v)?;
    }
    Ok(())
}

/// Write the CSV fail-table to `w`.
/// The `delta` column carries the signed compliance margin.
pub fn write_table(w: &mut impl Write, violations: &Violations) -> std::io::Result<()> {
    writeln!(w, "type,layer,object,bbox,rule,actual,delta,status")?;
    for v in violations.records() {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{}",
            csv_escape(&v.kind.to_string()),
            csv_escape(&v.layer),
            csv_escape(&v.object),
            csv_escape(&v.bbox),
            csv_escape(&v.rule),
            v.actual,
            v.margin,
            csv_escape(&v.status.to_string()),
        )?;
    }
    Ok(())
}

/// Save the diagnostic report to file `path`
pub fn save_diagnostics(path: impl AsRef<Path>, violations: &Violations) -> DrcResult<()> {
    let mut w = BufWriter::new(std::fs::File::create(path)?);
    write_diagnostics(&mut w, violations)?;
    w.flush()?;
    Ok(())
}

/// Save the CSV fail-table to file `path`
pub fn save_table(path: impl AsRef<Path>, violations: &Violations) -> DrcResult<()> {
    let mut w = BufWriter::new(std::fs::File::create(path)?);
    write_table(&mut w, violations)?;
    w.flush()?;
    Ok(())
}

/// Quote a CSV field when it contains the delimiter, a quote character, or a
/// line break; inner quotes are doubled.
fn csv_escape(s: &str) -> String {
    let needs_quoting = s.chars().any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if !needs_quoting {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        out.push(c);
        if c == '"' {
            out.push('"');
        }
    }
    out.push('"');
    out
}
