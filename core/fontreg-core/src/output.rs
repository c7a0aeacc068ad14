//! Run report writers for fontreg-core

use std::io::Write;

use anyhow::Result;

use crate::registrar::FamilyReport;

/// Write reports as prettified JSON array.
pub fn write_json_pretty(reports: &[FamilyReport], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write reports as newline-delimited JSON (NDJSON).
pub fn write_ndjson(reports: &[FamilyReport], mut w: impl Write) -> Result<()> {
    for item in reports {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
