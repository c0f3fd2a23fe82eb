use std::io::{BufRead, Write};

use anyhow::Result;
use pathpick_match::{Matcher, Query};
use pathpick_scan::FileScanner;
use serde_json::{json, Value};

/// Serve newline-delimited JSON queries until the input closes.
///
/// Each request line is `{"abbrev": "...", "options": {...}}`, optionally
/// carrying `"flush": true` to force a rescan before matching. Replies are
/// one JSON object per line: `{"matches": [...]}` on success or
/// `{"error": "..."}` for a rejected request. Rejections are recoverable and
/// the loop keeps serving.
pub(crate) fn serve(
    matcher: &mut Matcher<FileScanner>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(output, "{}", respond(matcher, &line))?;
        output.flush()?;
    }
    Ok(())
}

fn respond(matcher: &mut Matcher<FileScanner>, line: &str) -> Value {
    let request: Value = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => return json!({ "error": format!("invalid request: {e}") }),
    };
    if request.get("flush").and_then(Value::as_bool).unwrap_or(false) {
        matcher.scanner().flush();
    }
    match Query::from_value(&request) {
        Ok(query) => json!({ "matches": matcher.run_query(&query) }),
        Err(e) => json!({ "error": e.to_string() }),
    }
}
