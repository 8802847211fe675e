//! Result formatting for the human-facing surfaces
//!
//! The REPL, `-c`, and script modes all print through here. The JSON
//! boundary does not: serde encodes its own numbers.

/// Format a result for display - no trailing .0 for integral values
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
