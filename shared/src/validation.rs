//! Input validation functions
//!
//! Identifier validation happens client-side so a malformed or missing id
//! (for example an absent value rendered as the literal string
//! "undefined") never reaches the network layer.

/// Parse a plan identifier string into its numeric form.
///
/// The id must coerce to a finite number strictly greater than zero.
/// The error message carries the original raw value for diagnosis.
pub fn parse_plan_id(raw: &str) -> Result<f64, String> {
    let id: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("plan id must be a positive number, got \"{raw}\""))?;
    if !id.is_finite() {
        return Err(format!("plan id must be a finite number, got \"{raw}\""));
    }
    if id <= 0.0 {
        return Err(format!("plan id must be greater than zero, got \"{raw}\""));
    }
    Ok(id)
}
