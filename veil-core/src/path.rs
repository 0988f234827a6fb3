#![forbid(unsafe_code)]

//! Path-like string joining.

/// Join path-like segments with a single `sep` at each seam.
///
/// Redundant separators at segment boundaries are collapsed, empty
/// segments are skipped, and a leading separator on the first segment is
/// preserved so absolute paths stay absolute.
pub fn join_segments(segments: &[&str], sep: char) -> String {
    let mut out = String::new();
    for seg in segments {
        let trimmed = seg.trim_matches(sep);
        if out.is_empty() {
            if seg.starts_with(sep) {
                out.push(sep);
            }
            out.push_str(trimmed);
        } else if !trimmed.is_empty() {
            if !out.ends_with(sep) {
                out.push(sep);
            }
            out.push_str(trimmed);
        }
    }
    out
}
