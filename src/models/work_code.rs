//! Work-time code normalization.

/// Normalizes a requested work-time code to the catalog representation.
///
/// Surrounding whitespace and the separators `:` and `.` are removed, then the
/// result is left-padded with zeros to four characters. Longer codes are kept
/// as they are.
///
/// # Example
///
/// ```
/// use attendance_engine::models::normalize_work_code;
///
/// assert_eq!(normalize_work_code("1:00"), "0100");
/// assert_eq!(normalize_work_code(" 7.40 "), "0740");
/// assert_eq!(normalize_work_code("0230"), "0230");
/// ```
pub fn normalize_work_code(raw: &str) -> String {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ':' && *c != '.')
        .collect();
    format!("{:0>4}", stripped)
}
