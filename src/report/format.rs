//! Value formatting for report cells

/// Strip everything up to and including the last `/` or `\`.
///
/// A path without separators is returned unchanged.
#[must_use]
pub fn crop_path(path: &str) -> &str {
    path.rfind(['/', '\\']).map_or(path, |pos| &path[pos + 1..])
}

/// Render `n` in decimal with a `,` between every group of three digits.
///
/// The sign of a negative number is kept in front of the grouped digits.
#[must_use]
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();

    let mut grouped = String::with_capacity(len + len / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (pos, digit) in digits.chars().enumerate() {
        grouped.push(digit);
        let remaining = len - 1 - pos;
        if remaining > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
    }

    grouped
}
