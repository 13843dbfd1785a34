// src/domain/change.rs

/// Period-over-period change in whole percent.
///
/// `previous == 0` yields 100 when anything happened this period and 0
/// otherwise, so callers never see a division by zero. Halves round toward
/// positive infinity (-12.5 becomes -12).
pub fn percentage_change(previous: usize, current: usize) -> i64 {
    if previous > 0 {
        let delta = current as f64 - previous as f64;
        (delta / previous as f64 * 100.0 + 0.5).floor() as i64
    } else if current > 0 {
        100
    } else {
        0
    }
}

/// `part / total * 100` with one decimal, or `"0"` when `total` is zero.
pub fn percent_of(part: usize, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    fixed1(part as f64 / total as f64 * 100.0)
}

/// One decimal place, halves rounded away from zero.
pub fn fixed1(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
