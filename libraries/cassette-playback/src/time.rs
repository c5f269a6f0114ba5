/// Transport display helpers

/// Format seconds as `MM:SS`
///
/// Minutes are not wrapped into hours. Non-finite and negative inputs render as `00:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}
