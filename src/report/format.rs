use chrono::{DateTime, Utc};

/// `1234567` -> `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// Repository sizes are reported by GitHub in kilobytes.
pub fn format_size(size_kb: u64) -> String {
    const KB_PER_MB: u64 = 1024;
    const KB_PER_GB: u64 = 1024 * 1024;

    if size_kb < KB_PER_MB {
        format!("{} KB", size_kb)
    } else if size_kb < KB_PER_GB {
        format!("{:.1} MB", size_kb as f64 / KB_PER_MB as f64)
    } else {
        format!("{:.1} GB", size_kb as f64 / KB_PER_GB as f64)
    }
}

/// `Jan 5, 2024`
pub fn format_date_short(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `January 5, 2024`
pub fn format_date_long(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
