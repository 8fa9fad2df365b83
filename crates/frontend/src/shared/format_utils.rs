//! Size formatting helpers.
//!
//! Document cards round up to whole kilobytes; the pending-selection list
//! shows one decimal, matching the finer granularity of not-yet-uploaded
//! files.

/// Whole kilobytes, rounded up. Example: 2049 -> "3 KB".
pub fn size_kb(bytes: u64) -> String {
    format!("{} KB", bytes.div_ceil(1024))
}

/// Kilobytes with one decimal. Example: 1536.0 -> "1.5 KB".
pub fn size_kb_precise(bytes: f64) -> String {
    format!("{:.1} KB", bytes / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_kb_rounds_up() {
        assert_eq!(size_kb(0), "0 KB");
        assert_eq!(size_kb(1), "1 KB");
        assert_eq!(size_kb(1024), "1 KB");
        assert_eq!(size_kb(2049), "3 KB");
    }

    #[test]
    fn test_size_kb_precise() {
        assert_eq!(size_kb_precise(1536.0), "1.5 KB");
        assert_eq!(size_kb_precise(100.0), "0.1 KB");
    }
}
