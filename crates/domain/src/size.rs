const KIB: u128 = 1024;
const MIB: u128 = 1024 * 1024;

/// Formats a byte count as `"<n.nn> KB"` or `"<n.nn> MB"`.
///
/// Sizes of one MiB and above are shown in MB, everything else in KB. The
/// value is rounded half-up to two fractional digits; a missing size yields
/// an empty string.
pub fn human_readable_size(byte_size: Option<u64>) -> String {
    let Some(bytes) = byte_size else {
        return String::new();
    };

    let bytes = u128::from(bytes);
    let (unit_size, suffix) = if bytes >= MIB { (MIB, "MB") } else { (KIB, "KB") };
    let hundredths = round_half_up(bytes * 100, unit_size);
    format!("{}.{:02} {suffix}", hundredths / 100, hundredths % 100)
}

fn round_half_up(numerator: u128, denominator: u128) -> u128 {
    (numerator * 2 + denominator) / (denominator * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_size_renders_empty() {
        assert_eq!(human_readable_size(None), "");
    }

    #[test]
    fn small_sizes_render_in_kilobytes() {
        assert_eq!(human_readable_size(Some(0)), "0.00 KB");
        assert_eq!(human_readable_size(Some(100)), "0.10 KB");
        assert_eq!(human_readable_size(Some(512)), "0.50 KB");
        assert_eq!(human_readable_size(Some(1024)), "1.00 KB");
        assert_eq!(human_readable_size(Some(2048)), "2.00 KB");
    }

    #[test]
    fn one_mebibyte_switches_to_megabytes() {
        assert_eq!(human_readable_size(Some(1_048_575)), "1024.00 KB");
        assert_eq!(human_readable_size(Some(1_048_576)), "1.00 MB");
        assert_eq!(human_readable_size(Some(3_145_728)), "3.00 MB");
    }

    #[test]
    fn ties_round_up() {
        // 5 / 1024 KB = 0.0048828125 -> 0.00, 6 / 1024 KB = 0.005859375 -> 0.01
        assert_eq!(human_readable_size(Some(5)), "0.00 KB");
        assert_eq!(human_readable_size(Some(6)), "0.01 KB");
        // 1152 bytes is exactly 1.125 KB
        assert_eq!(human_readable_size(Some(1152)), "1.13 KB");
    }

    #[test]
    fn huge_sizes_do_not_overflow() {
        assert_eq!(
            human_readable_size(Some(u64::MAX)),
            "17592186044416.00 MB"
        );
    }
}
