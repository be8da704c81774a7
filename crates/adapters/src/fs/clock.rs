use std::time::{SystemTime, UNIX_EPOCH};

use photo_gallery_application::Clock;

/// Unix time in milliseconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_timestamp_string(&self) -> String {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_numeric() {
        let stamp = SystemClock.now_timestamp_string();
        assert!(stamp.parse::<u128>().expect("numeric timestamp") > 0);
    }
}
