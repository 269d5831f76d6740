/// Pixel offset beyond which the back-to-top control becomes visible.
pub const SCROLL_THRESHOLD: i32 = 300;

/// Derives the past-threshold flag from an observed scroll offset.
///
/// The watcher holds no reference to the viewport; the UI layer feeds it
/// offsets and reads the flag back. Teardown of the feed happens in the UI
/// layer (see `ui::page::ScrollFeed`), after which this struct simply stops
/// receiving updates.
pub struct ScrollWatcher {
    threshold: i32,
    past_threshold: bool,
}

impl ScrollWatcher {
    pub fn new() -> Self {
        Self::with_threshold(SCROLL_THRESHOLD)
    }

    pub fn with_threshold(threshold: i32) -> Self {
        Self {
            threshold,
            past_threshold: false,
        }
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    /// Feed a new scroll offset. Returns `true` when the flag flipped so
    /// the caller knows a redraw is needed.
    pub fn observe(&mut self, scroll_y: i32) -> bool {
        let past = scroll_y > self.threshold;
        let changed = past != self.past_threshold;
        self.past_threshold = past;
        changed
    }
}

impl Default for ScrollWatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_below_threshold() {
        let watcher = ScrollWatcher::new();
        assert!(!watcher.past_threshold());
    }

    #[test]
    fn test_threshold_rule_over_signal_sequence() {
        let mut watcher = ScrollWatcher::new();
        let signals = [0, 100, 301, 250, 400];
        let expected = [false, false, true, false, true];
        for (signal, expected) in signals.iter().zip(expected) {
            watcher.observe(*signal);
            assert_eq!(watcher.past_threshold(), expected, "at offset {}", signal);
        }
    }

    #[test]
    fn test_exact_threshold_is_not_past() {
        let mut watcher = ScrollWatcher::new();
        watcher.observe(SCROLL_THRESHOLD);
        assert!(!watcher.past_threshold());
        watcher.observe(SCROLL_THRESHOLD + 1);
        assert!(watcher.past_threshold());
    }

    #[test]
    fn test_observe_reports_flips_only() {
        let mut watcher = ScrollWatcher::new();
        assert!(!watcher.observe(100));
        assert!(watcher.observe(301));
        assert!(!watcher.observe(400));
        assert!(watcher.observe(0));
    }
}
