//! Tests for the commit progress bar

#[cfg(test)]
mod tests {
    use graphart::io::progress::CommitProgress;

    // Tests each recorded commit advances the bar
    #[test]
    fn test_records_commits() {
        let progress = CommitProgress::new();
        progress.start(3);

        progress.record(Some(2));
        progress.record(Some(1));
        progress.record(Some(0));

        assert_eq!(progress.position(), 3);
        progress.finish();
    }

    // Tests a zero budget leaves the bar untouched
    #[test]
    fn test_zero_budget() {
        let progress = CommitProgress::default();
        progress.start(0);

        assert_eq!(progress.position(), 0);
        progress.finish();
    }

    // Tests untracked writes still count
    #[test]
    fn test_untracked_write() {
        let progress = CommitProgress::new();
        progress.start(1);
        progress.record(None);

        assert_eq!(progress.position(), 1);
    }
}
