//! Tests for the intensity alphabet and commit-count mapping

#[cfg(test)]
mod tests {
    use graphart::pattern::intensity::{ALPHABET, BLANK, Intensity, commits_for_marker};

    // Tests each alphabet symbol maps to its index
    // Verified by reordering the alphabet
    #[test]
    fn test_alphabet_commit_counts() {
        assert_eq!(commits_for_marker(" "), 0);
        assert_eq!(commits_for_marker("░"), 1);
        assert_eq!(commits_for_marker("▒"), 2);
        assert_eq!(commits_for_marker("▓"), 3);
        assert_eq!(commits_for_marker("█"), 4);
    }

    // Tests anything outside the alphabet yields no commits
    #[test]
    fn test_unknown_markers_are_zero() {
        for marker in ["x", "#", "", "░░", "▓ ", "\t"] {
            assert_eq!(commits_for_marker(marker), 0, "marker {marker:?}");
        }
    }

    // Tests typed levels agree with the alphabet
    #[test]
    fn test_levels_match_alphabet() {
        for (index, level) in Intensity::ALL.iter().enumerate() {
            assert_eq!(Some(level.symbol()), ALPHABET.get(index).copied());
            assert_eq!(level.commit_count() as usize, index);
            assert_eq!(Intensity::from_symbol(level.symbol()), Some(*level));
        }
        assert_eq!(Intensity::from_symbol('x'), None);
        assert_eq!(Intensity::default().symbol(), BLANK);
    }

    // Tests ink quantization and saturation
    #[test]
    fn test_from_ink() {
        assert_eq!(Intensity::from_ink(0.0), Intensity::Blank);
        assert_eq!(Intensity::from_ink(0.1), Intensity::Blank);
        assert_eq!(Intensity::from_ink(0.25), Intensity::Level1);
        assert_eq!(Intensity::from_ink(0.5), Intensity::Level2);
        assert_eq!(Intensity::from_ink(0.7), Intensity::Level3);
        assert_eq!(Intensity::from_ink(1.0), Intensity::Level4);
        assert_eq!(Intensity::from_ink(7.5), Intensity::Level4);
        assert_eq!(Intensity::from_ink(-1.0), Intensity::Blank);
    }
}
