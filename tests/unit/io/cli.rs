//! Tests for command-line parsing and pattern selection

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use graphart::GraphArtError;
    use graphart::cycle::persistence::PersistPolicy;
    use graphart::io::cli::{Cli, Runner};
    use graphart::io::logging::LogFormat;
    use std::fs;
    use tempfile::TempDir;

    // Tests the argument definitions are internally consistent
    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    // Tests defaults for a bare invocation
    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["graphart"]).unwrap();

        assert!(cli.should_show_progress());
        assert!(!cli.dry_run);
        assert_eq!(cli.persist_policy(), PersistPolicy::Literal);
        assert_eq!(cli.anchor_offset, None);
        assert_eq!(cli.aws_cli, "aws");
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert_eq!(cli.load_pattern().unwrap().rows(), 7);
    }

    // Tests flags map onto runtime choices
    // Verified by ignoring the resume flag
    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "graphart",
            "-q",
            "-n",
            "--resume",
            "--anchor-offset",
            "0",
            "--log-format",
            "json",
            "--aws-cli",
            "/opt/aws/bin/aws",
        ])
        .unwrap();

        assert!(!cli.should_show_progress());
        assert!(cli.dry_run);
        assert_eq!(cli.persist_policy(), PersistPolicy::ResumeBudget);
        assert_eq!(cli.anchor_offset, Some(0));
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.aws_cli, "/opt/aws/bin/aws");
    }

    // Tests endpoints can be overridden on the command line
    #[test]
    fn test_endpoint_overrides() {
        let cli = Cli::try_parse_from([
            "graphart",
            "--api-url",
            "https://ghe.example.com/api/v3",
            "--web-url",
            "https://ghe.example.com",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(cli.web_url, "https://ghe.example.com");
    }

    // Tests a negative offset is rejected by the parser
    #[test]
    fn test_negative_offset_rejected() {
        assert!(Cli::try_parse_from(["graphart", "--anchor-offset", "-1"]).is_err());
    }

    // Tests a named pattern replaces the built-in art
    #[test]
    fn test_pattern_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dots.txt");
        fs::write(&path, "█ █\n").unwrap();

        let cli = Cli::try_parse_from(["graphart", "--pattern", path.to_str().unwrap()]).unwrap();
        let pattern = cli.load_pattern().unwrap();

        assert_eq!(pattern.rows(), 1);
        assert_eq!(pattern.symbol_at(2, 1), '█');
    }

    // Tests a missing pattern file fails before any remote call
    #[test]
    fn test_missing_pattern_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");
        let cli = Cli::try_parse_from(["graphart", "-q", "--pattern", path.to_str().unwrap()])
            .unwrap();

        assert!(matches!(
            cli.load_pattern(),
            Err(GraphArtError::FileSystem { .. })
        ));

        // Runner construction alone touches neither the environment nor the network
        let _runner = Runner::new(cli);
    }
}
