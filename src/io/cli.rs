//! Command-line interface wiring settings, remote collaborators and the handler

use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

use crate::cycle::machine::PositionResolver;
use crate::cycle::persistence::PersistPolicy;
use crate::io::configuration::{DEFAULT_API_URL, DEFAULT_WEB_URL};
use crate::io::error::Result;
use crate::io::handler::{HandlerResponse, Invocation, run_cycle};
use crate::io::logging::LogFormat;
use crate::io::progress::CommitProgress;
use crate::io::settings::Settings;
use crate::pattern::Pattern;
use crate::pattern::loader::{builtin, load_pattern};
use crate::remote::github::{GitHubStore, http_agent};
use crate::remote::graph::{ContributionGraphResolver, FixedOffset};
use crate::remote::secrets::AwsCliKeyService;
use crate::remote::store::{MemoryStore, StateStore};

#[derive(Parser, Debug)]
#[command(name = "graphart")]
#[command(
    author,
    version,
    about = "Commit today's share of a pixel pattern to a GitHub contribution graph"
)]
/// Command-line arguments for one cycle run
pub struct Cli {
    /// Pattern asset (text art or PNG) replacing the built-in art
    #[arg(short, long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Run against an in-memory copy of the state file instead of committing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Keep spending a budget left over by an interrupted run today
    #[arg(short, long)]
    pub resume: bool,

    /// Anchor offset to use instead of reading the contribution graph
    #[arg(long, value_name = "CELLS")]
    pub anchor_offset: Option<u64>,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// GitHub web root serving the contribution graph
    #[arg(long, env = "GITHUB_WEB_URL", default_value = DEFAULT_WEB_URL)]
    pub web_url: String,

    /// Aws executable used to decrypt `kms:` values
    #[arg(long, value_name = "PROGRAM", default_value = "aws")]
    pub aws_cli: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Treatment of leftover budgets
    pub const fn persist_policy(&self) -> PersistPolicy {
        if self.resume {
            PersistPolicy::ResumeBudget
        } else {
            PersistPolicy::Literal
        }
    }

    /// Pattern named on the command line, or the built-in art
    ///
    /// # Errors
    ///
    /// Returns an error if the named asset cannot be loaded
    pub fn load_pattern(&self) -> Result<Pattern> {
        self.pattern
            .as_deref()
            .map_or_else(|| Ok(builtin()), load_pattern)
    }
}

/// Runs one invocation from parsed arguments
pub struct Runner {
    cli: Cli,
    progress: Option<CommitProgress>,
}

impl Runner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(CommitProgress::new);
        Self { cli, progress }
    }

    /// Resolve settings from the environment and run today's cycle
    ///
    /// # Errors
    ///
    /// Returns an error if settings, the pattern, or any cycle step fails
    pub fn run(&self) -> Result<HandlerResponse> {
        let keys = AwsCliKeyService::new(self.cli.aws_cli.clone());
        let settings = Settings::from_env(&keys)?;
        tracing::info!(user = %settings.user, repo = %settings.repo, file = %settings.state_file, "starting cycle");

        let pattern = self.cli.load_pattern()?;
        let agent = http_agent();
        let remote = GitHubStore::new(agent.clone(), &self.cli.api_url, &settings);
        tracing::debug!(url = remote.url(), "state file endpoint");

        let graph;
        let fixed;
        let resolver: &dyn PositionResolver = match self.cli.anchor_offset {
            Some(offset) => {
                fixed = FixedOffset(offset);
                &fixed
            }
            None => {
                graph = ContributionGraphResolver::new(
                    agent,
                    &self.cli.web_url,
                    &settings.user,
                    &settings.token,
                );
                tracing::debug!(url = graph.url(), "anchor offset comes from the contribution graph");
                &graph
            }
        };

        let rehearsal;
        let store: &dyn StateStore = if self.cli.dry_run {
            let loaded = remote.load()?;
            tracing::info!("dry run, commits stay in memory");
            rehearsal = MemoryStore::new(loaded.state.to_pretty_json()?);
            &rehearsal
        } else {
            &remote
        };

        let invocation = Invocation {
            pattern: &pattern,
            timezone: settings.timezone,
            store,
            resolver,
            policy: self.cli.persist_policy(),
        };

        let response = run_cycle(
            &invocation,
            Utc::now(),
            |planned| {
                if let Some(progress) = &self.progress {
                    progress.start(planned);
                }
            },
            |remaining| {
                if let Some(progress) = &self.progress {
                    progress.record(remaining);
                }
            },
        );

        if let Some(progress) = &self.progress {
            tracing::debug!(commits = progress.position(), "progress closed");
            progress.finish();
        }
        response
    }
}
