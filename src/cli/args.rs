//! Command line argument parsing.
//!
//! Every setting can also come from the environment under its step input name,
//! which is how pipeline runners pass them.

use clap::Parser;

/// Create a GitHub release and upload its assets
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "kodegen_release_publisher",
    version,
    about = "Create a GitHub release and upload its assets",
    long_about = "Create a GitHub release and upload files as release assets.

Every option falls back to an environment variable of the same name in
snake_case, e.g. --repository-url reads repository_url.

Usage:
  kodegen_release_publisher --repository-url git@github.com:acme/widgets.git \\
      --tag 1.2.0 --commit main --name 'Widgets 1.2.0' \\
      --files-to-upload 'dist/widgets.zip|widgets-1.2.0.zip'"
)]
pub struct Args {
    /// API token for the hosting platform
    #[arg(long, env = "api_token", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Username for HTTP Basic auth; bearer token auth when unset
    #[arg(long, env = "username")]
    pub username: Option<String>,

    /// Repository URL (https://, git@ or ssh:// notation)
    #[arg(long, env = "repository_url")]
    pub repository_url: Option<String>,

    /// Tag of the release
    #[arg(long, env = "tag")]
    pub tag: Option<String>,

    /// Commit the tag is created from
    #[arg(long, env = "commit")]
    pub commit: Option<String>,

    /// Release title
    #[arg(long, env = "name")]
    pub name: Option<String>,

    /// Release description
    #[arg(long, env = "body")]
    pub body: Option<String>,

    /// Create a draft release (yes/no)
    #[arg(long, env = "draft")]
    pub draft: Option<String>,

    /// Mark the release as pre-release (yes/no)
    #[arg(long, env = "pre_release")]
    pub pre_release: Option<String>,

    /// Let the platform generate release notes (yes/no)
    #[arg(long, env = "generate_release_notes")]
    pub generate_release_notes: Option<String>,

    /// Newline-delimited list of `path` or `path|display name`
    #[arg(long, env = "files_to_upload")]
    pub files_to_upload: Option<String>,

    /// REST API base URL, for self-hosted deployments
    #[arg(long, env = "api_base_url")]
    pub api_base_url: Option<String>,

    /// Asset upload base URL, for self-hosted deployments
    #[arg(long, env = "upload_base_url")]
    pub upload_base_url: Option<String>,

    /// Attempts per asset, including the first
    #[arg(long, env = "upload_attempts")]
    pub upload_attempts: Option<u32>,

    /// Seconds to wait between attempts
    #[arg(long, env = "upload_retry_wait")]
    pub upload_retry_wait: Option<u64>,

    /// Only print errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(quiet: bool) -> Self {
        Self {
            output: super::OutputManager::new(quiet),
        }
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.quiet)
    }
}

impl RuntimeConfig {
    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print a result line (always shown)
    pub fn result_println(&self, message: &str) {
        let _ = self.output.result(message);
    }

    /// Print info message
    pub fn info_println(&self, message: &str) {
        let _ = self.output.info(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message (shown even in quiet mode)
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        let _ = self.output.section(title);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }
}
