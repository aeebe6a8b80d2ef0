use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Property;
use crate::checker::ContentScanner;
use crate::config::Config;
use crate::error::{ProbeError, Result};
use crate::output::OutputFormat;
use crate::probe::{Mode, ProbeRequest};
use crate::scanner::NameMatcher;
use crate::threshold::{CountThresholds, ThresholdPair};
use crate::transport::{Credentials, ShareTarget, normalize, split_unc};

#[derive(Parser, Debug)]
#[command(name = "share-probe")]
#[command(author, version, about = "Check files on a network share against age, size and content thresholds")]
#[command(long_about = "Checks one file, or every matching file of a directory, on a network share.\n\n\
    Thresholds take a positive integer and an optional unit:\n  \
    time: seconds, minutes, hours, days (e.g. 10days, 30m)\n  \
    size: KB, MB, GB (e.g. 800KB)\n\n\
    Exit codes:\n  \
    0 - OK\n  \
    1 - WARNING\n  \
    2 - CRITICAL\n  \
    3 - UNKNOWN (usage or configuration error)")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Host serving the share (may be omitted when --file is //HOST/SHARE/...)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Object path on the host: SHARE/dir/name
    #[arg(short = 'f', long = "file")]
    pub path: Option<String>,

    /// Property to evaluate [possible values: size, modified, accessed]
    #[arg(short = 'P', long, default_value = "modified")]
    pub property: Property,

    /// Warning threshold, e.g. 10days or 800KB
    #[arg(short, long)]
    pub warning: Option<String>,

    /// Critical threshold, e.g. 20days or 2MB
    #[arg(short, long)]
    pub critical: Option<String>,

    /// Regular expression whose presence in the content raises WARNING
    #[arg(long)]
    pub warning_pattern: Option<String>,

    /// Regular expression whose presence in the content raises CRITICAL
    #[arg(long)]
    pub critical_pattern: Option<String>,

    /// Treat --file as a directory and check every matching entry
    #[arg(short = 'D', long)]
    pub directory: bool,

    /// Name pattern selecting directory entries (regex unless --glob)
    #[arg(short = 'n', long)]
    pub name_pattern: Option<String>,

    /// Interpret --name-pattern as a glob
    #[arg(long)]
    pub glob: bool,

    /// WARNING when at least this many entries match
    #[arg(long)]
    pub warning_count: Option<u64>,

    /// CRITICAL when at least this many entries match
    #[arg(long)]
    pub critical_count: Option<u64>,

    /// Match names and content patterns case-sensitively
    #[arg(short = 's', long)]
    pub case_sensitive: bool,

    /// Do not emit performance data
    #[arg(long)]
    pub no_perfdata: bool,

    /// User name for the share
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Password for the share
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Workgroup or domain of the user
    #[arg(short = 'W', long)]
    pub domain: Option<String>,

    /// Directory under which shares are mounted as HOST/SHARE
    #[arg(long)]
    pub mount_root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format [possible values: nagios, json]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A validated run: where to connect, what to check, how to print.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub target: ShareTarget,
    pub mount_root: PathBuf,
    pub request: ProbeRequest,
    pub format: OutputFormat,
}

impl Cli {
    /// Output format from the command line, falling back to config.
    #[must_use]
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.defaults.format)
    }

    /// Validate arguments against `config` and build the run description.
    ///
    /// Nothing here touches the share.
    ///
    /// # Errors
    /// Returns a usage error for missing options, a host that is not a single
    /// name, malformed thresholds or patterns, and misordered warning/critical
    /// values.
    pub fn resolve(&self, config: &Config) -> Result<Invocation> {
        let raw_path = self
            .path
            .as_deref()
            .ok_or_else(|| ProbeError::MissingOption("--file".to_string()))?;

        let (host, path) = match split_unc(raw_path) {
            Some((unc_host, rest)) => (self.host.clone().unwrap_or(unc_host), rest),
            None => (
                self.host
                    .clone()
                    .ok_or_else(|| ProbeError::MissingOption("--host".to_string()))?,
                normalize(raw_path),
            ),
        };
        if path.is_empty() {
            return Err(ProbeError::MissingOption("--file".to_string()));
        }
        if !is_plain_host(&host) {
            return Err(ProbeError::InvalidHost(host));
        }

        let case_sensitive = self.case_sensitive || config.defaults.case_sensitive;
        let thresholds =
            ThresholdPair::parse(self.property, self.warning.as_deref(), self.critical.as_deref())?;
        let content = ContentScanner::new(
            self.warning_pattern.as_deref(),
            self.critical_pattern.as_deref(),
            case_sensitive,
        )?;

        let mode = if self.directory {
            Mode::Directory {
                matcher: NameMatcher::from_options(
                    self.name_pattern.as_deref(),
                    self.glob,
                    case_sensitive,
                )?,
                counts: CountThresholds::new(self.warning_count, self.critical_count)?,
            }
        } else {
            if self.name_pattern.is_some()
                || self.warning_count.is_some()
                || self.critical_count.is_some()
            {
                tracing::warn!("name pattern and file counts only apply with --directory");
            }
            Mode::Single
        };

        let credentials = Credentials {
            username: self
                .username
                .clone()
                .or_else(|| config.transport.username.clone()),
            password: self.password.clone(),
            domain: self.domain.clone().or_else(|| config.transport.domain.clone()),
        };

        Ok(Invocation {
            target: ShareTarget::new(host).with_credentials(credentials),
            mount_root: self
                .mount_root
                .clone()
                .unwrap_or_else(|| config.transport.mount_root.clone()),
            request: ProbeRequest {
                path,
                property: self.property,
                thresholds,
                content,
                mode,
                collect_perf: !self.no_perfdata && config.defaults.perfdata,
                details: self.verbose > 0,
            },
            format: self.output_format(config),
        })
    }
}

/// A host must name exactly one directory under the mount root.
fn is_plain_host(host: &str) -> bool {
    !host.is_empty() && host != "." && host != ".." && !host.contains(['/', '\\'])
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
