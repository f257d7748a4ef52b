// crates/ss_cli/src/args.rs
//
// CLI surface for the headless host: clap definition plus the few checks
// clap cannot express (endpoint scheme, route shape).

use clap::Parser;
use std::path::PathBuf;

use ss_core::Language;

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "signsport",
    version,
    disable_help_subcommand = true,
    about = "Load the SignSport analysis page headlessly, answer consent and run one analysis"
)]
pub struct Args {
    // --- Configuration ---
    /// JSON site config (defaults → file → SIGNSPORT_* env → flags).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Endpoint base URL, e.g. http://127.0.0.1:5000.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Page language.
    #[arg(long, value_parser = parse_lang)]
    pub lang: Option<Language>,

    /// Transport timeout in milliseconds (none by default).
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Route the page is loaded on (default: the configured analysis route).
    #[arg(long)]
    pub path: Option<String>,

    // --- Form ---
    /// Character description to analyze.
    #[arg(long, conflicts_with = "decline")]
    pub text: Option<String>,

    /// Age field, sent as-is for lenient parsing.
    #[arg(long, conflicts_with = "decline")]
    pub age: Option<String>,

    /// Gender field.
    #[arg(long, conflicts_with = "decline")]
    pub gender: Option<String>,

    // --- Consent ---
    /// Decline the consent modal instead of accepting it.
    #[arg(long)]
    pub decline: bool,

    /// On decline, replace the page body with the goodbye view instead of navigating.
    #[arg(long)]
    pub goodbye_view: bool,

    // --- Output & logging ---
    /// Write the rendered panel here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Only warnings and errors on stderr.
    #[arg(long)]
    pub quiet: bool,

    /// Emit log lines as JSON.
    #[arg(long)]
    pub log_json: bool,
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    BadEndpoint(String),
    BadRoute(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            BadEndpoint(s) => write!(f, "endpoint must be an http(s) URL: {s}"),
            BadRoute(s) => write!(f, "route must start with '/': {s}"),
        }
    }
}
impl std::error::Error for CliError {}

pub fn parse_lang(s: &str) -> Result<Language, String> {
    s.parse().map_err(|_| format!("unknown language {s:?} (expected ru|en)"))
}

#[inline]
fn is_http_url(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

fn validate(mut args: Args) -> Result<Args, CliError> {
    if let Some(ep) = &args.endpoint {
        if !is_http_url(ep) {
            return Err(CliError::BadEndpoint(ep.clone()));
        }
    }
    if let Some(p) = &args.path {
        if !p.starts_with('/') {
            return Err(CliError::BadRoute(p.clone()));
        }
    }
    args.endpoint = args.endpoint.take().map(|e| e.trim().to_string());
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, CliError> {
        let mut full = vec!["signsport"];
        full.extend_from_slice(argv);
        validate(Args::try_parse_from(full).expect("clap parse"))
    }

    #[test]
    fn accepts_minimal_run() {
        let a = parse(&["--text", "hello", "--lang", "EN"]).unwrap();
        assert_eq!(a.text.as_deref(), Some("hello"));
        assert_eq!(a.lang, Some(Language::En));
        assert!(!a.decline);
    }

    #[test]
    fn rejects_non_http_endpoint() {
        assert!(matches!(parse(&["--endpoint", "ftp://x"]), Err(CliError::BadEndpoint(_))));
        let a = parse(&["--endpoint", " https://api.example "]).unwrap();
        assert_eq!(a.endpoint.as_deref(), Some("https://api.example"));
    }

    #[test]
    fn rejects_relative_route() {
        assert!(matches!(parse(&["--path", "analyze"]), Err(CliError::BadRoute(_))));
    }

    #[test]
    fn decline_conflicts_with_form_fields() {
        assert!(Args::try_parse_from(["signsport", "--decline", "--text", "x"]).is_err());
        assert!(Args::try_parse_from(["signsport", "--lang", "de"]).is_err());
    }
}
