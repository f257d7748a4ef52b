// crates/ss_cli/src/main.rs
//
// Headless host: config → page load (consent gate armed) → accept/decline →
// one request cycle → rendered panel on stdout or --out. Stable exit codes.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Bad flags or empty text.
    pub const VALIDATION: i32 = 2;
    /// Service answered with an error payload.
    pub const APPLICATION: i32 = 3;
    /// Network, timeout, status, non-JSON or schema mismatch.
    pub const TRANSPORT: i32 = 4;
    /// Config file/env or local output failure.
    pub const CONFIG: i32 = 5;
}

use std::fs;
use std::process::ExitCode;

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use args::{parse_and_validate as parse_cli, Args};

use ss_core::{DeclineMode, SiteConfig};
use ss_io::{config::load_site_config, HttpTransport, IoError};
use ss_page::{
    analysis_page, ids, Activation, CycleError, Dispatch, MemoryPage, Page, Session, UiEvent,
};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    Application(String),
    Transport(String),
    Config(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::Application(m) => write!(f, "service error: {m}"),
            MainError::Transport(m) => write!(f, "transport: {m}"),
            MainError::Config(m) => write!(f, "config: {m}"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("signsport: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };
    init_tracing(&args);

    let rc = match run_once(&args).await {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("signsport: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

fn init_tracing(args: &Args) {
    let fallback = if args.quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Application(_) => APPLICATION,
        MainError::Transport(_) => TRANSPORT,
        MainError::Config(_) => CONFIG,
    }
}

fn map_io_err(e: IoError) -> MainError {
    match e {
        IoError::Json { pointer, msg } => MainError::Config(format!("json {pointer}: {msg}")),
        IoError::Path(m) => MainError::Config(format!("path: {m}")),
        IoError::Invalid(m) => MainError::Config(m),
    }
}

/// Defaults → file → env (in ss_io), then flags.
fn resolve_config(args: &Args) -> Result<SiteConfig, MainError> {
    let mut cfg = load_site_config(args.config.as_deref()).map_err(map_io_err)?;
    if let Some(ep) = &args.endpoint {
        cfg.endpoint_base = ep.clone();
    }
    if let Some(lang) = args.lang {
        cfg.language = lang;
    }
    if let Some(ms) = args.timeout_ms {
        cfg.timeout_ms = Some(ms);
    }
    if args.goodbye_view {
        cfg.decline_mode = DeclineMode::GoodbyeView;
    }
    Ok(cfg)
}

async fn run_once(args: &Args) -> Result<(), MainError> {
    let cfg = resolve_config(args)?;
    let route = args.path.clone().unwrap_or_else(|| cfg.routes.analysis.clone());
    let transport = HttpTransport::from_config(&cfg)
        .map_err(|e| MainError::Config(format!("http client: {e}")))?;
    info!(route = %route, endpoint = %transport.url(), lang = %cfg.language, "page loaded");

    let mut session = Session::load(analysis_page(&route, cfg.language), &route, &cfg, transport);
    let armed = matches!(session.activation(), Activation::Armed);

    if args.decline {
        if !armed {
            return Err(MainError::Validation(format!("no consent modal on {route}")));
        }
        session.dispatch(UiEvent::Click(ids::DECLINE_BUTTON)).await;
        let page = session.into_page();
        return emit(args, &declined_output(&page));
    }

    if armed {
        session.dispatch(UiEvent::Click(ids::ACCEPT_BUTTON)).await;
    }
    fill_form(session.page_mut(), args);

    match session.dispatch(UiEvent::Click(ids::ANALYZE_BUTTON)).await {
        Dispatch::Cycle(Ok(result)) => {
            info!(sport = %result.sport, confidence = %result.confidence, "recommendation");
            emit(args, session.page().html_of(&ids::RESULT))
        }
        Dispatch::Cycle(Err(e)) => {
            // The failure panel is still the page's output.
            if e.is_request_failure() {
                emit(args, session.page().html_of(&ids::RESULT))?;
            }
            Err(map_cycle_err(e, session.page()))
        }
        other => {
            warn!(?other, "submit was not dispatched");
            Err(MainError::Validation("submit control unavailable".into()))
        }
    }
}

fn fill_form<P: Page + ?Sized>(page: &mut P, args: &Args) {
    let fields = [
        (&ids::REPORT_INPUT, args.text.as_deref()),
        (&ids::AGE_INPUT, args.age.as_deref()),
        (&ids::GENDER_INPUT, args.gender.as_deref()),
    ];
    for (id, value) in fields {
        let _ = page.set_value(id, value.unwrap_or_default());
    }
}

fn map_cycle_err(e: CycleError, page: &MemoryPage) -> MainError {
    match e {
        CycleError::Validation => {
            let notice = page.alerts().last().cloned().unwrap_or_else(|| "empty text".into());
            MainError::Validation(notice)
        }
        CycleError::Application(m) => MainError::Application(m),
        CycleError::Transport(t) => MainError::Transport(t.to_string()),
        CycleError::ConsentRequired => MainError::Validation("consent not given".into()),
        CycleError::Unavailable(p) => MainError::Validation(p.to_string()),
    }
}

/// Goodbye body when replaced in place, else the destination path.
fn declined_output(page: &MemoryPage) -> String {
    match page.body_html() {
        Some(html) => html.to_string(),
        None => format!("declined: {}", page.path()),
    }
}

fn emit(args: &Args, content: &str) -> Result<(), MainError> {
    match &args.out {
        Some(path) => {
            fs::write(path, content)
                .map_err(|e| MainError::Config(format!("write {}: {e}", path.display())))?;
            if !args.quiet {
                eprintln!("signsport: wrote {}", path.display());
            }
            Ok(())
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
