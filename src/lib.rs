pub mod models;
pub mod services;
pub mod traits;

use std::io::Write as _;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tracing::{info, warn};

use crate::services::chat_api_openai::OpenAiChatApi;
use crate::services::session::{ChatSession, SubmitOutcome};
use crate::services::settings::{self, AppConfig};
use crate::services::transcript::{self, TranscriptView};
use crate::traits::chat_api::ChatApi;

/// What the process shows at startup: the chat UI, or a blocking
/// configuration-error screen when the credential is absent.
///
/// Deliberately not `Debug`: the `Chat` variant carries the credential.
pub enum StartupView {
    Chat { api_key: String },
    ConfigurationError(String),
}

pub fn startup_view(cfg: &AppConfig) -> StartupView {
    match settings::resolve_api_key(&cfg.llm) {
        Ok(api_key) => StartupView::Chat { api_key },
        Err(e) => {
            warn!(error = %e, "startup: credential missing, chat disabled");
            StartupView::ConfigurationError(transcript::config_error_screen())
        }
    }
}

/// High-level entrypoint: load config, init logging, run the chat loop.
pub async fn run_with_config_path(path: &str) -> std::io::Result<()> {
    let cfg = settings::load_config_or_default(path)
        .map_err(|e| std::io::Error::other(format!("Failed to load {}: {}", path, e)))?;
    let _log_guard = init_logging(&cfg)?;
    run_chat(cfg).await
}

/// Structured logging goes to a file so log lines never interleave with the
/// transcript on stdout. `RUST_LOG` wins over `log.level`; default `info`.
/// An unusable `log.dir` is an error, not a panic.
fn init_logging(
    cfg: &AppConfig,
) -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    let dir = cfg
        .log
        .as_ref()
        .and_then(|l| l.dir.clone())
        .unwrap_or_else(|| "./logs".to_string());
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        cfg.log
            .as_ref()
            .and_then(|l| l.level.clone())
            .unwrap_or_else(|| "info".to_string())
    });
    std::fs::create_dir_all(&dir)
        .map_err(|e| std::io::Error::other(format!("log dir {} is unusable: {}", dir, e)))?;
    let appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix("parley.log")
        .build(&dir)
        .map_err(|e| std::io::Error::other(format!("log file in {} is unusable: {}", dir, e)))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
    Ok(guard)
}

/// Interactive loop: read a line, submit it, redraw the transcript. One
/// request in flight at a time; the prompt is simply not offered while the
/// response is awaited.
pub async fn run_chat(cfg: AppConfig) -> std::io::Result<()> {
    let api_key = match startup_view(&cfg) {
        StartupView::ConfigurationError(screen) => {
            println!("{}", screen);
            return Ok(());
        }
        StartupView::Chat { api_key } => api_key,
    };

    let chat_api: Arc<dyn ChatApi> = Arc::new(
        OpenAiChatApi::from_config(&cfg.llm, api_key)
            .map_err(|e| std::io::Error::other(e.to_string()))?,
    );
    let mut session = ChatSession::new(chat_api);
    let view = TranscriptView::builder()
        .maybe_width(cfg.ui.as_ref().and_then(|u| u.width))
        .build();

    info!("chat session starting");
    println!("parley: type your message, /quit to exit");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == "/quit" {
            break;
        }
        session.store_mut().set_draft(&line);
        let draft = session.store().draft().to_string();
        if draft.trim().is_empty() {
            continue;
        }

        println!("{}", view.thinking_line());
        let outcome = session.submit(&draft).await;
        if outcome == SubmitOutcome::Rejected {
            continue;
        }
        println!("{}", view.render(session.store()));
    }

    info!("chat session ended");
    Ok(())
}
