use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::Config;
use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::menu::Menu;
use crate::terminal::Terminal;

mod config;
mod controller;
mod error;
mod handler;
mod menu;
mod request;
mod response;
mod terminal;

fn main() -> Result<(), StackTrace> {
    let config = Config::load()?;

    let appender = tracing_appender::rolling::daily(config.log_dir(), "library.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(tracing_subscriber::filter::LevelFilter::WARN),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "application=debug,driver=debug,library=debug".into()
                    }),
                )),
        )
        .init();

    tracing::info!(
        log_dir = %config.log_dir().display(),
        loan_days = config.loan_duration().as_ref(),
        "library started"
    );

    let app = AppModule::new(&config);
    let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());
    Menu::new(app, terminal).run()?;

    tracing::info!("library stopped");
    Ok(())
}
