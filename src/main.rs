use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use folio::{
    core::state::AppState,
    domain::{content::Content, theme::Theme},
    infrastructure::{
        cli::Cli,
        config::Config,
        email::EmailJsClient,
        theme_store::{initial_theme, FileThemeStore},
        tui::real::RealTui,
    },
    integration::app_runner::{AppRunner, Services},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let content = match &args.content {
        Some(path) => Content::load(path)?,
        None => Content::builtin(),
    };

    let config = Config::new()?;
    if !config.emailjs.is_configured() {
        log::info!("Email delivery is not configured; the contact form will report it");
    }

    let theme_store = Arc::new(FileThemeStore::in_dir(&config.config.data_dir));
    let theme = initial_theme(theme_store.as_ref(), Theme::system());
    log::info!(
        "Starting with the {theme} theme (preferences at {})",
        theme_store.path().display()
    );

    let services = Services {
        theme_store,
        email: Some(Arc::new(EmailJsClient::new(config.emailjs.api_url.clone()))),
    };
    let state = AppState::new(Arc::new(content), config, theme);

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new_with_real(state, tui, services);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
