use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use folio::{
    core::{cmd_executor::CmdExecutor, state::AppState},
    domain::{content::Content, theme::Theme},
    infrastructure::{
        config::Config,
        theme_store::{initial_theme, FileThemeStore, ThemeStore},
    },
    integration::runtime::Runtime,
    RawMsg,
};

fn toggle_key() -> RawMsg {
    RawMsg::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE))
}

fn runtime_with_store(store: &Arc<FileThemeStore>, system: Theme) -> Runtime {
    let theme = initial_theme(store.as_ref(), system);
    let state = AppState::new(Arc::new(Content::builtin()), Config::default(), theme);
    let mut runtime = Runtime::new(state);
    let executor = CmdExecutor::new(
        runtime.raw_sender(),
        Arc::clone(store) as Arc<dyn ThemeStore>,
    );
    runtime.set_executor(executor);
    runtime
}

#[test]
fn test_without_saved_preference_uses_system_theme() {
    let dir = TempDir::new().expect("temp dir");
    let store = Arc::new(FileThemeStore::in_dir(dir.path()));

    let runtime = runtime_with_store(&store, Theme::Light);
    assert_eq!(runtime.state().theme.current, Theme::Light);
}

#[test]
fn test_toggle_is_saved_and_survives_restart() -> Result<()> {
    let dir = TempDir::new()?;
    let store = Arc::new(FileThemeStore::in_dir(dir.path()));

    let mut runtime = runtime_with_store(&store, Theme::Dark);
    runtime.send_raw_msg(toggle_key());
    runtime.run_update_cycle();
    assert_eq!(runtime.state().theme.current, Theme::Light);
    assert_eq!(store.load()?, Some(Theme::Light));

    // A fresh start reads the saved preference, not the system one
    let restarted = runtime_with_store(&store, Theme::Dark);
    assert_eq!(restarted.state().theme.current, Theme::Light);
    Ok(())
}

#[test]
fn test_toggling_twice_restores_theme_and_palette() -> Result<()> {
    let dir = TempDir::new()?;
    let store = Arc::new(FileThemeStore::in_dir(dir.path()));
    let mut runtime = runtime_with_store(&store, Theme::Dark);
    let styles = runtime.state().config.config.styles.clone();
    let before = styles.palette(runtime.state().theme.current);

    runtime.send_raw_msg(toggle_key());
    runtime.run_update_cycle();
    assert_ne!(styles.palette(runtime.state().theme.current), before);

    runtime.send_raw_msg(toggle_key());
    runtime.run_update_cycle();
    assert_eq!(runtime.state().theme.current, Theme::Dark);
    assert_eq!(styles.palette(runtime.state().theme.current), before);
    assert_eq!(store.load()?, Some(Theme::Dark));
    Ok(())
}

#[test]
fn test_corrupt_preference_falls_back_to_system() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileThemeStore::in_dir(dir.path());
    std::fs::write(store.path(), "{ not json")?;

    assert_eq!(initial_theme(&store, Theme::Light), Theme::Light);
    Ok(())
}
