use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{cmd_executor::CmdExecutor, state::AppState},
    infrastructure::{
        email::EmailProvider,
        theme_store::ThemeStore,
        tui::{event_source::EventSource, test::TestTui, Event, Frame, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
    raw_msg::RawMsg,
};

/// Side-effect services handed to the command executor
#[derive(Clone)]
pub struct Services {
    pub theme_store: Arc<dyn ThemeStore>,
    pub email: Option<Arc<dyn EmailProvider>>,
}

enum Next {
    Event(Option<Event>),
    Result(RawMsg),
}

/// Drives the application: terminal events in, state updates, frames out
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    components: Components,
}

impl AppRunner {
    fn new(
        state: AppState,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        events: EventSource,
        services: Services,
    ) -> Self {
        let components = Components::new(Arc::clone(&state.content));
        let mut runtime = Runtime::new(state);
        let mut executor = CmdExecutor::new(runtime.raw_sender(), services.theme_store);
        if let Some(email) = services.email {
            executor.set_email_provider(email);
        }
        runtime.set_executor(executor);

        Self {
            runtime,
            tui,
            events,
            components,
        }
    }

    /// Runner over a real terminal; events come from the terminal itself
    pub fn new_with_real(
        state: AppState,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        services: Services,
    ) -> Self {
        let events = EventSource::real(Arc::clone(&tui));
        Self::new(state, tui, events, services)
    }

    /// Runner over a [`TestTui`] replaying `events`; the run ends when they are exhausted
    pub fn new_with_test(
        state: AppState,
        tui: Arc<Mutex<TestTui>>,
        events: impl IntoIterator<Item = Event>,
        services: Services,
    ) -> Self {
        Self::new(state, tui, EventSource::test(events), services)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        loop {
            let next = tokio::select! {
                event = self.events.next() => Next::Event(event),
                Some(raw) = self.runtime.recv_raw_msg() => Next::Result(raw),
            };

            let needs_render = match next {
                Next::Event(Some(event)) => self.handle_event(event).await?,
                Next::Event(None) => {
                    log::info!("Event source closed, quitting");
                    self.runtime.send_raw_msg(RawMsg::Quit);
                    false
                }
                // A side effect finished; its outcome is usually visible
                Next::Result(raw) => {
                    self.runtime.send_raw_msg(raw);
                    true
                }
            };

            self.runtime.run_update_cycle();

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if needs_render {
                self.render().await?;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Forward a terminal event to the runtime; returns whether a frame should be drawn
    async fn handle_event(&mut self, event: Event) -> Result<bool> {
        let render = match event {
            Event::Quit | Event::Closed => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
            Event::Tick => {
                self.runtime.send_raw_msg(RawMsg::Tick);
                false
            }
            Event::Render | Event::Init => true,
            Event::Resize(w, h) => {
                self.tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                self.runtime.send_raw_msg(RawMsg::Resize(w, h));
                true
            }
            Event::Key(key) => {
                self.runtime.send_raw_msg(RawMsg::Key(key));
                true
            }
            Event::Error => {
                self.runtime
                    .send_raw_msg(RawMsg::Error("terminal event error".to_string()));
                true
            }
            Event::FocusGained | Event::FocusLost | Event::Paste(_) | Event::Mouse(_) => false,
        };
        Ok(render)
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.run_update_cycle();
        self.render().await
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &mut self.components;
        self.tui
            .lock()
            .await
            .draw(&mut |f: &mut Frame<'_>| components.render(f, state))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{core::state::nav::Section, infrastructure::theme_store::MemoryThemeStore};

    fn services() -> Services {
        Services {
            theme_store: Arc::new(MemoryThemeStore::default()),
            email: None,
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn test_tui() -> Arc<Mutex<TestTui>> {
        match TestTui::new(100, 30) {
            Ok(tui) => Arc::new(Mutex::new(tui)),
            Err(e) => panic!("test tui: {e}"),
        }
    }

    #[tokio::test]
    async fn test_quit_key_stops_the_loop() -> Result<()> {
        let tui = test_tui();
        let mut runner = AppRunner::new_with_test(
            AppState::default(),
            Arc::clone(&tui),
            [Event::Init, key('q'), key('2')],
            services(),
        );
        runner.run().await?;

        assert!(runner.runtime().state().system.should_quit);
        assert_eq!(runner.runtime().state().nav.current, Section::Home);
        Ok(())
    }

    #[tokio::test]
    async fn test_keys_navigate_and_render() -> Result<()> {
        let tui = test_tui();
        let mut runner = AppRunner::new_with_test(
            AppState::default(),
            Arc::clone(&tui),
            [Event::Init, key('2'), Event::Tick],
            services(),
        );
        runner.run().await?;

        assert_eq!(runner.runtime().state().nav.current, Section::About);
        let tui = tui.lock().await;
        // initial frame, Init, and the key press; Tick does not draw
        assert_eq!(tui.draw_count(), 3);
        assert!(tui.screen_text().contains("About Me"));
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_and_resume() -> Result<()> {
        let tui = test_tui();
        let ctrl_z = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let mut runner =
            AppRunner::new_with_test(AppState::default(), Arc::clone(&tui), [ctrl_z], services());
        runner.run().await?;

        assert_eq!(tui.lock().await.suspend_count(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
        Ok(())
    }
}
