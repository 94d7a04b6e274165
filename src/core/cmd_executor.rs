use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::Cmd,
    infrastructure::{email::EmailProvider, theme_store::ThemeStore},
    raw_msg::RawMsg,
};

/// Command executor that performs side effects and reports results back as RawMsg
#[derive(Clone)]
pub struct CmdExecutor {
    raw_sender: mpsc::UnboundedSender<RawMsg>,
    theme_store: Arc<dyn ThemeStore>,
    email: Option<Arc<dyn EmailProvider>>,
}

impl CmdExecutor {
    pub fn new(raw_sender: mpsc::UnboundedSender<RawMsg>, theme_store: Arc<dyn ThemeStore>) -> Self {
        Self {
            raw_sender,
            theme_store,
            email: None,
        }
    }

    pub fn with_email_provider(mut self, email: Arc<dyn EmailProvider>) -> Self {
        self.email = Some(email);
        self
    }

    pub fn set_email_provider(&mut self, email: Arc<dyn EmailProvider>) {
        self.email = Some(email);
    }

    /// Execute a single command
    /// Email delivery runs on a spawned task; its outcome arrives later as a RawMsg
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::PersistTheme(theme) => {
                if let Err(e) = self.theme_store.save(*theme) {
                    log::error!("Failed to persist theme {theme}: {e:#}");
                    self.raw_sender.send(RawMsg::ThemeSaveFailed(e.to_string()))?;
                } else {
                    log::debug!("Persisted theme preference: {theme}");
                }
            }

            Cmd::SendContactMessage {
                credentials,
                message,
            } => {
                let Some(email) = self.email.as_ref().map(Arc::clone) else {
                    log::warn!("SendContactMessage ignored: no email provider available");
                    self.raw_sender
                        .send(RawMsg::ContactFailed("no email provider".to_string()))?;
                    return Ok(());
                };
                let sender = self.raw_sender.clone();
                let credentials = Arc::clone(credentials);
                let message = message.clone();
                tokio::spawn(async move {
                    let raw = match email.send(&credentials, &message).await {
                        Ok(()) => RawMsg::ContactDelivered,
                        Err(e) => {
                            log::error!("Email provider error: {e}");
                            RawMsg::ContactFailed(e.to_string())
                        }
                    };
                    if sender.send(raw).is_err() {
                        log::warn!("Runtime closed before the contact result arrived");
                    }
                });
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, logging failures instead of stopping at the first one
    pub fn execute_commands(&self, commands: &[Cmd]) {
        for cmd in commands {
            if let Err(e) = self.execute_command(cmd) {
                log::error!("Failed to execute {cmd:?}: {e}");
            }
        }
    }
}
