use std::sync::Arc;

use crate::{
    domain::{contact::ContactMessage, theme::Theme},
    infrastructure::email::EmailCredentials,
};

/// Elm-like command definitions
/// Represents side effects (file I/O, HTTP requests, logging)
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    // Preferences
    PersistTheme(Theme),

    // Email provider
    SendContactMessage {
        credentials: Arc<EmailCredentials>,
        message: ContactMessage,
    },

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::SendContactMessage { .. } => true,
            Cmd::PersistTheme(_) | Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use secrecy::SecretString;

    fn credentials() -> Arc<EmailCredentials> {
        Arc::new(EmailCredentials::new(
            "service",
            "template",
            SecretString::from("public-key"),
        ))
    }

    #[test]
    fn test_cmd_batch_empty() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let cmd = Cmd::batch(vec![Cmd::PersistTheme(Theme::Light)]);
        assert_eq!(cmd, Cmd::PersistTheme(Theme::Light));
    }

    #[test]
    fn test_cmd_batch_multiple() {
        let cmds = vec![Cmd::PersistTheme(Theme::Light), Cmd::None];
        assert_eq!(Cmd::batch(cmds.clone()), Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_is_async() {
        let send = Cmd::SendContactMessage {
            credentials: credentials(),
            message: ContactMessage::new("Ada", "ada@example.com", "Hello"),
        };
        assert!(send.is_async());
        assert!(!Cmd::PersistTheme(Theme::Dark).is_async());
        assert!(Cmd::Batch(vec![Cmd::None, send]).is_async());
    }
}
