use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Environment variable set by many terminals as `fg;bg` (or `fg;default;bg`)
pub const COLORFGBG_ENV: &str = "COLORFGBG";

/// Display mode of the portfolio
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Derive the terminal's color scheme from a `COLORFGBG` value.
    ///
    /// Only the last component (the background) is considered. ANSI colors 0-6 and 8
    /// are dark backgrounds; 7 and 9-15 are light ones.
    pub fn from_colorfgbg(value: Option<&str>) -> Option<Self> {
        let bg = value?.rsplit(';').next()?.trim().parse::<u8>().ok()?;
        match bg {
            0..=6 | 8 => Some(Theme::Dark),
            7 | 9..=15 => Some(Theme::Light),
            _ => None,
        }
    }

    /// The system preference, falling back to dark when the terminal gives no hint.
    pub fn system() -> Self {
        let value = std::env::var(COLORFGBG_ENV).ok();
        Self::from_colorfgbg(value.as_deref()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_toggled_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[rstest]
    #[case(Some("15;0"), Some(Theme::Dark))]
    #[case(Some("0;15"), Some(Theme::Light))]
    #[case(Some("12;default;8"), Some(Theme::Dark))]
    #[case(Some("0;7"), Some(Theme::Light))]
    #[case(Some("15;default"), None)]
    #[case(Some(""), None)]
    #[case(Some("0;200"), None)]
    #[case(None, None)]
    fn test_from_colorfgbg(#[case] value: Option<&str>, #[case] expected: Option<Theme>) {
        assert_eq!(Theme::from_colorfgbg(value), expected);
    }

    #[test]
    fn test_string_forms() -> color_eyre::Result<()> {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::from_str("dark")?, Theme::Dark);
        assert_eq!(serde_json::to_string(&Theme::Dark)?, "\"dark\"");
        Ok(())
    }
}
