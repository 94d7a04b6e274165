use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use crate::domain::theme::Theme;

/// Named styles per theme, e.g. `styles.dark.accent = "cyan bold"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<Theme, HashMap<String, Style>>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, HashMap<String, String>>::deserialize(deserializer)?;
        let mut styles = HashMap::new();
        for (theme, inner) in parsed_map {
            let theme = Theme::from_str(&theme).map_err(|_| {
                serde::de::Error::custom(format!("unknown theme `{theme}` in styles"))
            })?;
            let inner = inner
                .into_iter()
                .map(|(name, raw)| (name, parse_style(&raw)))
                .collect();
            styles.insert(theme, inner);
        }
        Ok(Styles(styles))
    }
}

/// Resolved colours the components draw with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Page text and background
    pub base: Style,
    pub title: Style,
    pub accent: Style,
    pub muted: Style,
    pub border: Style,
    /// Selected tab, card or focused field
    pub highlight: Style,
    pub success: Style,
    pub error: Style,
}

impl Palette {
    /// Built-in colours used for any name missing from the config
    pub fn fallback(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                base: Style::default().fg(Color::Gray).bg(Color::Black),
                title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Cyan),
                muted: Style::default().fg(Color::DarkGray),
                border: Style::default().fg(Color::DarkGray),
                highlight: Style::default().fg(Color::Black).bg(Color::Cyan),
                success: Style::default().fg(Color::Green),
                error: Style::default().fg(Color::Red),
            },
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                title: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Blue),
                muted: Style::default().fg(Color::Gray),
                border: Style::default().fg(Color::Gray),
                highlight: Style::default().fg(Color::White).bg(Color::Blue),
                success: Style::default().fg(Color::Green),
                error: Style::default().fg(Color::Red),
            },
        }
    }
}

impl Styles {
    /// Palette for `theme`, configured names layered over [`Palette::fallback`]
    pub fn palette(&self, theme: Theme) -> Palette {
        let fallback = Palette::fallback(theme);
        let Some(named) = self.get(&theme) else {
            return fallback;
        };
        let pick = |name: &str, default: Style| named.get(name).copied().unwrap_or(default);
        Palette {
            base: pick("base", fallback.base),
            title: pick("title", fallback.title),
            accent: pick("accent", fallback.accent),
            muted: pick("muted", fallback.muted),
            border: pick("border", fallback.border),
            highlight: pick("highlight", fallback.highlight),
            success: pick("success", fallback.success),
            error: pick("error", fallback.error),
        }
    }
}

/// Parse `"[modifiers] [fg] [on bg]"`, e.g. `"bold cyan on black"`.
/// Colours accept names, `#rrggbb` and 0-255 indices. Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let background = background.strip_prefix("on ").unwrap_or(background);

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Ok(color) = Color::from_str(word) {
            style = style.fg(color);
        }
    }
    for word in background.split_whitespace() {
        if let Ok(color) = Color::from_str(word) {
            style = style.bg(color);
        }
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word.to_lowercase().as_str() {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "reverse" => Some(Modifier::REVERSED),
        "blink" => Some(Modifier::SLOW_BLINK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("red", Style::default().fg(Color::Red))]
    #[case("bold cyan", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))]
    #[case("white on blue", Style::default().fg(Color::White).bg(Color::Blue))]
    #[case("#ff8800", Style::default().fg(Color::Rgb(0xff, 0x88, 0x00)))]
    #[case("on black", Style::default().bg(Color::Black))]
    #[case("", Style::default())]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), expected);
    }

    #[test]
    fn test_palette_uses_fallback_for_missing_names() {
        let mut styles = Styles::default();
        styles.insert(
            Theme::Light,
            HashMap::from([("accent".to_string(), parse_style("magenta"))]),
        );
        let light = styles.palette(Theme::Light);
        assert_eq!(light.accent, Style::default().fg(Color::Magenta));
        assert_eq!(light.error, Palette::fallback(Theme::Light).error);
        assert_eq!(styles.palette(Theme::Dark), Palette::fallback(Theme::Dark));
    }

    #[test]
    fn test_palettes_differ_per_theme() {
        assert_ne!(
            Palette::fallback(Theme::Light).base,
            Palette::fallback(Theme::Dark).base
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_theme() {
        let result: Result<Styles, _> = json5::from_str(r#"{ sepia: { base: "brown" } }"#);
        assert!(result.is_err());
    }
}
