use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::ui::TextAreaState;
use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::ui::{CursorPosition, TextSelection};

/// Production engine based on tui-textarea. Each call hydrates a throwaway
/// TextArea from the snapshot, feeds it the keys and reads the result back.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn hydrate(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        Self::jump(&mut textarea, snapshot.cursor_position);
        if let Some(selection) = &snapshot.selection {
            Self::jump(&mut textarea, selection.start);
            textarea.start_selection();
            Self::jump(&mut textarea, selection.end);
        }
        textarea
    }

    fn jump(textarea: &mut TextArea<'_>, position: CursorPosition) {
        let line = u16::try_from(position.line).unwrap_or(u16::MAX);
        let column = u16::try_from(position.column).unwrap_or(u16::MAX);
        textarea.move_cursor(CursorMove::Jump(line, column));
    }

    fn snapshot(textarea: &TextArea<'_>) -> TextAreaState {
        let (line, column) = textarea.cursor();
        let selection = textarea
            .selection_range()
            .map(|((sl, sc), (el, ec))| TextSelection {
                start: CursorPosition {
                    line: sl,
                    column: sc,
                },
                end: CursorPosition {
                    line: el,
                    column: ec,
                },
            });
        TextAreaState::new(
            textarea.lines().join("\n"),
            CursorPosition { line, column },
            selection,
        )
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::snapshot(&textarea)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_appends_and_moves_cursor() {
        let engine = TuiTextAreaEngine;
        let keys = [key(KeyCode::Char('h')), key(KeyCode::Char('i'))];
        let out = engine.apply_keys(&TextAreaState::empty(), &keys);
        assert_eq!(out.content, "hi");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 2 });
    }

    #[test]
    fn test_backspace_at_restored_cursor() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new(
            "abc".to_string(),
            CursorPosition { line: 0, column: 3 },
            None,
        );
        let out = engine.apply_keys(&snap, &[key(KeyCode::Backspace)]);
        assert_eq!(out.content, "ab");
    }

    #[test]
    fn test_enter_splits_lines() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new(
            "ab".to_string(),
            CursorPosition { line: 0, column: 1 },
            None,
        );
        let out = engine.apply_keys(&snap, &[key(KeyCode::Enter)]);
        assert_eq!(out.content, "a\nb");
        assert_eq!(out.cursor_position, CursorPosition { line: 1, column: 0 });
    }
}
