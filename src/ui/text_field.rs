use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldAction {
    /// Key was consumed (or ignored) by the field.
    Edited,
    Submit,
    /// Tab / BackTab: move focus to the other answer field.
    SwitchField,
}

/// Single-line answer field with a char-indexed cursor, so umlauts and ß
/// are edited as one character each.
#[derive(Clone, Debug, Default)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Text before the cursor, the char under it (if any), and the rest.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let start = self.char_to_byte(self.cursor);
        match self.text[start..].chars().next() {
            Some(ch) => {
                let end = start + ch.len_utf8();
                (&self.text[..start], Some(ch), &self.text[end..])
            }
            None => (&self.text, None, ""),
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> FieldAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => return FieldAction::Submit,
            KeyCode::Tab | KeyCode::BackTab => return FieldAction::SwitchField,
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_at_cursor();
                }
            }
            KeyCode::Delete => self.remove_at_cursor(),
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.len(),
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char('w') if ctrl => self.delete_word_back(),
            KeyCode::Char(ch) if !ctrl => {
                let at = self.char_to_byte(self.cursor);
                self.text.insert(at, ch);
                self.cursor += 1;
            }
            _ => {}
        }
        FieldAction::Edited
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(b, _)| b)
    }

    fn remove_at_cursor(&mut self) {
        let at = self.char_to_byte(self.cursor);
        if at < self.text.len() {
            self.text.remove(at);
        }
    }

    fn delete_word_back(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        let from = self.char_to_byte(start);
        let to = self.char_to_byte(self.cursor);
        self.text.replace_range(from..to, "");
        self.cursor = start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typed(s: &str) -> TextField {
        let mut field = TextField::new();
        for c in s.chars() {
            field.handle(key(KeyCode::Char(c)));
        }
        field
    }

    #[test]
    fn typing_umlauts_keeps_cursor_in_chars() {
        let field = typed("fuhr");
        assert_eq!(field.render_parts(), ("fuhr", None, ""));

        let field = typed("aß");
        assert_eq!(field.render_parts(), ("aß", None, ""));
    }

    #[test]
    fn backspace_and_delete_remove_multibyte_chars() {
        let mut field = typed("fährt");
        field.handle(key(KeyCode::Left));
        field.handle(key(KeyCode::Left));
        field.handle(key(KeyCode::Left));
        field.handle(key(KeyCode::Backspace));
        assert_eq!(field.render_parts(), ("f", Some('h'), "rt"));
        field.handle(key(KeyCode::Delete));
        assert_eq!(field.value(), "frt");
    }

    #[test]
    fn insert_in_middle() {
        let mut field = typed("ist gfahren");
        for _ in 0..6 {
            field.handle(key(KeyCode::Left));
        }
        field.handle(key(KeyCode::Char('e')));
        assert_eq!(field.value(), "ist gefahren");
        assert_eq!(field.render_parts(), ("ist ge", Some('f'), "ahren"));
    }

    #[test]
    fn control_keys() {
        let mut field = typed("hat gesungen");
        field.handle(ctrl('w'));
        assert_eq!(field.value(), "hat ");
        field.handle(ctrl('a'));
        assert_eq!(field.render_parts(), ("", Some('h'), "at "));
        field.handle(ctrl('e'));
        assert_eq!(field.render_parts(), ("hat ", None, ""));
        field.handle(ctrl('u'));
        assert_eq!(field.render_parts(), ("", None, ""));
    }

    #[test]
    fn enter_and_tab_are_reported() {
        let mut field = typed("sang");
        assert_eq!(field.handle(key(KeyCode::Enter)), FieldAction::Submit);
        assert_eq!(field.handle(key(KeyCode::Tab)), FieldAction::SwitchField);
        assert_eq!(field.handle(key(KeyCode::BackTab)), FieldAction::SwitchField);
        assert_eq!(field.value(), "sang");
    }
}
