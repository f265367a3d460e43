//! Pattern text buffer.
//!
//! Holds the multi-line text typed for a shape or template. Letters are
//! uppercased as they are typed so the buffer shows what will be placed.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternBuffer {
    text: String,
}

impl PatternBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        self.text.extend(ch.to_uppercase());
    }

    pub fn newline(&mut self) {
        self.text.push('\n');
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_uppercases_live() {
        let mut buf = PatternBuffer::new();
        for ch in "ab.c".chars() {
            buf.insert(ch);
        }
        assert_eq!(buf.text(), "AB.C");
    }

    #[test]
    fn newline_and_backspace() {
        let mut buf = PatternBuffer::new();
        buf.insert('a');
        buf.newline();
        buf.insert('b');
        buf.backspace();
        assert_eq!(buf.text(), "A\n");
        buf.backspace();
        buf.backspace();
        buf.backspace();
        assert!(buf.is_empty());
    }

    #[test]
    fn control_chars_are_ignored() {
        let mut buf = PatternBuffer::new();
        buf.insert('\t');
        buf.insert('\u{7}');
        assert!(buf.is_empty());
        buf.insert('x');
        buf.clear();
        assert!(buf.is_empty());
    }
}
