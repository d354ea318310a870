use crate::reservation::intake::ReservationInput;

/// Single-line text buffer with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub buffer: String,
    pub cursor_position: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(ch) = self.buffer[..self.cursor_position].chars().next_back() {
            self.cursor_position -= ch.len_utf8();
            self.buffer.remove(self.cursor_position);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_position < self.buffer.len() {
            self.buffer.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(ch) = self.buffer[..self.cursor_position].chars().next_back() {
            self.cursor_position -= ch.len_utf8();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(ch) = self.buffer[self.cursor_position..].chars().next() {
            self.cursor_position += ch.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.buffer.len();
    }

    /// Ctrl+W: removes the word before the cursor along with trailing whitespace.
    pub fn delete_word_backward(&mut self) {
        let before = &self.buffer[..self.cursor_position];
        let trimmed = before.trim_end();
        let word_start = trimmed
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map(|(i, ch)| i + ch.len_utf8())
            .unwrap_or(0);

        self.buffer.replace_range(word_start..self.cursor_position, "");
        self.cursor_position = word_start;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }

    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor_position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    People,
    Note,
}

impl FormField {
    pub const ALL: [FormField; 4] = [Self::Name, Self::Phone, Self::People, Self::Note];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Phone => "Phone",
            Self::People => "People",
            Self::Note => "Note (optional)",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Phone => Self::People,
            Self::People => Self::Note,
            Self::Note => Self::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Name => Self::Note,
            Self::Phone => Self::Name,
            Self::People => Self::Phone,
            Self::Note => Self::People,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReservationForm {
    pub name: TextField,
    pub phone: TextField,
    pub people: TextField,
    pub note: TextField,
    pub focused: FormField,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self {
            name: TextField::new(),
            phone: TextField::new(),
            people: TextField::new(),
            note: TextField::new(),
            focused: FormField::Name,
        }
    }

    pub fn field(&self, field: FormField) -> &TextField {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::People => &self.people,
            FormField::Note => &self.note,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focused {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::People => &mut self.people,
            FormField::Note => &mut self.note,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    pub fn to_input(&self) -> ReservationInput {
        ReservationInput {
            name: self.name.buffer.clone(),
            phone: self.phone.buffer.clone(),
            people: self.people.buffer.clone(),
            note: self.note.buffer.clone(),
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.people.clear();
        self.note.clear();
        self.focused = FormField::Name;
    }
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new()
    }
}
