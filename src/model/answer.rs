/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    id: u32,
    text: String,
}

impl Answer {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Answer { id, text: text.into() }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}. {}", self.id, self.text)
    }
}
