/// Receives recoverable problems found while building a graph.
pub trait WarningSink {
    fn warn(&mut self, message: &str);
}

/// Keeps every warning in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedWarnings {
    messages: Vec<String>,
}

impl CollectedWarnings {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl WarningSink for CollectedWarnings {
    fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
