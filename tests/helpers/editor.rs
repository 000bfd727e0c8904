//! Editor double that records everything the engine asks of it.

use keylens::ide::{ActiveDocument, DecorationStyle, NotificationLevel, StyleId};
use keylens::{Editor, Placement};

#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub document: Option<(String, String)>,
    pub styles: Vec<DecorationStyle>,
    pub released: Vec<StyleId>,
    /// Decorations currently shown, per the last `apply_decorations`
    pub shown: Vec<Placement>,
    pub notifications: Vec<(NotificationLevel, String)>,
}

impl RecordingEditor {
    pub fn with_document(file_name: &str, text: &str) -> Self {
        Self {
            document: Some((file_name.to_string(), text.to_string())),
            ..Self::default()
        }
    }

    /// Text of every shown hint, in render order.
    pub fn shown_labels(&self) -> Vec<&str> {
        self.shown.iter().map(|p| p.label.as_str()).collect()
    }

    /// The source slice under every shown hint.
    pub fn shown_literals(&self) -> Vec<String> {
        let Some((_, text)) = &self.document else {
            return Vec::new();
        };
        self.shown
            .iter()
            .map(|p| text[usize::from(p.range.start())..usize::from(p.range.end())].to_string())
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .filter(|(level, _)| *level == NotificationLevel::Error)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}

impl Editor for RecordingEditor {
    fn active_document(&self) -> Option<ActiveDocument<'_>> {
        self.document
            .as_ref()
            .map(|(file_name, text)| ActiveDocument { file_name, text })
    }

    fn register_style(&mut self, style: &DecorationStyle) -> StyleId {
        self.styles.push(style.clone());
        StyleId(self.styles.len() as u32)
    }

    fn apply_decorations(&mut self, _style: StyleId, placements: &[Placement]) {
        self.shown = placements.to_vec();
    }

    fn release_style(&mut self, style: StyleId) {
        self.released.push(style);
    }

    fn notify(&mut self, level: NotificationLevel, message: &str) {
        self.notifications.push((level, message.to_string()));
    }
}
