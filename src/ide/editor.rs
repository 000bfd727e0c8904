//! The seam between the engine and the hosting editor.
//!
//! The engine never renders anything itself: it hands placements to an
//! [`Editor`], which owns decoration styles, documents and notifications.

use crate::base::constants::DECORATION_STYLE_NAME;

use super::Placement;

/// Handle to a decoration style registered with the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(pub u32);

/// How hints look. Rendering details beyond these are up to the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationStyle {
    pub name: &'static str,
    /// Hint text is drawn after the literal rather than before it.
    pub after: bool,
    pub italic: bool,
    /// Horizontal gap before the hint, in `em`.
    pub margin_left_em: f32,
}

impl Default for DecorationStyle {
    fn default() -> Self {
        Self {
            name: DECORATION_STYLE_NAME,
            after: true,
            italic: true,
            margin_left_em: 0.5,
        }
    }
}

/// Severity of a user-visible notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// The document currently focused in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDocument<'a> {
    pub file_name: &'a str,
    pub text: &'a str,
}

/// Capabilities the engine needs from its host.
pub trait Editor {
    /// The focused document, if any.
    fn active_document(&self) -> Option<ActiveDocument<'_>>;

    fn register_style(&mut self, style: &DecorationStyle) -> StyleId;

    /// Replace every decoration of `style` in the active document.
    fn apply_decorations(&mut self, style: StyleId, placements: &[Placement]);

    fn clear_decorations(&mut self, style: StyleId) {
        self.apply_decorations(style, &[]);
    }

    fn release_style(&mut self, style: StyleId);

    fn notify(&mut self, level: NotificationLevel, message: &str);
}
