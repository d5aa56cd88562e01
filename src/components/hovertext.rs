use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
/// Floating text shown next to a fixture (prompts, pressed action, live counters).
pub struct HoverText {
    /// The text content to render.
    pub content: String,
}

impl HoverText {
    /// Creates a new HoverText component.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
    /// Updates the text content, returning `true` if it changed.
    pub fn set_content(&mut self, new_content: &str) -> bool {
        if self.content == new_content {
            return false;
        }
        self.content.clear();
        self.content.push_str(new_content);
        true
    }
}
