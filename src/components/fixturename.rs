use bevy_ecs::prelude::Component;

/// Catalog name of a fixture, used in logs and replay scripts.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixtureName(pub String);

impl FixtureName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
