use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity handed out when a textile is registered.
///
/// Two registrations of the same model produce two different ids; the name is
/// the lookup key, the id only tells registrations apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextileId(pub Uuid);

impl TextileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TextileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TextileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(TextileId::new(), TextileId::new());
    }
}
