use log::warn;

/// Ordered list of pre-loaded textures selectable by index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TexturePalette {
    label: String,
    textures: Vec<String>,
}

impl TexturePalette {
    pub fn new(label: impl Into<String>, textures: Vec<String>) -> Self {
        Self {
            label: label.into(),
            textures,
        }
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.textures.get(index).map(String::as_str)
    }

    /// Validate an index coming from the UI; out-of-range indices are logged
    pub fn select(&self, index: usize) -> Option<usize> {
        if index < self.textures.len() {
            Some(index)
        } else {
            warn!(
                "{} texture index {} out of range (have {})",
                self.label,
                index,
                self.textures.len()
            );
            None
        }
    }
}
