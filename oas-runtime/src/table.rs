use crate::HydrationTag;

/// Ordered `(property name, tag)` pairs describing one model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationTable {
    entries: Vec<(String, HydrationTag)>,
}

impl HydrationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry (builder style).
    pub fn with(mut self, name: impl Into<String>, tag: HydrationTag) -> Self {
        self.push(name, tag);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, tag: HydrationTag) {
        self.entries.push((name.into(), tag));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HydrationTag)> {
        self.entries.iter().map(|(name, tag)| (name.as_str(), tag))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, HydrationTag)> for HydrationTable {
    fn from_iter<T: IntoIterator<Item = (S, HydrationTag)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, tag)| (name.into(), tag))
                .collect(),
        }
    }
}
