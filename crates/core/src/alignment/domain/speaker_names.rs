use std::collections::HashMap;

/// Maps raw diarization labels to display names.
///
/// Labels without an entry resolve to themselves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpeakerNames {
    names: HashMap<String, String>,
}

impl SpeakerNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `labels[i]` with `names[i]`.
    ///
    /// Labels past the end of `names` stay unmapped; surplus names are ignored.
    pub fn positional(labels: &[String], names: &[String]) -> Self {
        let names = labels
            .iter()
            .zip(names)
            .map(|(label, name)| (label.clone(), name.clone()))
            .collect();
        Self { names }
    }

    pub fn insert(&mut self, label: impl Into<String>, name: impl Into<String>) {
        self.names.insert(label.into(), name.into());
    }

    pub fn resolve<'a>(&'a self, label: &'a str) -> &'a str {
        self.names.get(label).map(String::as_str).unwrap_or(label)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
