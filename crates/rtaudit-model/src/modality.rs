use std::collections::BTreeSet;

/// Modalities every group in the export is expected to carry.
pub const DEFAULT_REQUIRED: [&str; 4] = ["CT", "RTSTRUCT", "RTPLAN", "RTDOSE"];

/// The required modality set. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredModalities(BTreeSet<String>);

impl Default for RequiredModalities {
    fn default() -> Self {
        Self::from_names(DEFAULT_REQUIRED)
    }
}

impl RequiredModalities {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Required modalities absent from `observed`, in lexicographic order.
    pub fn missing_from<'a, I>(&self, observed: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let observed: BTreeSet<&str> = observed.into_iter().collect();
        self.0
            .iter()
            .filter(|name| !observed.contains(name.as_str()))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
