use serde::{Deserialize, Serialize};

/// Required modalities a single group is missing, lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupGap {
    pub group: i64,
    pub missing: Vec<String>,
}

/// Gap entries for one URN; groups ascend by group number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGaps {
    pub urn: String,
    pub groups: Vec<GroupGap>,
}

impl StudyGaps {
    pub fn missing_count(&self) -> usize {
        self.groups.iter().map(|gap| gap.missing.len()).sum()
    }
}
