use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One token of an identifier block, in the order encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    Group(i64),
    Modality(String),
}

/// All group/modality tokens collected before one URN line closed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyBlock {
    pub urn: String,
    pub members: Vec<Member>,
}

/// A block regrouped by group number.
///
/// Each group's modality list keeps insertion order and retains
/// duplicates; gap detection applies set semantics later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub urn: String,
    pub groups: BTreeMap<i64, Vec<String>>,
}
