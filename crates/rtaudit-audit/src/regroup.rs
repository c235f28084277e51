use std::collections::BTreeMap;

use rtaudit_model::{AuditError, Member, Result, StudyBlock, StudyRecord};

/// Fold each block's flat member list into a per-group modality map.
pub fn regroup(blocks: Vec<StudyBlock>) -> Result<Vec<StudyRecord>> {
    blocks.into_iter().map(regroup_block).collect()
}

/// Members must pair up as (group, modality). An odd count or a
/// mispaired token means the file does not match the expected export
/// layout, which aborts the run rather than risking a misleading report.
fn regroup_block(block: StudyBlock) -> Result<StudyRecord> {
    let StudyBlock { urn, members } = block;
    let tokens = members.len();
    if tokens % 2 != 0 {
        return Err(AuditError::MalformedBlock { urn, tokens });
    }
    let mut groups: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    let mut iter = members.into_iter();
    while let (Some(first), Some(second)) = (iter.next(), iter.next()) {
        let (Member::Group(group), Member::Modality(modality)) = (first, second) else {
            return Err(AuditError::MalformedBlock { urn, tokens });
        };
        groups.entry(group).or_default().push(modality);
    }
    Ok(StudyRecord { urn, groups })
}
