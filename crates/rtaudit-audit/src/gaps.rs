use tracing::debug;

use rtaudit_model::{GroupGap, RequiredModalities, StudyGaps, StudyRecord};

/// Compare each group's observed modalities against the required set.
///
/// Duplicate observations collapse to set membership. Groups with
/// nothing missing are omitted, and so are URNs whose every group is
/// complete. URN order follows the input; groups come out ascending and
/// missing modalities lexicographic, which fixes the report ordering.
pub fn find_gaps(records: &[StudyRecord], required: &RequiredModalities) -> Vec<StudyGaps> {
    let mut result = Vec::new();
    for record in records {
        let mut groups = Vec::new();
        for (&group, modalities) in &record.groups {
            let missing = required.missing_from(modalities.iter().map(String::as_str));
            if !missing.is_empty() {
                groups.push(GroupGap { group, missing });
            }
        }
        if !groups.is_empty() {
            result.push(StudyGaps {
                urn: record.urn.clone(),
                groups,
            });
        }
    }
    debug!(studies = result.len(), "gap detection complete");
    result
}
