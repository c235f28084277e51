use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use rtaudit_model::{AuditError, Member, Result, StudyBlock, field};

use crate::extract::extract_field;

/// Read a whole export file into memory and assemble its identifier blocks.
pub fn load_export(path: &Path) -> Result<Vec<StudyBlock>> {
    let contents = fs::read_to_string(path)?;
    assemble_blocks(contents.lines())
}

/// Walk the lines once, collecting group/modality members until a URN
/// line closes the current block.
///
/// The three extractions are attempted independently per line. Empty
/// extracted values count as absent. Members trailing the final URN have
/// no block to land in and are dropped; the export format ends every
/// block with its URN line, so this is intentional rather than an error.
pub fn assemble_blocks<'a, I>(lines: I) -> Result<Vec<StudyBlock>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut blocks: Vec<StudyBlock> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut members: Vec<Member> = Vec::new();
    for line in lines {
        if let Some(value) = extract_field(line, &field::GROUP_NUMBER).filter(|v| !v.is_empty()) {
            let group = value
                .parse::<i64>()
                .map_err(|_| AuditError::InvalidGroupNumber {
                    value: value.to_string(),
                })?;
            trace!(group, "group number token");
            members.push(Member::Group(group));
        }
        if let Some(value) = extract_field(line, &field::MODALITY).filter(|v| !v.is_empty()) {
            trace!(modality = value, "modality token");
            members.push(Member::Modality(value.to_string()));
        }
        if let Some(urn) = extract_field(line, &field::URN).filter(|v| !v.is_empty()) {
            if !seen.insert(urn.to_string()) {
                return Err(AuditError::DuplicateIdentifier {
                    urn: urn.to_string(),
                });
            }
            blocks.push(StudyBlock {
                urn: urn.to_string(),
                members: std::mem::take(&mut members),
            });
        }
    }
    if !members.is_empty() {
        debug!(dropped = members.len(), "tokens after the final URN dropped");
    }
    debug!(blocks = blocks.len(), "assembled identifier blocks");
    Ok(blocks)
}
