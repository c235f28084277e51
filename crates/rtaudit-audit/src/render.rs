use std::io::{self, Write};

use rtaudit_model::StudyGaps;

/// Write the gap report in its fixed hierarchical layout: the URN, each
/// gapped group indented once, each missing modality indented twice.
/// An empty gap list produces no output at all.
pub fn render_report<W: Write>(gaps: &[StudyGaps], out: &mut W) -> io::Result<()> {
    for study in gaps {
        writeln!(out, "{}", study.urn)?;
        for gap in &study.groups {
            writeln!(out, "\t{}", gap.group)?;
            for modality in &gap.missing {
                writeln!(out, "\t\t{modality}")?;
            }
        }
    }
    Ok(())
}

/// Render into a string, mainly for tests and callers that buffer.
pub fn render_report_to_string(gaps: &[StudyGaps]) -> String {
    let mut buffer = Vec::new();
    render_report(gaps, &mut buffer).expect("write to vec cannot fail");
    String::from_utf8(buffer).expect("report is valid utf-8")
}
