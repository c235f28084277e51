use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use rtaudit_audit::{find_gaps, regroup, render_report};
use rtaudit_cli::logging::redact_urn;
use rtaudit_ingest::load_export;
use rtaudit_model::RequiredModalities;

use crate::cli::Cli;

/// Run the whole pipeline: load, regroup, detect gaps, print the report.
pub fn run_audit(cli: &Cli) -> Result<()> {
    let span = info_span!("audit", file = %cli.export_file.display());
    let _guard = span.enter();

    let required = if cli.required_modalities.is_empty() {
        RequiredModalities::default()
    } else {
        RequiredModalities::from_names(cli.required_modalities.iter().cloned())
    };
    debug!(required = required.len(), "required modality set");

    let blocks = load_export(&cli.export_file)
        .with_context(|| format!("read export: {}", cli.export_file.display()))?;
    info!(blocks = blocks.len(), "assembled identifier blocks");

    let records = regroup(blocks).context("regroup export blocks")?;
    let gaps = find_gaps(&records, &required);
    info!(
        studies = gaps.len(),
        missing = gaps.iter().map(|study| study.missing_count()).sum::<usize>(),
        "gap detection complete"
    );
    for study in &gaps {
        debug!(
            urn = redact_urn(&study.urn),
            groups = study.groups.len(),
            "study has missing modalities"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(&gaps, &mut out).context("write report")?;
    out.flush().context("flush report")?;
    Ok(())
}
