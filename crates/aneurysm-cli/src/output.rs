//! Run summaries in text or JSON.

use std::path::PathBuf;

use aneurysm_pipeline::RunSummary;
use geometry_kernel::RecordingKernel;
use serde::Serialize;

use crate::{Cli, OutputFormat};

#[derive(Serialize)]
pub struct RunReport {
    mode: &'static str,
    run_id: String,
    requests: usize,
    sections: usize,
    shells: usize,
    solids: usize,
    exports: usize,
    study_files: Vec<PathBuf>,
}

impl RunReport {
    pub fn new(mode: &'static str, summary: &RunSummary, kernel: &RecordingKernel) -> Self {
        Self {
            mode,
            run_id: kernel.metadata().run_id.to_string(),
            requests: summary.requests.len(),
            sections: summary.domain.section_count(),
            shells: summary.domain.shell_count(),
            solids: summary.domain.solid_count(),
            exports: summary.domain.export_count(),
            study_files: kernel.saved().iter().map(|(path, _)| path.clone()).collect(),
        }
    }
}

pub fn report(run: &RunReport, cli: &Cli) {
    if cli.quiet {
        return;
    }
    match cli.format {
        OutputFormat::Json => match serde_json::to_string_pretty(run) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error: failed to serialize report: {e}"),
        },
        OutputFormat::Text => {
            println!("Generated {} geometry (run {})", run.mode, run.run_id);
            println!("  Requests: {}", run.requests);
            println!("  Sections: {}", run.sections);
            println!("  Shells:   {}", run.shells);
            println!("  Solids:   {}", run.solids);
            println!("  Exports:  {}", run.exports);
            for path in &run.study_files {
                println!("  Study:    {}", path.display());
            }
        }
    }
}
