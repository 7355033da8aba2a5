//! Scan command implementation - report every approximate motif occurrence

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use ksim_core::{
    read_query, read_query_file, verify_motifs, Motif, MotifQuery, ScanParams, ScanStrategy,
    ScannerFactory,
};

use crate::error::{CliError, CliResult};

/// Resolved options for one scan, after merging CLI flags over the config
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Dataset path; stdin when `None` or `-`
    pub input: Option<PathBuf>,
    pub strategy: ScanStrategy,
    pub threads: Option<usize>,
    pub verify: bool,
}

pub fn execute(options: &ScanOptions) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    execute_to(options, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Load, scan and write the result lines to `writer`
pub fn execute_to<W: Write>(options: &ScanOptions, writer: &mut W) -> CliResult<()> {
    let query = load_query(options.input.as_deref())?;
    let motifs = run_scan(&query, options)?;
    write_motifs(writer, &motifs)?;

    Ok(())
}

/// Scan a parsed dataset, optionally cross-checking the results
pub fn run_scan(query: &MotifQuery, options: &ScanOptions) -> CliResult<Vec<Motif>> {
    log::info!(
        "Pattern: {} bp, text: {} bp, k = {}, {} windows",
        query.pattern.len(),
        query.text.len(),
        query.k,
        query.window_count()
    );

    let params = ScanParams {
        strategy: options.strategy,
        threads: options.threads,
    };
    let scanner = ScannerFactory::create(&params);

    let start = Instant::now();
    let motifs = scanner.scan(&query.pattern, &query.text, query.k)?;
    log::info!(
        "Found {} motifs in {:.3}s with the {} scanner",
        motifs.len(),
        start.elapsed().as_secs_f64(),
        scanner.name()
    );

    if options.verify {
        verify_motifs(&query.pattern, &query.text, &motifs, query.k)?;
        log::info!("All {} motifs verified", motifs.len());
    }

    Ok(motifs)
}

/// One "offset end_column" line per motif, in scan order
pub fn write_motifs<W: Write>(writer: &mut W, motifs: &[Motif]) -> io::Result<()> {
    for motif in motifs {
        writeln!(writer, "{}", motif)?;
    }
    Ok(())
}

fn load_query(input: Option<&Path>) -> CliResult<MotifQuery> {
    match input {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(CliError::file_not_found(path.to_path_buf()));
            }
            Ok(read_query_file(path)?)
        }
        _ => {
            log::info!("Reading dataset from stdin");
            Ok(read_query(io::stdin().lock())?)
        }
    }
}
