// Batch runner.
// Solves every `*.txt` grid in a directory, timing each one, and gathers a
// summary. A puzzle that fails to load or solve is recorded, not fatal.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;

use crate::perception::load_grid;
use super::puzzle::{solve, PuzzleResult};

#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub solved: usize,
    pub elapsed_ms: u64,
    pub by_start_pipe: Vec<(char, usize)>,
    pub per_puzzle: Vec<PuzzleReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PuzzleReport {
    pub name: String,
    pub result: Option<PuzzleResult>,
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

/// Run every puzzle in `data_dir`, in file-name order.
pub fn run_batch(data_dir: impl AsRef<Path>) -> anyhow::Result<BatchReport> {
    let dir = data_dir.as_ref();
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("cannot read puzzle dir {}", dir.display()))?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|ext| ext == "txt").unwrap_or(false))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let total_start = Instant::now();
    let mut per_puzzle = Vec::new();
    let mut pipe_counts: rustc_hash::FxHashMap<char, usize> = Default::default();

    for entry in &entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        let start = Instant::now();
        let outcome = load_grid(&path).and_then(|grid| solve(&grid).map_err(anyhow::Error::from));
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let report = match outcome {
            Ok(result) => {
                *pipe_counts.entry(result.start_pipe.glyph()).or_default() += 1;
                PuzzleReport { name, result: Some(result), error: None, elapsed_ms }
            }
            Err(e) => {
                log::warn!("{}: {:#}", name, e);
                PuzzleReport { name, result: None, error: Some(format!("{:#}", e)), elapsed_ms }
            }
        };
        per_puzzle.push(report);
    }

    let mut by_start_pipe: Vec<(char, usize)> = pipe_counts.into_iter().collect();
    by_start_pipe.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    Ok(BatchReport {
        total: per_puzzle.len(),
        solved: per_puzzle.iter().filter(|p| p.result.is_some()).count(),
        elapsed_ms: total_start.elapsed().as_millis() as u64,
        by_start_pipe,
        per_puzzle,
    })
}

impl BatchReport {
    pub fn print_summary(&self) {
        println!("=== Pipe loop batch ===");
        println!("Puzzles: {} | Solved: {} | Time: {}ms", self.total, self.solved, self.elapsed_ms);
        println!("\nBy start pipe:");
        for (glyph, count) in &self.by_start_pipe {
            println!("  {}: {}", glyph, count);
        }
        println!("\nPer-puzzle detail:");
        for p in &self.per_puzzle {
            match (&p.result, &p.error) {
                (Some(r), _) => println!("  [OK] {} | farthest={} enclosed={} loop={} start={} at {} time={}ms",
                    p.name, r.half_length, r.enclosed, r.loop_len, r.start_pipe, r.start, p.elapsed_ms),
                (None, Some(e)) => println!("  [--] {} | {}", p.name, e),
                (None, None) => println!("  [--] {}", p.name),
            }
        }
    }
}
