//! CSV export of recorded entropy series.

use crate::metrics::EntropyHistory;
use negentropy_core::error::Result;
use std::fs;
use std::path::Path;

/// Write the two entropy series as CSV: one row per step.
pub fn write_entropy_csv(path: &Path, history: &EntropyHistory) -> Result<()> {
    let mut csv = String::from("step,environment_entropy_decay,agent_entropy_decay\n");
    for (step, (env, agent)) in history
        .environment
        .iter()
        .zip(history.agent.iter())
        .enumerate()
    {
        csv.push_str(&format!("{},{:.6},{:.6}\n", step, env, agent));
    }
    fs::write(path, csv)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_one_row_per_step() {
        let history = EntropyHistory {
            environment: vec![0.1, 0.2],
            agent: vec![0.05, 0.0],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entropy.csv");

        write_entropy_csv(&path, &history).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "step,environment_entropy_decay,agent_entropy_decay");
        assert!(lines[1].starts_with("0,0.100000"));
    }
}
