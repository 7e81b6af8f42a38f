use crate::calendar::MonthConfig;
use crate::model::SolutionSet;
use anyhow::Context;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Charge une configuration de mois depuis un JSON.
pub fn load_config_json<P: AsRef<Path>>(path: P) -> anyhow::Result<MonthConfig> {
    let data = fs::read(&path)
        .with_context(|| format!("reading {}", path.as_ref().display()))?;
    let config: MonthConfig =
        serde_json::from_slice(&data).with_context(|| "parsing month config")?;
    Ok(config)
}

/// Export JSON de la configuration (jolie mise en forme)
pub fn export_config_json<P: AsRef<Path>>(path: P, config: &MonthConfig) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(config)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export JSON de l'ensemble classé
pub fn export_solutions_json<P: AsRef<Path>>(path: P, set: &SolutionSet) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(set)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des solutions: header `rank,total_hours,holiday_shifts,leave_count,assignments`
///
/// La colonne `assignments` condense le mois en une lettre par jour
/// (D garde de jour, N garde de nuit, C congé, `-` repos).
pub fn export_solutions_csv<P: AsRef<Path>>(path: P, set: &SolutionSet) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "rank",
        "total_hours",
        "holiday_shifts",
        "leave_count",
        "assignments",
    ])?;
    let mut rank_buf = itoa::Buffer::new();
    let mut hours_buf = itoa::Buffer::new();
    let mut shifts_buf = itoa::Buffer::new();
    let mut leaves_buf = itoa::Buffer::new();
    for (idx, sol) in set.solutions.iter().enumerate() {
        let assignments: String = sol.assignments.iter().map(|a| a.code()).collect();
        w.write_record([
            rank_buf.format(idx + 1),
            hours_buf.format(sol.total_hours),
            shifts_buf.format(sol.holiday_shifts),
            leaves_buf.format(sol.leave_count),
            assignments.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
