use crate::calendar::Calendar;
use crate::model::{Assignment, Solution, SolutionSet};
use anyhow::{bail, Result};
use std::fmt::Write;

/// Rapport prêt à afficher pour une solution classée.
#[derive(Debug, Clone)]
pub struct Report {
    pub rank: usize,
    pub content: String,
}

/// Permet de customiser le rendu d'une solution (console, mail, etc.).
pub trait ReportRenderer {
    fn render(&self, calendar: &Calendar, solution: &Solution, rank: usize) -> String;
}

/// Gabarit texte reprenant la sortie console historique du solveur.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, calendar: &Calendar, solution: &Solution, rank: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Solution {rank} ===");
        let _ = writeln!(
            out,
            "Total hours: {} (Target: {})",
            solution.total_hours,
            calendar.target_hours()
        );
        let _ = writeln!(out, "Holiday shifts worked: {}", solution.holiday_shifts);
        let _ = writeln!(out, "Leave days taken: {}", solution.leave_count);

        let _ = writeln!(out, "\nWorked shifts:");
        for (day, assignment) in calendar.days().iter().zip(&solution.assignments) {
            if !assignment.is_shift() {
                continue;
            }
            let kind = match assignment {
                Assignment::DayShift => "Day",
                _ => "Night",
            };
            let status = if day.holiday { "Holiday" } else { "Workday" };
            let tag = if day.holiday { " [HOLIDAY]" } else { "" };
            let _ = writeln!(out, "  Day {:2} ({status}): {kind} shift{tag}", day.number);
        }

        let _ = writeln!(out, "\nLeave days:");
        let mut has_leave = false;
        for (day, assignment) in calendar.days().iter().zip(&solution.assignments) {
            if *assignment == Assignment::Leave {
                let _ = writeln!(out, "  Day {:2}", day.number);
                has_leave = true;
            }
        }
        if !has_leave {
            let _ = writeln!(out, "  (none)");
        }

        out
    }
}

/// Prépare les rapports des `limit` meilleures solutions d'un ensemble classé.
pub fn prepare_reports(
    calendar: &Calendar,
    set: &SolutionSet,
    limit: usize,
    renderer: &dyn ReportRenderer,
) -> Result<Vec<Report>> {
    if limit == 0 {
        bail!("limit must be positive");
    }
    if set.is_empty() {
        bail!("no solutions to report");
    }

    Ok(set
        .solutions
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, solution)| Report {
            rank: idx + 1,
            content: renderer.render(calendar, solution, idx + 1),
        })
        .collect())
}
