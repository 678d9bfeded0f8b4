use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Diagnostic counters owned by a search-strategy instance.
///
/// The counters are strategy-local diagnostics: plain backtracking counts a
/// violation per rejected value and never wipes a domain out, while forward
/// checking also records `domain_wipeouts`. The two are not comparable
/// across strategies.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    /// Candidate extensions formed, one per value tried at any depth.
    pub nodes_visited: u64,
    /// Candidate extensions rejected by the consistency check.
    pub constraint_violations: u64,
    /// Variables selected with an already-empty restricted domain
    /// (forward checking only).
    pub domain_wipeouts: u64,
}

/// Summary of one search run, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub problem: String,
    pub algorithm: String,
    pub solution_count: usize,
    pub elapsed_ms: u64,
    pub stats: SearchStats,
    pub samples: Vec<String>,
}

pub fn render_stats_table(reports: &[RunReport]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Algorithm"),
        Cell::new("Solutions"),
        Cell::new("Nodes"),
        Cell::new("Violations"),
        Cell::new("Wipeouts"),
        Cell::new("Time (ms)"),
    ]));

    for report in reports {
        table.add_row(Row::new(vec![
            Cell::new(&report.algorithm),
            Cell::new(&report.solution_count.to_string()),
            Cell::new(&report.stats.nodes_visited.to_string()),
            Cell::new(&report.stats.constraint_violations.to_string()),
            Cell::new(&report.stats.domain_wipeouts.to_string()),
            Cell::new(&report.elapsed_ms.to_string()),
        ]));
    }

    table.to_string()
}
