use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use necto::{
    error::Result,
    problems::{latin_square::LatinSquare, n_queens::NQueens},
    solver::{
        assignment::{format_assignment, Assignment},
        problem::Problem,
        stats::{render_stats_table, RunReport},
        strategy::{BacktrackingSearch, ForwardCheckingSearch, SearchStrategy},
        variable::ValueEquality,
    },
};

#[derive(Debug, Parser)]
#[command(name = "necto")]
#[command(about = "Enumerate CSP solutions with pluggable search algorithms")]
struct Cli {
    /// Problem to solve
    #[arg(value_enum)]
    problem: ProblemKind,

    /// Problem size (board or grid side length)
    size: usize,

    /// Search algorithm
    #[arg(value_enum, default_value = "forward-checking")]
    algorithm: AlgorithmKind,

    /// Run every algorithm and print a comparison table instead
    #[arg(long)]
    compare: bool,

    /// Emit the run report as JSON
    #[arg(long)]
    json: bool,

    /// How many sample solutions to print
    #[arg(long, default_value_t = 5)]
    samples: usize,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProblemKind {
    Nqueens,
    LatinSquare,
}

impl ProblemKind {
    fn label(self) -> &'static str {
        match self {
            ProblemKind::Nqueens => "nqueens",
            ProblemKind::LatinSquare => "latin-square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmKind {
    Backtracking,
    ForwardChecking,
    Mrv,
}

impl AlgorithmKind {
    fn label(self) -> &'static str {
        match self {
            AlgorithmKind::Backtracking => "backtracking",
            AlgorithmKind::ForwardChecking => "forward-checking",
            AlgorithmKind::Mrv => "mrv-forward-checking",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.problem {
        ProblemKind::Nqueens => run(Arc::new(NQueens::new(cli.size)?), &cli),
        ProblemKind::LatinSquare => run(Arc::new(LatinSquare::new(cli.size)?), &cli),
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn run<P: Problem>(problem: Arc<P>, cli: &Cli) {
    if cli.compare {
        let reports: Vec<RunReport> = [
            AlgorithmKind::Backtracking,
            AlgorithmKind::ForwardChecking,
            AlgorithmKind::Mrv,
        ]
        .into_iter()
        .map(|algorithm| solve(Arc::clone(&problem), algorithm, cli))
        .collect();

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&reports).expect("report serializes"));
        } else {
            println!("Comparing algorithms on {}({})", cli.problem.label(), cli.size);
            print!("{}", render_stats_table(&reports));
        }
        return;
    }

    if !cli.json {
        println!(
            "Solving {}({}) with {}",
            cli.problem.label(),
            cli.size,
            cli.algorithm.label()
        );
    }

    let report = solve(problem, cli.algorithm, cli);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
        return;
    }

    println!(
        "Found {} solutions in {} ms",
        report.solution_count, report.elapsed_ms
    );
    if !report.samples.is_empty() {
        println!("Examples:");
        for sample in &report.samples {
            println!("  {sample}");
        }
    }
    println!("Nodes visited: {}", report.stats.nodes_visited);
    println!("Constraint violations: {}", report.stats.constraint_violations);
    println!("Domain wipeouts: {}", report.stats.domain_wipeouts);
}

fn solve<P: Problem>(problem: Arc<P>, algorithm: AlgorithmKind, cli: &Cli) -> RunReport {
    let mut strategy: Box<dyn SearchStrategy<P>> = match algorithm {
        AlgorithmKind::Backtracking => Box::new(BacktrackingSearch::new(Arc::clone(&problem))),
        AlgorithmKind::ForwardChecking => Box::new(ForwardCheckingSearch::new(Arc::clone(&problem))),
        AlgorithmKind::Mrv => Box::new(ForwardCheckingSearch::with_mrv(Arc::clone(&problem))),
    };

    let start = Instant::now();
    strategy.run();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    let solutions = strategy.solutions();
    let samples = spread_samples(&solutions, cli.samples)
        .into_iter()
        .map(|solution| format_assignment(problem.as_ref(), solution))
        .collect();

    RunReport {
        problem: cli.problem.label().to_string(),
        algorithm: algorithm.label().to_string(),
        solution_count: solutions.len(),
        elapsed_ms,
        stats: strategy.stats().clone(),
        samples,
    }
}

/// An evenly spread subset of the solutions, at most `limit` of them.
fn spread_samples<'a, V: ValueEquality>(
    solutions: &[&'a dyn Assignment<V>],
    limit: usize,
) -> Vec<&'a dyn Assignment<V>> {
    if limit == 0 || solutions.is_empty() {
        return Vec::new();
    }
    if solutions.len() <= limit {
        return solutions.to_vec();
    }
    let step = solutions.len() / limit;
    solutions.iter().copied().step_by(step).take(limit).collect()
}
