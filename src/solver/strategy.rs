use std::sync::Arc;

use tracing::{debug, trace};

use crate::solver::{
    assignment::{Assignment, RestrictedAssignment, SimpleAssignment},
    heuristics::variable::{MinimumRemainingValues, SelectFirst, VariableSelector},
    problem::Problem,
    stats::SearchStats,
    variable::Variable,
};

/// A depth-first search strategy bound to one problem instance.
///
/// One strategy instance binds to one problem for its lifetime; it is not
/// re-entrant with a different problem.
pub trait SearchStrategy<P: Problem> {
    /// Runs the search to completion (or exhaustion of the tree),
    /// accumulating every complete, consistent assignment.
    fn run(&mut self);

    /// The solutions found so far, in discovery order. Empty before [`run`]
    /// is called, or when no solution exists.
    ///
    /// [`run`]: SearchStrategy::run
    fn solutions(&self) -> Vec<&dyn Assignment<P::Value>>;

    /// The diagnostic counters accumulated by [`run`].
    ///
    /// [`run`]: SearchStrategy::run
    fn stats(&self) -> &SearchStats;
}

/// Plain backtracking: depth-first, pre-order, trying each value of the
/// first unassigned variable's full domain in domain order.
///
/// An inconsistent extension is skipped without recursing; that skip is the
/// entire pruning mechanism.
pub struct BacktrackingSearch<P: Problem> {
    problem: Arc<P>,
    solutions: Vec<SimpleAssignment<P::Value>>,
    stats: SearchStats,
}

impl<P: Problem> BacktrackingSearch<P> {
    pub fn new(problem: Arc<P>) -> Self {
        Self {
            problem,
            solutions: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn explore(&mut self, assignment: SimpleAssignment<P::Value>) {
        let problem = Arc::clone(&self.problem);

        if problem.is_complete(&assignment) && problem.is_consistent(&assignment) {
            debug!(solution = ?assignment, "found solution");
            self.solutions.push(assignment);
            return;
        }

        let Some(variable) = problem.unassigned_variables(&assignment).into_iter().next() else {
            // Complete-but-inconsistent assignments land here; nothing left
            // to extend.
            return;
        };

        for value in variable.domain() {
            self.stats.nodes_visited += 1;
            let extended = assignment.assign(variable.id(), value.clone());
            if !problem.is_consistent(&extended) {
                trace!(assignment = ?extended, "extension violates constraints");
                self.stats.constraint_violations += 1;
                continue;
            }
            self.explore(extended);
        }
        trace!(variable = variable.id(), "domain exhausted, backtracking");
    }
}

impl<P: Problem> SearchStrategy<P> for BacktrackingSearch<P> {
    fn run(&mut self) {
        debug!("starting backtracking search");
        self.explore(SimpleAssignment::new());
    }

    fn solutions(&self) -> Vec<&dyn Assignment<P::Value>> {
        self.solutions
            .iter()
            .map(|solution| solution as &dyn Assignment<P::Value>)
            .collect()
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Backtracking with forward checking: every assignment carries restricted
/// domains, values are drawn from the current restricted domain only, and a
/// variable selected with an empty domain is a dead end detected before any
/// value is tried.
///
/// Restriction is conservative pruning: it removes only values guaranteed to
/// fail the consistency check, so the solution set is identical to plain
/// backtracking's.
pub struct ForwardCheckingSearch<P: Problem> {
    problem: Arc<P>,
    selector: Box<dyn VariableSelector<P>>,
    solutions: Vec<RestrictedAssignment<P::Value>>,
    stats: SearchStats,
}

impl<P: Problem> ForwardCheckingSearch<P> {
    /// Forward checking with the declared-order variable policy.
    pub fn new(problem: Arc<P>) -> Self {
        Self::with_selector(problem, Box::new(SelectFirst))
    }

    /// Forward checking with the minimum-remaining-values policy.
    pub fn with_mrv(problem: Arc<P>) -> Self {
        Self::with_selector(problem, Box::new(MinimumRemainingValues))
    }

    /// Forward checking with a caller-supplied variable policy.
    pub fn with_selector(problem: Arc<P>, selector: Box<dyn VariableSelector<P>>) -> Self {
        Self {
            problem,
            selector,
            solutions: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn explore(&mut self, assignment: RestrictedAssignment<P::Value>) {
        let problem = Arc::clone(&self.problem);

        if problem.is_complete(&assignment) && problem.is_consistent(&assignment) {
            debug!(solution = ?assignment, "found solution");
            self.solutions.push(assignment);
            return;
        }

        let Some(variable) = self.selector.select(problem.as_ref(), &assignment) else {
            return;
        };

        if assignment.restricted_domain(variable.id()).is_empty() {
            // Every candidate for this variable was pruned upstream; fail
            // here without trying a value.
            debug!(variable = variable.id(), "restricted domain wiped out");
            self.stats.domain_wipeouts += 1;
            return;
        }

        for value in assignment.restricted_domain(variable.id()) {
            self.stats.nodes_visited += 1;
            let mut extended = assignment.assign(variable.id(), value.clone());
            if !problem.is_consistent(&extended) {
                trace!(assignment = ?extended, "extension violates constraints");
                self.stats.constraint_violations += 1;
                continue;
            }
            extended.apply_restrictions(&problem.domain_restrictions(variable, value));
            self.explore(extended);
        }
        trace!(variable = variable.id(), "restricted domain exhausted, backtracking");
    }
}

impl<P: Problem> SearchStrategy<P> for ForwardCheckingSearch<P> {
    fn run(&mut self) {
        debug!("starting forward-checking search");
        let root = RestrictedAssignment::root(self.problem.as_ref());
        self.explore(root);
    }

    fn solutions(&self) -> Vec<&dyn Assignment<P::Value>> {
        self.solutions
            .iter()
            .map(|solution| solution as &dyn Assignment<P::Value>)
            .collect()
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
