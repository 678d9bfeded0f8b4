//! Necto is a generic, algorithm-pluggable constraint satisfaction (CSP)
//! search engine.
//!
//! A problem is described through two small contracts: [`Variable`] exposes a
//! variable's ordered candidate domain, and [`Problem`] supplies the variable
//! list, a consistency predicate over (possibly partial) assignments, and the
//! domain restrictions induced by a tentative binding. Search strategies walk
//! the assignment lattice depth-first and collect every complete, consistent
//! assignment:
//!
//! - [`BacktrackingSearch`] tries full domains in declared variable order.
//! - [`ForwardCheckingSearch`] carries per-variable restricted domains, prunes
//!   them after each binding, and notices dead ends before trying any value.
//!   Its variable ordering is a pluggable [`VariableSelector`] policy, with
//!   [`MinimumRemainingValues`] available for fail-first ordering.
//!
//! Assignment state is immutable: extending an assignment produces a new
//! snapshot backed by persistent collections, so sibling branches of the
//! search tree never observe each other's bindings.
//!
//! # Example: two slots that must differ
//!
//! `?A` can be `1` or `2`, `?B` can only be `1`; the only solution binds
//! `?A = 2`.
//!
//! ```
//! use std::sync::Arc;
//!
//! use necto::solver::{
//!     assignment::Assignment,
//!     problem::{DomainRestrictions, Problem},
//!     strategy::{BacktrackingSearch, SearchStrategy},
//!     variable::{Variable, VariableId},
//! };
//!
//! #[derive(Debug)]
//! struct Slot {
//!     id: VariableId,
//!     domain: Vec<i64>,
//! }
//!
//! impl Variable<i64> for Slot {
//!     fn id(&self) -> VariableId {
//!         self.id
//!     }
//!     fn domain(&self) -> &[i64] {
//!         &self.domain
//!     }
//! }
//!
//! struct AllDifferent {
//!     slots: Vec<Slot>,
//! }
//!
//! impl Problem for AllDifferent {
//!     type Value = i64;
//!     type Var = Slot;
//!
//!     fn variables(&self) -> &[Slot] {
//!         &self.slots
//!     }
//!
//!     fn is_consistent(&self, assignment: &dyn Assignment<i64>) -> bool {
//!         let bindings = assignment.bindings();
//!         bindings
//!             .iter()
//!             .all(|(a, value_a)| bindings.iter().all(|(b, value_b)| a == b || value_a != value_b))
//!     }
//!
//!     fn domain_restrictions(&self, variable: &Slot, value: &i64) -> DomainRestrictions<i64> {
//!         self.slots
//!             .iter()
//!             .map(|other| {
//!                 let removed = if other.id() == variable.id() {
//!                     Vec::new()
//!                 } else {
//!                     vec![*value]
//!                 };
//!                 (other.id(), removed)
//!             })
//!             .collect()
//!     }
//! }
//!
//! let problem = Arc::new(AllDifferent {
//!     slots: vec![
//!         Slot { id: 0, domain: vec![1, 2] },
//!         Slot { id: 1, domain: vec![1] },
//!     ],
//! });
//!
//! let mut search = BacktrackingSearch::new(problem);
//! search.run();
//!
//! let solutions = search.solutions();
//! assert_eq!(solutions.len(), 1);
//! assert_eq!(solutions[0].value_of(0), Some(&2));
//! assert_eq!(solutions[0].value_of(1), Some(&1));
//! ```
//!
//! [`Variable`]: solver::variable::Variable
//! [`Problem`]: solver::problem::Problem
//! [`BacktrackingSearch`]: solver::strategy::BacktrackingSearch
//! [`ForwardCheckingSearch`]: solver::strategy::ForwardCheckingSearch
//! [`VariableSelector`]: solver::heuristics::variable::VariableSelector
//! [`MinimumRemainingValues`]: solver::heuristics::variable::MinimumRemainingValues

pub mod error;
pub mod problems;
pub mod solver;
