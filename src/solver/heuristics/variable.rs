//! Policies for choosing which unassigned variable a forward-checking
//! search branches on next.

use std::cell::RefCell;

use rand::seq::IteratorRandom;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::solver::{
    assignment::{Assignment, RestrictedAssignment},
    problem::Problem,
    variable::Variable,
};

/// A replaceable variable-ordering policy.
///
/// Implementors choose which unassigned variable the search should branch on
/// next, given the current restricted domains. Ordering only changes
/// visitation order, never which assignments count as solutions.
pub trait VariableSelector<P: Problem> {
    /// Picks the next variable to branch on.
    ///
    /// # Returns
    ///
    /// * `Some(variable)` while unassigned variables remain.
    /// * `None` once every variable is bound.
    fn select<'a>(
        &self,
        problem: &'a P,
        assignment: &RestrictedAssignment<P::Value>,
    ) -> Option<&'a P::Var>;
}

/// Declared-order policy: the first unassigned variable wins. Deterministic;
/// the order is whatever [`Problem::variables`] returns.
pub struct SelectFirst;

impl<P: Problem> VariableSelector<P> for SelectFirst {
    fn select<'a>(
        &self,
        problem: &'a P,
        assignment: &RestrictedAssignment<P::Value>,
    ) -> Option<&'a P::Var> {
        problem
            .variables()
            .iter()
            .find(|variable| assignment.value_of(variable.id()).is_none())
    }
}

/// Minimum-remaining-values policy: branch on the unassigned variable whose
/// restricted domain has the fewest admissible values left, breaking ties in
/// declared order.
///
/// This is a fail-first strategy: smaller domains fail faster, which prunes
/// branching near the top of costly subtrees.
pub struct MinimumRemainingValues;

impl<P: Problem> VariableSelector<P> for MinimumRemainingValues {
    fn select<'a>(
        &self,
        problem: &'a P,
        assignment: &RestrictedAssignment<P::Value>,
    ) -> Option<&'a P::Var> {
        problem
            .variables()
            .iter()
            .filter(|variable| assignment.value_of(variable.id()).is_none())
            .enumerate()
            // Primary criterion: remaining domain size (ascending).
            // Secondary criterion: declared position, so ties stay stable.
            .min_by_key(|(position, variable)| {
                (assignment.restricted_domain(variable.id()).len(), *position)
            })
            .map(|(_, variable)| variable)
    }
}

/// Uniformly random choice among the unassigned variables, driven by a
/// seeded RNG so that runs stay reproducible.
pub struct RandomSelector {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomSelector {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl<P: Problem> VariableSelector<P> for RandomSelector {
    fn select<'a>(
        &self,
        problem: &'a P,
        assignment: &RestrictedAssignment<P::Value>,
    ) -> Option<&'a P::Var> {
        let mut rng = self.rng.borrow_mut();
        problem
            .variables()
            .iter()
            .filter(|variable| assignment.value_of(variable.id()).is_none())
            .choose(&mut *rng)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        problem::DomainRestrictions,
        variable::{Variable, VariableId},
    };

    #[derive(Debug)]
    struct TestVar {
        id: VariableId,
        domain: Vec<i64>,
    }

    impl Variable<i64> for TestVar {
        fn id(&self) -> VariableId {
            self.id
        }
        fn domain(&self) -> &[i64] {
            &self.domain
        }
    }

    struct TestProblem {
        vars: Vec<TestVar>,
    }

    impl TestProblem {
        fn new(domains: &[&[i64]]) -> Self {
            Self {
                vars: domains
                    .iter()
                    .enumerate()
                    .map(|(id, domain)| TestVar {
                        id: id as VariableId,
                        domain: domain.to_vec(),
                    })
                    .collect(),
            }
        }
    }

    impl Problem for TestProblem {
        type Value = i64;
        type Var = TestVar;

        fn variables(&self) -> &[TestVar] {
            &self.vars
        }

        fn is_consistent(&self, _assignment: &dyn Assignment<i64>) -> bool {
            true
        }

        fn domain_restrictions(&self, _variable: &TestVar, _value: &i64) -> DomainRestrictions<i64> {
            DomainRestrictions::new()
        }
    }

    #[test]
    fn select_first_follows_declared_order() {
        let problem = TestProblem::new(&[&[1], &[1], &[1]]);
        let assignment = RestrictedAssignment::root(&problem).assign(0, 1);

        let picked = SelectFirst.select(&problem, &assignment).unwrap();
        assert_eq!(picked.id(), 1);
    }

    #[test]
    fn select_first_returns_none_when_all_bound() {
        let problem = TestProblem::new(&[&[1]]);
        let assignment = RestrictedAssignment::root(&problem).assign(0, 1);

        assert!(SelectFirst.select(&problem, &assignment).is_none());
    }

    #[test]
    fn mrv_prefers_fewest_remaining_values() {
        let problem = TestProblem::new(&[&[1, 2, 3], &[1, 2], &[1, 2, 3, 4]]);
        let assignment = RestrictedAssignment::root(&problem);

        let picked = MinimumRemainingValues.select(&problem, &assignment).unwrap();
        assert_eq!(picked.id(), 1);
    }

    #[test]
    fn mrv_breaks_ties_in_declared_order() {
        let problem = TestProblem::new(&[&[1, 2], &[1, 2], &[1, 2]]);
        let assignment = RestrictedAssignment::root(&problem);

        let picked = MinimumRemainingValues.select(&problem, &assignment).unwrap();
        assert_eq!(picked.id(), 0);
    }

    #[test]
    fn mrv_tracks_domains_as_they_shrink() {
        let problem = TestProblem::new(&[&[1, 2], &[1, 2, 3, 4], &[1, 2, 3]]);
        let mut assignment = RestrictedAssignment::root(&problem).assign(0, 1);

        // Variable 1 collapses to a single value; variable 2 keeps three.
        let mut restrictions = DomainRestrictions::new();
        restrictions.insert(1, vec![1, 2, 3]);
        assignment.apply_restrictions(&restrictions);

        let picked = MinimumRemainingValues.select(&problem, &assignment).unwrap();
        assert_eq!(picked.id(), 1);
    }

    #[test]
    fn random_selector_is_reproducible_per_seed() {
        let problem = TestProblem::new(&[&[1], &[1], &[1], &[1], &[1]]);
        let assignment = RestrictedAssignment::root(&problem);

        let picks = |seed| {
            let selector = RandomSelector::from_seed(seed);
            (0..8)
                .map(|_| {
                    VariableSelector::<TestProblem>::select(&selector, &problem, &assignment)
                        .unwrap()
                        .id()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
    }
}
