//! Immutable assignment state threaded through the search tree.
//!
//! Both representations are copy-on-extend: [`assign`] produces a new
//! snapshot and never touches the receiver, so sibling branches of the
//! search tree are fully independent. Persistent (`im`) collections make the
//! snapshots cheap to derive.
//!
//! [`assign`]: SimpleAssignment::assign

use std::fmt::Write as _;

use im::{HashMap, Vector};

use crate::solver::{
    problem::{DomainRestrictions, Problem},
    variable::{ValueEquality, Variable, VariableId},
};

/// Read-only view of a value assignment, shared by both state
/// representations and by the [`Problem`] contract.
pub trait Assignment<V: ValueEquality>: std::fmt::Debug {
    /// The underlying variable-to-value mapping.
    fn bindings(&self) -> &HashMap<VariableId, V>;

    /// The value bound to `variable`, if any.
    fn value_of(&self, variable: VariableId) -> Option<&V> {
        self.bindings().get(&variable)
    }

    /// The variables that already carry a binding, in no particular order.
    fn assigned_variables(&self) -> Box<dyn Iterator<Item = VariableId> + '_> {
        Box::new(self.bindings().keys().copied())
    }
}

/// Assignment state for plain backtracking: bindings only.
#[derive(Debug, Clone)]
pub struct SimpleAssignment<V: ValueEquality> {
    bindings: HashMap<VariableId, V>,
}

impl<V: ValueEquality> SimpleAssignment<V> {
    /// An empty assignment, the root of a search.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// A new assignment equal to this one plus `variable = value`.
    ///
    /// Re-assigning a bound variable is last-write-wins; the strategies only
    /// ever assign unassigned variables.
    pub fn assign(&self, variable: VariableId, value: V) -> Self {
        Self {
            bindings: self.bindings.update(variable, value),
        }
    }
}

impl<V: ValueEquality> Default for SimpleAssignment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ValueEquality> Assignment<V> for SimpleAssignment<V> {
    fn bindings(&self) -> &HashMap<VariableId, V> {
        &self.bindings
    }
}

/// Assignment state for forward checking: bindings plus the current
/// restricted domain of every variable, assigned or not.
///
/// Each restricted domain is a subsequence of the variable's original
/// domain, and restriction is monotonically non-increasing along any
/// root-to-leaf path: a child snapshot never sees more values than its
/// parent did.
#[derive(Debug, Clone)]
pub struct RestrictedAssignment<V: ValueEquality> {
    bindings: HashMap<VariableId, V>,
    restricted: HashMap<VariableId, Vector<V>>,
}

impl<V: ValueEquality> RestrictedAssignment<V> {
    /// The empty root assignment, with every variable's restricted domain
    /// seeded from its full declared domain.
    pub fn root<P: Problem<Value = V>>(problem: &P) -> Self {
        let restricted = problem
            .variables()
            .iter()
            .map(|variable| (variable.id(), variable.domain().iter().cloned().collect()))
            .collect();
        Self {
            bindings: HashMap::new(),
            restricted,
        }
    }

    /// A new assignment equal to this one plus `variable = value`, carrying
    /// this one's restricted domains.
    pub fn assign(&self, variable: VariableId, value: V) -> Self {
        Self {
            bindings: self.bindings.update(variable, value),
            restricted: self.restricted.clone(),
        }
    }

    /// The current restricted domain of `variable`.
    ///
    /// Every problem variable is seeded at the root; asking about a variable
    /// from a different problem is a programmer error.
    pub fn restricted_domain(&self, variable: VariableId) -> &Vector<V> {
        self.restricted.get(&variable).unwrap()
    }

    /// Removes the flagged values from each variable's restricted domain.
    ///
    /// Only called on a freshly derived snapshot, before it is handed further
    /// down the tree.
    pub fn apply_restrictions(&mut self, restrictions: &DomainRestrictions<V>) {
        for (variable, removed) in restrictions {
            if removed.is_empty() {
                continue;
            }
            let Some(domain) = self.restricted.get(variable) else {
                continue;
            };
            let pruned: Vector<V> = domain
                .iter()
                .filter(|candidate| !removed.contains(candidate))
                .cloned()
                .collect();
            if pruned.len() < domain.len() {
                self.restricted.insert(*variable, pruned);
            }
        }
    }
}

impl<V: ValueEquality> Assignment<V> for RestrictedAssignment<V> {
    fn bindings(&self) -> &HashMap<VariableId, V> {
        &self.bindings
    }
}

/// Renders an assignment's values in the problem's declared variable order,
/// `_` standing in for unbound variables.
pub fn format_assignment<P: Problem>(problem: &P, assignment: &dyn Assignment<P::Value>) -> String {
    let mut rendered = String::from("[");
    for variable in problem.variables() {
        match assignment.value_of(variable.id()) {
            Some(value) => {
                let _ = write!(rendered, " {value:?} ");
            }
            None => rendered.push_str(" _ "),
        }
    }
    rendered.push(']');
    rendered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

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
    fn assign_does_not_mutate_the_parent() {
        let parent: SimpleAssignment<i64> = SimpleAssignment::new();
        let child = parent.assign(0, 7);

        assert_eq!(parent.value_of(0), None);
        assert_eq!(child.value_of(0), Some(&7));
    }

    #[test]
    fn sibling_snapshots_are_independent() {
        let parent = SimpleAssignment::new().assign(0, 1);
        let left = parent.assign(1, 2);
        let right = parent.assign(1, 3);

        assert_eq!(left.value_of(1), Some(&2));
        assert_eq!(right.value_of(1), Some(&3));
        assert_eq!(parent.value_of(1), None);
    }

    #[test]
    fn reassignment_is_last_write_wins() {
        let assignment = SimpleAssignment::new().assign(0, 1).assign(0, 9);
        assert_eq!(assignment.value_of(0), Some(&9));
        assert_eq!(assignment.bindings().len(), 1);
    }

    #[test]
    fn root_seeds_restricted_domains_from_declared_domains() {
        let problem = TestProblem::new(&[&[1, 2, 3], &[4, 5]]);
        let root = RestrictedAssignment::root(&problem);

        assert_eq!(
            root.restricted_domain(0).iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            root.restricted_domain(1).iter().copied().collect::<Vec<_>>(),
            vec![4, 5]
        );
    }

    #[test]
    fn restrictions_prune_without_touching_the_parent() {
        let problem = TestProblem::new(&[&[1, 2, 3], &[1, 2, 3]]);
        let root = RestrictedAssignment::root(&problem);

        let mut child = root.assign(0, 1);
        let mut restrictions = DomainRestrictions::new();
        restrictions.insert(0, vec![1]);
        restrictions.insert(1, vec![1, 3]);
        child.apply_restrictions(&restrictions);

        assert_eq!(
            child.restricted_domain(1).iter().copied().collect::<Vec<_>>(),
            vec![2]
        );
        // Parent snapshot untouched.
        assert_eq!(
            root.restricted_domain(1).iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn restriction_preserves_domain_order() {
        let problem = TestProblem::new(&[&[5, 3, 9, 1]]);
        let mut assignment = RestrictedAssignment::root(&problem);

        let mut restrictions = DomainRestrictions::new();
        restrictions.insert(0, vec![3]);
        assignment.apply_restrictions(&restrictions);

        // A restricted domain is a subsequence of the original.
        assert_eq!(
            assignment
                .restricted_domain(0)
                .iter()
                .copied()
                .collect::<Vec<_>>(),
            vec![5, 9, 1]
        );
    }

    #[test]
    fn restriction_is_monotone_down_a_path() {
        let problem = TestProblem::new(&[&[1, 2], &[1, 2, 3, 4]]);
        let root = RestrictedAssignment::root(&problem);

        let mut child = root.assign(0, 1);
        let mut restrictions = DomainRestrictions::new();
        restrictions.insert(1, vec![2, 4]);
        child.apply_restrictions(&restrictions);

        let mut grandchild = child.assign(1, 1);
        let mut more = DomainRestrictions::new();
        more.insert(1, vec![1]);
        grandchild.apply_restrictions(&more);

        for snapshot in [&child, &grandchild] {
            let parent_domain: Vec<i64> = root.restricted_domain(1).iter().copied().collect();
            for value in snapshot.restricted_domain(1) {
                assert!(parent_domain.contains(value));
            }
        }
        assert!(grandchild.restricted_domain(1).len() <= child.restricted_domain(1).len());
    }

    #[test]
    fn format_renders_declared_order_with_gaps() {
        let problem = TestProblem::new(&[&[1], &[2], &[3]]);
        let assignment = SimpleAssignment::new().assign(2, 3).assign(0, 1);

        assert_eq!(format_assignment(&problem, &assignment), "[ 1  _  3 ]");
    }
}
