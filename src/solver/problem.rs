use std::collections::HashMap;

use crate::solver::{
    assignment::Assignment,
    variable::{ValueEquality, Variable, VariableId},
};

/// For one tentative `variable = value` commitment, the values that must be
/// removed from each variable's restricted domain as a consequence.
///
/// Variables mapped to an empty list lose nothing.
pub type DomainRestrictions<V> = HashMap<VariableId, Vec<V>>;

/// A trait that defines the "frontend" for a specific problem.
///
/// This is the interface connecting a concrete problem (like N-Queens or a
/// Latin square) to the generic search strategies. The engine consults it for
/// the variable list, for consistency of the assignments it builds, and, when
/// forward checking, for the domain restrictions a binding induces.
pub trait Problem: 'static {
    /// The concrete type for a value in a variable's domain.
    type Value: ValueEquality;

    /// The concrete variable type.
    type Var: Variable<Self::Value>;

    /// All variables in the problem, in declared order. Stable across a run;
    /// this order is the tie-break order for every deterministic policy.
    fn variables(&self) -> &[Self::Var];

    /// Whether `assignment` violates no constraint.
    ///
    /// Must accept partial assignments. An inconsistency in a sub-assignment
    /// must remain an inconsistency in every assignment extending it without
    /// removing bindings; the strategies rely on this to prune early.
    fn is_consistent(&self, assignment: &dyn Assignment<Self::Value>) -> bool;

    /// The values each variable loses once `variable` is bound to `value`.
    ///
    /// Must be a pure function of `(variable, value)` and the static problem
    /// structure, with no dependence on assignment history. Every value
    /// flagged for removal must be guaranteed to fail [`is_consistent`] if
    /// chosen; forward checking is sound only under that guarantee.
    /// A problem solved exclusively by plain backtracking may return
    /// empty-per-variable restrictions.
    ///
    /// [`is_consistent`]: Problem::is_consistent
    fn domain_restrictions(
        &self,
        variable: &Self::Var,
        value: &Self::Value,
    ) -> DomainRestrictions<Self::Value>;

    /// Whether every variable has a binding in `assignment`.
    fn is_complete(&self, assignment: &dyn Assignment<Self::Value>) -> bool {
        self.variables()
            .iter()
            .all(|variable| assignment.value_of(variable.id()).is_some())
    }

    /// The variables without a binding in `assignment`, in declared order.
    fn unassigned_variables(&self, assignment: &dyn Assignment<Self::Value>) -> Vec<&Self::Var> {
        self.variables()
            .iter()
            .filter(|variable| assignment.value_of(variable.id()).is_none())
            .collect()
    }
}
