/// Identifies a variable within its problem.
///
/// Problems hand out ids densely from zero in declared order; the id is the
/// key under which bindings and restricted domains are stored.
pub type VariableId = u32;

/// The base requirements for a value that can appear in a domain: cloneable,
/// debuggable, equatable, and hashable. This is a marker trait, so any type
/// satisfying these bounds implements `ValueEquality`.
pub trait ValueEquality: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> ValueEquality for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// Contract for a problem variable.
///
/// A variable is an opaque identity plus an ordered sequence of candidate
/// values. The domain is fixed when the variable is created and is never
/// mutated; restriction happens only in per-assignment derived copies,
/// never on the variable itself.
pub trait Variable<V: ValueEquality>: std::fmt::Debug {
    fn id(&self) -> VariableId;

    /// Ordered candidate values. Never empty for a well-formed problem.
    fn domain(&self) -> &[V];
}
