pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A problem definition left some variable without any candidate value.
    /// Rejected at construction time; the search itself never produces this.
    #[error("{problem} of size {size} leaves a variable with an empty domain")]
    EmptyDomain { problem: &'static str, size: usize },
}
