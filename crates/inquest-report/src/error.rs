use crate::section::Section;

/// Errors from driving the section state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    #[error("cannot render section {requested} while section {expected} is pending")]
    OutOfOrder { expected: Section, requested: Section },

    #[error("report is complete; no further sections can be rendered")]
    Complete,
}
