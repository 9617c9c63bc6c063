//! Context lifecycle

/// Lifecycle state of a sign or verify context
///
/// `Finalized` and `Destroyed` are terminal; the only transition out of
/// either is a repeated destroy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Created, no data yet
    Ready,
    /// At least one chunk fed
    Updated,
    /// Signature produced or checked
    Finalized,
    /// Released by the caller
    Destroyed,
}

impl State {
    /// Whether `update` and `final` are legal
    pub fn is_streaming(self) -> bool {
        matches!(self, State::Ready | State::Updated)
    }
}
