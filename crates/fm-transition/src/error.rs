use thiserror::Error;

/// Why a transition could not start.
///
/// A rejected start leaves the driver untouched: any transition already in
/// flight keeps running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("no agents supplied for the transition")]
    NoAgents,

    #[error("source formation has {from} anchors but target has {to}")]
    AnchorCountMismatch {
        from: usize,
        to:   usize,
    },

    #[error("{agents} agents cannot fill a formation of {anchors} anchors")]
    AgentCountMismatch {
        agents:  usize,
        anchors: usize,
    },
}

pub type TransitionResult<T> = Result<T, TransitionError>;
