//! Control table for the four game buttons

use super::{GameSession, Phase};

/// A user-facing game control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Start,
    Resign,
    Commit,
    Withdraw,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Start,
        Control::Resign,
        Control::Commit,
        Control::Withdraw,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::Start => "Start",
            Control::Resign => "Give up",
            Control::Commit => "Commit",
            Control::Withdraw => "Withdraw",
        }
    }

    /// Whether this control is usable in the given session
    pub fn is_enabled(self, session: &GameSession) -> bool {
        let playing = session.phase() == Phase::InProgress;
        match self {
            Control::Start => !playing,
            Control::Resign => playing,
            Control::Commit => playing && session.can_commit(),
            Control::Withdraw => playing && !session.board().history().is_empty(),
        }
    }
}

/// Snapshot of a control and its availability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub control: Control,
    pub enabled: bool,
}
