use serde::{Deserialize, Serialize};

/// A committed swipe decision: left rejects, right likes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Browsing position within the catalog, plus the in-flight commit window.
///
/// `cursor` ranges over `0..=len`; `cursor == len` is the exhausted display
/// state, not an overrun. While `committing` is true the exit transition is
/// playing and every other swipe command is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwipeState {
    pub cursor: usize,
    pub pending_direction: Option<SwipeDirection>,
    pub committing: bool,
    /// Bumped on restart; settle tasks scheduled for an earlier browsing
    /// session see a mismatch and leave the state alone.
    #[serde(skip)]
    pub generation: u64,
}

impl Default for SwipeState {
    fn default() -> Self {
        Self {
            cursor: 0,
            pending_direction: None,
            committing: false,
            generation: 0,
        }
    }
}

impl SwipeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_exhausted(&self, len: usize) -> bool {
        self.cursor >= len
    }

    /// Opens the commit window for `direction`. Returns false without
    /// touching the state when a commit is already in flight or the catalog
    /// is exhausted; callers treat that as a no-op command.
    pub fn begin_commit(&mut self, direction: SwipeDirection, len: usize) -> bool {
        if self.committing || self.is_exhausted(len) {
            return false;
        }

        self.committing = true;
        self.pending_direction = Some(direction);
        true
    }

    /// Closes the commit window opened by `begin_commit`: advances the
    /// cursor (pinning at `len`, the exhausted state) and clears the guard.
    /// Returns false for stale calls, i.e. when the generation no longer
    /// matches or no commit is in flight.
    pub fn settle(&mut self, generation: u64, len: usize) -> bool {
        if generation != self.generation || !self.committing {
            return false;
        }

        self.cursor = (self.cursor + 1).min(len);
        self.pending_direction = None;
        self.committing = false;
        true
    }

    /// Steps back one activity. Allowed only when idle and not at the
    /// start; never touches favorite membership.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 || self.committing {
            return false;
        }

        self.cursor -= 1;
        true
    }

    /// Back to the first card, unconditionally. The generation bump strands
    /// any settle task still in flight.
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.pending_direction = None;
        self.committing = false;
        self.generation += 1;
    }
}
