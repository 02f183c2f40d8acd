/// Per-level progression status.
/// Transitions are centralized in methods so the invariants
/// (completed implies unlocked, no backward moves) live in one place.

#[derive(Clone, Debug, Default)]
pub struct LevelStatus {
    pub completed: bool,
    pub unlocked: bool,
    /// Last accepted submission, verbatim (trimmed by the submit flow).
    pub answer: Option<String>,
}

impl LevelStatus {
    pub fn locked() -> Self {
        LevelStatus::default()
    }

    pub fn open() -> Self {
        LevelStatus { unlocked: true, ..LevelStatus::default() }
    }

    /// LOCKED -> UNLOCKED. Already-unlocked levels are left alone
    /// (re-completing a level must not disturb its successor).
    pub fn unlock(&mut self) {
        self.unlocked = true;
    }

    /// UNLOCKED -> COMPLETED, recording the accepted submission.
    pub fn complete(&mut self, accepted: &str) {
        self.completed = true;
        self.unlocked = true;
        self.answer = Some(accepted.to_string());
    }
}
