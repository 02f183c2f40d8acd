/// Events emitted while advancing the game by one tick.
/// The presentation layer consumes these for sound.

#[derive(Clone, Debug)]
pub enum GameEvent {
    EvidenceAccepted { level: usize },
    EvidenceRejected { level: usize },
    LevelUnlocked { level: usize },
    CaseClosed,
}
