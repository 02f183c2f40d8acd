/// The level sequencer: sole owner of unlock/completion state.
///
/// Levels are numbered 1..=N. Per-level state machine:
///   LOCKED -> UNLOCKED -> COMPLETED, never backward.
/// Level 1 starts unlocked; level k+1 unlocks only as a side effect of
/// level k's successful completion.
///
/// The overall game moves IN_PROGRESS -> VICTORY once the final level
/// completes, after a tick-counted display delay so the success
/// notification is visible before the victory screen takes over.
///
/// Screens never mutate this state directly; they read their own entry
/// and call `complete_level` / `select_level`.

use crate::domain::level::LevelStatus;

pub struct Sequencer {
    answers: Vec<String>,
    levels: Vec<LevelStatus>,
    /// 1-based index of the level currently displayed.
    current: usize,
    victory: bool,
    victory_countdown: Option<u32>,
    victory_delay: u32,
}

impl Sequencer {
    pub fn new(answers: Vec<String>, victory_delay: u32) -> Self {
        let mut levels = vec![LevelStatus::locked(); answers.len()];
        if let Some(first) = levels.first_mut() {
            *first = LevelStatus::open();
        }
        Sequencer {
            answers,
            levels,
            current: 1,
            victory: false,
            victory_countdown: None,
            victory_delay,
        }
    }

    // ── Queries ──

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn status(&self, level: usize) -> &LevelStatus {
        &self.levels[level - 1]
    }

    pub fn is_unlocked(&self, level: usize) -> bool {
        level >= 1 && self.levels.get(level - 1).map_or(false, |s| s.unlocked)
    }

    pub fn is_completed(&self, level: usize) -> bool {
        level >= 1 && self.levels.get(level - 1).map_or(false, |s| s.completed)
    }

    pub fn is_final(&self, level: usize) -> bool {
        level == self.levels.len()
    }

    pub fn completed_count(&self) -> usize {
        self.levels.iter().filter(|s| s.completed).count()
    }

    pub fn victory(&self) -> bool {
        self.victory
    }

    /// Nearest unlocked level from `from` in the given direction,
    /// wrapping around. Returns `from` when nothing else is unlocked.
    pub fn nearest_unlocked(&self, from: usize, forward: bool) -> usize {
        let n = self.levels.len();
        if n == 0 {
            return from;
        }
        for step in 1..n {
            let idx0 = if forward {
                (from - 1 + step) % n
            } else {
                (from - 1 + n - step) % n
            };
            if self.levels[idx0].unlocked {
                return idx0 + 1;
            }
        }
        from
    }

    // ── Transitions ──

    /// Adjudicate a submission for `level`. The caller trims surrounding
    /// whitespace; the comparison itself is case-insensitive.
    ///
    /// On a match: the level becomes COMPLETED (submission recorded), the
    /// next level unlocks, and completing the final level schedules
    /// victory after the display delay. Returns true.
    ///
    /// A locked level or a non-matching submission changes nothing and
    /// returns false.
    pub fn complete_level(&mut self, level: usize, submitted: &str) -> bool {
        if !self.is_unlocked(level) {
            return false;
        }
        if !submitted.eq_ignore_ascii_case(&self.answers[level - 1]) {
            return false;
        }

        self.levels[level - 1].complete(submitted);

        if level < self.levels.len() {
            self.levels[level].unlock();
        } else if !self.victory && self.victory_countdown.is_none() {
            self.victory_countdown = Some(self.victory_delay);
        }
        true
    }

    /// Change which level is displayed. Locked targets are rejected.
    pub fn select_level(&mut self, level: usize) -> bool {
        if !self.is_unlocked(level) {
            return false;
        }
        self.current = level;
        true
    }

    /// Advance the scheduled victory delay by one tick.
    pub fn tick(&mut self) {
        if let Some(remaining) = self.victory_countdown {
            if remaining <= 1 {
                self.victory_countdown = None;
                self.victory = true;
            } else {
                self.victory_countdown = Some(remaining - 1);
            }
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{answer_key, Variant};

    fn seq4() -> Sequencer {
        Sequencer::new(answer_key(Variant::Four), 3)
    }

    fn drive_to_victory(seq: &mut Sequencer) {
        for _ in 0..10 {
            seq.tick();
        }
    }

    // ── Initial state ──

    #[test]
    fn only_level_one_starts_unlocked() {
        let seq = seq4();
        assert!(seq.is_unlocked(1));
        for level in 2..=4 {
            assert!(!seq.is_unlocked(level));
            assert!(!seq.is_completed(level));
        }
        assert_eq!(seq.current(), 1);
        assert!(!seq.victory());
    }

    // ── Adjudication ──

    #[test]
    fn comparison_is_case_insensitive() {
        for submission in ["linked list", "LINKED LIST", "Linked List"] {
            let mut seq = seq4();
            assert!(seq.complete_level(1, submission));
            assert!(seq.is_completed(1));
        }
    }

    #[test]
    fn accepted_submission_is_recorded() {
        let mut seq = seq4();
        assert!(seq.complete_level(1, "Linked List"));
        assert_eq!(seq.status(1).answer.as_deref(), Some("Linked List"));
    }

    #[test]
    fn wrong_answer_changes_nothing() {
        let mut seq = seq4();
        assert!(!seq.complete_level(1, "binary tree"));
        assert!(!seq.is_completed(1));
        assert!(!seq.is_unlocked(2));
        assert!(seq.status(1).answer.is_none());
    }

    #[test]
    fn locked_level_is_rejected_even_with_correct_answer() {
        let mut seq = seq4();
        assert!(!seq.complete_level(2, "HASH TABLE"));
        assert!(!seq.is_completed(2));
        assert!(!seq.is_unlocked(2));
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        let mut seq = seq4();
        assert!(!seq.complete_level(0, "LINKED LIST"));
        assert!(!seq.complete_level(5, "LINKED LIST"));
    }

    // ── Progression ──

    #[test]
    fn completion_unlocks_the_next_level_only() {
        let mut seq = seq4();
        assert!(seq.complete_level(1, "LINKED LIST"));
        assert!(seq.is_unlocked(2));
        assert!(!seq.is_unlocked(3));
        assert!(!seq.is_unlocked(4));
    }

    #[test]
    fn repeated_completion_is_idempotent() {
        let mut once = seq4();
        once.complete_level(1, "LINKED LIST");

        let mut twice = seq4();
        twice.complete_level(1, "LINKED LIST");
        assert!(twice.complete_level(1, "LINKED LIST"));

        for level in 1..=4 {
            assert_eq!(once.is_completed(level), twice.is_completed(level));
            assert_eq!(once.is_unlocked(level), twice.is_unlocked(level));
        }
        assert!(!twice.is_unlocked(3));
    }

    #[test]
    fn flags_never_revert() {
        let mut seq = seq4();
        seq.complete_level(1, "LINKED LIST");
        // A later wrong answer must not undo anything.
        assert!(!seq.complete_level(2, "bloom filter"));
        assert!(seq.is_completed(1));
        assert!(seq.is_unlocked(2));
    }

    // ── Victory ──

    #[test]
    fn solving_every_level_in_order_reaches_victory() {
        let mut seq = seq4();
        for (i, answer) in ["LINKED LIST", "HASH TABLE", "MERGE SORT", "ARJUN"]
            .iter()
            .enumerate()
        {
            assert!(seq.complete_level(i + 1, answer), "level {}", i + 1);
        }
        assert_eq!(seq.completed_count(), 4);
        assert!(!seq.victory(), "victory is delayed, not immediate");
        drive_to_victory(&mut seq);
        assert!(seq.victory());
    }

    #[test]
    fn out_of_order_answers_are_rejected() {
        let mut seq = seq4();
        assert!(!seq.complete_level(2, "HASH TABLE"));
        assert!(seq.complete_level(1, "LINKED LIST"));
        assert!(seq.complete_level(2, "HASH TABLE"));
    }

    #[test]
    fn victory_waits_for_the_display_delay() {
        let mut seq = seq4();
        seq.complete_level(1, "LINKED LIST");
        seq.complete_level(2, "HASH TABLE");
        seq.complete_level(3, "MERGE SORT");
        seq.complete_level(4, "ARJUN");
        seq.tick();
        seq.tick();
        assert!(!seq.victory());
        seq.tick();
        assert!(seq.victory());
    }

    #[test]
    fn non_final_completion_never_schedules_victory() {
        let mut seq = seq4();
        seq.complete_level(1, "LINKED LIST");
        drive_to_victory(&mut seq);
        assert!(!seq.victory());
    }

    // ── Level selection ──

    #[test]
    fn selecting_a_locked_level_is_rejected() {
        let mut seq = seq4();
        assert!(!seq.select_level(3));
        assert_eq!(seq.current(), 1);
    }

    #[test]
    fn selecting_an_unlocked_level_moves_the_cursor() {
        let mut seq = seq4();
        seq.complete_level(1, "LINKED LIST");
        assert!(seq.select_level(2));
        assert_eq!(seq.current(), 2);
        // Completed levels remain selectable.
        assert!(seq.select_level(1));
        assert_eq!(seq.current(), 1);
    }

    #[test]
    fn nearest_unlocked_wraps_and_skips_locked() {
        let mut seq = seq4();
        seq.complete_level(1, "LINKED LIST");
        seq.complete_level(2, "HASH TABLE");
        // Unlocked: 1, 2, 3. Forward from 3 wraps to 1.
        assert_eq!(seq.nearest_unlocked(3, true), 1);
        assert_eq!(seq.nearest_unlocked(1, false), 3);
        assert_eq!(seq.nearest_unlocked(2, true), 3);
    }

    #[test]
    fn nearest_unlocked_with_nothing_else_stays_put() {
        let seq = seq4();
        assert_eq!(seq.nearest_unlocked(1, true), 1);
        assert_eq!(seq.nearest_unlocked(1, false), 1);
    }
}
