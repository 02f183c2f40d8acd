/// Advances the session by one simulation tick.
///
/// Processing order:
///   1. Animation counter
///   2. Notification expiry
///   3. Pending submission countdown -> adjudication
///   4. Victory delay -> phase flip
///
/// The cosmetic processing delay has no correctness semantics; the
/// sequencer adjudicates only when the countdown expires, and the
/// answer field stays closed in between.

use crate::domain::catalog;

use super::event::GameEvent;
use super::session::{Notice, Phase, Session, Submission};

/// Start processing the current input. Empty or whitespace-only input is
/// a no-op, as is submitting while a submission is already pending or
/// the level is solved.
pub fn begin_submission(session: &mut Session) -> bool {
    if !session.input_open() {
        return false;
    }
    let trimmed = session.input.trim();
    if trimmed.is_empty() {
        return false;
    }

    let ticks = if session.case_file().dramatic {
        session.timing.verdict_ticks
    } else {
        session.timing.deliberation_ticks
    };
    session.submission = Some(Submission {
        level: session.seq.current(),
        text: trimmed.to_string(),
        ticks_remaining: ticks.max(1),
    });
    true
}

/// One tick of the game. Returns the events produced, for sound.
pub fn tick(session: &mut Session) -> Vec<GameEvent> {
    let mut events = Vec::new();
    session.anim_tick = session.anim_tick.wrapping_add(1);

    if session.message_timer > 0 {
        session.message_timer -= 1;
        if session.message_timer == 0 {
            session.clear_notice();
        }
    }

    if session.phase == Phase::Investigating {
        resolve_submission(session, &mut events);
        session.seq.tick();
        if session.seq.victory() {
            session.phase = Phase::Victory;
            session.anim_tick = 0;
            events.push(GameEvent::CaseClosed);
        }
    }

    events
}

fn resolve_submission(session: &mut Session, events: &mut Vec<GameEvent>) {
    let due = match session.submission.as_mut() {
        Some(sub) => {
            sub.ticks_remaining -= 1;
            sub.ticks_remaining == 0
        }
        None => return,
    };
    if !due {
        return;
    }
    let sub = match session.submission.take() {
        Some(s) => s,
        None => return,
    };

    let level = sub.level;
    let case = &catalog::case_files(session.variant)[level - 1];

    if session.seq.complete_level(level, &sub.text) {
        events.push(GameEvent::EvidenceAccepted { level });
        if !session.seq.is_final(level) {
            events.push(GameEvent::LevelUnlocked { level: level + 1 });
        }
        session.set_notice(case.success_title, case.success_note, Notice::Success);
        session.input.clear();
        session.scroll = 0;
    } else {
        events.push(GameEvent::EvidenceRejected { level });
        session.set_notice(case.failure_title, case.failure_note, Notice::Failure);
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;
    use crate::domain::catalog::Variant;

    fn started() -> Session {
        let timing = TimingConfig {
            tick_rate_ms: 75,
            deliberation_ticks: 3,
            verdict_ticks: 5,
            victory_ticks: 2,
            notice_ticks: 10,
        };
        let mut s = Session::new(Variant::Four, timing);
        s.start_investigation();
        s
    }

    fn type_text(s: &mut Session, text: &str) {
        for c in text.chars() {
            s.push_char(c);
        }
    }

    fn run_ticks(s: &mut Session, n: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(tick(s));
        }
        events
    }

    #[test]
    fn empty_submission_is_ignored() {
        let mut s = started();
        assert!(!begin_submission(&mut s));
        assert!(s.submission.is_none());
    }

    #[test]
    fn whitespace_only_submission_is_ignored() {
        let mut s = started();
        type_text(&mut s, "   ");
        assert!(!begin_submission(&mut s));
        assert!(s.submission.is_none());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let mut s = started();
        type_text(&mut s, "  linked list  ");
        assert!(begin_submission(&mut s));
        run_ticks(&mut s, 3);
        assert!(s.seq.is_completed(1));
        assert_eq!(s.seq.status(1).answer.as_deref(), Some("linked list"));
    }

    #[test]
    fn adjudication_waits_for_the_processing_delay() {
        let mut s = started();
        type_text(&mut s, "LINKED LIST");
        assert!(begin_submission(&mut s));
        run_ticks(&mut s, 2);
        assert!(!s.seq.is_completed(1));
        let events = run_ticks(&mut s, 1);
        assert!(s.seq.is_completed(1));
        assert!(matches!(events[0], GameEvent::EvidenceAccepted { level: 1 }));
        assert!(matches!(events[1], GameEvent::LevelUnlocked { level: 2 }));
        assert!(s.input.is_empty(), "input clears on success");
    }

    #[test]
    fn wrong_answer_keeps_the_input() {
        let mut s = started();
        type_text(&mut s, "binary tree");
        assert!(begin_submission(&mut s));
        let events = run_ticks(&mut s, 3);
        assert!(!s.seq.is_completed(1));
        assert!(matches!(events[0], GameEvent::EvidenceRejected { level: 1 }));
        assert_eq!(s.input, "binary tree");
        assert!(!s.message.is_empty());
    }

    #[test]
    fn typing_is_blocked_while_processing() {
        let mut s = started();
        type_text(&mut s, "LINKED LIST");
        begin_submission(&mut s);
        type_text(&mut s, "zzz");
        run_ticks(&mut s, 3);
        assert!(s.seq.is_completed(1), "stray keystrokes must not corrupt the submission");
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut s = started();
        type_text(&mut s, "LINKED LIST");
        assert!(begin_submission(&mut s));
        assert!(!begin_submission(&mut s));
    }

    #[test]
    fn solved_level_stops_accepting_input() {
        let mut s = started();
        type_text(&mut s, "LINKED LIST");
        begin_submission(&mut s);
        run_ticks(&mut s, 3);
        type_text(&mut s, "more");
        assert!(s.input.is_empty());
        assert!(!begin_submission(&mut s));
    }

    #[test]
    fn closing_the_final_case_reaches_victory() {
        let mut s = started();
        s.seq.complete_level(1, "LINKED LIST");
        s.seq.complete_level(2, "HASH TABLE");
        s.seq.complete_level(3, "MERGE SORT");
        s.seq.select_level(4);

        type_text(&mut s, "arjun");
        assert!(begin_submission(&mut s));
        // Dramatic level: 5 processing ticks, then the 2-tick victory delay.
        run_ticks(&mut s, 5);
        assert!(s.seq.is_completed(4));
        assert_eq!(s.phase, Phase::Investigating, "victory is delayed");
        let events = run_ticks(&mut s, 2);
        assert_eq!(s.phase, Phase::Victory);
        assert!(events.iter().any(|e| matches!(e, GameEvent::CaseClosed)));
    }

    #[test]
    fn victory_fires_exactly_once() {
        let mut s = started();
        for (i, ans) in ["LINKED LIST", "HASH TABLE", "MERGE SORT", "ARJUN"].iter().enumerate() {
            s.seq.complete_level(i + 1, ans);
        }
        let events = run_ticks(&mut s, 10);
        let closed = events.iter().filter(|e| matches!(e, GameEvent::CaseClosed)).count();
        assert_eq!(closed, 1);
    }
}
