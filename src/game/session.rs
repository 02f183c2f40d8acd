/// Session: the complete snapshot of a running game.
///
/// Owned by the main loop, read by the renderer. All mutation happens
/// through the methods here and through the sequencer's operations; level
/// screens are pure views over this state.
///
/// ## Phases
///
/// `Splash -> Investigating -> Victory`. The sequencer is (re)built when
/// the investigation starts, so restarting is a plain reinitialization
/// rather than a process reload.

use crate::config::TimingConfig;
use crate::domain::catalog::{self, CaseFile, Variant};
use crate::domain::sequencer::Sequencer;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Splash,
    Investigating,
    Victory,
}

/// Notification flavor, used for the message bar color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Notice {
    Info,
    Success,
    Failure,
}

/// A submission waiting out its cosmetic processing delay.
#[derive(Clone, Debug)]
pub struct Submission {
    pub level: usize,
    pub text: String,
    pub ticks_remaining: u32,
}

/// Answer field capacity; the longest expected answer is well under this.
pub const INPUT_CAP: usize = 40;

pub struct Session {
    pub phase: Phase,
    pub variant: Variant,
    pub seq: Sequencer,
    pub timing: TimingConfig,

    // ── Answer entry ──
    pub input: String,
    pub submission: Option<Submission>,

    // ── View state ──
    pub scroll: usize,
    pub dossier: usize,

    // ── Notification bar ──
    pub message: String,
    pub message_detail: String,
    pub message_kind: Notice,
    pub message_timer: u32,

    // ── Animation ──
    pub anim_tick: u32,
}

impl Session {
    pub fn new(variant: Variant, timing: TimingConfig) -> Self {
        let seq = Sequencer::new(catalog::answer_key(variant), timing.victory_ticks);
        Session {
            phase: Phase::Splash,
            variant,
            seq,
            timing,
            input: String::new(),
            submission: None,
            scroll: 0,
            dossier: 0,
            message: String::new(),
            message_detail: String::new(),
            message_kind: Notice::Info,
            message_timer: 0,
            anim_tick: 0,
        }
    }

    /// Splash -> Investigating with a fresh sequencer.
    pub fn start_investigation(&mut self) {
        self.seq = Sequencer::new(catalog::answer_key(self.variant), self.timing.victory_ticks);
        self.phase = Phase::Investigating;
        self.reset_view();
        self.clear_notice();
        self.anim_tick = 0;
    }

    /// Victory -> Splash. The next start rebuilds everything.
    pub fn return_to_splash(&mut self) {
        self.phase = Phase::Splash;
        self.reset_view();
        self.clear_notice();
        self.anim_tick = 0;
    }

    fn reset_view(&mut self) {
        self.input.clear();
        self.submission = None;
        self.scroll = 0;
        self.dossier = 0;
    }

    // ── Current level view ──

    pub fn case_file(&self) -> &'static CaseFile {
        &catalog::case_files(self.variant)[self.seq.current() - 1]
    }

    /// Answer entry is open when the level is unsolved and nothing is
    /// being processed.
    pub fn input_open(&self) -> bool {
        self.phase == Phase::Investigating
            && self.submission.is_none()
            && !self.seq.is_completed(self.seq.current())
    }

    pub fn push_char(&mut self, c: char) {
        if !self.input_open() || c.is_control() {
            return;
        }
        if self.input.chars().count() < INPUT_CAP {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.input_open() {
            self.input.pop();
        }
    }

    /// Move to the nearest unlocked level in the given direction.
    pub fn select_adjacent(&mut self, forward: bool) {
        if self.submission.is_some() {
            return;
        }
        let target = self.seq.nearest_unlocked(self.seq.current(), forward);
        if target != self.seq.current() && self.seq.select_level(target) {
            self.reset_view();
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Renderer clamps against the composed body height.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn cycle_dossier(&mut self, forward: bool) {
        let n = self.case_file().dossiers.len();
        if n == 0 {
            return;
        }
        self.dossier = if forward {
            (self.dossier + 1) % n
        } else {
            (self.dossier + n - 1) % n
        };
    }

    // ── Notification bar ──

    pub fn set_notice(&mut self, title: &str, detail: &str, kind: Notice) {
        self.message = title.to_string();
        self.message_detail = detail.to_string();
        self.message_kind = kind;
        self.message_timer = self.timing.notice_ticks;
    }

    pub fn clear_notice(&mut self) {
        self.message.clear();
        self.message_detail.clear();
        self.message_timer = 0;
    }
}
