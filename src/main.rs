/// Entry point and game loop.

mod config;
mod domain;
mod game;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use config::GameConfig;
use game::event::GameEvent;
use game::session::{Phase, Session};
use game::submit;
use ui::input::InputState;
use ui::renderer::Renderer;
use ui::sound::SoundEngine;

const FRAME_SLEEP: Duration = Duration::from_millis(5);

fn main() {
    let config = GameConfig::load();
    let mut session = Session::new(config.variant, config.timing.clone());

    let mut renderer = Renderer::new();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let sound = SoundEngine::new();

    let result = game_loop(&mut session, &mut renderer, sound.as_ref(), &config);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }
    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("Thanks for playing Susscape: The Digital Alibi!");
    println!(
        "Evidence processed: {}/{}",
        session.seq.completed_count(),
        session.seq.level_count(),
    );
}

fn game_loop(
    session: &mut Session,
    renderer: &mut Renderer,
    sound: Option<&SoundEngine>,
    config: &GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut kb = InputState::new();
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(config.timing.tick_rate_ms);

    loop {
        kb.drain_events();

        if kb.ctrl_c_pressed() {
            break;
        }
        if handle_keys(session, sound, &kb) {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            let events = submit::tick(session);
            process_sound_events(sound, &events);
            last_tick = Instant::now();
        }

        renderer.render(session)?;
        std::thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

// ── Key Constants ──

const KEYS_CONFIRM: &[KeyCode] = &[KeyCode::Enter];
const KEYS_QUIT_MENU: &[KeyCode] = &[KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')];

/// Per-phase key dispatch. Returns true when the player quits.
fn handle_keys(session: &mut Session, sound: Option<&SoundEngine>, kb: &InputState) -> bool {
    match session.phase {
        // ── Splash ──
        Phase::Splash => {
            if kb.any_pressed(KEYS_CONFIRM) {
                session.start_investigation();
                if let Some(sfx) = sound {
                    sfx.play_start();
                }
            } else if kb.any_pressed(KEYS_QUIT_MENU) {
                return true;
            }
        }

        // ── Investigating ──
        // Letter keys belong to the answer field here, so only ESC quits.
        Phase::Investigating => {
            if kb.any_pressed(&[KeyCode::Esc]) {
                return true;
            }
            if kb.any_pressed(&[KeyCode::Tab]) {
                session.select_adjacent(true);
            }
            if kb.any_pressed(&[KeyCode::BackTab]) {
                session.select_adjacent(false);
            }
            if kb.any_pressed(&[KeyCode::Up]) {
                session.scroll_up();
            }
            if kb.any_pressed(&[KeyCode::Down]) {
                session.scroll_down();
            }
            if kb.any_pressed(&[KeyCode::Right]) {
                session.cycle_dossier(true);
            }
            if kb.any_pressed(&[KeyCode::Left]) {
                session.cycle_dossier(false);
            }
            for &c in kb.typed() {
                session.push_char(c);
            }
            if kb.any_pressed(&[KeyCode::Backspace]) {
                session.backspace();
            }
            if kb.any_pressed(KEYS_CONFIRM) {
                submit::begin_submission(session);
            }
        }

        // ── Victory ──
        Phase::Victory => {
            if kb.any_pressed(KEYS_CONFIRM) {
                session.return_to_splash();
            } else if kb.any_pressed(KEYS_QUIT_MENU) {
                return true;
            }
        }
    }

    false
}

fn process_sound_events(sound: Option<&SoundEngine>, events: &[GameEvent]) {
    let sfx = match sound {
        Some(s) => s,
        None => return,
    };
    for event in events {
        match event {
            GameEvent::EvidenceAccepted { .. } => sfx.play_accept(),
            GameEvent::EvidenceRejected { .. } => sfx.play_reject(),
            GameEvent::LevelUnlocked { .. } => sfx.play_unlock(),
            GameEvent::CaseClosed => sfx.play_case_closed(),
        }
    }
}
