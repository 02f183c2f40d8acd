/// Presentation layer: double-buffered, diff-based terminal renderer.
///
/// How it works:
///   1. Build the next frame into `front` buffer (grid of Cells)
///   2. Compare each cell with `back` buffer (previous frame)
///   3. Only emit terminal commands for cells that changed
///   4. All commands are batched with `queue!`, flushed once at the end
///   5. Swap front/back
///
/// This eliminates flicker caused by full-screen redraws.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::domain::catalog::{case_files, CaseFile, IMPOSTOR};
use crate::game::session::{Notice, Phase, Session};

// ── Palette ──

const GOLD: Color = Color::Rgb { r: 255, g: 200, b: 50 };
const NEON: Color = Color::Rgb { r: 80, g: 255, b: 80 };
const CYAN: Color = Color::Rgb { r: 100, g: 200, b: 255 };
const ALERT: Color = Color::Rgb { r: 255, g: 90, b: 90 };
const DIM: Color = Color::DarkGrey;
const HEADER_BG: Color = Color::Rgb { r: 20, g: 20, b: 60 };
const CURSOR_BG: Color = Color::Rgb { r: 30, g: 60, b: 30 };

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    /// Explicit dark background for all "empty" terminal cells, used for
    /// both Clear and every cell so inter-row gap pixels match exactly.
    const BASE_BG: Color = Color::Rgb { r: 22, g: 22, b: 35 };

    const BLANK: Cell = Cell { ch: ' ', fg: Color::White, bg: Cell::BASE_BG };

    /// Sentinel cell used to invalidate the back buffer.
    /// Different from any real cell, so every position will be diff'd.
    const INVALID: Cell = Cell { ch: '?', fg: Color::Magenta, bg: Color::Magenta };

    /// Normalize bg: Color::Reset -> BASE_BG so that every cell gets an
    /// explicit background color (never terminal-default).
    #[inline]
    fn norm_bg(bg: Color) -> Color {
        match bg {
            Color::Reset => Self::BASE_BG,
            other => other,
        }
    }

    fn new(ch: char, fg: Color, bg: Color) -> Self {
        Cell { ch, fg, bg: Self::norm_bg(bg) }
    }
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer { width: w, height: h, cells: vec![Cell::BLANK; w * h] }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.cells = vec![Cell::BLANK; w * h];
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    /// Write a string at (x, y). Each char occupies one column.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::new(ch, fg, bg));
            cx += 1;
        }
    }

    /// Paint a full row with the given background.
    fn fill_row(&mut self, y: usize, fg: Color, bg: Color) {
        for x in 0..self.width {
            self.set(x, y, Cell::new(' ', fg, bg));
        }
    }
}

// ── Layout ──

const HEADER_ROW: usize = 0;
const TAB_ROW: usize = 2;
const PROGRESS_ROW: usize = 3;
const HEADLINE_ROW: usize = 5;
const BODY_TOP: usize = 8;
/// Rows reserved below the body: input block, message bar, help bar.
const FOOTER_ROWS: usize = 7;

// ── Renderer ──

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    term_w: usize,
    term_h: usize,
    last_phase: Option<Phase>,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            term_w: 0,
            term_h: 0,
            last_phase: None,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            SetBackgroundColor(Cell::BASE_BG),
            Clear(ClearType::All)
        )?;

        let (tw, th) = terminal::size().unwrap_or((80, 24));
        self.term_w = tw as usize;
        self.term_h = th as usize;
        self.front.resize(self.term_w, self.term_h);
        self.back.resize(self.term_w, self.term_h);
        // Force full repaint on first frame: back != front for every cell.
        self.back.cells.fill(Cell::INVALID);

        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn render(&mut self, session: &mut Session) -> io::Result<()> {
        // Detect terminal resize
        let (tw, th) = terminal::size().unwrap_or((80, 24));
        if tw as usize != self.term_w || th as usize != self.term_h {
            self.term_w = tw as usize;
            self.term_h = th as usize;
            self.front.resize(self.term_w, self.term_h);
            self.back.resize(self.term_w, self.term_h);
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
        }

        // Phase change -> clear for a clean transition
        if self.last_phase != Some(session.phase) {
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
            self.last_phase = Some(session.phase);
        }

        self.front.clear();

        match session.phase {
            Phase::Splash => self.compose_splash(session),
            Phase::Investigating => self.compose_investigation(session),
            Phase::Victory => self.compose_victory(session),
        }

        self.flush_diff()?;
        std::mem::swap(&mut self.front, &mut self.back);

        Ok(())
    }

    // ── Diff flush: only write changed cells ──

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut last_bg = Cell::BASE_BG;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        // Set explicit base colors at the start of the frame; ResetColor
        // would fall back to the terminal default, which may differ from
        // BASE_BG and produce line artifacts.
        queue!(
            self.writer,
            SetForegroundColor(Color::White),
            SetBackgroundColor(Cell::BASE_BG),
        )?;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let cell = self.front.get(x, y);
                if cell == self.back.get(x, y) {
                    need_move = true;
                    continue;
                }

                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }
                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }
                queue!(self.writer, Print(cell.ch))?;
                last_x = x;
                last_y = y;
            }
        }

        self.writer.flush()
    }

    // ── Splash screen ──

    fn compose_splash(&mut self, s: &Session) {
        let title = [
            r"  ___  _   _  ___  ___   ___   _    ___  ___ ",
            r" / __|| | | |/ __|/ __| / __| /_\  | _ \| __|",
            r" \__ \| |_| |\__ \\__ \| (__ / _ \ |  _/| _| ",
            r" |___/ \___/ |___/|___/ \___/_/ \_\|_|  |___|",
        ];
        for (i, line) in title.iter().enumerate() {
            self.front.put_str(4, 2 + i, line, GOLD, Color::Reset);
        }

        let subtitle = "◈◈  The Digital Alibi  ◈◈";
        let sx = 4 + (title[1].chars().count().saturating_sub(subtitle.chars().count())) / 2;
        self.front.put_str(sx, 7, subtitle, NEON, Color::Reset);

        // Blinking prompt cursor
        let blink = (s.anim_tick / 6) % 2 == 0;
        let tagline = format!(
            "> Can you decode the truth? {}",
            if blink { '_' } else { ' ' },
        );
        self.front.put_str(6, 9, &tagline, CYAN, Color::Reset);

        // Investigation status box
        let status = [
            ("EMERGENCY MEETING CALLED", NEON),
            ("IMPOSTOR DETECTED - INVESTIGATION REQUIRED", GOLD),
        ];
        for (i, (line, color)) in status.iter().enumerate() {
            self.front.put_str(6, 11 + i, line, *color, Color::Reset);
        }
        let evidence = format!("{} LEVELS OF EVIDENCE TO PROCESS", s.seq.level_count());
        self.front.put_str(6, 13, &evidence, CYAN, Color::Reset);

        // Menu
        self.front.put_str(8, 16, "ENTER   Start Investigation", NEON, Color::Reset);
        self.front.put_str(8, 17, "  Q     Quit", Color::White, Color::Reset);

        self.front.put_str(
            4,
            19,
            "WARNING: ONLY PROCEED IF YOU'RE READY TO UNCOVER THE TRUTH",
            DIM,
            Color::Reset,
        );
    }

    // ── Investigation screen ──

    fn compose_investigation(&mut self, s: &mut Session) {
        self.compose_header();
        self.compose_tabs(s);
        self.compose_progress(s);
        self.compose_headline(s);
        self.compose_body(s);
        self.compose_input(s);
        self.compose_message(s);

        let help_row = self.front.height.saturating_sub(1);
        let help = " Type answer   ENTER:Submit   TAB:Level   ↑↓:Scroll   ←→:Dossiers   ESC:Quit";
        self.front.put_str(0, help_row, help, DIM, Color::Reset);
    }

    fn compose_header(&mut self) {
        self.front.fill_row(HEADER_ROW, Color::White, HEADER_BG);
        self.front.put_str(
            1,
            HEADER_ROW,
            "SUSSCAPE INVESTIGATION",
            GOLD,
            HEADER_BG,
        );
        self.front.put_str(
            25,
            HEADER_ROW,
            ":: EVIDENCE PROCESSING IN PROGRESS...",
            DIM,
            HEADER_BG,
        );
    }

    /// One compact tab per level: marker + number, the active one
    /// highlighted, plus the active level's topic caption.
    fn compose_tabs(&mut self, s: &Session) {
        let mut x = 1;
        for level in 1..=s.seq.level_count() {
            let completed = s.seq.is_completed(level);
            let unlocked = s.seq.is_unlocked(level);
            let active = level == s.seq.current();

            let (marker, fg) = if completed {
                ('✓', NEON)
            } else if unlocked {
                ('!', GOLD)
            } else {
                ('·', DIM)
            };
            let bg = if active { CURSOR_BG } else { Color::Reset };
            let label = format!(" {}{} ", marker, level);
            self.front.put_str(x, TAB_ROW, &label, fg, bg);
            x += label.chars().count() + 1;
        }

        let topic = format!("▸ {}", s.case_file().topic);
        self.front.put_str(x + 1, TAB_ROW, &topic, Color::White, Color::Reset);
    }

    fn compose_progress(&mut self, s: &Session) {
        let total = s.seq.level_count();
        let done = s.seq.completed_count();
        let width = 28usize;
        let filled = if total == 0 { 0 } else { done * width / total };

        let mut bar = String::with_capacity(width);
        for i in 0..width {
            bar.push(if i < filled { '█' } else { '░' });
        }
        self.front.put_str(1, PROGRESS_ROW, &bar, NEON, Color::Reset);
        let caption = format!(" {}/{} EVIDENCE PROCESSED", done, total);
        self.front.put_str(1 + width, PROGRESS_ROW, &caption, DIM, Color::Reset);
    }

    fn compose_headline(&mut self, s: &Session) {
        let cf = s.case_file();
        self.front.put_str(1, HEADLINE_ROW, cf.headline, CYAN, Color::Reset);
        if s.seq.is_completed(s.seq.current()) {
            let x = cf.headline.chars().count() + 3;
            self.front.put_str(x, HEADLINE_ROW, "✓ SOLVED", NEON, Color::Reset);
        }
        self.front.put_str(1, HEADLINE_ROW + 1, cf.subtitle, DIM, Color::Reset);
    }

    /// Scrollable case-file body. Clamps the session scroll offset to the
    /// composed content, then draws the visible window.
    fn compose_body(&mut self, s: &mut Session) {
        let body = case_body(s);
        let view_h = self
            .front
            .height
            .saturating_sub(FOOTER_ROWS)
            .saturating_sub(BODY_TOP);
        if view_h == 0 {
            return;
        }

        let max_scroll = body.len().saturating_sub(view_h);
        s.scroll = s.scroll.min(max_scroll);

        if s.scroll > 0 {
            self.front.put_str(1, BODY_TOP - 1, "▲ ▲ ▲", DIM, Color::Reset);
        }
        for (i, (text, fg)) in body.iter().skip(s.scroll).take(view_h).enumerate() {
            self.front.put_str(1, BODY_TOP + i, text, *fg, Color::Reset);
        }
        if s.scroll < max_scroll {
            let row = BODY_TOP + view_h;
            self.front.put_str(1, row.min(self.front.height.saturating_sub(1)), "▼ ▼ ▼", DIM, Color::Reset);
        }
    }

    fn compose_input(&mut self, s: &Session) {
        let h = self.front.height;
        if h < FOOTER_ROWS {
            return;
        }
        let label_row = h - 5;
        let field_row = h - 4;
        let action_row = h - 3;
        let cf = s.case_file();

        if s.seq.is_completed(s.seq.current()) {
            let hint = if s.seq.victory() || s.seq.is_final(s.seq.current()) {
                "✓ Evidence accepted."
            } else {
                "✓ Evidence accepted. [TAB] next case."
            };
            self.front.put_str(1, field_row, hint, NEON, Color::Reset);
            return;
        }

        self.front.put_str(1, label_row, cf.input_label, CYAN, Color::Reset);

        let blink = s.submission.is_none() && (s.anim_tick / 5) % 2 == 0;
        let field = format!("> {}{}", s.input, if blink { '█' } else { ' ' });
        self.front.put_str(1, field_row, &field, Color::White, Color::Reset);

        if s.submission.is_some() {
            let dots = ".".repeat(((s.anim_tick / 3) % 4) as usize);
            let busy = format!("▸ {}{}", cf.busy_label, dots);
            self.front.put_str(1, action_row, &busy, GOLD, Color::Reset);
        } else {
            let action = format!("[ENTER] {}", cf.submit_label);
            self.front.put_str(1, action_row, &action, NEON, Color::Reset);
        }
    }

    fn compose_message(&mut self, s: &Session) {
        if s.message.is_empty() {
            return;
        }
        let row = self.front.height.saturating_sub(2);
        let (fg, bg) = match s.message_kind {
            Notice::Success => (Color::Black, Color::Rgb { r: 60, g: 180, b: 90 }),
            Notice::Failure => (Color::White, Color::Rgb { r: 160, g: 40, b: 40 }),
            Notice::Info => (Color::Black, Color::Rgb { r: 200, g: 180, b: 50 }),
        };
        self.front.fill_row(row, fg, bg);
        let text = format!(" ◈ {}  {}", s.message, s.message_detail);
        self.front.put_str(0, row, &text, fg, bg);
    }

    // ── Victory screen ──

    fn compose_victory(&mut self, s: &Session) {
        let box_art = [
            "╔══════════════════════════════════════════════╗",
            "║   ★  CASE CLOSED - CULPRIT APPREHENDED!  ★   ║",
            "╚══════════════════════════════════════════════╝",
        ];
        for (i, line) in box_art.iter().enumerate() {
            self.front.put_str(4, 1 + i, line, GOLD, Color::Reset);
        }

        self.front.put_str(6, 5, "INVESTIGATION SUMMARY", CYAN, Color::Reset);
        let mut row = 6;
        for (i, cf) in case_files(s.variant).iter().enumerate() {
            let line = format!("  ✓ Level {}: {} - SOLVED", i + 1, cf.topic);
            self.front.put_str(6, row, &line, NEON, Color::Reset);
            row += 1;
        }

        row += 1;
        let reveal = format!("  IMPOSTOR IDENTIFIED: {}", IMPOSTOR);
        self.front.put_str(6, row, &reveal, ALERT, Color::Reset);

        row += 2;
        let achievement = format!(
            "ACHIEVEMENT UNLOCKED: \"Digital Detective\" - all {} levels solved",
            s.seq.level_count(),
        );
        self.front.put_str(6, row, &achievement, GOLD, Color::Reset);

        row += 2;
        let stats = format!(
            "  {}/{} Levels Complete    100% Success Rate    1 Impostor Caught",
            s.seq.completed_count(),
            s.seq.level_count(),
        );
        self.front.put_str(6, row, &stats, Color::White, Color::Reset);

        row += 2;
        self.front.put_str(
            6,
            row,
            "> The truth has been uncovered. The impostor's digital alibi has been exposed.",
            DIM,
            Color::Reset,
        );
        self.front.put_str(6, row + 1, "> Justice served. Mission accomplished.", DIM, Color::Reset);

        row += 3;
        self.front.put_str(
            6,
            row,
            "▸ ENTER: New Investigation    ESC: Quit",
            NEON,
            Color::Reset,
        );
    }
}

// ── Case-file body composition ──

/// Flatten the active case file into styled lines for the scroll view.
fn case_body(s: &Session) -> Vec<(String, Color)> {
    let cf: &CaseFile = s.case_file();
    let completed = s.seq.is_completed(s.seq.current());
    let mut lines: Vec<(String, Color)> = Vec::new();

    lines.push((format!("◆ {}", cf.log_tag), GOLD));
    for b in cf.briefing {
        lines.push((format!("  {}", b), Color::White));
    }
    lines.push((String::new(), Color::White));

    for ex in cf.exhibits {
        lines.push((format!("▛ {}:", ex.title), CYAN));
        for l in ex.lines {
            lines.push((format!("    {}", l), Color::Rgb { r: 200, g: 200, b: 210 }));
        }
        lines.push((String::new(), Color::White));
    }

    if !cf.dossiers.is_empty() {
        let d = &cf.dossiers[s.dossier.min(cf.dossiers.len() - 1)];
        lines.push((
            format!("▛ Suspect Dossier {}/{}:", s.dossier + 1, cf.dossiers.len()),
            CYAN,
        ));
        lines.push((format!("    Name:         {}", d.name), GOLD));
        lines.push((format!("    Connections:  {}", d.connections), Color::White));
        lines.push((format!("    Relationship: {}", d.relation), Color::White));
        lines.push((format!("    Alibi:        {}", d.alibi), Color::White));
        lines.push((String::new(), Color::White));
    }

    if completed {
        lines.push(("✓ SOLVED".to_string(), NEON));
        lines.push((format!("  {}", cf.solved_note), Color::White));
    } else {
        lines.push(("▛ Investigation Notes:".to_string(), CYAN));
        for h in cf.hints {
            lines.push((format!("    {}", h), DIM));
        }
    }

    lines
}
