//! TUI application state and logic

use crate::core::LetterStatus;
use crate::game::{
    GameError, GameSession, KeyStatusMap, KeyUpdate, MAX_GUESSES, Outcome, Precondition,
    RandomSelector, RenderPlan, WordSelector,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the event loop waits for input before advancing reveals
const TICK_RATE: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a, S: WordSelector = RandomSelector> {
    pub session: GameSession<'a, S>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Key colors as currently shown; lags the session until a reveal finishes
    pub shown_keys: KeyStatusMap,
    pub reveal: Option<PendingReveal>,
    pub should_quit: bool,
}

/// A scored row whose tiles are still flipping
#[derive(Debug, Clone)]
pub struct PendingReveal {
    pub plan: RenderPlan,
    pub key_updates: Vec<KeyUpdate>,
    pub started: Instant,
    /// Tiles of the row already showing their status
    pub revealed: usize,
}

impl PendingReveal {
    /// Row being revealed
    #[must_use]
    pub fn row(&self) -> Option<usize> {
        self.plan.reveals.first().map(|r| r.row)
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Win statistics for the lifetime of the process
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses, index 0 is a first-guess win
    pub guess_distribution: [usize; MAX_GUESSES],
}

impl Statistics {
    pub fn record(&mut self, won: bool, guesses_used: usize) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if let Some(slot) = self.guess_distribution.get_mut(guesses_used.wrapping_sub(1)) {
                *slot += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a, S: WordSelector> App<'a, S> {
    #[must_use]
    pub fn new(session: GameSession<'a, S>) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: "Guess the word in six tries. Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            shown_keys: KeyStatusMap::new(),
            reveal: None,
            should_quit: false,
        }
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            // Input waits for the tiles to finish flipping
            _ if self.reveal.is_some() => {}
            _ if self.session.is_game_over() => match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => {
                // Only fails once the game is over, which is handled above
                let _ = self.session.delete_letter();
            }
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }

    fn type_letter(&mut self, letter: char) {
        match self.session.enter_letter(letter) {
            // A sixth letter or a non-letter key is simply ignored
            Ok(()) | Err(GameError::RowFull | GameError::InvalidLetter(_)) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn submit(&mut self, now: Instant) {
        match self.session.submit_guess() {
            Ok(result) => {
                if let Some(finale) = self.session.finale() {
                    self.stats.record(finale.won, finale.guesses_used);
                }
                self.reveal = Some(PendingReveal {
                    plan: result.render_plan(),
                    key_updates: result.key_updates,
                    started: now,
                    revealed: 0,
                });
            }
            Err(GameError::PreconditionViolation(Precondition::RowIncomplete { .. })) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(GameError::InvalidWord(word)) => {
                self.add_message(&format!("{word} is not in the word list"), MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Advance the pending reveal to `now`
    pub fn tick(&mut self, now: Instant) {
        let Some(reveal) = self.reveal.as_mut() else {
            return;
        };

        let elapsed = now.saturating_duration_since(reveal.started);
        reveal.revealed = reveal
            .plan
            .reveals
            .iter()
            .take_while(|r| r.delay <= elapsed)
            .count();

        if elapsed < reveal.plan.total_duration() {
            return;
        }

        if let Some(reveal) = self.reveal.take() {
            for update in &reveal.key_updates {
                self.shown_keys.upgrade(update.letter, update.status);
            }
            self.announce(reveal.plan.outcome);
        }
    }

    fn announce(&mut self, outcome: Outcome) {
        let Some(finale) = self.session.finale() else {
            return;
        };

        match outcome {
            Outcome::Win => {
                let celebration = match finale.guesses_used {
                    1 => "🎯 Genius!",
                    2 => "🔥 Magnificent!",
                    3 => "✨ Impressive!",
                    4 => "👏 Splendid!",
                    5 => "🎉 Great!",
                    _ => "😅 Phew!",
                };
                self.add_message(&format!("{celebration} You Win!"), MessageStyle::Success);
            }
            Outcome::Lose | Outcome::Continue => {
                self.add_message(
                    &format!("❌ Game Over! Word was {}", finale.secret),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if let Err(e) = self.session.restart() {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        self.shown_keys = KeyStatusMap::new();
        self.reveal = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Status to draw on a tile, hiding statuses of tiles still flipping
    #[must_use]
    pub fn visible_status(&self, row: usize, col: usize) -> Option<LetterStatus> {
        match &self.reveal {
            Some(reveal) if reveal.row() == Some(row) && col >= reveal.revealed => None,
            _ => self.session.board().cell(row, col).status(),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSelector>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSelector>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
