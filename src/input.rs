use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Discrete intents delivered to the session, from any input source.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameIntent {
    Direction(Direction),
    TogglePlay,
    ResetFood,
    ResetGame,
    Quit,
}

/// Committed/pending direction pair.
///
/// `committed` is the direction applied on the most recent movement tick;
/// `pending` is the single queued direction the next tick will consume. A
/// later proposal before the next tick overwrites an earlier one.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DirectionState {
    committed: Direction,
    pending: Direction,
}

impl DirectionState {
    /// Creates a direction state with both slots set to `initial`.
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            pending: initial,
        }
    }

    /// Proposes a direction for the next tick.
    ///
    /// The exact reverse of the committed direction is silently rejected,
    /// since applying it would drive the head into the neck cell. Returns
    /// whether the proposal was accepted.
    pub fn propose(&mut self, direction: Direction) -> bool {
        if direction == self.committed.opposite() {
            return false;
        }

        self.pending = direction;
        true
    }

    /// Commits the pending direction for the current tick and returns it.
    pub fn commit(&mut self) -> Direction {
        self.committed = self.pending;
        self.committed
    }

    /// Returns the direction applied on the most recent tick.
    #[must_use]
    pub fn committed(self) -> Direction {
        self.committed
    }

    /// Returns the direction queued for the next tick.
    #[must_use]
    pub fn pending(self) -> Direction {
        self.pending
    }
}

/// Maps a terminal key event to a game intent.
///
/// Arrows and WASD steer, space toggles play/pause, escape re-rolls the
/// food, enter or `r` resets after game over, `q` or ctrl-c quits.
#[must_use]
pub fn map_key_event(event: KeyEvent) -> Option<GameIntent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(GameIntent::Quit);
    }

    match event.code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameIntent::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameIntent::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameIntent::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameIntent::Direction(Direction::Right)),
        KeyCode::Char(' ') => Some(GameIntent::TogglePlay),
        KeyCode::Esc => Some(GameIntent::ResetFood),
        KeyCode::Enter | KeyCode::Char('r') => Some(GameIntent::ResetGame),
        KeyCode::Char('q') => Some(GameIntent::Quit),
        _ => None,
    }
}
