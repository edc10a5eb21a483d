use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::{ClockEvent, GameClock};
use crate::config::{CELL_SIZE_PX, INITIAL_DIRECTION, INITIAL_SNAKE, TICK_INTERVAL_MS};
use crate::engine;
use crate::food;
use crate::grid::{ContainerSize, GridSize};
use crate::input::{Direction, DirectionState, GameIntent};
use crate::snake::{Cell, Snake};

/// High-level session phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Created or reset, no tick has run yet.
    Idle,
    Playing,
    Paused,
    GameOver,
    /// The snake covers every free cell; nowhere left to place food.
    Won,
}

impl Phase {
    /// Returns true for phases the session cannot leave except via reset.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Won)
    }
}

/// What a grid cell holds, for rendering.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellContent {
    Empty,
    Snake,
    Food,
}

/// Complete mutable state for one game session.
///
/// Owns the snake, food, grid, direction state, and clock; all mutation
/// goes through `handle_intent`, `advance`, and `resize` on the host's
/// single event thread.
#[derive(Debug)]
pub struct Session {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub elapsed_seconds: u32,
    pub phase: Phase,
    grid: GridSize,
    directions: DirectionState,
    clock: GameClock,
    rng: StdRng,
}

impl Session {
    /// Creates a session sized to `container`, seeded from the OS.
    #[must_use]
    pub fn new(container: ContainerSize) -> Self {
        Self::new_with_seed(container, rand::random())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(container: ContainerSize, seed: u64) -> Self {
        let grid = GridSize::from_container(container, CELL_SIZE_PX);
        let mut session = Self {
            snake: Snake::from_segments(INITIAL_SNAKE.to_vec()),
            food: Cell { row: 0, col: 0 },
            score: 0,
            elapsed_seconds: 0,
            phase: Phase::Idle,
            grid,
            directions: DirectionState::new(INITIAL_DIRECTION),
            clock: GameClock::new(Duration::from_millis(TICK_INTERVAL_MS)),
            rng: StdRng::seed_from_u64(seed),
        };

        session.place_food_or_finish();
        session
    }

    /// Returns the current grid bounds.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Returns what occupies `cell`, for the render pass.
    #[must_use]
    pub fn content_at(&self, cell: Cell) -> CellContent {
        if self.snake.occupies(cell) {
            CellContent::Snake
        } else if cell == self.food {
            CellContent::Food
        } else {
            CellContent::Empty
        }
    }

    /// Returns the direction applied on the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.directions.committed()
    }

    /// Overrides both the committed and pending direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.directions = DirectionState::new(direction);
    }

    /// Returns the earliest pending clock deadline, if the clock runs.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.clock.next_deadline()
    }

    /// Recomputes the grid for a new container size.
    ///
    /// Food that falls outside the shrunken bounds is relocated. The snake
    /// is left where it is; segments now outside the grid resolve as a
    /// wall collision on a later tick, the same as driving into the wall.
    pub fn resize(&mut self, container: ContainerSize) {
        self.grid = GridSize::from_container(container, CELL_SIZE_PX);

        if !self.food.is_within(self.grid) {
            self.place_food_or_finish();
        }
    }

    /// Applies one discrete input intent.
    ///
    /// `now` anchors clock deadlines when play starts or resumes. `Quit`
    /// is the host loop's concern and is ignored here.
    pub fn handle_intent(&mut self, intent: GameIntent, now: Instant) {
        match intent {
            GameIntent::Direction(direction) => {
                if self.phase == Phase::Playing {
                    self.directions.propose(direction);
                }
            }
            GameIntent::TogglePlay => self.toggle_play(now),
            GameIntent::ResetFood => {
                if !self.phase.is_terminal() {
                    self.place_food_or_finish();
                }
            }
            GameIntent::ResetGame => self.reset(),
            GameIntent::Quit => {}
        }
    }

    /// Drains due clock events and applies them.
    pub fn advance(&mut self, now: Instant) {
        for event in self.clock.poll(now) {
            match event {
                ClockEvent::Movement => self.tick(),
                ClockEvent::Second => self.elapsed_seconds += 1,
            }
        }
    }

    /// Runs one movement tick. No-op outside the playing phase.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        let direction = self.directions.commit();
        let outcome = engine::step(&mut self.snake, direction, self.grid, self.food);

        if outcome.collided {
            self.phase = Phase::GameOver;
            self.clock.stop();
            return;
        }

        if outcome.ate_food {
            self.score += 1;
            self.place_food_or_finish();
        }
    }

    /// Reinitializes everything to the fixed starting layout.
    pub fn reset(&mut self) {
        self.snake = Snake::from_segments(INITIAL_SNAKE.to_vec());
        self.directions = DirectionState::new(INITIAL_DIRECTION);
        self.score = 0;
        self.elapsed_seconds = 0;
        self.phase = Phase::Idle;
        self.clock.stop();
        self.place_food_or_finish();
    }

    fn toggle_play(&mut self, now: Instant) {
        match self.phase {
            Phase::Idle | Phase::Paused => {
                self.phase = Phase::Playing;
                self.clock.start(now);
            }
            Phase::Playing => {
                self.phase = Phase::Paused;
                self.clock.stop();
            }
            Phase::GameOver | Phase::Won => {}
        }
    }

    /// Places new food, or ends the session when the board is full.
    fn place_food_or_finish(&mut self) {
        match food::place(&mut self.rng, self.grid, &self.snake) {
            Some(cell) => self.food = cell,
            None => {
                self.phase = Phase::Won;
                self.clock.stop();
            }
        }
    }
}
