use std::time::Instant;

use grid_snake::grid::ContainerSize;
use grid_snake::input::{Direction, GameIntent};
use grid_snake::session::{Phase, Session};
use grid_snake::snake::{Cell, Snake};

/// 500x500 px container with 50 px cells: a 10x10 grid.
fn ten_by_ten_session(seed: u64) -> Session {
    let mut session = Session::new_with_seed(
        ContainerSize {
            width: 500,
            height: 500,
        },
        seed,
    );
    session.handle_intent(GameIntent::TogglePlay, Instant::now());
    session
}

fn body(session: &Session) -> Vec<Cell> {
    session.snake.segments().copied().collect()
}

#[test]
fn eating_food_grows_head_first_and_keeps_the_tail() {
    let mut session = ten_by_ten_session(42);
    session.food = Cell { row: 3, col: 4 };

    session.tick();

    assert_eq!(session.score, 1);
    assert_eq!(
        body(&session),
        vec![
            Cell { row: 3, col: 4 },
            Cell { row: 3, col: 5 },
            Cell { row: 4, col: 5 },
            Cell { row: 5, col: 5 },
        ]
    );

    // Replacement food avoids the grown snake and stays on the board.
    assert!(session.food.is_within(session.grid()));
    assert!(!session.snake.occupies(session.food));
}

#[test]
fn missing_food_slides_the_body_and_drops_the_tail() {
    let mut session = ten_by_ten_session(42);
    session.food = Cell { row: 9, col: 9 };

    session.tick();

    assert_eq!(session.score, 0);
    assert_eq!(session.food, Cell { row: 9, col: 9 });
    assert_eq!(
        body(&session),
        vec![
            Cell { row: 3, col: 4 },
            Cell { row: 3, col: 5 },
            Cell { row: 4, col: 5 },
        ]
    );
}

#[test]
fn driving_off_the_top_edge_ends_the_game() {
    let mut session = ten_by_ten_session(7);
    session.snake = Snake::from_segments(vec![
        Cell { row: 0, col: 5 },
        Cell { row: 1, col: 5 },
        Cell { row: 2, col: 5 },
    ]);
    session.set_direction(Direction::Up);

    session.tick();

    assert_eq!(session.phase, Phase::GameOver);
    assert_eq!(session.snake.head(), Cell { row: 0, col: 5 });
    assert_eq!(session.snake.len(), 3);
    assert_eq!(session.next_deadline(), None, "schedules must be stopped");

    // Further ticks and play toggles are inert after game over.
    session.tick();
    session.handle_intent(GameIntent::TogglePlay, Instant::now());
    assert_eq!(session.phase, Phase::GameOver);
    assert_eq!(session.snake.len(), 3);
}

#[test]
fn reversal_intent_never_takes_effect_on_the_next_tick() {
    let mut session = ten_by_ten_session(3);

    // Moving left; a right intent must be dropped.
    session.handle_intent(GameIntent::Direction(Direction::Right), Instant::now());
    session.tick();

    assert_eq!(session.snake.head(), Cell { row: 3, col: 4 });
    assert_eq!(session.direction(), Direction::Left);
}

#[test]
fn tick_invariants_hold_over_a_long_random_walk() {
    let mut session = ten_by_ten_session(99);
    let directions = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    for step in 0..500 {
        if session.phase != Phase::Playing {
            break;
        }

        session.handle_intent(
            GameIntent::Direction(directions[step % directions.len()]),
            Instant::now(),
        );

        let len_before = session.snake.len();
        let score_before = session.score;
        session.tick();

        if session.phase == Phase::Playing {
            let grew = session.score > score_before;
            assert_eq!(session.snake.len(), len_before + usize::from(grew));
            assert_eq!(session.snake.occupied_count(), session.snake.len());
            assert!(session.snake.head().is_within(session.grid()));
            assert!(!session.snake.occupies(session.food));
        }
    }
}
