use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, GRID, INITIAL_TICK_INTERVAL_MS, TICK_INTERVAL_FLOOR_MS};
use crate::food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Immutable per-tick view handed to the renderer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Body segments, head first.
    pub segments: Vec<Position>,
    /// Present only while the game is running.
    pub food: Option<Position>,
    pub score: u32,
}

/// Owns all mutable game state and advances it one discrete step at a time.
///
/// The engine owns no timer: the host invokes [`tick`](Self::tick) and
/// re-reads [`current_interval_ms`](Self::current_interval_ms) afterwards, so
/// a speed change takes effect on the next cycle without re-arming anything.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub snake: Snake,
    pub food: Position,
    speed_delay_ms: u64,
    running: bool,
    high_score: u32,
    runs_completed: u32,
    grid: GridSize,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine on the standard 20×20 grid with entropy-seeded food.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GRID, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(start_position(grid), Direction::Right);
        let food = food::spawn(&mut rng, grid);

        Self {
            snake,
            food,
            speed_delay_ms: INITIAL_TICK_INTERVAL_MS,
            running: false,
            high_score: 0,
            runs_completed: 0,
            grid,
            rng,
        }
    }

    /// Marks the game as running. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Marks the game as stopped without touching the board.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Returns true while a run is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stores the direction applied on the next tick.
    ///
    /// Unconditional: reversing into the body is accepted and self-collides
    /// on the following tick once the snake is long enough.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Current score: segments eaten so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        (self.snake.len() as u32).saturating_sub(1)
    }

    /// Best score seen by any run in this process.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Number of runs that have ended in a collision.
    #[must_use]
    pub fn runs_completed(&self) -> u32 {
        self.runs_completed
    }

    /// Milliseconds the host should wait between ticks.
    #[must_use]
    pub fn current_interval_ms(&self) -> u64 {
        self.speed_delay_ms
    }

    /// The grid this engine plays on.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.grid
    }

    /// Advances the simulation by one step. No-op while not running.
    ///
    /// Order per step: move (eating keeps the tail and steps the speed
    /// schedule, otherwise the tail drops), then collision check. A wall or
    /// self collision ends the run via [`reset`](Self::reset), so the state
    /// observable after this call is the reset state, not the collision
    /// frame.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        self.snake.push_head();

        if self.snake.head() == self.food {
            self.food = food::spawn(&mut self.rng, self.grid);
            self.speed_delay_ms = next_speed_delay(self.speed_delay_ms);
        } else {
            self.snake.drop_tail();
        }

        let head = self.snake.head();
        if !head.is_within_bounds(self.grid) || self.snake.head_overlaps_body() {
            self.reset();
        }
    }

    /// Ends the current run: folds the score into the high score, stops the
    /// game, and reinitializes the board to its start state.
    pub fn reset(&mut self) {
        let final_score = self.score();
        if final_score > self.high_score {
            self.high_score = final_score;
        }
        self.runs_completed += 1;
        self.running = false;

        self.snake = Snake::new(start_position(self.grid), Direction::Right);
        self.food = food::spawn(&mut self.rng, self.grid);
        self.speed_delay_ms = INITIAL_TICK_INTERVAL_MS;
    }

    /// Captures the view the renderer draws from.
    ///
    /// Food is withheld while the game is not running, matching the boards
    /// shown before a first start and after a collision.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.segments().copied().collect(),
            food: self.running.then_some(self.food),
            score: self.score(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn start_position(grid: GridSize) -> Position {
    Position {
        x: i32::from(grid.width / 2),
        y: i32::from(grid.height / 2),
    }
}

/// Steps the tick delay down one notch after a meal.
///
/// Larger delays shrink faster; at or below the floor the delay holds.
fn next_speed_delay(delay_ms: u64) -> u64 {
    if delay_ms > 150 {
        delay_ms - 5
    } else if delay_ms > 100 {
        delay_ms - 3
    } else if delay_ms > 50 {
        delay_ms - 2
    } else if delay_ms > TICK_INTERVAL_FLOOR_MS {
        delay_ms - 1
    } else {
        delay_ms
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GRID, INITIAL_TICK_INTERVAL_MS, TICK_INTERVAL_FLOOR_MS};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{next_speed_delay, GameEngine};

    #[test]
    fn tick_without_food_keeps_length() {
        let mut engine = GameEngine::new_with_seed(GRID, 1);
        engine.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        engine.food = Position { x: 1, y: 1 };
        engine.start();

        engine.tick();

        assert_eq!(engine.snake.len(), 1);
        assert_eq!(engine.snake.head(), Position { x: 6, y: 5 });
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn eating_grows_and_steps_the_speed_schedule() {
        let mut engine = GameEngine::new_with_seed(GRID, 2);
        engine.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        engine.food = Position { x: 6, y: 5 };
        engine.start();

        engine.tick();

        assert!(engine.is_running());
        assert_eq!(engine.snake.len(), 2);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.current_interval_ms(), 195);
        assert!(engine.food.is_within_bounds(GRID));
    }

    #[test]
    fn score_tracks_body_length() {
        let mut engine = GameEngine::new_with_seed(GRID, 3);
        engine.snake = Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
                Position { x: 3, y: 5 },
            ],
            Direction::Right,
        );

        assert_eq!(engine.score(), 2);
    }

    #[test]
    fn wall_collision_resets_to_the_start_state() {
        let mut engine = GameEngine::new_with_seed(GRID, 4);
        engine.snake = Snake::new(Position { x: 20, y: 10 }, Direction::Right);
        engine.start();

        engine.tick();

        assert!(!engine.is_running());
        assert_eq!(engine.snake.len(), 1);
        assert_eq!(engine.snake.head(), Position { x: 10, y: 10 });
        assert_eq!(engine.snake.direction(), Direction::Right);
        assert_eq!(engine.current_interval_ms(), INITIAL_TICK_INTERVAL_MS);
        assert_eq!(engine.runs_completed(), 1);
    }

    #[test]
    fn all_four_walls_collide() {
        for (start, direction) in [
            (Position { x: 20, y: 10 }, Direction::Right),
            (Position { x: 1, y: 10 }, Direction::Left),
            (Position { x: 10, y: 1 }, Direction::Up),
            (Position { x: 10, y: 20 }, Direction::Down),
        ] {
            let mut engine = GameEngine::new_with_seed(GRID, 5);
            engine.snake = Snake::new(start, direction);
            engine.food = Position { x: 15, y: 15 };
            engine.start();

            engine.tick();

            assert!(!engine.is_running());
            assert_eq!(engine.snake.head(), Position { x: 10, y: 10 });
        }
    }

    #[test]
    fn self_collision_resets() {
        let mut engine = GameEngine::new_with_seed(GRID, 6);
        // Head at (10,10); moving right lands on the (11,10) body segment.
        engine.snake = Snake::from_segments(
            vec![
                Position { x: 10, y: 10 },
                Position { x: 11, y: 10 },
                Position { x: 11, y: 11 },
                Position { x: 10, y: 11 },
            ],
            Direction::Right,
        );
        engine.food = Position { x: 1, y: 1 };
        engine.start();

        engine.tick();

        assert!(!engine.is_running());
        assert_eq!(engine.snake.len(), 1);
        assert_eq!(engine.snake.head(), Position { x: 10, y: 10 });
    }

    #[test]
    fn high_score_survives_a_weaker_run() {
        let mut engine = GameEngine::new_with_seed(GRID, 7);

        // First run ends at score 5.
        engine.snake = Snake::from_segments(
            (15..=20)
                .rev()
                .map(|x| Position { x, y: 10 })
                .collect(),
            Direction::Right,
        );
        engine.food = Position { x: 1, y: 1 };
        engine.start();
        engine.tick();
        assert_eq!(engine.high_score(), 5);

        // Second run ends at score 3; the high score must hold.
        engine.snake = Snake::from_segments(
            (17..=20)
                .rev()
                .map(|x| Position { x, y: 10 })
                .collect(),
            Direction::Right,
        );
        engine.food = Position { x: 1, y: 1 };
        engine.start();
        engine.tick();

        assert_eq!(engine.high_score(), 5);
        assert_eq!(engine.runs_completed(), 2);
    }

    #[test]
    fn tick_while_not_running_is_a_noop() {
        let mut engine = GameEngine::new_with_seed(GRID, 8);
        let before = engine.snapshot();

        engine.tick();

        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.current_interval_ms(), INITIAL_TICK_INTERVAL_MS);
    }

    #[test]
    fn snapshot_withholds_food_while_stopped() {
        let mut engine = GameEngine::new_with_seed(GRID, 9);
        assert_eq!(engine.snapshot().food, None);

        engine.start();
        assert_eq!(engine.snapshot().food, Some(engine.food));

        engine.stop();
        assert_eq!(engine.snapshot().food, None);
    }

    #[test]
    fn reversal_self_collides_at_length_three() {
        let mut engine = GameEngine::new_with_seed(GRID, 10);
        engine.snake = Snake::from_segments(
            vec![
                Position { x: 10, y: 10 },
                Position { x: 9, y: 10 },
                Position { x: 8, y: 10 },
            ],
            Direction::Right,
        );
        engine.food = Position { x: 1, y: 1 };
        engine.start();

        engine.set_direction(Direction::Left);
        engine.tick();

        assert!(!engine.is_running());
    }

    #[test]
    fn speed_schedule_steps_exactly() {
        assert_eq!(next_speed_delay(200), 195);
        assert_eq!(next_speed_delay(151), 146);
        assert_eq!(next_speed_delay(150), 147);
        assert_eq!(next_speed_delay(101), 98);
        assert_eq!(next_speed_delay(100), 98);
        assert_eq!(next_speed_delay(51), 49);
        assert_eq!(next_speed_delay(50), 49);
        assert_eq!(next_speed_delay(26), 25);
        assert_eq!(next_speed_delay(25), 25);
    }

    #[test]
    fn speed_schedule_is_non_increasing_with_a_floor() {
        let mut delay = INITIAL_TICK_INTERVAL_MS;
        for _ in 0..500 {
            let next = next_speed_delay(delay);
            assert!(next <= delay);
            assert!(next >= TICK_INTERVAL_FLOOR_MS);
            delay = next;
        }
        assert_eq!(delay, TICK_INTERVAL_FLOOR_MS);
    }

    #[test]
    fn food_under_the_body_grows_then_resets_in_one_tick() {
        let mut engine = GameEngine::new_with_seed(GRID, 11);
        // The food sits on a body cell; the head both eats and collides.
        engine.snake = Snake::from_segments(
            vec![
                Position { x: 10, y: 10 },
                Position { x: 11, y: 10 },
                Position { x: 11, y: 11 },
                Position { x: 10, y: 11 },
            ],
            Direction::Right,
        );
        engine.food = Position { x: 11, y: 10 };
        engine.start();

        engine.tick();

        // The eaten segment counts toward the final score of the run.
        assert!(!engine.is_running());
        assert_eq!(engine.high_score(), 4);
    }
}
