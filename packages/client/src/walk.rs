//! Random walk of a fake pointer.

use cursorsync_shared::protocol::PositionDto;
use rand::Rng;

/// Starting point of every walk.
pub const START: PositionDto = PositionDto { x: 100.0, y: 100.0 };
/// Canvas bounds; both axes are clamped to `[CANVAS_MIN, CANVAS_MAX]`.
pub const CANVAS_MIN: f64 = 0.0;
pub const CANVAS_MAX: f64 = 500.0;
/// One step moves each axis by `STEP_SIZE * n` with `n` in `-MAX_STEPS..=MAX_STEPS`.
pub const STEP_SIZE: f64 = 10.0;
pub const MAX_STEPS: i32 = 10;

/// Move `position` by the given number of steps on each axis, staying on the canvas.
pub fn apply_step(position: PositionDto, dx_steps: i32, dy_steps: i32) -> PositionDto {
    PositionDto {
        x: (position.x + STEP_SIZE * f64::from(dx_steps)).clamp(CANVAS_MIN, CANVAS_MAX),
        y: (position.y + STEP_SIZE * f64::from(dy_steps)).clamp(CANVAS_MIN, CANVAS_MAX),
    }
}

/// Pointer that wanders randomly from `START`.
pub struct RandomWalk<R> {
    position: PositionDto,
    rng: R,
}

impl<R: Rng> RandomWalk<R> {
    pub fn new(rng: R) -> Self {
        Self {
            position: START,
            rng,
        }
    }

    pub fn position(&self) -> PositionDto {
        self.position
    }

    /// Take one random step and return the new position.
    pub fn advance(&mut self) -> PositionDto {
        let dx = self.rng.gen_range(-MAX_STEPS..=MAX_STEPS);
        let dy = self.rng.gen_range(-MAX_STEPS..=MAX_STEPS);
        self.position = apply_step(self.position, dx, dy);
        self.position
    }
}
