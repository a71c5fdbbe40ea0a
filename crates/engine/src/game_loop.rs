//! The single-threaded cooperative game loop.
//!
//! One thread owns the game state and the display buffer. Each pass renders
//! and flushes a frame if the frame period has elapsed, then runs the timer
//! scheduler, which gates each timer on its own period. Nothing blocks; the
//! loop spins until the physics tick sees the quit action.

use std::time::Instant;

use anyhow::Result;

use crate::core::{GameError, GameState, InputPort, Scheduler};
use crate::term::{render_into, DisplayBuffer, DisplayPort};

/// Printed after the terminal is restored.
pub const FAREWELL: &str = "Thanks for playing NotFlappyBird!";

/// What one loop pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Cells written, if a frame was flushed this pass.
    pub flushed: Option<usize>,
    pub timers_fired: usize,
}

pub struct GameLoop {
    state: GameState,
    display: DisplayBuffer,
    scheduler: Scheduler,
    frame_period_ms: u64,
}

impl GameLoop {
    /// Wrap a game state with the standard timers and a playfield-sized buffer.
    pub fn new(state: GameState, frame_period_ms: u64) -> std::result::Result<Self, GameError> {
        let field = state.field();
        Ok(Self {
            display: DisplayBuffer::new(field.width, field.height),
            scheduler: Scheduler::with_game_timers()?,
            state,
            frame_period_ms,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Clear the terminal so it matches the blank current frame.
    pub fn begin<P: DisplayPort + ?Sized>(&mut self, port: &mut P) -> Result<()> {
        self.display.invalidate(port)
    }

    /// One loop pass at time `now_ms`.
    pub fn step<P, I>(&mut self, now_ms: u64, port: &mut P, input: &I) -> Result<StepReport>
    where
        P: DisplayPort + ?Sized,
        I: InputPort + ?Sized,
    {
        let mut report = StepReport::default();

        if self.display.frame_due(now_ms, self.frame_period_ms) {
            render_into(self.state.world(), self.display.next_mut());
            report.flushed = Some(self.display.flush(port, now_ms)?);
        }

        let state = &mut self.state;
        report.timers_fired = self
            .scheduler
            .run(now_ms, |task| state.trigger(task, input));

        Ok(report)
    }

    /// Spin until quit is requested.
    pub fn run<P, I>(&mut self, port: &mut P, input: &mut I) -> Result<()>
    where
        P: DisplayPort + ?Sized,
        I: InputPort + ?Sized,
    {
        let started = Instant::now();
        self.begin(port)?;

        while !self.state.quit_requested() {
            input.refresh()?;
            let now_ms = started.elapsed().as_millis() as u64;
            self.step(now_ms, port, &*input)?;
            std::hint::spin_loop();
        }

        tracing::info!(score = self.state.score(), "quit requested");
        Ok(())
    }

    /// Clear the screen before the terminal is handed back.
    pub fn shutdown<P: DisplayPort + ?Sized>(&mut self, port: &mut P) -> Result<()> {
        port.clear_screen()?;
        port.present()
    }
}
