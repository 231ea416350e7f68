//! Jungle - a side-scrolling jungle game
//! Copyright (C) 2023 spazzylemons
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    error::Error,
    render::Render,
    state::GameState,
    timing::{FrameStats, TICKS_PER_SECOND},
};

/// The host's "call me back before the next repaint" primitive.
///
/// The driver assumes every requested tick is eventually delivered. A host
/// that throws a request away must say so with [`FrameDriver::tick_dropped`],
/// otherwise a driver restarted after `stop` waits for the lost tick forever.
pub trait Schedule {
    /// Ask for exactly one more call to [`FrameDriver::on_tick`].
    fn request_tick(&mut self);
}

/// Remembers that a tick was requested, for hosts that poll.
#[derive(Clone, Copy, Debug, Default)]
pub struct NextFrame {
    requested: bool,
}

impl NextFrame {
    /// Returns whether a tick was requested, clearing the request.
    pub fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }
}

impl Schedule for NextFrame {
    fn request_tick(&mut self) {
        self.requested = true;
    }
}

/// Stops a [`FrameDriver`] from anywhere, including from inside a tick.
#[derive(Clone, Debug)]
pub struct Stopper {
    running: Rc<Cell<bool>>,
}

impl Stopper {
    pub fn stop(&self) {
        if self.running.replace(false) {
            log::info!("frame driver stopped");
        }
    }
}

/// Runs update then draw once per host tick.
pub struct FrameDriver<R, S = NextFrame>
where
    R: Render,
    S: Schedule,
{
    /// The state being driven
    state: Option<Rc<RefCell<GameState>>>,
    /// Where frames are drawn
    renderer: Option<R>,
    /// Host tick source
    scheduler: S,
    /// Timestamp of the previous tick
    last_tick_time: Option<f64>,
    /// Shared with every Stopper
    running: Rc<Cell<bool>>,
    /// Whether a requested tick has not been delivered yet
    in_flight: bool,
    stats: FrameStats,
}

impl<R: Render, S: Schedule> FrameDriver<R, S> {
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self {
            state: None,
            renderer: None,
            scheduler,
            last_tick_time: None,
            running: Rc::new(Cell::new(false)),
            in_flight: false,
            stats: FrameStats::default(),
        }
    }

    /// Begin driving `state`, drawing with `renderer`.
    pub fn start(&mut self, state: Rc<RefCell<GameState>>, renderer: R) -> Result<(), Error> {
        if self.running.get() {
            return Err(Error::AlreadyRunning);
        }
        self.state = Some(state);
        self.renderer = Some(renderer);
        self.last_tick_time = None;
        self.running.set(true);
        // a tick queued before the last stop will pick us up
        if !self.in_flight {
            self.request_tick();
        }
        log::info!("frame driver started");
        Ok(())
    }

    /// Called by the host once per animation frame.
    pub fn on_tick(&mut self, now: f64) {
        self.in_flight = false;
        if !self.running.get() {
            log::trace!("ignoring tick at {now}ms while stopped");
            return;
        }
        let (Some(state), Some(renderer)) = (&self.state, &mut self.renderer) else {
            return;
        };

        let dt = match now_to_delta(&mut self.last_tick_time, now) {
            Ok(dt) => dt,
            Err(e) => {
                log::warn!("{e}, using a zero time step");
                0.0
            }
        };

        if let Err(e) = state.borrow_mut().advance(dt) {
            log::warn!("skipping update: {e}");
        }
        renderer.draw(state.borrow().current_sprite_reference());

        self.stats.record(dt);
        if self.stats.frames() % u64::from(TICKS_PER_SECOND) == 0 {
            log::debug!("{:.1} fps over {} frames", self.stats.fps(), self.stats.frames());
        }

        if self.running.get() {
            self.request_tick();
        }
    }

    /// The host will never deliver the tick it was asked for.
    ///
    /// A running driver asks again, so the loop keeps going.
    pub fn tick_dropped(&mut self) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        log::debug!("host dropped a requested tick");
        if self.running.get() {
            self.request_tick();
        }
    }

    /// Stop requesting ticks. Takes effect at the end of the current tick.
    pub fn stop(&self) {
        self.stopper().stop();
    }

    #[must_use]
    pub fn stopper(&self) -> Stopper {
        Stopper {
            running: self.running.clone(),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn request_tick(&mut self) {
        self.in_flight = true;
        self.scheduler.request_tick();
    }
}

/// Work out the time step for a tick at `now`, updating `last`.
fn now_to_delta(last: &mut Option<f64>, now: f64) -> Result<f64, Error> {
    if !now.is_finite() {
        return Err(Error::InvalidInput(now));
    }
    let previous = last.replace(now);
    match previous {
        None => Ok(0.0),
        Some(previous) if now < previous => Err(Error::ClockRegression { previous, now }),
        Some(previous) => Ok(now - previous),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        drawn: Vec<String>,
        stop_after: Option<(usize, Stopper)>,
    }

    impl Render for Recorder {
        fn draw(&mut self, sprite: &str) {
            self.drawn.push(sprite.to_owned());
            if let Some((n, stopper)) = &self.stop_after {
                if self.drawn.len() == *n {
                    stopper.stop();
                }
            }
        }
    }

    #[derive(Default)]
    struct Counter(usize);

    impl Schedule for Counter {
        fn request_tick(&mut self) {
            self.0 += 1;
        }
    }

    fn started() -> (FrameDriver<Recorder, Counter>, Rc<RefCell<GameState>>) {
        let state = Rc::new(RefCell::new(GameState::setup()));
        let mut driver = FrameDriver::new(Counter::default());
        driver.start(state.clone(), Recorder::default()).unwrap();
        (driver, state)
    }

    #[test]
    fn first_tick_has_zero_step() {
        let (mut driver, state) = started();
        driver.on_tick(500.0);
        assert_eq!(state.borrow().elapsed_time(), 0.0);
        driver.on_tick(516.0);
        assert_eq!(state.borrow().elapsed_time(), 16.0);
    }

    #[test]
    fn three_ticks() {
        let (mut driver, state) = started();
        for now in [0.0, 16.0, 33.0] {
            driver.on_tick(now);
        }
        assert_eq!(state.borrow().elapsed_time(), 33.0);
        let drawn = &driver.renderer().unwrap().drawn;
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|s| s == state.borrow().current_sprite_reference()));
        // one from start, one per tick
        assert_eq!(driver.scheduler_mut().0, 4);
        assert_eq!(driver.stats().frames(), 3);
    }

    #[test]
    fn clock_regression_uses_zero_step() {
        let (mut driver, state) = started();
        driver.on_tick(100.0);
        driver.on_tick(50.0);
        assert_eq!(state.borrow().elapsed_time(), 0.0);
        assert_eq!(driver.renderer().unwrap().drawn.len(), 2);
        // measured from the regressed timestamp
        driver.on_tick(60.0);
        assert_eq!(state.borrow().elapsed_time(), 10.0);
        assert!(driver.is_running());
    }

    #[test]
    fn non_finite_timestamp_keeps_clock() {
        let (mut driver, state) = started();
        driver.on_tick(10.0);
        driver.on_tick(f64::NAN);
        driver.on_tick(30.0);
        assert_eq!(state.borrow().elapsed_time(), 20.0);
        assert_eq!(driver.renderer().unwrap().drawn.len(), 3);
    }

    #[test]
    fn start_twice_fails() {
        let (mut driver, state) = started();
        assert_eq!(
            driver.start(state, Recorder::default()),
            Err(Error::AlreadyRunning)
        );
    }

    #[test]
    fn stop_inside_tick() {
        let state = Rc::new(RefCell::new(GameState::setup()));
        let mut driver = FrameDriver::new(Counter::default());
        let recorder = Recorder {
            stop_after: Some((2, driver.stopper())),
            ..Recorder::default()
        };
        driver.start(state.clone(), recorder).unwrap();
        driver.on_tick(0.0);
        driver.on_tick(16.0);
        assert!(!driver.is_running());
        // start, then only the first tick re-registered
        assert_eq!(driver.scheduler_mut().0, 2);

        driver.on_tick(32.0);
        driver.on_tick(48.0);
        assert_eq!(state.borrow().elapsed_time(), 16.0);
        assert_eq!(driver.renderer().unwrap().drawn.len(), 2);

        driver.start(state.clone(), Recorder::default()).unwrap();
        assert_eq!(driver.scheduler_mut().0, 3);
        driver.on_tick(64.0);
        driver.on_tick(80.0);
        assert_eq!(state.borrow().elapsed_time(), 32.0);
    }

    #[test]
    fn restart_with_tick_still_queued() {
        let (mut driver, _state) = started();
        assert_eq!(driver.scheduler_mut().0, 1);
        driver.stop();
        driver.stop();
        let state = Rc::new(RefCell::new(GameState::setup()));
        driver.start(state, Recorder::default()).unwrap();
        assert_eq!(driver.scheduler_mut().0, 1);
        driver.on_tick(0.0);
        assert_eq!(driver.scheduler_mut().0, 2);
    }

    #[test]
    fn restart_after_host_dropped_tick() {
        let (mut driver, state) = started();
        driver.stop();
        // the tick queued before the stop never arrives
        driver.tick_dropped();
        assert_eq!(driver.scheduler_mut().0, 1);
        driver.start(state.clone(), Recorder::default()).unwrap();
        assert_eq!(driver.scheduler_mut().0, 2);
        driver.on_tick(0.0);
        driver.on_tick(16.0);
        assert_eq!(state.borrow().elapsed_time(), 16.0);
        assert_eq!(driver.scheduler_mut().0, 4);
    }

    #[test]
    fn dropped_tick_while_running_is_requested_again() {
        let (mut driver, _state) = started();
        driver.tick_dropped();
        assert_eq!(driver.scheduler_mut().0, 2);
        driver.on_tick(0.0);
        // once stopped, a drop is only recorded
        driver.stop();
        driver.tick_dropped();
        driver.tick_dropped();
        assert_eq!(driver.scheduler_mut().0, 3);
        assert_eq!(driver.renderer().unwrap().drawn.len(), 1);
    }

    #[test]
    fn tick_while_idle_is_ignored() {
        let mut driver: FrameDriver<Recorder, Counter> = FrameDriver::new(Counter::default());
        driver.on_tick(0.0);
        assert!(driver.renderer().is_none());
        assert_eq!(driver.scheduler_mut().0, 0);
        assert_eq!(driver.stats().frames(), 0);
    }

    #[test]
    fn next_frame_request_is_taken_once() {
        let mut next = NextFrame::default();
        assert!(!next.take_request());
        next.request_tick();
        assert!(next.take_request());
        assert!(!next.take_request());
    }
}
