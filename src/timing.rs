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

pub const TICKS_PER_SECOND: u8 = 60;
/// Nominal time between two frames, in milliseconds.
pub const FRAME_MS: f64 = 1000.0 / (TICKS_PER_SECOND as f64);

/// Weight of the newest frame in the smoothed FPS estimate.
const FPS_SMOOTHING: f64 = 0.1;

/// Millisecond clock for hosts without an animation frame timestamp.
#[cfg(not(target_arch = "wasm32"))]
pub struct Clock {
    start: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    #[must_use]
    pub fn millis(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts frames and keeps a smoothed frames-per-second estimate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    frames: u64,
    fps: f64,
}

impl FrameStats {
    /// Record a frame that was `dt` milliseconds after the previous one.
    pub fn record(&mut self, dt: f64) {
        self.frames = self.frames.wrapping_add(1);
        // zero-length frames say nothing about the rate
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        let fps = 1000.0 / dt;
        if self.fps == 0.0 {
            self.fps = fps;
        } else {
            self.fps += (fps - self.fps) * FPS_SMOOTHING;
        }
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }
}
