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

use crate::{config::DEFAULT_SPRITE, error::Error};

/// Maps elapsed time to a sprite reference.
///
/// Frame `n` is shown from `n * frame_duration` until `(n + 1) * frame_duration`
/// milliseconds, wrapping around after the last frame. An animation with a
/// single frame always shows that frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    frames: Vec<String>,
    frame_duration: f64,
}

impl Animation {
    /// An animation that never changes. `sprite` must not be empty.
    fn still(sprite: &str) -> Self {
        Self {
            frames: vec![sprite.to_owned()],
            frame_duration: f64::INFINITY,
        }
    }

    pub fn new(frames: Vec<String>, frame_duration: f64) -> Result<Self, Error> {
        if frames.is_empty() {
            return Err(Error::Initialization("animation has no frames".into()));
        }
        if let Some(i) = frames.iter().position(String::is_empty) {
            return Err(Error::Initialization(format!(
                "animation frame {i} has an empty sprite reference"
            )));
        }
        if !frame_duration.is_finite() || frame_duration <= 0.0 {
            return Err(Error::Initialization(format!(
                "animation frame duration {frame_duration} is not positive"
            )));
        }
        Ok(Self {
            frames,
            frame_duration,
        })
    }

    fn frame_index(&self, elapsed_time: f64) -> usize {
        if self.frames.len() == 1 {
            return 0;
        }
        let frame = (elapsed_time / self.frame_duration).floor() as u64;
        (frame % self.frames.len() as u64) as usize
    }
}

/// The simulation. Knows nothing about drawing or timers.
#[derive(Clone, Debug)]
pub struct GameState {
    animation: Animation,
    sprite_index: usize,
    elapsed_time: f64,
}

impl GameState {
    /// Create the initial state, showing the default sprite.
    #[must_use]
    pub fn setup() -> Self {
        Self::with_animation(Animation::still(DEFAULT_SPRITE))
    }

    #[must_use]
    pub fn with_animation(animation: Animation) -> Self {
        let sprite_index = animation.frame_index(0.0);
        Self {
            animation,
            sprite_index,
            elapsed_time: 0.0,
        }
    }

    /// Move the simulation forward by `dt` milliseconds.
    ///
    /// A negative or non-finite `dt` is rejected and the state is left as it was.
    /// Splitting a step in two gives the same elapsed time up to float rounding.
    pub fn advance(&mut self, dt: f64) -> Result<(), Error> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::InvalidInput(dt));
        }
        self.elapsed_time += dt;
        self.sprite_index = self.animation.frame_index(self.elapsed_time);
        Ok(())
    }

    #[must_use]
    pub fn current_sprite_reference(&self) -> &str {
        &self.animation.frames[self.sprite_index]
    }

    #[must_use]
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::setup()
    }
}
