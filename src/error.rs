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

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A time step or timestamp that cannot be applied.
    #[error("invalid time value {0}")]
    InvalidInput(f64),
    /// The host delivered a timestamp earlier than the previous one.
    #[error("clock went backwards from {previous}ms to {now}ms")]
    ClockRegression { previous: f64, now: f64 },
    #[error("frame driver is already running")]
    AlreadyRunning,
    #[error("initialization failed: {0}")]
    Initialization(String),
    /// The host could not provide something the game needs.
    #[error("platform error: {0}")]
    Platform(String),
}
