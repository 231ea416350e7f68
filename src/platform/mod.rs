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

use crate::{error::Error, render::Render};

/// A drawing surface provided by the host.
pub trait Platform: Render {
    fn init(preferred_width: u16, preferred_height: u16) -> Result<Self, Error>
    where
        Self: Sized;

    fn width(&self) -> u16;

    fn height(&self) -> u16;
}

/// Fit a host surface dimension into the range `Platform` reports.
#[must_use]
pub fn surface_size(size: u32) -> u16 {
    u16::try_from(size).unwrap_or(u16::MAX)
}

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub type Impl = web::WebPlatform;

#[cfg(not(target_arch = "wasm32"))]
pub type Impl = native::HeadlessPlatform;
