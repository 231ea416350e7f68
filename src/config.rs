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

/// Sprite shown by a freshly set up game.
pub const DEFAULT_SPRITE: &str = "./KawaiiIcons_NoBG037.png";

/// Preferred drawing surface size.
pub const SURFACE_WIDTH: u16 = 640;
pub const SURFACE_HEIGHT: u16 = 480;

/// Size sprite images are decoded at.
pub const SPRITE_IMAGE_SIZE: u32 = 512;

/// Size sprites are drawn at on the surface.
pub const SPRITE_DRAW_SIZE: f64 = 10.0;
