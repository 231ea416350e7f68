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

/// Something that can put a sprite on screen.
///
/// Drawing is synchronous. If a sprite cannot be drawn, the implementation
/// deals with it (usually by logging), the caller never sees the failure.
pub trait Render {
    /// Draw the sprite named by `sprite`.
    fn draw(&mut self, sprite: &str);
}

impl<R: Render + ?Sized> Render for &mut R {
    fn draw(&mut self, sprite: &str) {
        (**self).draw(sprite);
    }
}

impl<R: Render + ?Sized> Render for Box<R> {
    fn draw(&mut self, sprite: &str) {
        (**self).draw(sprite);
    }
}
