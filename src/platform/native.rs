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

use super::Platform;
use crate::{error::Error, render::Render};

/// A surface with nothing behind it. Reports what would be on screen through
/// the log.
pub struct HeadlessPlatform {
    width: u16,
    height: u16,
    /// sprite drawn by the previous frame
    showing: Option<String>,
}

impl Render for HeadlessPlatform {
    fn draw(&mut self, sprite: &str) {
        log::trace!("draw {sprite}");
        if self.showing.as_deref() != Some(sprite) {
            log::info!("now showing {sprite}");
            self.showing = Some(sprite.to_owned());
        }
    }
}

impl Platform for HeadlessPlatform {
    fn init(preferred_width: u16, preferred_height: u16) -> Result<Self, Error> {
        if preferred_width == 0 || preferred_height == 0 {
            return Err(Error::Platform(format!(
                "cannot create a {preferred_width}x{preferred_height} surface"
            )));
        }
        Ok(Self {
            width: preferred_width,
            height: preferred_height,
            showing: None,
        })
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_sprite() {
        let mut platform = HeadlessPlatform::init(640, 480).unwrap();
        assert_eq!((platform.width(), platform.height()), (640, 480));
        platform.draw("a.png");
        platform.draw("a.png");
        assert_eq!(platform.showing.as_deref(), Some("a.png"));
        platform.draw("b.png");
        assert_eq!(platform.showing.as_deref(), Some("b.png"));
    }

    #[test]
    fn empty_surface() {
        assert!(matches!(
            HeadlessPlatform::init(0, 480),
            Err(Error::Platform(_))
        ));
    }
}
