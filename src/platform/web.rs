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

use std::collections::HashMap;

use super::{surface_size, Platform};
use crate::{
    config::{SPRITE_DRAW_SIZE, SPRITE_IMAGE_SIZE},
    error::Error,
    render::Render,
};

use wasm_bindgen::prelude::*;

pub struct WebPlatform {
    /// canvas to draw to
    canvas: web_sys::HtmlCanvasElement,
    /// 2d context for the canvas
    ctx: web_sys::CanvasRenderingContext2d,
    /// image elements by sprite reference, the browser loads them
    images: HashMap<String, web_sys::HtmlImageElement>,
}

fn platform_error(what: &str, value: &JsValue) -> Error {
    Error::Platform(format!("{what}: {value:?}"))
}

impl WebPlatform {
    /// Get the image for a sprite, starting to load it if this is the first time.
    fn image(&mut self, sprite: &str) -> Result<web_sys::HtmlImageElement, Error> {
        if let Some(image) = self.images.get(sprite) {
            return Ok(image.clone());
        }
        let image = web_sys::HtmlImageElement::new_with_width_and_height(
            SPRITE_IMAGE_SIZE,
            SPRITE_IMAGE_SIZE,
        )
        .map_err(|e| platform_error("failed to create image", &e))?;
        image.set_src(sprite);
        log::debug!("loading sprite {sprite}");
        self.images.insert(sprite.to_owned(), image.clone());
        Ok(image)
    }
}

impl Render for WebPlatform {
    fn draw(&mut self, sprite: &str) {
        let image = match self.image(sprite) {
            Ok(image) => image,
            Err(e) => {
                log::warn!("cannot draw {sprite}: {e}");
                return;
            }
        };
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width().into(),
            self.canvas.height().into(),
        );
        // still loading, try again next frame
        if !image.complete() {
            return;
        }
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            0.0,
            0.0,
            SPRITE_DRAW_SIZE,
            SPRITE_DRAW_SIZE,
        ) {
            log::warn!("cannot draw {sprite}: {e:?}");
        }
    }
}

impl Platform for WebPlatform {
    fn init(preferred_width: u16, preferred_height: u16) -> Result<Self, Error> {
        // get window
        let window = web_sys::window().ok_or_else(|| Error::Platform("no window".into()))?;
        // get document
        let document = window
            .document()
            .ok_or_else(|| Error::Platform("no document".into()))?;
        // get the first canvas on the page
        let canvas = document
            .query_selector("canvas")
            .map_err(|e| platform_error("canvas lookup failed", &e))?
            .ok_or_else(|| Error::Platform("no canvas element".into()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|e| platform_error("not a canvas", &e))?;
        // keep the page's size unless it has none
        if canvas.width() == 0 || canvas.height() == 0 {
            canvas.set_width(preferred_width.into());
            canvas.set_height(preferred_height.into());
        }
        // get the canvas context
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| platform_error("failed to get 2d context", &e))?
            .ok_or_else(|| Error::Platform("canvas has no 2d context".into()))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|e| platform_error("not a 2d context", &e))?;
        Ok(Self {
            canvas,
            ctx,
            images: HashMap::new(),
        })
    }

    fn width(&self) -> u16 {
        surface_size(self.canvas.width())
    }

    fn height(&self) -> u16 {
        surface_size(self.canvas.height())
    }
}
