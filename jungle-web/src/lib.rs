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

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    jungle::logging::init();
}

/// Start the game loop on the page's canvas.
#[wasm_bindgen]
pub fn run() -> Result<(), JsError> {
    jungle::run_game().map_err(|e| JsError::new(&e.to_string()))
}

/// Game state for pages that run their own loop.
#[wasm_bindgen(js_name = GameState)]
pub struct JsGameState {
    inner: jungle::GameState,
}

#[wasm_bindgen(js_class = GameState)]
impl JsGameState {
    pub fn setup() -> JsGameState {
        JsGameState {
            inner: jungle::GameState::setup(),
        }
    }

    /// Move forward by `dt` milliseconds. A bad `dt` is logged and skipped so
    /// the page's loop keeps going.
    pub fn advance(&mut self, dt: f64) {
        if let Err(e) = self.inner.advance(dt) {
            log::warn!("skipping update: {e}");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn sprite(&self) -> String {
        self.inner.current_sprite_reference().to_owned()
    }

    #[wasm_bindgen(getter, js_name = elapsedTime)]
    pub fn elapsed_time(&self) -> f64 {
        self.inner.elapsed_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_step_does_not_stop_the_page() {
        let mut state = JsGameState::setup();
        state.advance(-1.0);
        state.advance(f64::NAN);
        assert_eq!(state.elapsed_time(), 0.0);
        state.advance(16.0);
        assert_eq!(state.elapsed_time(), 16.0);
        assert!(!state.sprite().is_empty());
    }
}
