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

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the logger for this target. Later calls do nothing.
///
/// Natively, `RUST_LOG` picks the filter (`info` when unset). In the browser,
/// records go to the developer console at `info` and above.
pub fn init() {
    INIT.call_once(|| {
        install();
        log::debug!("logging initialized");
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install() {
    let env = env_logger::Env::default().default_filter_or("info");
    // an embedding application may have set its own logger already
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        log::debug!("keeping existing logger: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
fn install() {
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("keeping existing logger: {e}");
    }
}
