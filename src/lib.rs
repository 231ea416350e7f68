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

use std::{cell::RefCell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod platform;
pub mod render;
pub mod state;
pub mod timing;

pub use driver::{FrameDriver, NextFrame, Schedule, Stopper};
pub use error::Error;
pub use render::Render;
pub use state::{Animation, GameState};

use crate::{
    config::{SURFACE_HEIGHT, SURFACE_WIDTH},
    platform::{Impl, Platform},
};

/// Set up the game and a driver drawing it to this target's surface.
fn start_driver() -> Result<FrameDriver<Impl>, Error> {
    let platform = Impl::init(SURFACE_WIDTH, SURFACE_HEIGHT)?;
    log::info!(
        "drawing to a {}x{} surface",
        platform.width(),
        platform.height()
    );
    let state = Rc::new(RefCell::new(GameState::setup()));
    let mut driver = FrameDriver::new(NextFrame::default());
    driver.start(state, platform)?;
    Ok(driver)
}

/// Run the game until the driver stops asking for frames.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_game() -> Result<(), Error> {
    use crate::timing::{Clock, FRAME_MS};

    let mut driver = start_driver()?;
    let clock = Clock::new();
    let mut next_frame = 0.0;
    while driver.scheduler_mut().take_request() {
        // wait for the next repaint slot
        let now = clock.millis();
        if now < next_frame {
            std::thread::sleep(std::time::Duration::from_secs_f64(
                (next_frame - now) / 1000.0,
            ));
        }
        next_frame = f64::max(next_frame, now) + FRAME_MS;
        driver.on_tick(clock.millis());
    }
    Ok(())
}

/// Start the game on animation frames. Returns once the first frame is requested.
#[cfg(target_arch = "wasm32")]
pub fn run_game() -> Result<(), Error> {
    let driver = start_driver()?;
    // keeps the closure alive
    let keep_alive: Rc<RefCell<Closure<dyn FnMut(f64)>>> =
        Rc::new(RefCell::new(Closure::once(|_: f64| ())));
    schedule(&keep_alive, driver)
}

/// Hand the driver to the next animation frame, if it asked for one.
#[cfg(target_arch = "wasm32")]
fn schedule(
    keep_alive: &Rc<RefCell<Closure<dyn FnMut(f64)>>>,
    mut driver: FrameDriver<Impl>,
) -> Result<(), Error> {
    if !driver.scheduler_mut().take_request() {
        log::info!("frame loop finished");
        return Ok(());
    }
    let closure = create_closure(keep_alive.clone(), driver);
    // store in keep_alive to prevent it from being dropped
    keep_alive.replace(Closure::once(closure));
    request_animation_frame(&keep_alive.borrow())
}

/// Runs a frame using requestAnimationFrame.
#[cfg(target_arch = "wasm32")]
fn create_closure(
    keep_alive: Rc<RefCell<Closure<dyn FnMut(f64)>>>,
    mut driver: FrameDriver<Impl>,
) -> impl FnOnce(f64) {
    move |now| {
        driver.on_tick(now);
        if let Err(e) = schedule(&keep_alive, driver) {
            log::error!("frame loop ended: {e}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<(), Error> {
    web_sys::window()
        .ok_or_else(|| Error::Platform("no window".into()))?
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map(|_| ())
        .map_err(|e| Error::Platform(format!("requestAnimationFrame failed: {e:?}")))
}
