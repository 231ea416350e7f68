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

fn main() {
    jungle::logging::init();
    match jungle::run_game() {
        Ok(()) => log::info!("Thanks for playing!"),
        Err(error) => {
            log::error!("Error occurred: {error}");
            std::process::exit(1);
        }
    }
}
