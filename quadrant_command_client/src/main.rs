// Copyright 2026 Justin Hu
//
// This file is part of Quadrant Command.
//
// Quadrant Command is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// Quadrant Command is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public
// License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with Quadrant Command. If not, see <https://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Client for Quadrant Command
//!
//! Is a dioxus app

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use dioxus::{logger::tracing::Level, prelude::*};
use quadrant_command_common::screen::Screen;

use crate::{
    screens::{Intel, Navbar, Treasury, WarRoom, quadrant::Quadrant},
    toast::{ToastTray, Toasts},
};

mod screens;
mod storage;
mod toast;

fn main() {
    if cfg!(debug_assertions) {
        dioxus::logger::init(Level::TRACE).unwrap();
    } else {
        dioxus::logger::init(Level::INFO).unwrap();
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let game_state = use_signal(storage::load_or_new);
    let toasts = use_signal(Toasts::new);

    // every transition writes the save slot back
    use_effect(move || {
        storage::save(&game_state.read());
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/css/bootstrap.min.css",
            integrity: "sha384-sRIl4kxILFvY47J16cr9ZwB07vP4J8+LH7qKQnuqkuIAvNWLzeN8tE5YBujZqJLB",
            crossorigin: "anonymous",
        }
        document::Script {
            src: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/js/bootstrap.bundle.min.js",
            integrity: "sha384-FKyoEForCGlyvwx9Hj09JcYn3nv7wiPVlz7YYwJrWVcXK/BmnVDxM+D2scQbITxI",
            crossorigin: "anonymous",
        }
        document::Link {
            rel: "stylesheet",
            href: asset!("/assets/main.css", AssetOptions::builder().with_hash_suffix(false)),
        }
        Navbar { game_state }
        match game_state.read().screen.current {
            Screen::Quadrant => rsx! {
                Quadrant { game_state, toasts }
            },
            Screen::Intel => rsx! {
                Intel { game_state }
            },
            Screen::WarRoom => rsx! {
                WarRoom {}
            },
            Screen::Treasury => rsx! {
                Treasury {}
            },
        }
        ToastTray { toasts }
    }
}
