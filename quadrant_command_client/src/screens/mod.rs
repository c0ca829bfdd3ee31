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

//! The top-level screens and the navigation between them

pub mod quadrant;

use dioxus::prelude::*;
use quadrant_command_common::{GameState, screen::Screen};

/// Screen tabs, the star date readout, and the turn control
#[component]
pub fn Navbar(game_state: WriteSignal<GameState>) -> Element {
    let star_date = format!("Star Date: {:.1}", game_state.read().star_date);
    let current = game_state.read().screen.current;

    rsx! {
        nav { class: "navbar navbar-expand navbar-dark bg-dark mb-3",
            div { class: "container-fluid",
                span { class: "navbar-brand", "Quadrant Command" }
                ul { class: "navbar-nav me-auto",
                    {
                        Screen::ALL
                            .iter()
                            .map(|&screen| {
                                let nav_class = if screen == current {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                };
                                rsx! {
                                    li { key: "{screen.title()}", class: "nav-item",
                                        a {
                                            href: "#",
                                            class: "{nav_class}",
                                            onclick: move |event| {
                                                event.prevent_default();
                                                game_state.write().set_screen(screen);
                                            },
                                            "{screen.title()}"
                                        }
                                    }
                                }
                            })
                    }
                }
                span { class: "navbar-text me-3", "{star_date}" }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| game_state.write().advance_turn(),
                    "Next Turn"
                }
            }
        }
    }
}

/// Reports from the last executed turn
#[component]
pub fn Intel(game_state: ReadSignal<GameState>) -> Element {
    let reports = game_state.read().reports.clone();

    rsx! {
        div { class: "container",
            h1 { "Intel" }
            if reports.is_empty() {
                p { "Nothing to report - no orders were executed last turn." }
            }
            ul {
                for (index , report) in reports.iter().enumerate() {
                    li { key: "{index}", "{report}" }
                }
            }
        }
    }
}

/// Strategic overview; not yet operational
#[component]
pub fn WarRoom() -> Element {
    rsx! {
        div { class: "container",
            h1 { "War Room" }
            p { "Fleet projections are not yet available." }
        }
    }
}

/// Economy overview; not yet operational
#[component]
pub fn Treasury() -> Element {
    rsx! {
        div { class: "container",
            h1 { "Treasury" }
            p { "The quadrant economy is not yet tracked." }
        }
    }
}
