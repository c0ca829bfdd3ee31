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

//! The quadrant map and the sector drill-down

use dioxus::prelude::*;
use quadrant_command_common::{
    GameState, Notification,
    screen::MapType,
    sector::{ALPHABET, GRID_SIZE, GridIndex, Owner},
};

use crate::toast::Toasts;

/// The quadrant screen: the map grid, or the drill-down if a sector is open
#[component]
pub fn Quadrant(game_state: WriteSignal<GameState>, toasts: WriteSignal<Toasts>) -> Element {
    if game_state.read().viewing_quadrant_map() {
        rsx! {
            QuadrantMap { game_state, toasts }
        }
    } else {
        rsx! {
            SectorDetails { game_state }
        }
    }
}

/// Presentation classes for a rendered grid cell, by role: header row,
/// row-label column, trailing chrome, or interior sector
fn cell_classes(value: u16) -> String {
    let grid_size = GRID_SIZE as u16;

    if value <= grid_size {
        return "quadrant-cell quadrant-header".to_string();
    }

    if (value - 1) % grid_size == 0 {
        return "quadrant-cell quadrant-row-label".to_string();
    }

    if value > grid_size * (grid_size - 1) || value % grid_size == 0 {
        return "quadrant-cell quadrant-chrome".to_string();
    }

    let right = if (value + 1) % grid_size == 0 {
        " sector-edge-right"
    } else {
        ""
    };
    let bottom = if value > grid_size * (grid_size - 2) {
        " sector-edge-bottom"
    } else {
        ""
    };
    format!("quadrant-cell quadrant-sector{right}{bottom}")
}

/// Chrome label for a rendered grid cell: column letters across the top row,
/// 1-based row numbers down the left column
fn cell_label(value: u16) -> String {
    let grid_size = GRID_SIZE as u16;

    if (2..grid_size).contains(&value) {
        return ALPHABET
            .chars()
            .nth((value - 2) as usize)
            .map(|letter| letter.to_string())
            .unwrap_or_default();
    }

    if value > 1 && value < grid_size * (grid_size - 1) && (value - 1) % grid_size == 0 {
        return (value / grid_size).to_string();
    }

    String::new()
}

/// Owner tint for a grid cell when the owners overlay is up
fn owner_style(state: &GameState, grid: GridIndex) -> String {
    if state.screen.quadrant.map_type != MapType::Owners {
        return String::new();
    }
    let Some(id) = grid.sector() else {
        return String::new();
    };

    match state.sector(id).owner {
        Some(Owner::Player) => "background-color: rgba(0, 0, 150, 0.75)".to_string(),
        Some(Owner::Computer) => "background-color: rgba(150, 0, 0, 0.75)".to_string(),
        None => String::new(),
    }
}

/// The 12×12 rendered grid plus the status sidebar
#[component]
fn QuadrantMap(game_state: WriteSignal<GameState>, toasts: WriteSignal<Toasts>) -> Element {
    rsx! {
        div { class: "container-fluid",
            div { class: "row",
                div { class: "col-lg-8",
                    div { class: "quadrant-grid",
                        {
                            (1..=(GRID_SIZE * GRID_SIZE) as u16)
                                .map(|value| {
                                    let grid = GridIndex::from(value);
                                    let classes = cell_classes(value);
                                    let style = owner_style(&game_state.read(), grid);
                                    let content = match grid.sector() {
                                        Some(id) => {
                                            let ships = game_state.read().sector(id).ships;
                                            if ships > 0 { ships.to_string() } else { String::new() }
                                        }
                                        None => cell_label(value),
                                    };
                                    rsx! {
                                        div {
                                            key: "{value}",
                                            class: "{classes}",
                                            style: "{style}",
                                            onmouseenter: move |_| {
                                                game_state.write().set_highlighted_sector(Some(grid));
                                            },
                                            onmouseleave: move |_| {
                                                game_state.write().set_highlighted_sector(None);
                                            },
                                            onclick: move |_| {
                                                if grid.sector().is_some() {
                                                    game_state.write().set_viewing_sector(Some(grid));
                                                }
                                            },
                                            oncontextmenu: move |event| {
                                                event.prevent_default();
                                                let notification = game_state
                                                    .write()
                                                    .handle_sector_interaction(grid);
                                                if let Some(Notification::OrderIssued(text)) = notification {
                                                    toasts.write().push(format!("Order Issued: {text}"));
                                                }
                                            },
                                            "{content}"
                                        }
                                    }
                                })
                        }
                    }
                }
                div { class: "col-lg-4",
                    QuadrantSidebar { game_state }
                }
            }
        }
    }
}

/// Hover details, the queued order, pending orders, and the overlay toggle
#[component]
fn QuadrantSidebar(game_state: WriteSignal<GameState>) -> Element {
    let state = game_state.read();
    let map_type = state.screen.quadrant.map_type;

    let highlighted = match state.highlighted_sector() {
        Some((id, sector)) => {
            let name = format!("Sector: {} {}", sector.name, id.coordinates());
            let owner = sector.owner.map(|owner| format!("Owner: {owner}"));
            let ships = (sector.ships > 0).then(|| format!("Ships: {}", sector.ships));
            rsx! {
                p {
                    "{name}"
                    if let Some(owner) = owner {
                        br {}
                        "{owner}"
                    }
                    if let Some(ships) = ships {
                        br {}
                        "{ships}"
                    }
                }
            }
        }
        None => rsx! {
            p { class: "text-secondary", "Hover a sector for details." }
        },
    };

    let queued = state
        .screen
        .quadrant
        .queued_order
        .as_ref()
        .map(|queued| format!("Queued Order: {queued}"));
    let orders = state
        .orders
        .iter()
        .map(|order| order.to_string())
        .collect::<Vec<_>>();

    rsx! {
        div { class: "card bg-dark text-light",
            div { class: "card-body",
                button {
                    r#type: "button",
                    class: "btn btn-secondary btn-sm mb-3",
                    onclick: move |_| game_state.write().cycle_map_type(),
                    "Map: {map_type.title()}"
                }
                {highlighted}
                if let Some(queued) = queued {
                    p { "{queued}" }
                }
                h2 { class: "fs-5", "Standing Orders" }
                if orders.is_empty() {
                    p { class: "text-secondary", "No orders committed this turn." }
                }
                ul {
                    for (index , order) in orders.iter().enumerate() {
                        li { key: "{index}", "{order}" }
                    }
                }
            }
        }
    }
}

/// Full-page view of one sector
#[component]
fn SectorDetails(game_state: WriteSignal<GameState>) -> Element {
    let state = game_state.read();
    let Some((id, sector)) = state.viewing_sector() else {
        return rsx! {
            div { class: "container",
                h1 { "Unknown Sector" }
            }
        };
    };

    let title = format!("Sector: {} {}", sector.name, id.coordinates());
    let owner = sector.owner.map(|owner| format!("Owner: {owner}"));
    let ships = format!("Ships: {}", sector.ships);

    rsx! {
        div { class: "container",
            h1 { "{title}" }
            p {
                if let Some(owner) = owner {
                    "{owner}"
                    br {}
                }
                "{ships}"
            }
            button {
                r#type: "button",
                class: "btn btn-secondary",
                onclick: move |_| game_state.write().back_to_quadrant(),
                "Back to Quadrant"
            }
        }
    }
}
