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

//! Game state and game mechanics for Quadrant Command
//!
//! Should be platform agnostic (wasm32 vs x86_64)
//!
//! The state is a single root owned by one logical thread of control; every
//! transition runs to completion in response to one UI event, so there are no
//! partial updates to observe. Transitions are total - input that names
//! nothing (a click on grid chrome, a command to an empty sector) is a no-op,
//! never a fault.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

use crate::{
    order::{Order, QueuedOrder},
    screen::{Screen, ScreenState},
    sector::{GridIndex, Owner, SECTOR_NAMES, Sector, SectorId},
};

pub mod order;
pub mod screen;
pub mod sector;

/// Star date at the start of a new game
pub const INITIAL_STAR_DATE: f64 = 47501.4;

/// How far the star date advances each turn
pub const STAR_DATE_INCREMENT: f64 = 0.1;

/// Ships garrisoned in each starting sector
const STARTING_SHIPS: u32 = 2;

/// Sectors held by the player at the start of a new game
const PLAYER_STARTING_SECTORS: [usize; 3] = [0, 1, 10];

/// Sectors held by the computer at the start of a new game
const COMPUTER_STARTING_SECTORS: [usize; 3] = [89, 98, 99];

/// The game state
#[derive(Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Current star date; advances by [`STAR_DATE_INCREMENT`] each turn
    pub star_date: f64,
    /// The quadrant, in sector-index order; always exactly 100 entries
    pub sectors: Vec<Sector>,
    /// The active view and its state
    pub screen: ScreenState,
    /// Committed orders awaiting execution, in commit order
    pub orders: Vec<Order>,
    /// Rendered texts of the orders executed last turn
    pub reports: Vec<String>,
}

/// An event emitted by a state transition for the UI layer to surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A queued order was committed; carries the rendered order text
    OrderIssued(String),
}

impl GameState {
    /// The state at the start of a new game
    ///
    /// Both sides hold three garrisoned sectors in opposite corners of the
    /// quadrant; everything else is unclaimed and empty.
    pub fn new() -> Self {
        let sectors = SECTOR_NAMES
            .iter()
            .enumerate()
            .map(|(index, &name)| {
                let (owner, ships) = if PLAYER_STARTING_SECTORS.contains(&index) {
                    (Some(Owner::Player), STARTING_SHIPS)
                } else if COMPUTER_STARTING_SECTORS.contains(&index) {
                    (Some(Owner::Computer), STARTING_SHIPS)
                } else {
                    (None, 0)
                };
                Sector {
                    name: name.to_string(),
                    owner,
                    ships,
                }
            })
            .collect();

        Self {
            star_date: INITIAL_STAR_DATE,
            sectors,
            screen: ScreenState::new(),
            orders: Vec::new(),
            reports: Vec::new(),
        }
    }

    /// The sector with the given id
    pub fn sector(&self, id: SectorId) -> &Sector {
        &self.sectors[id.index()]
    }

    /// Handle a pointer command on a quadrant grid cell
    ///
    /// Drives the order-construction state machine:
    /// - with no order in flight, a garrisoned sector starts one
    /// - a repeat of the source sector loads one more ship out of its stock
    /// - any other sector commits the order with that destination
    ///
    /// Commands on chrome cells and on empty sectors with no order in flight
    /// do nothing. Returns the notification to surface, if the interaction
    /// committed an order.
    pub fn handle_sector_interaction(&mut self, grid: GridIndex) -> Option<Notification> {
        let id = grid.sector()?;

        let mut queued = match self.screen.quadrant.queued_order.take() {
            Some(queued) => queued,
            None => {
                if self.sectors[id.index()].ships == 0 {
                    return None;
                }
                QueuedOrder::new(id)
            }
        };

        if id == queued.source {
            let sector = &mut self.sectors[id.index()];
            if sector.ships > 0 {
                queued.ships += 1;
                sector.ships -= 1;
            }
            self.screen.quadrant.queued_order = Some(queued);
            None
        } else {
            let order = queued.commit(id);
            let notification = Notification::OrderIssued(order.to_string());
            self.orders.push(order);
            Some(notification)
        }
    }

    /// Advance the star date and execute every committed order, in commit
    /// order
    ///
    /// Ships were drawn out of their source sectors at load time, so
    /// execution only delivers them. The executed orders become this turn's
    /// reports, and the order queue empties. Cannot fail.
    pub fn advance_turn(&mut self) {
        self.star_date += STAR_DATE_INCREMENT;

        let orders = std::mem::take(&mut self.orders);
        for order in &orders {
            match order {
                Order::ShipMove(ship_move) => {
                    self.sectors[ship_move.destination.index()].ships += ship_move.ships;
                }
            }
        }

        self.reports = orders.iter().map(|order| order.to_string()).collect();
    }

    /// Switch to a screen
    ///
    /// Returning to the quadrant always drops the drill-down and hover state;
    /// the queued order and map overlay survive the round trip.
    pub fn set_screen(&mut self, screen: Screen) {
        self.screen.current = screen;

        if screen == Screen::Quadrant {
            self.screen.quadrant.viewing_sector = None;
            self.screen.quadrant.highlighted_sector = None;
        }
    }

    /// Toggle the quadrant map overlay
    pub fn cycle_map_type(&mut self) {
        self.screen.quadrant.map_type = self.screen.quadrant.map_type.cycled();
    }

    /// Set or clear the hover target; chrome cells clear it
    pub fn set_highlighted_sector(&mut self, grid: Option<GridIndex>) {
        self.screen.quadrant.highlighted_sector = grid.and_then(GridIndex::sector);
    }

    /// Set or clear the drill-down target; chrome cells clear it
    pub fn set_viewing_sector(&mut self, grid: Option<GridIndex>) {
        self.screen.quadrant.viewing_sector = grid.and_then(GridIndex::sector);
    }

    /// Close the sector drill-down and return to the quadrant map
    pub fn back_to_quadrant(&mut self) {
        self.screen.quadrant.viewing_sector = None;
        self.screen.quadrant.highlighted_sector = None;
    }

    /// The hover target and its sector, if any
    pub fn highlighted_sector(&self) -> Option<(SectorId, &Sector)> {
        let id = self.screen.quadrant.highlighted_sector?;
        Some((id, self.sector(id)))
    }

    /// The drill-down target and its sector, if any
    pub fn viewing_sector(&self) -> Option<(SectorId, &Sector)> {
        let id = self.screen.quadrant.viewing_sector?;
        Some((id, self.sector(id)))
    }

    /// Is the quadrant map (not a sector drill-down) the active view?
    pub fn viewing_quadrant_map(&self) -> bool {
        self.screen.current == Screen::Quadrant && self.screen.quadrant.viewing_sector.is_none()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        order::ShipMove,
        screen::MapType,
        sector::{GRID_SIZE, QUADRANT_SIZE},
    };

    /// The grid cell that shows the given sector
    fn grid(sector_index: usize) -> GridIndex {
        let row = sector_index / QUADRANT_SIZE;
        let col = sector_index - row * QUADRANT_SIZE;
        let grid = GridIndex::from(((row + 1) * GRID_SIZE + col + 2) as u16);
        assert_eq!(grid.sector(), SectorId::new(sector_index));
        grid
    }

    /// Every ship in the game: garrisoned, loaded into the queued order, or
    /// in flight inside a committed order
    fn total_ships(state: &GameState) -> u32 {
        state.sectors.iter().map(|sector| sector.ships).sum::<u32>()
            + state
                .screen
                .quadrant
                .queued_order
                .as_ref()
                .map_or(0, |queued| queued.ships)
            + state
                .orders
                .iter()
                .map(|order| match order {
                    Order::ShipMove(ship_move) => ship_move.ships,
                })
                .sum::<u32>()
    }

    #[test]
    fn initial_state() {
        let state = GameState::new();

        assert_eq!(state.sectors.len(), 100);
        assert_eq!(state.star_date, INITIAL_STAR_DATE);
        assert!(state.orders.is_empty());
        assert!(state.reports.is_empty());
        assert!(state.screen.quadrant.queued_order.is_none());
        assert_eq!(state.screen.current, Screen::Quadrant);

        assert_eq!(state.sectors[0].name, "Seppius");
        assert_eq!(state.sectors[99].name, "Memmius");

        for index in PLAYER_STARTING_SECTORS {
            assert_eq!(state.sectors[index].owner, Some(Owner::Player));
            assert_eq!(state.sectors[index].ships, 2);
        }
        for index in COMPUTER_STARTING_SECTORS {
            assert_eq!(state.sectors[index].owner, Some(Owner::Computer));
            assert_eq!(state.sectors[index].ships, 2);
        }
        assert_eq!(
            state.sectors.iter().filter(|sector| sector.owner.is_some()).count(),
            6
        );
        assert_eq!(total_ships(&state), 12);
    }

    #[test]
    fn chrome_interaction_is_a_no_op() {
        let mut state = GameState::new();

        for value in [0u16, 1, 12, 13, 24, 133, 144] {
            assert_eq!(state.handle_sector_interaction(GridIndex::from(value)), None);
        }
        assert!(state.screen.quadrant.queued_order.is_none());
        assert!(state.orders.is_empty());
        assert_eq!(total_ships(&state), 12);
    }

    #[test]
    fn empty_sector_starts_no_order() {
        let mut state = GameState::new();

        assert_eq!(state.handle_sector_interaction(grid(55)), None);
        assert!(state.screen.quadrant.queued_order.is_none());
    }

    #[test]
    fn loading_drains_the_source_one_ship_at_a_time() {
        // Scenario A
        let mut state = GameState::new();

        assert_eq!(state.handle_sector_interaction(grid(0)), None);
        let queued = state.screen.quadrant.queued_order.as_ref().unwrap();
        assert_eq!(queued.source, SectorId::new(0).unwrap());
        assert_eq!(queued.ships, 1);
        assert_eq!(state.sectors[0].ships, 1);

        assert_eq!(state.handle_sector_interaction(grid(0)), None);
        assert_eq!(state.sectors[0].ships, 0);
        assert_eq!(
            state.screen.quadrant.queued_order.as_ref().unwrap().ships,
            2
        );

        // the source is dry - a third command loads nothing
        assert_eq!(state.handle_sector_interaction(grid(0)), None);
        assert_eq!(state.sectors[0].ships, 0);
        assert_eq!(
            state.screen.quadrant.queued_order.as_ref().unwrap().ships,
            2
        );
        assert_eq!(total_ships(&state), 12);
    }

    #[test]
    fn committing_an_order() {
        // Scenario B
        let mut state = GameState::new();
        state.handle_sector_interaction(grid(0));
        state.handle_sector_interaction(grid(0));

        let notification = state.handle_sector_interaction(grid(5));
        assert_eq!(
            notification,
            Some(Notification::OrderIssued(
                "Move 2 Ships from (A, 1) to (F, 1)".to_string()
            ))
        );
        assert!(state.screen.quadrant.queued_order.is_none());
        assert_eq!(
            state.orders,
            vec![Order::ShipMove(ShipMove {
                source: SectorId::new(0).unwrap(),
                destination: SectorId::new(5).unwrap(),
                ships: 2,
            })]
        );
        assert_eq!(total_ships(&state), 12);
    }

    #[test]
    fn executing_a_turn() {
        // Scenario C
        let mut state = GameState::new();
        state.handle_sector_interaction(grid(0));
        state.handle_sector_interaction(grid(0));
        state.handle_sector_interaction(grid(5));

        state.advance_turn();

        assert_eq!(state.sectors[5].ships, 2);
        assert!((state.star_date - 47501.5).abs() < 1e-9);
        assert_eq!(format!("{:.1}", state.star_date), "47501.5");
        assert!(state.orders.is_empty());
        assert_eq!(
            state.reports,
            vec!["Move 2 Ships from (A, 1) to (F, 1)".to_string()]
        );
        assert_eq!(total_ships(&state), 12);
    }

    #[test]
    fn turn_with_no_orders_still_advances_and_clears_reports() {
        let mut state = GameState::new();
        state.reports = vec!["stale".to_string()];

        state.advance_turn();

        assert!(state.reports.is_empty());
        assert!((state.star_date - 47501.5).abs() < 1e-9);
        assert_eq!(total_ships(&state), 12);
    }

    #[test]
    fn orders_execute_in_commit_order() {
        let mut state = GameState::new();
        // two orders into the same destination
        state.handle_sector_interaction(grid(0));
        state.handle_sector_interaction(grid(5));
        state.handle_sector_interaction(grid(1));
        state.handle_sector_interaction(grid(5));

        assert_eq!(state.orders.len(), 2);
        state.advance_turn();

        assert_eq!(state.sectors[5].ships, 2);
        assert_eq!(
            state.reports,
            vec![
                "Move 1 Ships from (A, 1) to (F, 1)".to_string(),
                "Move 1 Ships from (B, 1) to (F, 1)".to_string(),
            ]
        );
        assert_eq!(total_ships(&state), 12);
    }

    #[test]
    fn zero_ship_orders_execute_as_no_ops() {
        let mut state = GameState::new();
        state.orders.push(QueuedOrder::new(SectorId::new(0).unwrap()).commit(
            SectorId::new(5).unwrap(),
        ));

        state.advance_turn();

        assert_eq!(state.sectors[5].ships, 0);
        assert_eq!(
            state.reports,
            vec!["Move 0 Ships from (A, 1) to (F, 1)".to_string()]
        );
    }

    #[test]
    fn at_most_one_queued_order() {
        let mut state = GameState::new();

        // the player's garrisons are at 0, 1, and 10; commanding 1 while 0's
        // order is in flight commits rather than starting a second order
        state.handle_sector_interaction(grid(0));
        state.handle_sector_interaction(grid(1));
        assert!(state.screen.quadrant.queued_order.is_none());
        assert_eq!(state.orders.len(), 1);

        // and a fresh order can start afterwards
        state.handle_sector_interaction(grid(10));
        assert_eq!(
            state.screen.quadrant.queued_order.as_ref().unwrap().source,
            SectorId::new(10).unwrap()
        );
        assert_eq!(total_ships(&state), 12);
    }

    #[test]
    fn ships_are_conserved_across_interleaved_commands_and_turns() {
        let mut state = GameState::new();

        for value in 0..=(GRID_SIZE * GRID_SIZE) as u16 {
            state.handle_sector_interaction(GridIndex::from(value));
            assert_eq!(total_ships(&state), 12);
        }

        state.advance_turn();
        assert_eq!(total_ships(&state), 12);

        state.handle_sector_interaction(grid(98));
        state.handle_sector_interaction(grid(99));
        assert_eq!(total_ships(&state), 12);

        state.advance_turn();
        assert_eq!(total_ships(&state), 12);
    }

    #[test]
    fn returning_to_the_quadrant_clears_transient_view_state() {
        // Scenario D
        let mut state = GameState::new();
        state.set_highlighted_sector(Some(grid(0)));
        state.set_viewing_sector(Some(grid(1)));
        assert!(state.highlighted_sector().is_some());
        assert!(state.viewing_sector().is_some());
        assert!(!state.viewing_quadrant_map());

        state.set_screen(Screen::Intel);
        assert_eq!(state.screen.current, Screen::Intel);

        state.set_screen(Screen::Quadrant);
        assert_eq!(state.screen.current, Screen::Quadrant);
        assert!(state.highlighted_sector().is_none());
        assert!(state.viewing_sector().is_none());
        assert!(state.viewing_quadrant_map());
    }

    #[test]
    fn leaving_the_quadrant_keeps_the_queued_order_and_overlay() {
        let mut state = GameState::new();
        state.handle_sector_interaction(grid(0));
        state.cycle_map_type();

        state.set_screen(Screen::Treasury);
        state.set_screen(Screen::Quadrant);

        assert!(state.screen.quadrant.queued_order.is_some());
        assert_eq!(state.screen.quadrant.map_type, MapType::Owners);
    }

    #[test]
    fn highlight_setters_accept_chrome_as_clear() {
        let mut state = GameState::new();
        state.set_highlighted_sector(Some(grid(42)));
        assert_eq!(
            state.highlighted_sector().map(|(id, _)| id),
            SectorId::new(42)
        );

        state.set_highlighted_sector(Some(GridIndex::from(12)));
        assert!(state.highlighted_sector().is_none());

        state.set_viewing_sector(Some(grid(7)));
        state.set_viewing_sector(None);
        assert!(state.viewing_sector().is_none());
    }

    #[test]
    fn map_type_toggle_round_trips() {
        let mut state = GameState::new();
        assert_eq!(state.screen.quadrant.map_type, MapType::Normal);

        state.cycle_map_type();
        assert_eq!(state.screen.quadrant.map_type, MapType::Owners);

        state.cycle_map_type();
        assert_eq!(state.screen.quadrant.map_type, MapType::Normal);
    }

    #[test]
    fn back_to_quadrant_closes_the_drill_down() {
        let mut state = GameState::new();
        state.set_viewing_sector(Some(grid(3)));
        state.set_highlighted_sector(Some(grid(3)));

        state.back_to_quadrant();

        assert!(state.viewing_sector().is_none());
        assert!(state.highlighted_sector().is_none());
        assert!(state.viewing_quadrant_map());
    }
}
