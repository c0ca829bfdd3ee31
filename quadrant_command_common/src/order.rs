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

//! Orders that may be given to sectors

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::sector::SectorId;

/// A committed order, awaiting execution at the next turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    /// Move ships between sectors
    ShipMove(ShipMove),
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Order::ShipMove(ship_move) => ship_move.fmt(f),
        }
    }
}

/// Move ships from one sector to another
///
/// Ships were already removed from the source when the order was assembled;
/// execution only delivers them to the destination. Any sector is a legal
/// destination - reachability is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipMove {
    /// Where the ships were drawn from
    pub source: SectorId,
    /// Where the ships arrive on execution
    pub destination: SectorId,
    /// Ships allocated to this order
    pub ships: u32,
}

impl Display for ShipMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move {} Ships from {} to {}",
            self.ships,
            self.source.coordinates(),
            self.destination.coordinates()
        )
    }
}

/// The in-flight order being assembled by the player
///
/// Created by the first interaction with a garrisoned sector; each further
/// interaction with the source moves one ship out of the sector's stock into
/// the order. The destination is chosen at commit time, which turns this into
/// an [`Order`]. At most one of these exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedOrder {
    /// Where ships are being drawn from
    pub source: SectorId,
    /// Ships loaded so far
    pub ships: u32,
}

impl QueuedOrder {
    /// Start assembling a move out of `source`, with nothing loaded yet
    pub fn new(source: SectorId) -> Self {
        Self { source, ships: 0 }
    }

    /// Finalize into a committed order bound for `destination`
    pub fn commit(self, destination: SectorId) -> Order {
        Order::ShipMove(ShipMove {
            source: self.source,
            destination,
            ships: self.ships,
        })
    }
}

impl Display for QueuedOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move {} Ships from {}",
            self.ships,
            self.source.coordinates()
        )
    }
}
