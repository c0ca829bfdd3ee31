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

//! Which view is active, and the view state owned alongside it

use serde::{Deserialize, Serialize};

use crate::{order::QueuedOrder, sector::SectorId};

/// A top-level view
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The quadrant map and sector drill-down
    Quadrant,
    /// Reports from the last executed turn
    Intel,
    /// Strategic overview
    WarRoom,
    /// Economy overview
    Treasury,
}

impl Screen {
    /// Every screen, in navigation order
    pub const ALL: [Screen; 4] = [
        Screen::Quadrant,
        Screen::Intel,
        Screen::WarRoom,
        Screen::Treasury,
    ];

    /// Human-readable name
    pub fn title(self) -> &'static str {
        match self {
            Screen::Quadrant => "Quadrant",
            Screen::Intel => "Intel",
            Screen::WarRoom => "War Room",
            Screen::Treasury => "Treasury",
        }
    }
}

/// Which overlay the quadrant map is drawn with
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum MapType {
    /// Plain sector grid
    Normal,
    /// Sectors tinted by owner
    Owners,
}

impl MapType {
    /// The other overlay; a two-state cycle
    pub fn cycled(self) -> Self {
        match self {
            MapType::Normal => MapType::Owners,
            MapType::Owners => MapType::Normal,
        }
    }

    /// Human-readable name
    pub fn title(self) -> &'static str {
        match self {
            MapType::Normal => "Normal",
            MapType::Owners => "Owners",
        }
    }
}

/// The active view plus per-view state
#[derive(Debug, Serialize, Deserialize)]
pub struct ScreenState {
    /// The view currently shown
    pub current: Screen,
    /// Quadrant view state; kept while other screens are shown
    pub quadrant: QuadrantScreen,
}

impl ScreenState {
    /// Screen state at the start of a new game
    pub fn new() -> Self {
        Self {
            current: Screen::Quadrant,
            quadrant: QuadrantScreen::new(),
        }
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

/// State for the quadrant view
#[derive(Debug, Serialize, Deserialize)]
pub struct QuadrantScreen {
    /// Hover target, if the pointer is over a sector
    pub highlighted_sector: Option<SectorId>,
    /// Drill-down target, if a sector view is open
    pub viewing_sector: Option<SectorId>,
    /// The order being assembled, if any; at most one exists at a time
    pub queued_order: Option<QueuedOrder>,
    /// Current map overlay
    pub map_type: MapType,
}

impl QuadrantScreen {
    /// Quadrant view state at the start of a new game
    pub fn new() -> Self {
        Self {
            highlighted_sector: None,
            viewing_sector: None,
            queued_order: None,
            map_type: MapType::Normal,
        }
    }
}

impl Default for QuadrantScreen {
    fn default() -> Self {
        Self::new()
    }
}
