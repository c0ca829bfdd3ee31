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

//! Sectors and the two coordinate spaces they are addressed in
//!
//! A sector index addresses the flat 10×10 playable quadrant; a grid index
//! addresses the rendered 12×12 grid, whose outermost ring is header/border
//! chrome and never maps to a sector.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Edge length of the playable quadrant, in sectors
pub const QUADRANT_SIZE: usize = 10;

/// Edge length of the rendered grid, including the chrome ring
pub const GRID_SIZE: usize = 12;

/// Column labels; only the first [`QUADRANT_SIZE`] letters are used
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Names assigned to sectors at quadrant creation, in sector-index order
pub const SECTOR_NAMES: [&str; QUADRANT_SIZE * QUADRANT_SIZE] = [
    "Seppius",
    "Orcivius",
    "Tuccius",
    "Sicinius",
    "Placidius",
    "Poppaeus",
    "Pacilius",
    "Terentilius",
    "Aquinius",
    "Bantius",
    "Apronius",
    "Manlius",
    "Icilius",
    "Matius",
    "Proculeius",
    "Petillius",
    "Saenius",
    "Atrius",
    "Gavius",
    "Servaeus",
    "Arellius",
    "Thorius",
    "Gratidius",
    "Hirrius",
    "Rufinius",
    "Laenius",
    "Hirtuleius",
    "Scuilius",
    "Numisius",
    "Oppidius",
    "Tarpeius",
    "Helvidius",
    "Avianus",
    "Herennius",
    "Papius",
    "Crassitius",
    "Sabinius",
    "Bruttius",
    "Abronius",
    "Pedanius",
    "Faenius",
    "Pleminius",
    "Arminius",
    "Norbanus",
    "Pontilius",
    "Didius",
    "Lepidius",
    "Hirtius",
    "Lafrenius",
    "Aebutius",
    "Decimius",
    "Sosius",
    "Tarquinius",
    "Mallius",
    "Visellius",
    "Cordius",
    "Seccius",
    "Caerellius",
    "Dellius",
    "Naevius",
    "Falcidius",
    "Orbilius",
    "Genucius",
    "Sepunius",
    "Percennius",
    "Sentius",
    "Coelius",
    "Duronius",
    "Novellius",
    "Gratius",
    "Furnius",
    "Statius",
    "Popaedius",
    "Condetius",
    "Junius",
    "Betucius",
    "Papirius",
    "Socellius",
    "Ofanius",
    "Menius",
    "Caecius",
    "Vitrasius",
    "Pompilius",
    "Fulginas",
    "Ampius",
    "Juventius",
    "Sabucius",
    "Postumulenus",
    "Pollius",
    "Atius",
    "Caesius",
    "Quartinius",
    "Herennuleius",
    "Hortensius",
    "Gabinius",
    "Ceionius",
    "Bellius",
    "Pomptinus",
    "Mamercius",
    "Memmius",
];

/// One cell of the playable quadrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    /// Name as assigned at quadrant creation - never changes afterwards
    pub name: String,
    /// Current owner, if anyone has claimed the sector
    pub owner: Option<Owner>,
    /// Ships stationed in the sector
    pub ships: u32,
}

/// A side that can hold sectors and command ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    /// The human player
    Player,
    /// The computer opponent
    Computer,
}

impl Display for Owner {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Player => write!(f, "Player"),
            Owner::Computer => write!(f, "Computer"),
        }
    }
}

/// Refers to a sector; always in `[0, 99]`
#[repr(transparent)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorId(u8);

impl SectorId {
    /// Wrap a flat sector index, if it is in range
    pub fn new(index: usize) -> Option<Self> {
        if index < QUADRANT_SIZE * QUADRANT_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// The flat index into the sector list
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The display coordinates naming this sector
    pub fn coordinates(self) -> SectorCoordinates {
        let row = self.0 as usize / QUADRANT_SIZE;
        let col = self.0 as usize - row * QUADRANT_SIZE;
        SectorCoordinates {
            letter: ALPHABET.as_bytes()[col] as char,
            number: (row + 1) as u8,
        }
    }
}

/// Position of a cell in the rendered grid, row-major, counting from 1
///
/// Cells in the outermost ring are chrome and name no sector.
#[repr(transparent)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex(u16);

impl From<u16> for GridIndex {
    fn from(value: u16) -> Self {
        GridIndex(value)
    }
}

impl From<GridIndex> for u16 {
    fn from(value: GridIndex) -> Self {
        value.0
    }
}

impl GridIndex {
    /// The sector this grid cell shows, or `None` for chrome cells
    pub fn sector(self) -> Option<SectorId> {
        let row = (self.0 as usize / GRID_SIZE) as i32;
        let col = self.0 as i32 - row * GRID_SIZE as i32 - 1;

        if !(1..=QUADRANT_SIZE as i32).contains(&col) || !(1..=QUADRANT_SIZE as i32).contains(&row)
        {
            return None;
        }

        SectorId::new(((row - 1) * QUADRANT_SIZE as i32 + (col - 1)) as usize)
    }
}

/// Display coordinates for a sector: column letter and 1-based row number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorCoordinates {
    /// Column label, `A` through `J`
    pub letter: char,
    /// Row label, `1` through `10`
    pub number: u8,
}

impl SectorCoordinates {
    /// The sector these coordinates name, if they are in range
    pub fn sector(self) -> Option<SectorId> {
        let col = ALPHABET.find(self.letter)?;
        if col >= QUADRANT_SIZE {
            return None;
        }
        let row = (self.number as usize).checked_sub(1)?;
        if row >= QUADRANT_SIZE {
            return None;
        }
        SectorId::new(row * QUADRANT_SIZE + col)
    }
}

impl Display for SectorCoordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.letter, self.number)
    }
}
