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

//! Save-game persistence: base64-wrapped CBOR in `window.localStorage`

use base64::{Engine, prelude::BASE64_STANDARD};
use dioxus::logger::tracing::warn;
use quadrant_command_common::GameState;
use serde_cbor::{from_slice, to_vec};
use web_sys::window;

const SAVE_KEY: &str = "quadrant_command:save";

/// The saved game, or a fresh one if the save slot is missing or unreadable
pub fn load_or_new() -> GameState {
    let saved = window()
        .unwrap()
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(SAVE_KEY).ok().flatten());
    let parsed = saved
        .and_then(|saved| BASE64_STANDARD.decode(&saved).ok())
        .and_then(|saved| from_slice::<GameState>(&saved).ok());

    parsed.unwrap_or_else(GameState::new)
}

/// Write the save slot; storage failures are logged, never surfaced
pub fn save(state: &GameState) {
    let stringified = to_vec(state).expect("should always be serializable");
    let storage = window().unwrap().local_storage().ok().flatten();
    if let Some(storage) = storage {
        if storage
            .set(SAVE_KEY, &BASE64_STANDARD.encode(stringified))
            .is_err()
        {
            warn!("couldn't write the save slot");
        }
    } else {
        warn!("local storage unavailable, continuing without saves");
    }
}
