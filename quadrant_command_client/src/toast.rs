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

//! Bottom-right toast notifications for issued orders

use dioxus::prelude::*;

/// Most messages kept at once; older ones fall off the back
const TOAST_BACKLOG: usize = 4;

/// A single notification message
#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    text: String,
}

/// The queue of visible notifications
#[derive(Debug, Default)]
pub struct Toasts {
    next_id: u64,
    entries: Vec<Toast>,
}

impl Toasts {
    /// An empty queue
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Queue a message, dropping the oldest beyond the backlog
    pub fn push(&mut self, text: String) {
        self.entries.push(Toast {
            id: self.next_id,
            text,
        });
        self.next_id += 1;
        if self.entries.len() > TOAST_BACKLOG {
            self.entries.remove(0);
        }
    }

    /// Drop one message
    fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

/// The fixed bottom-right stack of notifications
#[component]
pub fn ToastTray(toasts: WriteSignal<Toasts>) -> Element {
    let entries = toasts.read().entries.clone();

    rsx! {
        div { class: "toast-container position-fixed bottom-0 end-0 p-3",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: "toast show align-items-center text-bg-success border-0",
                    role: "alert",
                    div { class: "d-flex",
                        div { class: "toast-body", "{toast.text}" }
                        button {
                            r#type: "button",
                            class: "btn-close btn-close-white me-2 m-auto",
                            onclick: {
                                let id = toast.id;
                                move |_| toasts.write().dismiss(id)
                            },
                        }
                    }
                }
            }
        }
    }
}
