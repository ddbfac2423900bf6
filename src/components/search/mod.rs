// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Search view and input management.
//!
//! This module holds the text input component for the search field. The
//! result data and the selection cursor live in
//! [`crate::model::results::ResultList`]; the view re-derives the selected
//! row from that cursor on every render rather than caching any row state.

mod render;

use tui_input::Input;

pub(crate) struct SearchView {
    pub(crate) input: Input,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }
}
