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

//! UI components.
//!
//! Each component pairs a small state struct with its rendering logic. The
//! underlying domain data (results, saved items) lives in [`crate::model`];
//! components only hold view state such as input text and table cursors.

mod saved;
mod search;

pub(crate) use saved::SavedView;
pub(crate) use search::SearchView;
