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

//! Terminal environment and styling utilities.
//!
//! Background colour control via OSC (Operating System Command) escape
//! sequences. Relies on the terminal emulator supporting the relevant OSC
//! codes, which most modern terminals (XTerm, iTerm2, Alacritty, Kitty) do.

use std::io::{self, Write};

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// Flushes `stdout` immediately so the change applies without delay.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    print!("\x1b]11;{}\x07", hex_color);
    io::stdout().flush().ok();
}

/// Resets the terminal background to its default color.
///
/// Sends the OSC 111 escape sequence, called during application cleanup to
/// restore the user's terminal state.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}
