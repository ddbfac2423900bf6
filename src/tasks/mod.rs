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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work
//! from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into remote catalog queries and broadcasts
//! the results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of
//! time to process, should be implemented as tasks. Other actions are likely
//! better suited to events.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{api::CatalogClient, config::AppConfig, events::AppEvent};

#[derive(Debug)]
pub(crate) enum AppTask {
    /// Query the remote catalog for `term`. The generation tags the response
    /// so the event loop can discard results from superseded queries.
    Search { generation: u64, term: String },
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread initializes its own HTTP client and enters a blocking
/// loop, listening for incoming [`AppTask`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let client = match CatalogClient::new(&config) {
            Ok(client) => client,
            Err(e) => {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
                return;
            }
        };

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(&client, task, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single task.
///
/// This function implements the logic for each task and sends the result back
/// through the application event channel.
fn handle_task(client: &CatalogClient, task: AppTask, event_tx: &Sender<AppEvent>) -> Result<()> {
    match task {
        AppTask::Search { generation, term } => {
            let results = client.search(&term)?;
            event_tx.send(AppEvent::SearchResultsReady {
                generation,
                results,
            })?;
        }
    }

    Ok(())
}
