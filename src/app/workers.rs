//! Background workers bridging the controllers to the remote sources.
//!
//! Each worker drains a request channel and resolves fetches on spawned
//! tasks so a slow page never blocks later requests from other lanes.
//! Outcomes carry the originating lane and ticket; the event loop routes
//! them back to the owning controller, which discards stale generations.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{
    RecipeApi, ShoppingApi, fetch_recipe_page, fetch_shopping_page, load_category_tree,
};
use crate::state::{PageOutcome, PageRequest, RecipeFetch, RecipeItem, ShoppingItem};

/// Category load result delivered once at startup.
pub type CategoryLoad = Result<Vec<crate::catalog::CategoryNode>, String>;

/// Spawn the recipe fetch worker.
pub fn spawn_recipe_worker(
    mut req_rx: mpsc::UnboundedReceiver<RecipeFetch>,
    res_tx: mpsc::UnboundedSender<PageOutcome<RecipeItem>>,
    api: RecipeApi,
) {
    tokio::spawn(async move {
        while let Some(fetch) = req_rx.recv().await {
            let api = api.clone();
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let RecipeFetch { request, field } = fetch;
                let result = fetch_recipe_page(
                    &api,
                    &request.query,
                    request.start,
                    request.size,
                    field,
                )
                .await
                .map_err(|e| e.to_string());
                if let Err(ref msg) = result {
                    tracing::warn!(lane = ?request.lane, error = %msg, "recipe fetch failed");
                }
                let _ = tx.send(PageOutcome {
                    lane: request.lane,
                    ticket: request.ticket,
                    result,
                });
            });
        }
    });
}

/// Spawn the shopping fetch worker.
pub fn spawn_shopping_worker(
    mut req_rx: mpsc::UnboundedReceiver<PageRequest>,
    res_tx: mpsc::UnboundedSender<PageOutcome<ShoppingItem>>,
    api: ShoppingApi,
) {
    tokio::spawn(async move {
        while let Some(request) = req_rx.recv().await {
            let api = api.clone();
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let result =
                    fetch_shopping_page(&api, &request.query, request.start, request.size)
                        .await
                        .map_err(|e| e.to_string());
                if let Err(ref msg) = result {
                    tracing::warn!(lane = ?request.lane, error = %msg, "shopping fetch failed");
                }
                let _ = tx.send(PageOutcome {
                    lane: request.lane,
                    ticket: request.ticket,
                    result,
                });
            });
        }
    });
}

/// Spawn the one-shot category tree loader.
///
/// Parsing is file I/O plus CSV work, so it runs on the blocking pool.
pub fn spawn_category_worker(
    res_tx: mpsc::UnboundedSender<CategoryLoad>,
    override_path: Option<PathBuf>,
) {
    tokio::spawn(async move {
        let load = tokio::task::spawn_blocking(move || {
            load_category_tree(override_path.as_deref()).map_err(|e| e.to_string())
        })
        .await
        .unwrap_or_else(|e| Err(format!("category load task failed: {e}")));
        let _ = res_tx.send(load);
    });
}

/// Spawn the terminal event reading thread.
///
/// Runs on a plain OS thread because crossterm's read blocks; the poll
/// timeout lets the thread observe the cancellation flag promptly on exit.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        loop {
            if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // Transient read error; keep polling.
                    }
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}
