//! Channel wiring between the event loop and the background workers.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::app::workers::{
    self, CategoryLoad, spawn_category_worker, spawn_recipe_worker, spawn_shopping_worker,
};
use crate::config::Settings;
use crate::sources::{RecipeApi, ShoppingApi};
use crate::state::{PageOutcome, PageRequest, RecipeFetch, RecipeItem, ShoppingItem};

/// All senders and receivers used by the runtime, with the workers already
/// spawned on the corresponding request ends.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Cancellation flag observed by the reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Recipe page requests into the recipe worker.
    pub recipe_req_tx: mpsc::UnboundedSender<RecipeFetch>,
    /// Recipe page outcomes back from the worker.
    pub recipe_res_rx: mpsc::UnboundedReceiver<PageOutcome<RecipeItem>>,
    /// Shopping page requests into the shopping worker.
    pub shop_req_tx: mpsc::UnboundedSender<PageRequest>,
    /// Shopping page outcomes back from the worker.
    pub shop_res_rx: mpsc::UnboundedReceiver<PageOutcome<ShoppingItem>>,
    /// One-shot category tree load result.
    pub category_rx: mpsc::UnboundedReceiver<CategoryLoad>,
}

impl Channels {
    /// Create all channels and spawn the fetch workers, the category
    /// loader, and the terminal event thread.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (recipe_req_tx, recipe_req_rx) = mpsc::unbounded_channel::<RecipeFetch>();
        let (recipe_res_tx, recipe_res_rx) = mpsc::unbounded_channel::<PageOutcome<RecipeItem>>();
        let (shop_req_tx, shop_req_rx) = mpsc::unbounded_channel::<PageRequest>();
        let (shop_res_tx, shop_res_rx) = mpsc::unbounded_channel::<PageOutcome<ShoppingItem>>();
        let (category_tx, category_rx) = mpsc::unbounded_channel::<CategoryLoad>();

        spawn_recipe_worker(
            recipe_req_rx,
            recipe_res_tx,
            RecipeApi {
                base_url: settings.recipe_base_url.clone(),
                api_key: settings.recipe_api_key.clone(),
            },
        );
        spawn_shopping_worker(
            shop_req_rx,
            shop_res_tx,
            ShoppingApi {
                base_url: settings.shop_base_url.clone(),
                client_id: settings.naver_client_id.clone(),
                client_secret: settings.naver_client_secret.clone(),
            },
        );
        spawn_category_worker(category_tx, settings.category_csv.clone());
        workers::spawn_event_thread(event_tx, event_thread_cancelled.clone());

        Self {
            event_rx,
            event_thread_cancelled,
            recipe_req_tx,
            recipe_res_rx,
            shop_req_tx,
            shop_res_rx,
            category_rx,
        }
    }
}
