//! Application runtime: state construction, worker spawning, and the
//! event loop.

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::config::Settings;
use crate::state::{AppState, Lane, RecipeFetch, Screen};
use crate::ui::ui;

pub mod channels;
pub mod handlers;
pub mod terminal;
pub mod workers;

use channels::Channels;
use handlers::{handle_category_tree, handle_recipe_page, handle_shopping_page};
use terminal::{restore_terminal, setup_terminal};

/// Error type for the runtime.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Run the TUI end-to-end: load settings, spawn the workers, dispatch the
/// initial feeds, drive the event loop, and restore the terminal on exit.
///
/// `initial_screen` preselects the screen shown at startup.
pub async fn run(settings: Settings, initial_screen: Screen) -> Result<()> {
    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut app = AppState::new(settings.clone());
    app.screen = initial_screen;
    let mut channels = Channels::new(&settings);

    dispatch_home_feeds(&mut app, &channels);

    loop {
        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(
                    ev,
                    &mut app,
                    &channels.recipe_req_tx,
                    &channels.shop_req_tx,
                ) {
                    break;
                }
            }
            Some(outcome) = channels.recipe_res_rx.recv() => {
                handle_recipe_page(&mut app, outcome);
            }
            Some(outcome) = channels.shop_res_rx.recv() => {
                handle_shopping_page(&mut app, outcome);
            }
            Some(load) = channels.category_rx.recv() => {
                handle_category_tree(&mut app, load);
            }
            else => {}
        }
    }

    // Dropping the channels invalidates all outstanding completions; the
    // reader thread is told to exit promptly.
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    restore_terminal()?;
    Ok(())
}

/// Dispatch the featured home feeds.
///
/// The shopping feed is skipped without credentials so startup is not one
/// guaranteed alert; the home screen shows a configuration hint instead.
fn dispatch_home_feeds(app: &mut AppState, channels: &Channels) {
    let recipe_query = app.settings.home_recipe_category.clone();
    if let Some(request) = app.home_recipes.new_query(&recipe_query) {
        debug_assert_eq!(request.lane, Lane::HomeRecipes);
        let _ = channels.recipe_req_tx.send(RecipeFetch {
            request,
            field: crate::state::RecipeField::DishType,
        });
    }
    if app.settings.has_naver_credentials() {
        let shop_query = app.settings.home_shop_query.clone();
        if let Some(request) = app.home_shop.new_query(&shop_query) {
            let _ = channels.shop_req_tx.send(request);
        }
    } else {
        tracing::info!("naver credentials missing; home shopping feed skipped");
    }
}
