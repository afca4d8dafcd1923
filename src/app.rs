//! The game loop.

use crate::camera::FollowCamera3d;
use crate::color;
use crate::config::GameConfig;
use crate::hud::Hud;
use crate::input::InputState;
use crate::render::SceneView;
use crate::storage::{self, CoinStore};
use crate::world::{GameEvent, World};
use glamx::Vec2;
use kiss3d::scene::SceneNode3d;
use kiss3d::window::Window;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Window title.
pub const TITLE: &str = "Wildlands";

/// Installs the logger: `env_logger` on native targets (filtered by
/// `RUST_LOG`, `info` by default), the browser console on wasm.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        let _ = env_logger::Builder::from_env(env).try_init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"a logger was already installed".into());
        }
    }
}

/// The coin store of the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Box<dyn CoinStore> {
    let store = storage::FileCoinStore::from_env();
    log::info!("saving coins to {}", store.path().display());
    Box::new(store)
}

/// The coin store of the current platform.
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Box<dyn CoinStore> {
    Box::new(storage::LocalCoinStore::new())
}

/// Persists the coin counter if this frame changed it.
pub fn persist_coins(store: &dyn CoinStore, events: &[GameEvent]) {
    let latest = events.iter().rev().find_map(|e| match e {
        GameEvent::CoinsChanged(coins) => Some(*coins),
        _ => None,
    });

    if let Some(coins) = latest {
        if let Err(e) = store.save(coins) {
            log::warn!("could not save {} coins: {}", coins, e);
        }
    }
}

/// Opens the window and plays until it is closed.
pub async fn run(config: GameConfig, store: Box<dyn CoinStore>) {
    let coins = storage::load_or_default(store.as_ref());
    let mut world = World::generate(config.clone(), StdRng::from_os_rng(), coins);

    let mut window = Window::new(TITLE).await;
    window.set_background_color(color::SKY);
    let mut scene = SceneNode3d::empty();
    let mut camera = FollowCamera3d::new(config.camera_offset);
    camera.follow(world.focus());

    let mut view = SceneView::new(&mut scene, &world);
    let mut input = InputState::new();
    let mut hud = Hud::new();

    while window.render_3d(&mut scene, &mut camera).await {
        let size = window.size();
        input.set_screen_size(Vec2::new(size[0] as f32, size[1] as f32));
        #[cfg(target_arch = "wasm32")]
        input.set_touch_scale(window.scale_factor() as f32);

        for event in window.events().iter() {
            input.handle_event(&event.value);
        }

        let controls = input.controls();

        if world.is_game_over() && controls.restart {
            view.clear();
            world.restart();
            view = SceneView::new(&mut scene, &world);
        } else {
            let events = world.step(&controls);
            persist_coins(store.as_ref(), &events);
        }

        view.sync(&world);
        view.apply_lighting(&mut window, world.day_night());
        camera.follow(world.focus());
        hud.draw(&mut window, &world);
    }

    log::info!(
        "window closed at level {} with {} coins",
        world.player.level,
        world.player.coins
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryCoinStore;

    #[test]
    fn persists_the_latest_coin_total() {
        let store = MemoryCoinStore::new(0);
        persist_coins(
            &store,
            &[
                GameEvent::CoinsChanged(10),
                GameEvent::GameOver,
                GameEvent::CoinsChanged(20),
            ],
        );
        assert_eq!(store.load().unwrap(), 20);
    }

    #[test]
    fn untouched_coins_are_not_written() {
        let store = MemoryCoinStore::new(3);
        persist_coins(&store, &[GameEvent::EnteredVehicle, GameEvent::LevelUp(2)]);
        assert_eq!(store.load().unwrap(), 3);
    }
}
