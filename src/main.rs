use wildlands::app;
use wildlands::config::GameConfig;

#[kiss3d::main]
async fn main() {
    app::init_logging();
    let store = app::default_store();
    app::run(GameConfig::default(), store).await;
}
