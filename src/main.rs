use std::future::IntoFuture;

use motbot::{
    bot, config::Config, error::AppError, router, scheduler::credential_expiry, startup,
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env_and_args(std::env::args().skip(1))?;
    let state = BotState::new();

    tracing::info!("Starting motbot");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, state.clone()).await?;

    // Held for the life of the process so the sweep keeps running
    let _scheduler = credential_expiry::start_scheduler(state, discord_http).await?;

    let listener = startup::bind_listener(config.port).await?;
    let app = router::router(&config.static_dir);

    // Either the gateway connection or the HTTP server ending takes the process down
    tokio::select! {
        result = bot::start::start_bot(bot_client) => {
            tracing::error!("Discord bot stopped");
            result?;
        }
        result = axum::serve(listener, app).into_future() => {
            tracing::error!("HTTP server stopped");
            result?;
        }
    }

    Ok(())
}
