use serenity::prelude::*;
use slash_gate::commands::Registry;
use slash_gate::config::Config;
use slash_gate::error::BotError;
use slash_gate::event_handler::Handler;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    let dotenv_result = dotenv::dotenv();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to start the logger");

    if let Err(why) = dotenv_result {
        warn!("No .env file loaded: {}", why);
    }

    if let Err(why) = run().await {
        match &why {
            BotError::Config(inner) => error!("Invalid configuration: {}", inner),
            _ => error!("Client error: {:?}", why),
        }
    }
}

async fn run() -> Result<(), BotError> {
    let config = Config::from_env()?;

    let mut client = Client::builder(&config.token, GatewayIntents::GUILDS)
        .event_handler(Handler::new(config.dev_guild, Registry::default()))
        .await?;

    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Could not register ctrl+c handler");
        shard_manager.shutdown_all().await;
    });

    client.start().await?;

    Ok(())
}
