mod config;
mod inbound;
mod nats_client;
mod outbound;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use async_nats::jetstream;
use config::app_config::AppConfig;
use futures::TryStreamExt;
use inbound::model::event::CommandEvent;
use inbound::nats::NatsConsumer;
use internal::{
    domain::message::CommandMessage, port::command::CommandDispatcherDriverPort,
    service::command_dispatcher_service::CommandDispatcherService,
};
use log::{debug, error};
use nats_client::NatsClient;
use outbound::nats_publisher::NatsPublisher;
use utils::pem::PemUtils;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    PemUtils::init_provider();
    let conf = AppConfig::load("config.toml")?;
    let nats = NatsClient {
        client_config: conf.nats.client,
    };
    let client = nats.connect().await?;
    let consumer = NatsConsumer::new(conf.nats.consumer);
    let context = jetstream::new(client.clone());
    let consumer = consumer.create_consumer(&context).await?;

    let publisher = NatsPublisher::new(client, conf.nats.publisher);
    let dispatcher = CommandDispatcherService::new(Arc::new(publisher));

    loop {
        let mut messages = consumer.messages().await?;
        while let Some(input) = messages.try_next().await? {
            match CommandEvent::try_from(&input).and_then(CommandMessage::try_from) {
                Ok(message) => {
                    debug!(
                        "Received {} command (id: {:?}, version: {})",
                        message.command.kind(),
                        message.id,
                        message.version
                    );
                    dispatcher
                        .dispatch(message.command)
                        .await
                        .inspect(|_| debug!("Command dispatched"))
                        .inspect_err(|e| error!("Unable to control the light: {e}"))
                        .ok();
                }
                Err(e) => error!("Discarding command payload: {e}"),
            }
            input.ack().await.map_err(|e| anyhow::anyhow!(e))?;
        }
    }
}
