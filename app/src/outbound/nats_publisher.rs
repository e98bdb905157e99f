use async_nats::Client;
use internal::port::light::LightControlPort;
use log::debug;
use serde_json::json;

use crate::config::nats_config::PublisherConfig;

pub struct NatsPublisher {
    client: Client,
    publisher_config: PublisherConfig,
}

const DEVICE_MODEL: &str = "shellycolorbulb";

impl NatsPublisher {
    pub fn new(client: Client, publisher_config: PublisherConfig) -> Self {
        NatsPublisher {
            publisher_config,
            client,
        }
    }
}

//TODO V2 should have one publisher per supported device family (Shelly models, Philips ...)
impl LightControlPort for NatsPublisher {
    async fn power(&self, on: bool) -> anyhow::Result<()> {
        self.publish(json!({ "turn": if on { "on" } else { "off" } })).await
    }

    async fn set_brightness(&self, level: u8) -> anyhow::Result<()> {
        self.publish(json!({ "brightness": level })).await
    }

    async fn set_color(&self, red: u8, green: u8, blue: u8) -> anyhow::Result<()> {
        self.publish(json!({ "red": red, "green": green, "blue": blue })).await
    }
}

impl NatsPublisher {
    async fn publish(&self, payload: serde_json::Value) -> anyhow::Result<()> {
        let topic = Self::build_topic(
            &self.publisher_config.command_topic_template,
            DEVICE_MODEL,
            &self.publisher_config.device_id,
        );
        debug!("Publishing {payload} to {topic}");
        self.client
            .publish(topic, payload.to_string().into())
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }

    fn build_topic(template: &str, model: &str, deviceid: &str) -> String {
        template.replace("{model}", model).replace("{deviceid}", deviceid)
    }
}
