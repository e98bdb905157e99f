use anyhow::Result;

use async_nats::jetstream::{self, stream};

use crate::config::nats_config::ConsumerConfig;

pub struct NatsConsumer {
    consumer_config: ConsumerConfig,
}

impl NatsConsumer {
    pub fn new(consumer_config: ConsumerConfig) -> NatsConsumer {
        NatsConsumer { consumer_config }
    }

    pub async fn create_consumer(
        &self,
        context: &jetstream::Context,
    ) -> Result<jetstream::consumer::Consumer<jetstream::consumer::pull::Config>> {
        context
            .create_stream(self.stream_config())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create stream: {}", e))?
            .create_consumer(self.pull_config())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create consumer: {}", e))
    }

    // WorkQueue retention hands every command payload to a single consumer.
    fn stream_config(&self) -> jetstream::stream::Config {
        jetstream::stream::Config {
            name: self.consumer_config.name.to_string(),
            subjects: self.consumer_config.subjects.clone(),
            retention: stream::RetentionPolicy::WorkQueue,
            ..Default::default()
        }
    }
    fn pull_config(&self) -> jetstream::consumer::pull::Config {
        jetstream::consumer::pull::Config {
            durable_name: Some(self.consumer_config.name.to_string()),
            filter_subjects: self.consumer_config.subjects.to_owned(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn consumer_config() -> ConsumerConfig {
        ConsumerConfig {
            subjects: vec!["light.commands.>".to_string()],
            name: "lumen-controller".to_string(),
        }
    }

    #[test]
    fn should_create_pull_config() {
        let config = consumer_config();
        let nats = NatsConsumer::new(config.clone());
        let pull_config = nats.pull_config();
        assert_eq!(pull_config.durable_name.unwrap(), config.name);
        assert_eq!(pull_config.filter_subjects, config.subjects);
    }

    #[test]
    fn should_create_stream_config() {
        let config = consumer_config();
        let nats = NatsConsumer::new(config.clone());
        let stream_config = nats.stream_config();
        assert_eq!(stream_config.retention, stream::RetentionPolicy::WorkQueue);
        assert_eq!(stream_config.name, config.name);
        assert_eq!(stream_config.subjects, config.subjects);
    }
}
