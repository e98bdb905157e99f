pub mod nats_publisher;
