use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use internal::domain::{command::Command, error::DecodeError, message::CommandMessage};

/// Wire shape of a command payload: a required tag, a nested map of
/// variant-specific arguments, and optional envelope metadata.
#[derive(Deserialize, Serialize, Debug)]
pub struct CommandEvent {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub sent_at: Option<OffsetDateTime>,
    #[serde(default = "CommandEvent::default_version")]
    pub version: u32,
    pub command_type: String,
    #[serde(default)]
    pub command_arguments: Value,
}

#[derive(Deserialize, Debug)]
struct PowerArguments {
    state: String,
}
#[derive(Deserialize, Debug)]
struct BrightnessArguments {
    brightness: u8,
}
#[derive(Deserialize, Debug)]
struct ColorArguments {
    red: u8,
    green: u8,
    blue: u8,
}

impl TryFrom<&async_nats::jetstream::Message> for CommandEvent {
    type Error = DecodeError;

    fn try_from(value: &async_nats::jetstream::Message) -> Result<Self, Self::Error> {
        Self::parse(value.payload.as_ref())
    }
}

impl CommandEvent {
    pub fn parse(payload: &[u8]) -> Result<CommandEvent, DecodeError> {
        let utf8_str = std::str::from_utf8(payload)
            .map_err(|e| DecodeError::MalformedArguments(format!("payload is not UTF-8: {e}")))?;
        serde_json::from_str(utf8_str)
            .map_err(|e| DecodeError::MalformedArguments(format!("payload is not a command event: {e}")))
    }

    fn default_version() -> u32 {
        1
    }

    // The tag decides the variant before any argument is looked at, an
    // unknown tag never falls back to a default variant.
    fn command(raw_kind: &str, arguments: Value) -> Result<Command, DecodeError> {
        match raw_kind.to_lowercase().as_str() {
            "set_power" => {
                let args: PowerArguments = Self::arguments("set_power", arguments)?;
                match args.state.to_lowercase().as_str() {
                    "on" => Ok(Command::SetPower { on: true }),
                    "off" => Ok(Command::SetPower { on: false }),
                    other => Err(DecodeError::MalformedArguments(format!(
                        "set_power: unsupported state {other:?}"
                    ))),
                }
            }
            "set_brightness" => {
                let args: BrightnessArguments = Self::arguments("set_brightness", arguments)?;
                Ok(Command::SetBrightness { level: args.brightness })
            }
            "set_color" => {
                let args: ColorArguments = Self::arguments("set_color", arguments)?;
                Ok(Command::SetColor {
                    red: args.red,
                    green: args.green,
                    blue: args.blue,
                })
            }
            _ => Err(DecodeError::UnknownCommandKind(raw_kind.to_string())),
        }
    }

    fn arguments<T: serde::de::DeserializeOwned>(kind: &str, arguments: Value) -> Result<T, DecodeError> {
        serde_json::from_value(arguments).map_err(|e| DecodeError::MalformedArguments(format!("{kind}: {e}")))
    }
}

impl TryFrom<CommandEvent> for CommandMessage {
    type Error = DecodeError;

    fn try_from(event: CommandEvent) -> Result<Self, Self::Error> {
        CommandEvent::command(&event.command_type, event.command_arguments).map(|command| CommandMessage {
            id: event.id,
            sent_at: event.sent_at,
            version: event.version,
            command,
        })
    }
}
