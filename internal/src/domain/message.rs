use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::command::Command;

/// A decoded command with the envelope metadata the producer may attach.
/// The metadata only feeds logging; the command itself carries no identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandMessage {
    pub id: Option<Uuid>,
    pub sent_at: Option<OffsetDateTime>,
    pub version: u32,
    pub command: Command,
}
