use crate::domain::command::Command;

pub trait CommandDispatcherDriverPort {
    /// Runs the one handler matching the command's variant. The dispatcher
    /// has no failure mode of its own; any error comes from the hardware
    /// port behind the handler.
    fn dispatch(&self, command: Command) -> impl Future<Output = anyhow::Result<()>>;
}
