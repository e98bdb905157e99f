use std::sync::Arc;

use log::debug;

use crate::{
    domain::command::Command,
    port::{command::CommandDispatcherDriverPort, light::LightControlPort},
};

/// Routes each command to the one hardware capability matching its variant.
/// The hardware handle is set at construction and never changes, so the
/// service can be shared read-only between any number of producers.
pub struct CommandDispatcherService<H: LightControlPort> {
    hardware: Arc<H>,
}

impl<H: LightControlPort> CommandDispatcherDriverPort for CommandDispatcherService<H> {
    async fn dispatch(&self, command: Command) -> anyhow::Result<()> {
        debug!("Dispatching {} command", command.kind());
        // Exhaustive over the closed command set, no default arm.
        match command {
            Command::SetPower { on } => self.hardware.power(on).await,
            Command::SetBrightness { level } => self.hardware.set_brightness(level).await,
            Command::SetColor { red, green, blue } => self.hardware.set_color(red, green, blue).await,
        }
    }
}

impl<H: LightControlPort> CommandDispatcherService<H> {
    pub fn new(hardware: Arc<H>) -> Self {
        CommandDispatcherService { hardware }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::{
        domain::command::Command,
        port::{command::CommandDispatcherDriverPort, light::MockLightControlPort},
        service::command_dispatcher_service::CommandDispatcherService,
    };

    #[tokio::test]
    async fn should_dispatch_set_power_to_its_handler() {
        let mut hardware = MockLightControlPort::new();
        hardware
            .expect_power()
            .withf(|&on| on)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let service = CommandDispatcherService::new(Arc::new(hardware));
        service.dispatch(Command::SetPower { on: true }).await.unwrap();
    }

    #[tokio::test]
    async fn should_dispatch_set_brightness_with_the_decoded_level() {
        let mut hardware = MockLightControlPort::new();
        hardware
            .expect_set_brightness()
            .withf(|&level| level == 70)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let service = CommandDispatcherService::new(Arc::new(hardware));
        service
            .dispatch(Command::SetBrightness { level: 70 })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_dispatch_set_color_with_the_decoded_channels() {
        let mut hardware = MockLightControlPort::new();
        hardware
            .expect_set_color()
            .withf(|&red, &green, &blue| (red, green, blue) == (11, 22, 33))
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(()) }));
        let service = CommandDispatcherService::new(Arc::new(hardware));
        service
            .dispatch(Command::SetColor {
                red: 11,
                green: 22,
                blue: 33,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_invoke_exactly_one_handler_per_dispatch() {
        let mut hardware = MockLightControlPort::new();
        hardware.expect_power().never();
        hardware.expect_set_color().never();
        hardware
            .expect_set_brightness()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let service = CommandDispatcherService::new(Arc::new(hardware));
        service
            .dispatch(Command::SetBrightness { level: 1 })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_surface_the_handlers_own_error() {
        let mut hardware = MockLightControlPort::new();
        hardware
            .expect_power()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("bulb unreachable")) }));
        let service = CommandDispatcherService::new(Arc::new(hardware));
        let err = service
            .dispatch(Command::SetPower { on: false })
            .await
            .unwrap_err();
        assert_eq!(format!("{err}"), "bulb unreachable");
    }
}
