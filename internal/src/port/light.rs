/// Capability handle onto the light hardware, one method per command
/// variant. Implementations own the transport to the device.
#[cfg_attr(test, mockall::automock)]
pub trait LightControlPort {
    fn power(&self, on: bool) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn set_brightness(&self, level: u8) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn set_color(&self, red: u8, green: u8, blue: u8) -> impl Future<Output = anyhow::Result<()>> + Send;
}
