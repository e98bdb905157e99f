/// Closed set of commands the light understands. Decoding is the only way a
/// value of this type comes into existence, so every variant reaching
/// dispatch is fully populated.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetPower { on: bool },
    SetBrightness { level: u8 },
    SetColor { red: u8, green: u8, blue: u8 },
}

impl Command {
    pub fn kind(&self) -> &'static str {
        match self {
            Command::SetPower { .. } => "set_power",
            Command::SetBrightness { .. } => "set_brightness",
            Command::SetColor { .. } => "set_color",
        }
    }
}
