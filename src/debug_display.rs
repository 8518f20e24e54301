use core::str::FromStr;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidFlag,
}

/// Whether connection and push status is shown on the LCD.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DebugDisplay {
    #[default]
    Enabled,
    Disabled,
}

impl DebugDisplay {
    pub fn is_enabled(self) -> bool {
        self == DebugDisplay::Enabled
    }

    pub fn as_flag(self) -> &'static str {
        match self {
            DebugDisplay::Enabled => "1",
            DebugDisplay::Disabled => "0",
        }
    }
}

impl FromStr for DebugDisplay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(DebugDisplay::Enabled),
            "0" => Ok(DebugDisplay::Disabled),
            _ => Err(Error::InvalidFlag),
        }
    }
}
