// Shared with build.rs, so no crate dependencies here.

/// Port of an HTTPS endpoint
pub const HTTPS_PORT: u16 = 443;

/// Push path used when none is configured
pub const DEFAULT_GC_PATH: &str = "/api/prom/push";
/// Push port used when none is configured
pub const DEFAULT_GC_PORT: u16 = HTTPS_PORT;
/// Debug display flag used when none is configured
pub const DEFAULT_LCD_SHOW_DEBUG_INFO: &str = "1";
