// src/config/consts.rs

// Platform
pub const PLATFORM_NAME: &str = "Facebook";
pub const PLATFORM_DOMAIN: &str = "facebook.com";
pub const ID_META_PROPERTY: &str = "al:ios:url";
pub const USERNAME_SKIP: &[&str] = &["profile.php", "people"];

// Net
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("fb_linkgen/", env!("CARGO_PKG_VERSION"));

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "settings.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_PREFIX: &str = "fb-linkgen";
pub const EXPORT_DATE_FORMAT: &str = "%d-%b-%Y";
pub const EXPORT_SUFFIX_LEN: usize = 4;
pub const SHEET_NAME: &str = "Links";
pub const SHEET_ZOOM: u16 = 150;
pub const TABLE_HEADER_ROW: u32 = 5; // 0-based; row 6 in the sheet
pub const TABLE_HEADERS: [&str; 2] = ["Link Type", "URL"];

// Window
pub const WINDOW_W: u32 = 800;
pub const WINDOW_H: u32 = 600;
