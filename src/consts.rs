/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only pets API used when neither config nor CLI override it
pub(crate) const DEFAULT_API_URL: &str =
    "https://my-json-server.typicode.com/Feverup/fever_pets_data";

/// Pets per page in the catalog listing
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 10;

/// Directory name under ~/.cache and ~/.config
pub(crate) const APP_DIR: &str = "fever-pets";
