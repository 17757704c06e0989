//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Store Style Editor";

/// The binary name of the application (used in command examples and paths).
pub const APP_BINARY_NAME: &str = "storestyle";
