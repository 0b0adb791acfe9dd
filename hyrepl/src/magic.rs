/// Name of the environment variable containing the path to the format configuration file.
/// If not set, defaults to
///  (1) on Linux and macOS: `$XDG_CONFIG_HOME/hyrepl/format.toml` or `$HOME/.config/hyrepl/format.toml`
///  (2) on Windows: `%APPDATA%\hyrepl\format.toml`
pub const ENV_FORMAT_CONFIG_PATH: &str = "HYREPL_FORMAT_CONFIG";

/// Number of columns added per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Number of collections that may be open at once before nested values are truncated.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Rendering of a value whose content is not determined yet.
pub const UNKNOWN_MARKER: &str = "(unknown)";

/// Rendering of an aggregate nested deeper than the configured depth.
pub const TRUNCATED_MARKER: &str = "(truncated)";
