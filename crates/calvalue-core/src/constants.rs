/// Prefix shared by experimental property, parameter and value names.
pub const EXTENSION_PREFIX: &str = "X-";

/// Environment variable prefix read by the configuration loader.
pub const ENV_PREFIX: &str = "CALVALUE";
/// Separator between nested configuration keys in environment variables.
pub const ENV_SEPARATOR: &str = "__";
/// Example variable overriding the quoting ceiling, shown in error messages.
pub const ENV_QUOTE_MAX_ITERATIONS: &str =
    const_str::concat!(ENV_PREFIX, ENV_SEPARATOR, "CODEC", ENV_SEPARATOR, "QUOTE_MAX_ITERATIONS");

/// Optional configuration file, looked up relative to the working directory.
pub const CONFIG_FILE_STEM: &str = "calvalue";
pub const CONFIG_FILE_NAME: &str = const_str::concat!(CONFIG_FILE_STEM, ".toml");

/// Upper bound on characters visited by a single TEXT quoting pass.
pub const DEFAULT_QUOTE_MAX_ITERATIONS: usize = 1024 * 1024 * 10;

/// Digits printed after the decimal point for FLOAT values.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;
