/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `tessera init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Tessera configuration
# Location: ~/.config/tessera/config.toml

[log]
# Minimum log level: "trace", "debug", "info", "warn", or "error".
# RUST_LOG takes precedence when set; --verbose forces "debug".
level = "warn"

[output]
# How results are printed: "text" or "json". --json overrides this.
format = "text"
"##
    .to_string()
}
