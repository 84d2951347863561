use std::env;

/// Default external converter program.
pub const DEFAULT_TOOL: &str = "notedown";

/// Name of the converter program to invoke, taken from `MD2NB_TOOL` when
/// set. The CLI `--tool` flag overrides this.
pub fn tool() -> String {
    env::var("MD2NB_TOOL").unwrap_or_else(|_| DEFAULT_TOOL.to_string())
}
