//! Configuration file (TOML) parsing.
//!
//! ```toml
//! [limits]
//! max_stack_size = 1024
//! max_call_depth = 256
//!
//! [flags]
//! halt_on_error = true
//! trace = false
//! ```
//!
//! Every section and key is optional.

use std::path::Path;

use bcvm_vm::VmConfig;
use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    limits: LimitsSection,

    #[serde(default)]
    flags: FlagsSection,
}

/// The `[limits]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LimitsSection {
    max_stack_size: usize,
    max_call_depth: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        let defaults = VmConfig::default();
        Self {
            max_stack_size: defaults.max_stack_size,
            max_call_depth: defaults.max_call_depth,
        }
    }
}

/// The `[flags]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FlagsSection {
    halt_on_error: bool,
    trace: bool,
}

impl Default for FlagsSection {
    fn default() -> Self {
        let defaults = VmConfig::default();
        Self {
            halt_on_error: defaults.halt_on_error,
            trace: defaults.trace,
        }
    }
}

/// Load a configuration from a file path.
pub fn load_config(path: &Path) -> Result<VmConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_owned(),
        source: e,
    })?;

    parse_config(&content, path)
}

/// Parse a configuration from a string. `path` is only used in errors.
pub fn parse_config(content: &str, path: &Path) -> Result<VmConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_owned(),
        source: e,
    })?;

    validate(&file, path)?;

    Ok(VmConfig::new()
        .max_stack_size(file.limits.max_stack_size)
        .max_call_depth(file.limits.max_call_depth)
        .halt_on_error(file.flags.halt_on_error)
        .trace(file.flags.trace))
}

/// Apply the `run` command's flags on top of a loaded configuration.
///
/// Flags only ever switch behaviour on: `--trace` enables tracing and
/// `--keep-going` disables `halt_on_error`. Neither can undo a file setting
/// in the other direction.
pub fn apply_run_flags(config: VmConfig, trace: bool, keep_going: bool) -> VmConfig {
    let trace = trace || config.trace;
    let halt_on_error = config.halt_on_error && !keep_going;
    config.trace(trace).halt_on_error(halt_on_error)
}

fn validate(file: &ConfigFile, path: &Path) -> Result<(), ConfigError> {
    let limits = [
        ("limits.max_stack_size", file.limits.max_stack_size),
        ("limits.max_call_depth", file.limits.max_call_depth),
    ];
    for (field, value) in limits {
        if value == 0 {
            return Err(ConfigError::InvalidLimit {
                path: path.to_owned(),
                field,
            });
        }
    }
    Ok(())
}
