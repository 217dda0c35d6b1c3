//! Runtime limits and flags.

pub const DEFAULT_MAX_STACK_SIZE: usize = 1024;
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Configuration passed to a [`Runtime`](crate::Runtime) at construction.
///
/// # Example
///
/// ```
/// use bcvm_vm::VmConfig;
///
/// let config = VmConfig::default().max_call_depth(16).trace(true);
/// assert_eq!(config.max_stack_size, 1024);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VmConfig {
    /// Per-frame operand stack limit.
    pub max_stack_size: usize,
    /// Maximum number of simultaneously active frames.
    pub max_call_depth: usize,
    /// Whether hosts running several programs stop at the first failure.
    pub halt_on_error: bool,
    /// Log every executed instruction at trace level.
    pub trace: bool,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            halt_on_error: true,
            trace: false,
        }
    }
}

impl VmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_stack_size(mut self, size: usize) -> Self {
        self.max_stack_size = size;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn halt_on_error(mut self, halt: bool) -> Self {
        self.halt_on_error = halt;
        self
    }

    #[must_use]
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
