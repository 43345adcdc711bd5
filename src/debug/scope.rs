use std::fmt::Display;

use crate::collections::contiguous::Array;

/// A stack of on/off states for debug output, starting with a single "off" entry.
///
/// Only the top entry decides whether messages are emitted. Callers that want to change the state
/// temporarily should [`push_on`](DebugScope::push_on) or [`push_off`](DebugScope::push_off) and
/// [`pop`](DebugScope::pop) afterwards, which restores whatever the state was before. The base
/// entry is never removed.
///
/// # Examples
/// ```
/// # use sx::debug::DebugScope;
/// let mut scope = DebugScope::new();
/// assert!(!scope.is_active());
///
/// scope.push_on();
/// assert!(scope.is_active());
/// scope.debug("only emitted while active");
///
/// scope.pop();
/// assert!(!scope.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugScope {
    stack: Array<bool>,
}

impl DebugScope {
    pub fn new() -> DebugScope {
        DebugScope {
            stack: Array::from([false]),
        }
    }

    /// Returns true if debug messages are currently emitted.
    pub fn is_active(&self) -> bool {
        self.stack.peek().map(|active| *active).value_or(false)
    }

    /// Switches the current state on, replacing it.
    pub fn set_on(&mut self) {
        self.set(true);
    }

    /// Switches the current state off, replacing it.
    pub fn set_off(&mut self) {
        self.set(false);
    }

    /// Switches debug output on until the matching [`pop`](DebugScope::pop).
    pub fn push_on(&mut self) {
        self.stack.push(true);
    }

    /// Switches debug output off until the matching [`pop`](DebugScope::pop).
    pub fn push_off(&mut self) {
        self.stack.push(false);
    }

    /// Restores the state from before the last push. Does nothing if only the base state remains.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            let _ = self.stack.pop();
        }
    }

    /// Returns the number of states on the stack, including the base state.
    pub const fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Emits `message` at debug level if the scope is active.
    pub fn debug(&self, message: impl Display) {
        if self.is_active() {
            log::debug!("{message}");
        }
    }

    fn set(&mut self, active: bool) {
        let _ = self.stack.pop();
        self.stack.push(active);
    }
}

impl Default for DebugScope {
    fn default() -> Self {
        Self::new()
    }
}
