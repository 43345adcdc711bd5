#![cfg(test)]

use super::*;

#[test]
fn test_default_state() {
    let scope = DebugScope::default();
    assert!(!scope.is_active(), "A new scope should start switched off.");
    assert_eq!(scope.depth(), 1);
    assert_eq!(scope, DebugScope::new());
}

#[test]
fn test_set_replaces_top() {
    let mut scope = DebugScope::new();

    scope.set_on();
    assert!(scope.is_active());
    assert_eq!(scope.depth(), 1, "Setting the state should not grow the stack.");

    scope.set_off();
    assert!(!scope.is_active());
    assert_eq!(scope.depth(), 1);
}

#[test]
fn test_push_and_pop() {
    let mut scope = DebugScope::new();

    scope.push_on();
    scope.push_off();
    assert!(!scope.is_active());
    assert_eq!(scope.depth(), 3);

    scope.pop();
    assert!(scope.is_active(), "Popping should restore the previous state.");

    scope.set_off();
    scope.pop();
    assert!(!scope.is_active());
    assert_eq!(scope.depth(), 1);
}

#[test]
fn test_base_state_is_kept() {
    let mut scope = DebugScope::new();
    scope.set_on();

    scope.pop();
    scope.pop();
    assert_eq!(scope.depth(), 1, "The base state should never be popped.");
    assert!(scope.is_active(), "Popping at the base should leave the state alone.");

    scope.debug(format_args!("{} still works", "debug"));
}

#[test]
fn test_scopes_are_independent() {
    let mut first = DebugScope::new();
    let second = first.clone();

    first.push_on();
    assert!(first.is_active());
    assert!(!second.is_active(), "Scopes should not share state.");
}
