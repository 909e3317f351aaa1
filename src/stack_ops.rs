//! Bounded stacks for conversion and evaluation.
//!
//! Both pipeline stages run on a fixed-capacity LIFO: the converter keeps
//! pending operators on a token stack, the evaluator keeps intermediate
//! results on a value stack. A push against a full stack fails without
//! modifying the stack; pop and peek on an empty stack return `None`
//! without modifying it. Each stack instance is owned by a single
//! converter or evaluator call and dropped on every exit path.

use alloc::vec::Vec;

use crate::Real;
use crate::error::{Result, RpnError};
use crate::types::{MAX_STACK_SIZE, Token};

/// Fixed-capacity LIFO container.
#[derive(Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
    name: &'static str,
}

/// Operator/token stack used during infix→postfix conversion.
pub type TokenStack = BoundedStack<Token>;

/// Numeric stack used during postfix evaluation.
pub type ValueStack = BoundedStack<Real>;

impl<T> BoundedStack<T> {
    pub fn with_capacity(capacity: usize, name: &'static str) -> Self {
        BoundedStack {
            items: Vec::new(),
            capacity,
            name,
        }
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(RpnError::CapacityExceeded(self.name));
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl TokenStack {
    pub fn for_conversion() -> Self {
        BoundedStack::with_capacity(MAX_STACK_SIZE, "operator stack")
    }
}

impl ValueStack {
    pub fn for_evaluation() -> Self {
        BoundedStack::with_capacity(MAX_STACK_SIZE, "value stack")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = BoundedStack::with_capacity(4, "test");
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_empty_stack_signals_without_mutation() {
        let mut stack: BoundedStack<i32> = BoundedStack::with_capacity(4, "test");
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_full_stack_rejects_push_without_mutation() {
        let mut stack = BoundedStack::with_capacity(2, "test");
        stack.push(10).unwrap();
        stack.push(20).unwrap();

        assert_eq!(
            stack.push(30).unwrap_err(),
            RpnError::CapacityExceeded("test")
        );
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&20));
    }

    #[test]
    fn test_pipeline_stacks_use_configured_capacity() {
        let mut stack = ValueStack::for_evaluation();
        for i in 0..MAX_STACK_SIZE {
            stack.push(i as Real).unwrap();
        }
        assert!(stack.push(0.0).is_err());
    }
}
