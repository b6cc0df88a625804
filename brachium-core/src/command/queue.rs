//! Bounded FIFO of pending commands

use heapless::Deque;

use brachium_protocol::Command;

/// Pending commands held by the coordinator
pub const COMMAND_QUEUE_CAPACITY: usize = 15;

/// Command queue errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// No room; the command was not queued
    Full,
}

/// Fixed-capacity command FIFO
#[derive(Debug)]
pub struct CommandQueue<const N: usize = COMMAND_QUEUE_CAPACITY> {
    inner: Deque<Command, N>,
}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CommandQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    /// Append a command, leaving the queue unchanged when full
    pub fn push(&mut self, command: Command) -> Result<(), QueueError> {
        self.inner.push_back(command).map_err(|_| QueueError::Full)
    }

    /// Take the oldest command
    pub fn pop(&mut self) -> Option<Command> {
        self.inner.pop_front()
    }

    pub fn peek(&self) -> Option<&Command> {
        self.inner.front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue: CommandQueue = CommandQueue::new();
        queue.push(Command::g(0)).unwrap();
        queue.push(Command::g(4)).unwrap();
        queue.push(Command::m(17)).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&Command::g(0)));
        assert_eq!(queue.pop(), Some(Command::g(0)));
        assert_eq!(queue.pop(), Some(Command::g(4)));
        assert_eq!(queue.pop(), Some(Command::m(17)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_rejects_and_keeps_contents() {
        let mut queue: CommandQueue = CommandQueue::new();
        assert_eq!(queue.capacity(), 15);

        for n in 0..15 {
            queue.push(Command::g(n)).unwrap();
        }
        assert!(queue.is_full());
        assert_eq!(queue.push(Command::m(18)), Err(QueueError::Full));
        assert_eq!(queue.len(), 15);

        for n in 0..15 {
            assert_eq!(queue.pop(), Some(Command::g(n)));
        }
    }

    #[test]
    fn test_clear() {
        let mut queue = CommandQueue::<2>::new();
        queue.push(Command::g(1)).unwrap();
        queue.push(Command::g(1)).unwrap();
        assert!(queue.push(Command::g(1)).is_err());

        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.push(Command::g(1)).is_ok());
    }
}
