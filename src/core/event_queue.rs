use crate::core::event::Action;
use crate::terminal::KeyEvent;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Action(Action),
}

/// FIFO for events produced by the terminal and by reducer effects.
/// Everything is processed synchronously within one tick.
pub struct EventQueue {
    queue: VecDeque<AppEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn next(&mut self) -> Option<AppEvent> {
        self.queue.pop_front()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
