use std::{
    collections::VecDeque,
    sync::{LazyLock, Mutex},
};

use crate::{
    Page,
    data::{
        food::FoodType,
        ingredient::{CategoryFilter, IngredientType},
    },
    i18n::Language,
};

/// User actions, queued by the UI and drained once per frame.
/// It's assumed that the action has been validated at this point, except
/// for adding to a full pot, which the state rejects with a notice.
#[derive(Debug)]
pub enum Message {
    AddIngredient(IngredientType),
    RemoveIngredient(usize),
    ClearPot,
    TogglePot,
    SetFilter(CategoryFilter),
    SetLanguage(Language),
    SetPage(Page),
    // Jump to a dish's entry on the foods page
    ShowFood(FoodType),
}

pub struct MessageQueue {
    queue: Mutex<VecDeque<Message>>,
}

impl Default for MessageQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageQueue {
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
        }
    }

    pub fn send(&self, message: Message) {
        self.queue
            .lock()
            .expect("Failed to lock message queue")
            .push_back(message);
    }

    pub fn take(&self) -> Option<Message> {
        self.queue
            .lock()
            .expect("Failed to lock message queue")
            .pop_front()
    }
}

pub static MESSAGE_QUEUE: LazyLock<MessageQueue> = LazyLock::new(MessageQueue::new);

pub trait Subscriber {
    fn handle_message(&mut self, event: &Message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let queue = MessageQueue::new();
        queue.send(Message::TogglePot);
        queue.send(Message::ClearPot);

        assert!(matches!(queue.take(), Some(Message::TogglePot)));
        assert!(matches!(queue.take(), Some(Message::ClearPot)));
        assert!(queue.take().is_none());
    }
}
