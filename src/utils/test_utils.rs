#[cfg(test)]
use crate::core::app::App;
#[cfg(test)]
use crate::core::message::{Message, Role};
#[cfg(test)]
use ratatui::prelude::Size;
#[cfg(test)]
use std::collections::VecDeque;

#[cfg(test)]
pub fn create_test_app() -> App {
    let mut app = App::new();
    // Geometry-dependent paths want a plausible terminal before any draw.
    app.ui.last_term_size = Size::new(120, 40);
    app
}

#[cfg(test)]
pub fn create_test_message(role: Role, content: &str) -> Message {
    Message::new(role, content)
}

#[cfg(test)]
pub fn create_test_messages() -> VecDeque<Message> {
    let mut messages = VecDeque::new();
    messages.push_back(create_test_message(Role::User, "Hello"));
    messages.push_back(create_test_message(Role::Assistant, "Hi there!"));
    messages.push_back(create_test_message(Role::User, "How are you?"));
    messages.push_back(create_test_message(
        Role::Assistant,
        "I'm doing well, thank you for asking!",
    ));
    messages
}
