//! Conversation history and context for the chat REPL

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Maximum number of conversation turns to keep in history
const MAX_HISTORY_SIZE: usize = 50;

/// A single turn in the conversation
#[derive(Debug, Clone)]
pub struct ConversationTurn {
    /// User's input
    pub user_input: String,
    /// Assistant's response
    pub assistant_response: String,
    /// Stock symbols mentioned in this turn
    pub symbols: Vec<String>,
    /// Timestamp of the turn
    pub timestamp: DateTime<Utc>,
}

/// Bounded history plus the symbol the conversation is currently about
///
/// Follow-up questions that name no ticker ("and its sentiment?") reuse the
/// current symbol.
#[derive(Debug, Default)]
pub struct ConversationManager {
    history: VecDeque<ConversationTurn>,
    current_symbol: Option<String>,
}

impl ConversationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished turn and update the current symbol
    pub fn add_turn(&mut self, user_input: String, response: String, symbols: Vec<String>) {
        if let Some(symbol) = symbols.first() {
            self.current_symbol = Some(symbol.clone());
        }

        self.history.push_back(ConversationTurn {
            user_input,
            assistant_response: response,
            symbols,
            timestamp: Utc::now(),
        });

        while self.history.len() > MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
    }

    /// The symbol the conversation is currently about, if any
    pub fn current_symbol(&self) -> Option<&str> {
        self.current_symbol.as_deref()
    }

    /// All retained turns, oldest first
    pub fn history(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.history.iter()
    }
}
