use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, HistoryController};

pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    history_controller: HistoryController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            history_controller: HistoryController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Chat { message } => self.chat_controller.chat(message).await,
            Commands::History { limit } => self.history_controller.list(limit).await,
            Commands::Show { id } => self.history_controller.show(id).await,
        }
    }
}
