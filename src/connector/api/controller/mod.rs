pub mod chat_controller;
pub mod history_controller;

pub use chat_controller::ChatController;
pub use history_controller::HistoryController;
