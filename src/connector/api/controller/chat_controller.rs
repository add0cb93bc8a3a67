use anyhow::Result;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn chat(&self, message: String) -> Result<String> {
        let use_case = self.container.relay_use_case();
        let exchange = use_case.execute(&message).await?;
        Ok(exchange.display_text())
    }
}
