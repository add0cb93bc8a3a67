use anyhow::Result;

use crate::ChatHistoryRecord;

use super::super::Container;

pub struct HistoryController<'a> {
    container: &'a Container,
}

impl<'a> HistoryController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self, limit: usize) -> Result<String> {
        let use_case = self.container.history_use_case();
        let records = use_case.list_recent(limit).await?;
        let total = use_case.count().await?;
        Ok(self.format_list(&records, total))
    }

    pub async fn show(&self, id: i64) -> Result<String> {
        let use_case = self.container.history_use_case();
        let record = use_case.get(id).await?;
        Ok(self.format_record(&record))
    }

    fn format_list(&self, records: &[ChatHistoryRecord], total: u64) -> String {
        if records.is_empty() {
            return "No chat history.".to_string();
        }

        let mut output = format!("Showing {} of {} exchanges:\n\n", records.len(), total);
        for record in records {
            output.push_str(&format!("  {}\n", record.display_line()));
        }
        output
    }

    fn format_record(&self, record: &ChatHistoryRecord) -> String {
        format!(
            "Exchange #{}\nTime: {}\n\nUser:\n{}\n\nReply:\n{}",
            record.id(),
            record.timestamp().to_rfc3339(),
            record.user_message(),
            record.llm_reply()
        )
    }
}
