use std::sync::Arc;

use chatrelay::{ChatHistoryRepository, DuckdbChatHistoryRepository};
use tempfile::tempdir;

#[tokio::test]
async fn duckdb_chat_history_insert_returns_stored_record() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("chatrelay.duckdb");

    let repo = Arc::new(DuckdbChatHistoryRepository::new(&db_path).expect("duckdb init"));

    let record = repo.insert("2+2?", "4").await.expect("insert");
    assert_eq!(record.user_message(), "2+2?");
    assert_eq!(record.llm_reply(), "4");

    let found = repo
        .find_by_id(record.id())
        .await
        .expect("find_by_id")
        .expect("record exists");
    assert_eq!(found, record);
}

#[tokio::test]
async fn duckdb_chat_history_ids_are_distinct_and_increasing() {
    let repo = DuckdbChatHistoryRepository::in_memory().expect("duckdb init");

    let first = repo.insert("one", "1").await.expect("insert");
    let second = repo.insert("two", "2").await.expect("insert");
    let third = repo.insert("three", "3").await.expect("insert");

    assert!(first.id() < second.id());
    assert!(second.id() < third.id());
    assert!(first.timestamp() <= second.timestamp());
    assert!(second.timestamp() <= third.timestamp());
    assert_eq!(repo.count().await.expect("count"), 3);
}

#[tokio::test]
async fn duckdb_chat_history_rejects_empty_user_message() {
    let repo = DuckdbChatHistoryRepository::in_memory().expect("duckdb init");

    let err = repo.insert("", "reply").await.unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(repo.count().await.expect("count"), 0);
}

#[tokio::test]
async fn duckdb_chat_history_accepts_empty_reply() {
    let repo = DuckdbChatHistoryRepository::in_memory().expect("duckdb init");

    let record = repo.insert("hello", "").await.expect("insert");
    assert_eq!(record.llm_reply(), "");
}

#[tokio::test]
async fn duckdb_chat_history_list_recent_newest_first() {
    let repo = DuckdbChatHistoryRepository::in_memory().expect("duckdb init");
    for i in 0..4 {
        repo.insert(&format!("message {}", i), "ok").await.expect("insert");
    }

    let recent = repo.list_recent(3).await.expect("list_recent");
    let messages: Vec<&str> = recent.iter().map(|r| r.user_message()).collect();
    assert_eq!(messages, vec!["message 3", "message 2", "message 1"]);

    assert!(repo.list_recent(0).await.expect("list_recent").is_empty());
    assert!(repo.find_by_id(999).await.expect("find_by_id").is_none());
}

#[tokio::test]
async fn duckdb_chat_history_survives_reopen() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("chatrelay.duckdb");

    let first_id = {
        let repo = DuckdbChatHistoryRepository::new(&db_path).expect("duckdb init");
        repo.insert("persist me", "done").await.expect("insert").id()
    };

    let repo = DuckdbChatHistoryRepository::new(&db_path).expect("duckdb reopen");
    let record = repo
        .find_by_id(first_id)
        .await
        .expect("find_by_id")
        .expect("record exists");
    assert_eq!(record.user_message(), "persist me");

    let next = repo.insert("after reopen", "ok").await.expect("insert");
    assert!(next.id() > first_id);
}

#[tokio::test]
async fn duckdb_chat_history_shares_connection() {
    let repo = DuckdbChatHistoryRepository::in_memory().expect("duckdb init");
    repo.insert("shared", "yes").await.expect("insert");

    let other = DuckdbChatHistoryRepository::with_connection(repo.shared_connection())
        .await
        .expect("with_connection");
    assert_eq!(other.count().await.expect("count"), 1);
}
