//! Integration tests for [`link_handlers::LinkHandler`].
//!
//! HTTP downloads are served by a local mockito server; replies go to a recording MockBot; the download
//! directory is a TempDir so leftover files are observable.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use link_handlers::{messages, Downloader, LinkHandler, LinkOutcome, StartHandler};
use relay_core::{Chat, Handler, HandlerResponse, Message, User};
use tempfile::TempDir;

use mock_bot::MockBot;

const CHAT_ID: i64 = 456;

fn chat() -> Chat {
    Chat {
        id: CHAT_ID,
        chat_type: "private".to_string(),
    }
}

fn message(content: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: chat(),
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

fn handler(bot: Arc<MockBot>, dir: &Path) -> LinkHandler {
    let downloader = Downloader::new(Duration::from_secs(5)).expect("downloader");
    LinkHandler::new(bot, downloader, dir)
}

fn dir_is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

/// **Test: Successful relay sends exactly one file named after the sanitized URL, then removes it.**
#[tokio::test]
async fn test_relay_sends_sanitized_file_and_cleans_up() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/files/my-file-01.pdf")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body("%PDF-1.4 test body")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());
    let url = format!("{}/files/my-file-01.pdf", server.url());

    let outcome = handler.process(&chat(), &url).await;

    mock.assert_async().await;
    assert_eq!(
        outcome,
        LinkOutcome::FileSent {
            filename: "my_file_01.pdf".to_string()
        }
    );

    let documents = bot.documents();
    assert_eq!(documents.len(), 1);
    let sent = &documents[0];
    assert_eq!(sent.chat_id, CHAT_ID);
    assert_eq!(sent.document.file_name, "my_file_01.pdf");
    assert_eq!(
        sent.document.caption.as_deref(),
        Some(messages::caption("my_file_01.pdf").as_str())
    );
    assert_eq!(sent.contents, b"%PDF-1.4 test body");
    assert_eq!(sent.document.path, dir.path().join("my_file_01.pdf"));

    assert!(!sent.document.path.exists());
    assert!(dir_is_empty(dir.path()));
    assert_eq!(bot.texts(), vec![messages::DOWNLOADING.to_string()]);
}

/// **Test: Body larger than one chunk arrives intact.**
#[tokio::test]
async fn test_relay_streams_multi_chunk_body() {
    let body: Vec<u8> = (0..(link_handlers::CHUNK_SIZE * 3 + 17))
        .map(|i| (i % 251) as u8)
        .collect();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/big.bin")
        .with_status(200)
        .with_body(body.clone())
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());

    let outcome = handler
        .process(&chat(), &format!("{}/big.bin", server.url()))
        .await;

    assert!(matches!(outcome, LinkOutcome::FileSent { .. }));
    assert_eq!(bot.documents()[0].contents, body);
    assert!(dir_is_empty(dir.path()));
}

/// **Test: URL ending in `/` is relayed under the fallback name "file".**
#[tokio::test]
async fn test_relay_empty_segment_uses_fallback_name() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/")
        .with_status(200)
        .with_body("index")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());

    let outcome = handler
        .process(&chat(), &format!("{}/", server.url()))
        .await;

    assert_eq!(
        outcome,
        LinkOutcome::FileSent {
            filename: "file".to_string()
        }
    );
    assert_eq!(bot.documents()[0].document.file_name, "file");
}

/// **Test: Non-http(s) input is rejected without any network call or status message.**
#[tokio::test]
async fn test_invalid_url_rejected_without_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());
    let host_only = server.url().replace("http://", "");

    for input in [
        format!("{host_only}/file.zip"),
        format!("ftp://{host_only}/file.zip"),
        "hello there".to_string(),
    ] {
        let outcome = handler.process(&chat(), &input).await;
        assert_eq!(outcome, LinkOutcome::RejectedInvalidUrl, "input {input}");
    }

    mock.assert_async().await;
    assert!(bot.texts().is_empty());
    assert!(bot.documents().is_empty());
    assert!(dir_is_empty(dir.path()));
}

/// **Test: HTTP error status is reported as DownloadFailed; nothing is sent or left on disk.**
#[tokio::test]
async fn test_http_error_status_is_download_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/missing-file.pdf")
        .with_status(404)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());

    let outcome = handler
        .process(&chat(), &format!("{}/missing-file.pdf", server.url()))
        .await;

    match outcome {
        LinkOutcome::DownloadFailed(e) => assert!(e.contains("404"), "error was {e}"),
        other => panic!("expected DownloadFailed, got {other:?}"),
    }
    assert!(bot.documents().is_empty());
    assert!(dir_is_empty(dir.path()));
}

/// **Test: Connection failure is reported as DownloadFailed, including the OS-level cause.**
#[tokio::test]
async fn test_connection_failure_is_download_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());

    let outcome = handler
        .process(&chat(), &format!("http://{addr}/file.bin"))
        .await;

    match outcome {
        LinkOutcome::DownloadFailed(e) => {
            assert!(e.to_lowercase().contains("connection refused"), "error was {e}")
        }
        other => panic!("expected DownloadFailed, got {other:?}"),
    }
    assert!(bot.documents().is_empty());
    assert!(dir_is_empty(dir.path()));
}

/// **Test: Body cut short after the file was created: DownloadFailed, nothing sent, partial file removed.**
#[tokio::test]
async fn test_truncated_body_removes_partial_file() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = [0u8; 1024];
        let _ = stream.read(&mut request).unwrap();
        stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100000\r\nContent-Type: application/octet-stream\r\n\r\n")
            .unwrap();
        stream.write_all(&[7u8; 20000]).unwrap();
        stream.flush().unwrap();
    });

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());

    let outcome = handler
        .process(&chat(), &format!("http://{addr}/archive-part.bin"))
        .await;
    server.join().unwrap();

    match outcome {
        LinkOutcome::DownloadFailed(e) => assert!(!e.is_empty()),
        other => panic!("expected DownloadFailed, got {other:?}"),
    }
    assert!(bot.documents().is_empty());
    assert!(!dir.path().join("archive_part.bin").exists());
    assert!(dir_is_empty(dir.path()));
}

/// **Test: Malformed http URL is a DownloadFailed whose text names the cause, not just the error kind.**
#[tokio::test]
async fn test_malformed_url_reports_cause() {
    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());

    let outcome = handler.process(&chat(), "http://").await;

    match outcome {
        LinkOutcome::DownloadFailed(e) => {
            assert!(e.starts_with("builder error: "), "error was {e}")
        }
        other => panic!("expected DownloadFailed, got {other:?}"),
    }
    assert!(dir_is_empty(dir.path()));
}

/// **Test: Send failure is reported verbatim as SendFailed and the downloaded file is removed.**
#[tokio::test]
async fn test_send_failure_cleans_up_local_file() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/report-2024.csv")
        .with_status(200)
        .with_body("a,b\n1,2\n")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::failing_documents("Request Entity Too Large"));
    let handler = handler(bot.clone(), dir.path());

    let outcome = handler
        .process(&chat(), &format!("{}/report-2024.csv", server.url()))
        .await;

    assert_eq!(
        outcome,
        LinkOutcome::SendFailed("Request Entity Too Large".to_string())
    );
    assert!(!dir.path().join("report_2024.csv").exists());
    assert!(dir_is_empty(dir.path()));
}

/// **Test: Failing status messages do not change a successful outcome.**
#[tokio::test]
async fn test_status_message_failure_does_not_abort_relay() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/notes.txt")
        .with_status(200)
        .with_body("notes")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::failing_messages());
    let handler = handler(bot.clone(), dir.path());

    let outcome = handler
        .process(&chat(), &format!("{}/notes.txt", server.url()))
        .await;

    assert!(matches!(outcome, LinkOutcome::FileSent { .. }));
    assert_eq!(bot.documents().len(), 1);
}

/// **Test: As a Handler, a trimmed URL message is relayed and the reply carries the caption.**
#[tokio::test]
async fn test_handler_trims_message_and_replies() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/my-file-01.pdf")
        .with_status(200)
        .with_body("pdf")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());
    let msg = message(&format!("  {}/my-file-01.pdf\n", server.url()));

    let response = handler.handle(&msg).await.unwrap();

    assert_eq!(
        response,
        HandlerResponse::Reply(messages::caption("my_file_01.pdf"))
    );
    assert_eq!(bot.documents().len(), 1);
    assert_eq!(bot.texts(), vec![messages::DOWNLOADING.to_string()]);
}

/// **Test: As a Handler, rejected input is answered with the rejection text.**
#[tokio::test]
async fn test_handler_reports_invalid_url() {
    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());

    let response = handler.handle(&message("www.example.com/a.pdf")).await.unwrap();

    assert_eq!(
        response,
        HandlerResponse::Reply(messages::INVALID_URL.to_string())
    );
    assert_eq!(bot.texts(), vec![messages::INVALID_URL.to_string()]);
}

/// **Test: As a Handler, a download failure is reported with the underlying error.**
#[tokio::test]
async fn test_handler_reports_download_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/gone.zip")
        .with_status(500)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let handler = handler(bot.clone(), dir.path());

    handler
        .handle(&message(&format!("{}/gone.zip", server.url())))
        .await
        .unwrap();

    let texts = bot.texts();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0], messages::DOWNLOADING);
    assert!(texts[1].starts_with("❌ Failed to download the file:\n"));
    assert!(texts[1].contains("500"));
}

/// **Test: /start replies with the usage text.**
#[tokio::test]
async fn test_start_handler_replies_usage() {
    let bot = Arc::new(MockBot::new());
    let handler = StartHandler::new(bot.clone());

    let response = handler.handle(&message("/start")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(messages::USAGE.to_string()));
    assert_eq!(bot.texts(), vec![messages::USAGE.to_string()]);
}
