use std::io::Write as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use medscan_chat::{DEFAULT_BASE_URL, SessionBuilder, SessionError};
use tokio::sync::mpsc;
use tokio::time::{sleep, timeout};

#[tokio::test(start_paused = true)]
async fn test_navigation_moves_page() {
    let visited = Arc::new(Mutex::new(vec![]));
    let session = SessionBuilder::new()
        .with_base_url("https://medscan.example/")
        .on_navigate({
            let visited = Arc::clone(&visited);
            move |url| visited.lock().unwrap().push(url.to_string())
        })
        .build()
        .unwrap();

    session.toggle();
    session.send_message("show features please");
    sleep(Duration::from_millis(501)).await;

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.transcript.len(), 3);
    assert_eq!(
        snapshot.transcript[2].text(),
        "Navigating to Features section."
    );
    assert_eq!(session.location(), "https://medscan.example/#features");
    assert_eq!(
        *visited.lock().unwrap(),
        vec!["https://medscan.example/#features"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_knowledge_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"trigger": "Pricing", "reply": "Ask sales."}}]"#
    )
    .unwrap();

    let session = SessionBuilder::new()
        .with_knowledge_file(file.path())
        .with_typing_delay(Duration::from_millis(20))
        .build()
        .unwrap();

    session.send_message("What about PRICING?");
    session.send_message("what is ai in medical imaging");
    sleep(Duration::from_millis(21)).await;

    let texts: Vec<_> = session
        .snapshot()
        .await
        .unwrap()
        .transcript
        .iter()
        .map(|m| m.text().to_owned())
        .collect();
    assert_eq!(texts[2], "Ask sales.");
    assert_eq!(texts[3], medscan_chat::core::FALLBACK_REPLY);
}

#[tokio::test]
async fn test_build_errors() {
    let err = SessionBuilder::new()
        .with_base_url("not a url")
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, SessionError::InvalidBaseUrl { .. }));

    let err = SessionBuilder::new()
        .with_knowledge_file("/no/such/table.json")
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, SessionError::Knowledge(_)));
}

#[tokio::test(start_paused = true)]
async fn test_default_location() {
    let session = SessionBuilder::new().build().unwrap();
    assert_eq!(session.location(), DEFAULT_BASE_URL);
    assert_eq!(session.location(), "http://localhost:5173/");

    session.send_message("how do i contact support");
    sleep(Duration::from_millis(501)).await;
    assert_eq!(session.location(), "http://localhost:5173/#footer");
}

#[tokio::test]
async fn test_callbacks_released_with_session() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let session = SessionBuilder::new()
        .on_idle({
            let event_tx = event_tx.clone();
            move || {
                event_tx.send(()).ok();
            }
        })
        .on_navigate(move |_| {
            event_tx.send(()).ok();
        })
        .build()
        .unwrap();
    drop(session);

    // The channel closes once the widget has shut down.
    let event = timeout(Duration::from_secs(1), event_rx.recv())
        .await
        .unwrap();
    assert!(event.is_none());
}
