use pretty_assertions::assert_eq;
use std::time::Duration;
use taskdeck::dialog::{self, DialogError, DialogKind, DialogResult};

#[tokio::test]
async fn sequential_requests_resolve_with_their_own_answer() {
    let (dialogs, mut host) = dialog::channel();

    let first = tokio::spawn({
        let dialogs = dialogs.clone();
        async move { dialogs.confirm("First", "Proceed?").await }
    });
    let shown = host.next().await.unwrap();
    assert_eq!(shown.title, "First");
    host.respond(DialogResult::CONFIRMED).unwrap();
    assert_eq!(first.await.unwrap(), Ok(DialogResult::CONFIRMED));

    let second = tokio::spawn({
        let dialogs = dialogs.clone();
        async move { dialogs.confirm("Second", "Proceed?").await }
    });
    let shown = host.next().await.unwrap();
    assert_eq!(shown.title, "Second");
    host.respond(DialogResult::CANCELLED).unwrap();
    assert_eq!(second.await.unwrap(), Ok(DialogResult::CANCELLED));
}

#[tokio::test]
async fn respond_without_request_is_rejected() {
    let (dialogs, mut host) = dialog::channel();
    assert_eq!(host.respond(DialogResult::CONFIRMED), Err(DialogError::NoPendingDialog));

    // The stray answer must not leak into a later request.
    let mut pending = tokio::spawn(async move { dialogs.confirm("Later", "Sure?").await });
    host.next().await.unwrap();
    assert!(tokio::time::timeout(Duration::from_millis(50), &mut pending).await.is_err());

    host.respond(DialogResult::CANCELLED).unwrap();
    assert_eq!(pending.await.unwrap(), Ok(DialogResult::CANCELLED));
}

#[tokio::test]
async fn confirm_round_trip_hides_the_dialog() {
    let (dialogs, mut host) = dialog::channel();
    let visibility = dialogs.visibility();
    assert!(visibility.borrow().is_none());

    let answer = tokio::spawn({
        let dialogs = dialogs.clone();
        async move { dialogs.confirm("Delete", "Sure?").await }
    });
    host.next().await.unwrap();

    let visible = visibility.borrow().clone().unwrap();
    assert_eq!(visible.kind, DialogKind::Confirm);
    assert_eq!(visible.message, "Sure?");
    assert_eq!(visible.cancel_label.as_deref(), Some("Cancel"));

    host.respond(DialogResult::CONFIRMED).unwrap();
    assert_eq!(answer.await.unwrap(), Ok(DialogResult { confirmed: true }));
    assert!(visibility.borrow().is_none());
    assert!(!host.is_visible());
}

#[tokio::test]
async fn queued_requests_are_shown_in_order() {
    let (dialogs, mut host) = dialog::channel();

    let answers = tokio::spawn(async move {
        tokio::join!(
            dialogs.confirm("1", "one"),
            dialogs.alert("2", "two"),
            dialogs.error("3", "three"),
        )
    });

    let mut seen = Vec::new();
    for result in [DialogResult::CONFIRMED, DialogResult::CANCELLED, DialogResult::CONFIRMED] {
        let shown = host.next().await.unwrap();
        seen.push((shown.title, shown.kind));
        host.respond(result).unwrap();
    }

    assert_eq!(
        seen,
        vec![
            ("1".to_string(), DialogKind::Confirm),
            ("2".to_string(), DialogKind::Alert),
            ("3".to_string(), DialogKind::Error),
        ]
    );
    let (a, b, c) = answers.await.unwrap();
    assert_eq!(a, Ok(DialogResult::CONFIRMED));
    assert_eq!(b, Ok(DialogResult::CANCELLED));
    assert_eq!(c, Ok(DialogResult::CONFIRMED));
}

#[tokio::test]
async fn poll_presents_without_blocking() {
    let (dialogs, mut host) = dialog::channel();
    assert!(host.poll().is_none());

    let answer = tokio::spawn(async move { dialogs.success("Saved", "All good").await });
    let mut shown = None;
    for _ in 0..50 {
        if let Some(request) = host.poll() {
            shown = Some(request.clone());
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let shown = shown.unwrap();
    assert_eq!(shown.kind, DialogKind::Success);
    assert_eq!(shown.confirm_label, "OK");
    assert_eq!(shown.cancel_label, None);

    host.respond(DialogResult::CONFIRMED).unwrap();
    assert_eq!(answer.await.unwrap(), Ok(DialogResult::CONFIRMED));
}

#[tokio::test]
async fn request_without_renderer_fails() {
    let (dialogs, host) = dialog::channel();
    assert!(dialogs.has_renderer());
    drop(host);

    assert!(!dialogs.has_renderer());
    assert_eq!(dialogs.confirm("Delete", "Sure?").await, Err(DialogError::NoRenderer));
}

#[tokio::test]
async fn dropping_the_host_dismisses_the_visible_request() {
    let (dialogs, mut host) = dialog::channel();
    let answer = tokio::spawn(async move { dialogs.confirm("Delete", "Sure?").await });
    host.next().await.unwrap();
    drop(host);

    assert_eq!(answer.await.unwrap(), Err(DialogError::Dismissed));
}

#[tokio::test]
async fn abandoned_requests_are_skipped() {
    let (dialogs, mut host) = dialog::channel();

    // Enqueued, then given up on before the host got to it.
    let stale = tokio::time::timeout(Duration::from_millis(10), dialogs.confirm("Stale", "?")).await;
    assert!(stale.is_err());

    let fresh = tokio::spawn({
        let dialogs = dialogs.clone();
        async move { dialogs.confirm("Fresh", "?").await }
    });
    assert_eq!(host.next().await.unwrap().title, "Fresh");
    host.respond(DialogResult::CONFIRMED).unwrap();
    assert_eq!(fresh.await.unwrap(), Ok(DialogResult::CONFIRMED));
}

#[tokio::test]
async fn visible_dialog_is_hidden_once_its_caller_is_gone() {
    let (dialogs, mut host) = dialog::channel();
    let visibility = dialogs.visibility();

    let waiting = tokio::spawn(async move { dialogs.confirm("Delete task", "Sure?").await });
    let shown = host.next().await.unwrap();
    assert_eq!(shown.title, "Delete task");

    waiting.abort();
    let _ = waiting.await;

    assert!(host.poll().is_none());
    assert!(!host.is_visible());
    assert_eq!(*visibility.borrow(), None);
    assert_eq!(host.respond(DialogResult::CONFIRMED), Err(DialogError::NoPendingDialog));
}
