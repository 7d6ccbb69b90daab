use std::time::Duration;

use crate::notification::{NotificationKind, NotificationService};

#[tokio::test]
async fn notification_expires_after_lifetime() {
    let service = NotificationService::with_lifetime(Duration::from_millis(80));

    service.show_success("Saved.", None).await;
    assert!(service.current().is_some());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(service.current().is_none());
}

#[tokio::test]
async fn newer_notification_supersedes_and_restarts_the_timer() {
    let service = NotificationService::with_lifetime(Duration::from_millis(120));

    service.show_success("Saved.", None).await;
    tokio::time::sleep(Duration::from_millis(70)).await;
    service.show_error("Failed.", None).await;

    // Past the success lifetime: the aborted success timer must not have
    // cleared the newer error.
    tokio::time::sleep(Duration::from_millis(70)).await;
    let current = service.current().expect("error still visible");
    assert_eq!(current.kind, NotificationKind::Error);
    assert_eq!(current.message, "Failed.");

    // The error's own timer eventually clears it.
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert!(service.current().is_none());
}

#[tokio::test]
async fn error_directly_after_success_leaves_one_visible_notification() {
    let service = NotificationService::with_lifetime(Duration::from_millis(100));

    service.show_success("Saved.", None).await;
    service.show_error("Failed.", Some("detail".to_string())).await;

    let current = service.current().expect("notification");
    assert_eq!(current.kind, NotificationKind::Error);
    assert_eq!(current.detail.as_deref(), Some("detail"));

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(service.current().is_none());
}

#[tokio::test]
async fn clear_is_idempotent() {
    let service = NotificationService::with_lifetime(Duration::from_millis(100));

    service.clear().await;
    assert!(service.current().is_none());

    service.show_error("Failed.", None).await;
    service.clear().await;
    service.clear().await;
    assert!(service.current().is_none());
}

#[tokio::test]
async fn subscribers_observe_replacement_and_expiry() {
    let service = NotificationService::with_lifetime(Duration::from_millis(60));
    let mut updates = service.subscribe();

    service.show_success("Saved.", None).await;
    updates.changed().await.expect("change");
    assert_eq!(
        updates.borrow_and_update().as_ref().map(|n| n.kind),
        Some(NotificationKind::Success)
    );

    updates.changed().await.expect("expiry");
    assert!(updates.borrow_and_update().is_none());
}
