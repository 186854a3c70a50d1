//! One-shot file handoff against a real Postgres and a temp-dir store:
//! single-outstanding-transfer rule and consume-on-download.
//!
//! Requires `DATABASE_URL`; each test returns early without it.

mod helpers;

use bytes::Bytes;

use helpdesk_core::error::ErrorKind;
use helpdesk_entity::user::UserRole;

#[tokio::test]
async fn test_receive_consumes_transfer() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let sender = app.create_user(UserRole::Expert).await;
    let receiver = app.create_user(UserRole::Requester).await;

    app.transfer_service
        .send(
            &sender,
            receiver.user_id,
            "patch.zip",
            Bytes::from_static(b"patch contents"),
        )
        .await
        .unwrap();
    assert!(app.transfer_service.has_incoming(&receiver).await.unwrap());

    let received = app.transfer_service.receive(&receiver).await.unwrap();
    assert_eq!(received.file_name, "patch.zip");
    assert_eq!(received.data, Bytes::from_static(b"patch contents"));

    // The download consumed the transfer; a second attempt finds nothing.
    assert!(!app.transfer_service.has_incoming(&receiver).await.unwrap());
    let err = app.transfer_service.receive(&receiver).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_single_outstanding_transfer_per_sender() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let sender = app.create_user(UserRole::Manager).await;
    let receiver = app.create_user(UserRole::Expert).await;

    app.transfer_service
        .send(
            &sender,
            receiver.user_id,
            "first.txt",
            Bytes::from_static(b"first"),
        )
        .await
        .unwrap();

    let err = app
        .transfer_service
        .send(
            &sender,
            receiver.user_id,
            "second.txt",
            Bytes::from_static(b"second"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::PreconditionFailed);

    // Once the receiver downloads, the sender may send again.
    app.transfer_service.receive(&receiver).await.unwrap();
    app.transfer_service
        .send(
            &sender,
            receiver.user_id,
            "second.txt",
            Bytes::from_static(b"second"),
        )
        .await
        .unwrap();
    assert!(app.transfer_repo.has_pending_outgoing(sender.user_id).await.unwrap());
}

#[tokio::test]
async fn test_receive_is_delivered_oldest_first() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let first_sender = app.create_user(UserRole::Requester).await;
    let second_sender = app.create_user(UserRole::Requester).await;
    let receiver = app.create_user(UserRole::Expert).await;

    app.transfer_service
        .send(
            &first_sender,
            receiver.user_id,
            "logs-monday.txt",
            Bytes::from_static(b"monday"),
        )
        .await
        .unwrap();
    app.transfer_service
        .send(
            &second_sender,
            receiver.user_id,
            "logs-tuesday.txt",
            Bytes::from_static(b"tuesday"),
        )
        .await
        .unwrap();

    let received = app.transfer_service.receive(&receiver).await.unwrap();
    assert_eq!(received.file_name, "logs-monday.txt");
    let received = app.transfer_service.receive(&receiver).await.unwrap();
    assert_eq!(received.file_name, "logs-tuesday.txt");
}
