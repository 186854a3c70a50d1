//! Per-ticket messaging against a real Postgres: read acknowledgement
//! and participant scoping.
//!
//! Requires `DATABASE_URL`; each test returns early without it.

mod helpers;

use helpdesk_core::error::ErrorKind;
use helpdesk_entity::user::UserRole;

#[tokio::test]
async fn test_viewing_thread_acknowledges_counterpart_messages() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let requester = app.create_user(UserRole::Requester).await;
    let manager = app.create_user(UserRole::Manager).await;
    let expert = app.create_user(UserRole::Expert).await;
    let ticket = app.create_ticket(&requester, "No sound").await;
    app.ticket_service
        .assign(&manager, ticket.id, Some(expert.user_id))
        .await
        .unwrap();

    app.message_service
        .post(&requester, ticket.id, "Speakers are silent")
        .await
        .unwrap();

    // The sender's own message is not unread for them.
    assert!(app.message_repo.has_unread(ticket.id, expert.user_id).await.unwrap());
    assert!(!app.message_repo.has_unread(ticket.id, requester.user_id).await.unwrap());

    // Viewing acknowledges the counterpart's messages.
    let thread = app.message_service.view_thread(&expert, ticket.id).await.unwrap();
    assert_eq!(thread.len(), 1);
    assert!(!app.message_repo.has_unread(ticket.id, expert.user_id).await.unwrap());

    // A reply flips the flag the other way.
    app.message_service
        .post(&expert, ticket.id, "Checking the driver")
        .await
        .unwrap();
    assert!(app.message_repo.has_unread(ticket.id, requester.user_id).await.unwrap());

    let thread = app
        .message_service
        .view_thread(&requester, ticket.id)
        .await
        .unwrap();
    assert_eq!(thread.len(), 2);
    assert!(!app.message_repo.has_unread(ticket.id, requester.user_id).await.unwrap());
}

#[tokio::test]
async fn test_thread_limited_to_participants() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let requester = app.create_user(UserRole::Requester).await;
    let manager = app.create_user(UserRole::Manager).await;
    let expert = app.create_user(UserRole::Expert).await;
    let outsider = app.create_user(UserRole::Requester).await;
    let ticket = app.create_ticket(&requester, "Projector input").await;
    app.ticket_service
        .assign(&manager, ticket.id, Some(expert.user_id))
        .await
        .unwrap();

    let err = app
        .message_service
        .view_thread(&outsider, ticket.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);

    let err = app
        .message_service
        .post(&manager, ticket.id, "Any update?")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
}
