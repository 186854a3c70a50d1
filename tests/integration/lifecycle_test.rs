//! Lifecycle transitions against a real Postgres: the guarded UPDATEs,
//! the alert-flag resets, and the recomputed dashboard signals.
//!
//! Requires `DATABASE_URL`; each test returns early without it.

mod helpers;

use helpdesk_core::error::ErrorKind;
use helpdesk_entity::ticket::{Audience, TicketChanges, TicketStatus};
use helpdesk_entity::user::UserRole;

#[tokio::test]
async fn test_assign_rearms_expert_alert() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let requester = app.create_user(UserRole::Requester).await;
    let manager = app.create_user(UserRole::Manager).await;
    let expert = app.create_user(UserRole::Expert).await;
    let ticket = app.create_ticket(&requester, "Printer jam").await;

    // Fresh ticket alerts the manager until acknowledged.
    let alerts = app
        .alert_service
        .check_new(&manager, Audience::Manager)
        .await
        .unwrap();
    assert!(helpers::contains_ticket(&alerts, ticket.id));

    app.alert_service
        .mark_notified(&manager, Audience::Manager, ticket.id)
        .await
        .unwrap();
    let alerts = app
        .alert_service
        .check_new(&manager, Audience::Manager)
        .await
        .unwrap();
    assert!(!helpers::contains_ticket(&alerts, ticket.id));

    // Assignment alerts the expert.
    app.ticket_service
        .assign(&manager, ticket.id, Some(expert.user_id))
        .await
        .unwrap();
    let alerts = app
        .alert_service
        .check_new(&expert, Audience::Expert)
        .await
        .unwrap();
    assert!(helpers::contains_ticket(&alerts, ticket.id));

    app.alert_service
        .mark_notified(&expert, Audience::Expert, ticket.id)
        .await
        .unwrap();
    let alerts = app
        .alert_service
        .check_new(&expert, Audience::Expert)
        .await
        .unwrap();
    assert!(!helpers::contains_ticket(&alerts, ticket.id));

    // Returning re-arms the manager alert even though it was already
    // acknowledged once.
    app.ticket_service
        .return_to_manager(&expert, ticket.id)
        .await
        .unwrap();
    let alerts = app
        .alert_service
        .check_new(&manager, Audience::Manager)
        .await
        .unwrap();
    assert!(helpers::contains_ticket(&alerts, ticket.id));

    // Re-assignment re-arms the expert alert the same way.
    app.ticket_service
        .assign(&manager, ticket.id, Some(expert.user_id))
        .await
        .unwrap();
    let alerts = app
        .alert_service
        .check_new(&expert, Audience::Expert)
        .await
        .unwrap();
    assert!(helpers::contains_ticket(&alerts, ticket.id));
}

#[tokio::test]
async fn test_return_resets_assignment_and_flags_returned() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let requester = app.create_user(UserRole::Requester).await;
    let manager = app.create_user(UserRole::Manager).await;
    let expert = app.create_user(UserRole::Expert).await;
    let ticket = app.create_ticket(&requester, "VPN drops").await;

    app.ticket_service
        .assign(&manager, ticket.id, Some(expert.user_id))
        .await
        .unwrap();
    let returned = app
        .ticket_service
        .return_to_manager(&expert, ticket.id)
        .await
        .unwrap();

    assert_eq!(returned.status, TicketStatus::New);
    assert!(returned.assigned_to.is_none());

    // The returned queue picks it up; the fresh queue does not.
    let returned_queue = app.ticket_repo.find_returned().await.unwrap();
    assert!(helpers::contains_ticket(&returned_queue, ticket.id));
    let fresh_queue = app.ticket_repo.find_new_from_requesters().await.unwrap();
    assert!(!helpers::contains_ticket(&fresh_queue, ticket.id));

    // Re-assignment clears the returned marker again.
    app.ticket_service
        .assign(&manager, ticket.id, Some(expert.user_id))
        .await
        .unwrap();
    let returned_queue = app.ticket_repo.find_returned().await.unwrap();
    assert!(!helpers::contains_ticket(&returned_queue, ticket.id));
}

#[tokio::test]
async fn test_queue_position_counts_earlier_open_assignments() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let requester = app.create_user(UserRole::Requester).await;
    let manager = app.create_user(UserRole::Manager).await;
    let expert = app.create_user(UserRole::Expert).await;

    let first = app.create_ticket(&requester, "Monitor flickers").await;
    let second = app.create_ticket(&requester, "Mouse broken").await;
    app.ticket_service
        .assign(&manager, first.id, Some(expert.user_id))
        .await
        .unwrap();
    app.ticket_service
        .assign(&manager, second.id, Some(expert.user_id))
        .await
        .unwrap();

    let dashboard = app.ticket_service.requester_dashboard(&requester).await.unwrap();
    let position_of = |id| {
        dashboard
            .iter()
            .find(|o| o.ticket.id == id)
            .map(|o| o.queue_position)
    };
    assert_eq!(position_of(first.id), Some(Some(0)));
    assert_eq!(position_of(second.id), Some(Some(1)));

    // Completing the first ticket removes it from the count but keeps
    // its own position visible on the dashboard.
    app.ticket_service.mark_done(&expert, first.id).await.unwrap();

    let dashboard = app.ticket_service.requester_dashboard(&requester).await.unwrap();
    let position_of = |id| {
        dashboard
            .iter()
            .find(|o| o.ticket.id == id)
            .map(|o| o.queue_position)
    };
    assert_eq!(position_of(first.id), Some(Some(0)));
    assert_eq!(position_of(second.id), Some(Some(0)));
}

#[tokio::test]
async fn test_requester_edit_blocked_after_assignment() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let requester = app.create_user(UserRole::Requester).await;
    let manager = app.create_user(UserRole::Manager).await;
    let expert = app.create_user(UserRole::Expert).await;
    let ticket = app.create_ticket(&requester, "Slow laptop").await;

    app.ticket_service
        .assign(&manager, ticket.id, Some(expert.user_id))
        .await
        .unwrap();

    let changes = TicketChanges {
        title: "Very slow laptop".to_string(),
        description: "Boot takes ten minutes".to_string(),
        unit_id: None,
        service_type_id: None,
    };
    let err = app
        .ticket_service
        .update(&requester, ticket.id, changes)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::PreconditionFailed);

    let err = app
        .ticket_service
        .delete(&requester, ticket.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::PreconditionFailed);
}

#[tokio::test]
async fn test_feedback_is_recorded_once() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let requester = app.create_user(UserRole::Requester).await;
    let manager = app.create_user(UserRole::Manager).await;
    let expert = app.create_user(UserRole::Expert).await;
    let ticket = app.create_ticket(&requester, "Keyboard layout").await;

    app.ticket_service
        .assign(&manager, ticket.id, Some(expert.user_id))
        .await
        .unwrap();
    app.ticket_service.mark_done(&expert, ticket.id).await.unwrap();

    let feedback = app
        .ticket_service
        .submit_feedback(&requester, ticket.id, 5, "Quick fix")
        .await
        .unwrap();
    assert_eq!(feedback.rating, 5);

    let err = app
        .ticket_service
        .submit_feedback(&requester, ticket.id, 4, "Second thoughts")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}
