//! Integration tests for booking admission.
//!
//! Covers the at-most-one guarantee per (event, email) and the
//! best-effort confirmation email policy.

mod common;

use crate::common::{create_test_event, unique, TestHarness};
use server_core::common::EventId;
use server_core::domains::bookings::{admission, Booking, BookingError};
use server_core::kernel::MockMailer;
use test_context::test_context;

fn test_email() -> String {
    format!("{}@example.com", unique("attendee"))
}

#[test_context(TestHarness)]
#[tokio::test]
async fn booking_sends_confirmation_email(ctx: &TestHarness) {
    let event = create_test_event(
        &ctx.db_pool,
        "Confirmable Conf",
        &unique("confirmable"),
        &[&unique("mail")],
    )
    .await
    .unwrap();

    let mailer = MockMailer::new();
    let email = test_email();

    let outcome = admission::create_booking(event.id, &email, &mailer, &ctx.db_pool)
        .await
        .expect("booking should succeed");

    assert!(outcome.email_sent);
    assert_eq!(outcome.booking.event_id, event.id);
    assert!(mailer.was_sent_to(&email));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Booking Confirmed: Confirmable Conf");
    assert!(sent[0].html.contains("Confirmable Conf"));

    let count = Booking::count_for_event(event.id, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn second_booking_for_same_email_conflicts(ctx: &TestHarness) {
    let event = create_test_event(
        &ctx.db_pool,
        "Popular Conf",
        &unique("popular"),
        &[&unique("twice")],
    )
    .await
    .unwrap();

    let mailer = MockMailer::new();
    let email = test_email();

    admission::create_booking(event.id, &email, &mailer, &ctx.db_pool)
        .await
        .expect("first booking should succeed");

    let second = admission::create_booking(event.id, &email, &mailer, &ctx.db_pool).await;
    assert!(matches!(second, Err(BookingError::AlreadyBooked)));

    // No second record exists
    let count = Booking::count_for_event(event.id, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn same_email_can_book_different_events(ctx: &TestHarness) {
    let tag = unique("multi");
    let first = create_test_event(&ctx.db_pool, "First", &unique("first"), &[&tag])
        .await
        .unwrap();
    let second = create_test_event(&ctx.db_pool, "Second", &unique("second"), &[&tag])
        .await
        .unwrap();

    let mailer = MockMailer::new();
    let email = test_email();

    admission::create_booking(first.id, &email, &mailer, &ctx.db_pool)
        .await
        .expect("first event booking should succeed");
    admission::create_booking(second.id, &email, &mailer, &ctx.db_pool)
        .await
        .expect("second event booking should succeed");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_event_creates_nothing(ctx: &TestHarness) {
    let missing = EventId::new();
    let mailer = MockMailer::new();

    let result = admission::create_booking(missing, &test_email(), &mailer, &ctx.db_pool).await;

    match result {
        Err(BookingError::UnknownEvent(id)) => assert_eq!(id, missing),
        other => panic!("expected UnknownEvent, got {:?}", other.map(|o| o.email_sent)),
    }

    let count = Booking::count_for_event(missing, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert!(mailer.sent().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn invalid_email_is_rejected_before_any_write(ctx: &TestHarness) {
    let event = create_test_event(
        &ctx.db_pool,
        "Strict Conf",
        &unique("strict"),
        &[&unique("emails")],
    )
    .await
    .unwrap();

    let mailer = MockMailer::new();
    let result =
        admission::create_booking(event.id, "not-an-email", &mailer, &ctx.db_pool).await;

    assert!(matches!(result, Err(BookingError::InvalidEmail(_))));

    let count = Booking::count_for_event(event.id, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn mailer_failure_does_not_fail_the_booking(ctx: &TestHarness) {
    let event = create_test_event(
        &ctx.db_pool,
        "Outage Conf",
        &unique("outage"),
        &[&unique("noop")],
    )
    .await
    .unwrap();

    let mailer = MockMailer::new().failing();
    let email = test_email();

    let outcome = admission::create_booking(event.id, &email, &mailer, &ctx.db_pool)
        .await
        .expect("booking should succeed despite mailer outage");

    assert!(!outcome.email_sent);

    // Exactly one booking record exists
    let count = Booking::count_for_event(event.id, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
