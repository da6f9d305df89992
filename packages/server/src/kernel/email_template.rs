//! HTML bodies for transactional email.

use crate::domains::events::models::Event;

/// Render the booking-confirmation email for an event.
///
/// Inline styles only; email clients strip everything else.
pub fn booking_confirmation(event: &Event) -> String {
    let long_date = event.date.format("%A, %B %-d, %Y");

    let agenda_items: String = event
        .agenda
        .iter()
        .map(|item| format!("<li style=\"margin-bottom: 8px;\">{}</li>", item))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Event Booking Confirmation</title>
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f4f4f4;">
  <div style="background-color: #ffffff; border-radius: 8px; padding: 30px;">
    <div style="text-align: center; margin-bottom: 30px; border-bottom: 3px solid #59deca; padding-bottom: 20px;">
      <h1 style="color: #030708; margin: 0; font-size: 28px;">Booking Confirmed!</h1>
      <p style="color: #666; margin-top: 10px; font-size: 16px;">You're all set for the event</p>
    </div>

    <p style="font-size: 16px; color: #333; margin-bottom: 25px;">
      Thank you for registering for <strong>{title}</strong>. We're excited to have you join us!
    </p>

    <div style="background-color: #f8f9fa; border-left: 4px solid #59deca; padding: 20px; border-radius: 4px; margin-bottom: 25px;">
      <h2 style="color: #030708; margin-top: 0; font-size: 22px;">Event Details</h2>
      <div style="margin-bottom: 12px;"><strong style="color: #555;">Date:</strong> <span>{date}</span></div>
      <div style="margin-bottom: 12px;"><strong style="color: #555;">Time:</strong> <span>{time}</span></div>
      <div style="margin-bottom: 12px;"><strong style="color: #555;">Venue:</strong> <span>{venue}</span></div>
      <div style="margin-bottom: 12px;"><strong style="color: #555;">Location:</strong> <span>{location}</span></div>
      <div style="margin-bottom: 12px;"><strong style="color: #555;">Mode:</strong> <span style="text-transform: capitalize;">{mode}</span></div>
      <div style="margin-bottom: 12px;"><strong style="color: #555;">Organizer:</strong> <span>{organizer}</span></div>
    </div>

    <div style="margin-bottom: 25px;">
      <h3 style="color: #030708; font-size: 18px;">About the Event</h3>
      <p style="color: #555; font-size: 15px;">{overview}</p>
    </div>

    <div style="margin-bottom: 25px;">
      <h3 style="color: #030708; font-size: 18px;">Event Agenda</h3>
      <ul style="color: #555; font-size: 15px; padding-left: 20px;">{agenda}</ul>
    </div>

    <p style="color: #999; font-size: 13px; text-align: center; margin-top: 30px;">
      You received this email because you booked a seat on DevEvent.
    </p>
  </div>
</body>
</html>"#,
        title = event.title,
        date = long_date,
        time = event.time,
        venue = event.venue,
        location = event.location,
        mode = event.mode,
        organizer = event.organizer,
        overview = event.overview,
        agenda = agenda_items,
    )
}
