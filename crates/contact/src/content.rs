//! Contact message content
//!
//! Canonical content generators for the email draft a browser hands to the
//! platform mail client.

use chrono::{DateTime, Utc};

/// Generate the subject line for a contact draft.
pub fn contact_subject(type_label: &str, item_title: &str) -> String {
    format!("Regarding {} Item: {}", type_label, item_title)
}

/// Generate the plain-text body for a contact draft.
#[allow(clippy::too_many_arguments)]
pub fn contact_body(
    reporter_name: &str,
    type_word: &str,
    item_title: &str,
    requester_name: &str,
    requester_email: &str,
    requester_phone: Option<&str>,
    message: &str,
    category: &str,
    location: &str,
    date_time: DateTime<Utc>,
) -> String {
    format!(
        "Hello {},\n\n\
        I'm contacting you regarding the {} item you reported: {}\n\n\
        My Contact Information:\n\
        Name: {}\n\
        Email: {}\n\
        Phone: {}\n\n\
        Message:\n\
        {}\n\n\
        Item Details:\n\
        - Category: {}\n\
        - Location: {}\n\
        - Date: {}\n\n\
        Thank you!",
        reporter_name,
        type_word,
        item_title,
        requester_name,
        requester_email,
        requester_phone.unwrap_or("Not provided"),
        message,
        category,
        location,
        date_time.format("%-m/%-d/%Y"),
    )
}
