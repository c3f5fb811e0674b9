//! Reclaim contact drafts
//!
//! Builds the pre-filled email draft used to reach an item's reporter. The
//! service never sends mail itself: the draft is rendered as a `mailto:` link
//! and delivery is entirely up to the caller's mail handler.

use chrono::{DateTime, Utc};

pub mod content;

/// A fully rendered contact draft
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ContactDraft {
    /// Render the draft as a `mailto:` link with percent-encoded subject and body
    pub fn mailto_link(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Builder for an item contact draft
pub struct ContactDraftTemplate {
    reporter_name: String,
    reporter_email: String,
    item_title: String,
    /// "lost" or "found", lowercase
    item_type: String,
    category: String,
    location: String,
    date_time: DateTime<Utc>,
    requester_name: String,
    requester_email: String,
    requester_phone: Option<String>,
    message: String,
}

impl ContactDraftTemplate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reporter_name: String,
        reporter_email: String,
        item_title: String,
        item_type: String,
        category: String,
        location: String,
        date_time: DateTime<Utc>,
    ) -> Self {
        Self {
            reporter_name,
            reporter_email,
            item_title,
            item_type,
            category,
            location,
            date_time,
            requester_name: String::new(),
            requester_email: String::new(),
            requester_phone: None,
            message: String::new(),
        }
    }

    /// Identify the person asking to be put in touch
    pub fn with_requester(mut self, name: String, email: String, phone: Option<String>) -> Self {
        self.requester_name = name;
        self.requester_email = email;
        self.requester_phone = phone;
        self
    }

    /// Free-text message from the requester
    pub fn with_message(mut self, message: String) -> Self {
        self.message = message;
        self
    }

    /// Build the draft
    pub fn build(&self) -> ContactDraft {
        // Subject capitalizes the type; the body uses it as written
        let type_label = match self.item_type.as_str() {
            "lost" => "Lost",
            "found" => "Found",
            other => other,
        };

        ContactDraft {
            to: self.reporter_email.clone(),
            subject: content::contact_subject(type_label, &self.item_title),
            body: content::contact_body(
                &self.reporter_name,
                &self.item_type,
                &self.item_title,
                &self.requester_name,
                &self.requester_email,
                self.requester_phone.as_deref(),
                &self.message,
                &self.category,
                &self.location,
                self.date_time,
            ),
        }
    }
}
