//! Contact handler
//!
//! Produces a pre-filled `mailto:` draft for an item; the caller's mail
//! handler does the rest. The service never learns whether mail was sent.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use reclaim_common::{Error, Result, ValidatedJson};
use reclaim_contact::ContactDraftTemplate;

use crate::api::middleware::ItemsState;

/// Contact sub-form: who is asking, and what they want to say
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "a valid email is required"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

/// The generated draft link
#[derive(Debug, Serialize)]
pub struct ContactLinkResponse {
    pub mailto: String,
}

/// Build a pre-filled email draft for reaching the item's reporter
pub async fn contact_reporter(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<ContactRequest>,
) -> Result<Json<ContactLinkResponse>> {
    let item = state
        .repos
        .items
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Item not found".to_string()))?;

    let phone = req.phone.filter(|p| !p.trim().is_empty());
    let draft = ContactDraftTemplate::new(
        item.contact_name,
        item.contact_email,
        item.title,
        item.item_type.as_str().to_string(),
        item.category,
        item.location,
        item.date_time,
    )
    .with_requester(req.name, req.email, phone)
    .with_message(req.message)
    .build();

    Ok(Json(ContactLinkResponse {
        mailto: draft.mailto_link(),
    }))
}
