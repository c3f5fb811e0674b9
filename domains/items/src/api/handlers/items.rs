//! Public listing and submission handlers

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reclaim_common::{Error, Result};

use crate::api::middleware::ItemsState;
use crate::domain::entities::{Item, ItemStatus, ItemType};
use crate::domain::filter::ItemFilter;

/// Item response DTO
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub image_url: Option<String>,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            item_type: i.item_type,
            title: i.title,
            description: i.description,
            category: i.category,
            location: i.location,
            date_time: i.date_time,
            contact_name: i.contact_name,
            contact_email: i.contact_email,
            contact_phone: i.contact_phone,
            image_url: i.image_url,
            status: i.status,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

/// Query parameters for the listing.
///
/// `all` (or absence) on any filter means pass-through.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsParams {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ListItemsParams {
    /// Translate query parameters into filter criteria
    pub fn to_filter(&self) -> Result<ItemFilter> {
        let search = self
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        let item_type = match self.item_type.as_deref() {
            None | Some("all") | Some("") => None,
            Some(raw) => Some(raw.parse::<ItemType>()?),
        };

        let category = match self.category.as_deref() {
            None | Some("all") | Some("") => None,
            Some(raw) => Some(raw.to_string()),
        };

        let status = match self.status.as_deref() {
            None | Some("all") | Some("") => None,
            Some(raw) => Some(raw.parse::<ItemStatus>()?),
        };

        Ok(ItemFilter {
            search,
            item_type,
            category,
            status,
        })
    }
}

/// List items, newest first, filtered by the four listing criteria.
///
/// The full collection is fetched and the view is derived in memory; the
/// filtered set is returned whole (no pagination).
pub async fn list_items(
    State(state): State<ItemsState>,
    Query(params): Query<ListItemsParams>,
) -> Result<Json<Vec<ItemResponse>>> {
    let filter = params.to_filter()?;
    let items = state.repos.items.list_all().await?;

    let responses: Vec<ItemResponse> = filter.apply(&items).into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get a single item by ID
pub async fn get_item(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItemResponse>> {
    let item = state
        .repos
        .items
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Item not found".to_string()))?;

    Ok(Json(item.into()))
}

/// An image part pulled out of the submission form
struct ImageUpload {
    file_name: Option<String>,
    content_type: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Random storage path: UUID v4 plus the original extension
    fn storage_path(&self) -> String {
        let ext = self
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
            .unwrap_or("bin");
        format!("{}.{}", Uuid::new_v4(), ext)
    }
}

/// Collected submission fields before validation
#[derive(Debug, Default)]
struct SubmissionFields {
    item_type: Option<String>,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    location: Option<String>,
    date_time: Option<String>,
    contact_name: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Validation(format!("{} is required", field)))
}

/// Parse a submitted timestamp. Accepts RFC 3339 and the browser
/// `datetime-local` shapes (no zone, with or without seconds); zoneless
/// values are taken as UTC.
fn parse_date_time(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(Error::Validation(format!(
        "Invalid date_time '{}'. Expected an RFC 3339 or YYYY-MM-DDTHH:MM timestamp",
        raw
    )))
}

/// Submit a new item report (multipart/form-data).
///
/// If an image part is present it is uploaded first and its public URL is
/// attached to the record; the record is then inserted with status forced to
/// `unclaimed` regardless of input. An upload that succeeds before a failed
/// insert leaves the blob in place.
pub async fn submit_item(
    State(state): State<ItemsState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ItemResponse>)> {
    let mut fields = SubmissionFields::default();
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| Error::Validation(format!("Failed to read image: {}", e)))?;
            // An empty file input still submits an empty part
            if !bytes.is_empty() {
                image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| Error::Validation(format!("Malformed field '{}': {}", name, e)))?;
        match name.as_str() {
            "type" => fields.item_type = Some(value),
            "title" => fields.title = Some(value),
            "description" => fields.description = Some(value),
            "category" => fields.category = Some(value),
            "location" => fields.location = Some(value),
            "date_time" => fields.date_time = Some(value),
            "contact_name" => fields.contact_name = Some(value),
            "contact_email" => fields.contact_email = Some(value),
            "contact_phone" => fields.contact_phone = Some(value),
            // Unknown parts (including any submitted status) are ignored
            _ => {}
        }
    }

    let item_type = required(fields.item_type, "type")?.parse::<ItemType>()?;
    let title = required(fields.title, "title")?;
    let description = required(fields.description, "description")?;
    let category = required(fields.category, "category")?;
    let location = required(fields.location, "location")?;
    let date_time = parse_date_time(&required(fields.date_time, "date_time")?)?;
    let contact_name = required(fields.contact_name, "contact_name")?;
    let contact_email = required(fields.contact_email, "contact_email")?;
    if !contact_email.contains('@') {
        return Err(Error::Validation(
            "contact_email must be a valid email address".to_string(),
        ));
    }
    let contact_phone = fields.contact_phone.filter(|p| !p.trim().is_empty());

    let image_url = match image {
        Some(upload) => {
            let path = upload.storage_path();
            let url = state
                .storage
                .upload(&path, upload.bytes, &upload.content_type)
                .await
                .map_err(|e| Error::Storage(e.to_string()))?;
            Some(url)
        }
        None => None,
    };

    let item = Item::new(
        item_type,
        title,
        description,
        category,
        location,
        date_time,
        contact_name,
        contact_email,
        contact_phone,
        image_url,
    )?;

    let created = state.repos.items.create(&item).await?;
    tracing::info!(item_id = %created.id, item_type = %created.item_type, "Item reported");

    Ok((StatusCode::CREATED, Json(created.into())))
}
