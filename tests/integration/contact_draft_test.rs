//! Contact draft construction end to end: item fields to mailto link

use chrono::TimeZone;
use chrono::Utc;
use reclaim_contact::ContactDraftTemplate;

#[test]
fn draft_embeds_item_details_and_requester_identity() {
    let draft = ContactDraftTemplate::new(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        "Blue Backpack".to_string(),
        "lost".to_string(),
        "Bags".to_string(),
        "Library".to_string(),
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap(),
    )
    .with_requester(
        "Bob".to_string(),
        "bob@example.com".to_string(),
        Some("+1 555 0100".to_string()),
    )
    .with_message("I believe I found your bag.".to_string())
    .build();

    assert_eq!(draft.to, "alice@example.com");
    assert_eq!(draft.subject, "Regarding Lost Item: Blue Backpack");
    assert!(draft.body.contains("Hello Alice,"));
    assert!(draft.body.contains("Name: Bob"));
    assert!(draft.body.contains("Email: bob@example.com"));
    assert!(draft.body.contains("Phone: +1 555 0100"));
    assert!(draft.body.contains("I believe I found your bag."));
    assert!(draft.body.contains("- Category: Bags"));
    assert!(draft.body.contains("- Location: Library"));
    assert!(draft.body.contains("- Date: 3/5/2024"));
}

#[test]
fn mailto_link_is_well_formed_and_encoded() {
    let draft = ContactDraftTemplate::new(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        "Keys & Wallet".to_string(),
        "found".to_string(),
        "Keys".to_string(),
        "Parking Lot B".to_string(),
        Utc::now(),
    )
    .with_requester("Bob".to_string(), "bob@example.com".to_string(), None)
    .with_message("line one\nline two".to_string())
    .build();

    let link = draft.mailto_link();
    assert!(link.starts_with("mailto:alice@example.com?subject="));
    assert!(link.contains("&body="));

    // Nothing after the scheme may contain raw spaces, newlines, or stray
    // ampersands beyond the two query separators
    let query = link.split_once('?').unwrap().1;
    assert!(!query.contains(' '));
    assert!(!query.contains('\n'));
    assert_eq!(query.matches('&').count(), 1);
    // The title ampersand arrives encoded
    assert!(query.contains("Keys%20%26%20Wallet"));
}
