//! Card lookups and downloads backed by PostgreSQL.

use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use serde_json::json;

use identifini_db::db::CardRepository;
use identifini_db::model::card::Card;

use super::helpers::test_db;

fn jane() -> Card {
    let mut card = Card::new("jane");
    card.display_name = Some("Jane Doe".to_string());
    card.card_email = Some("jane@x.com".to_string());
    card.bio = Some("Hi\nthere".to_string());
    card.floating_actions = Some(json!([{"type": "Call", "url": "tel:+1234567890"}]));
    card
}

#[test_log::test(tokio::test)]
async fn repository_finds_live_cards() {
    let Some(db) = test_db().await else { return };

    let card = jane();
    let id = card.id;
    db.insert_card(&card).await.expect("insert card");

    let by_name = db.pool.find_by_username("jane").await.expect("query succeeds");
    assert_eq!(by_name.as_ref().map(|c| c.id), Some(id));
    assert_eq!(by_name.and_then(|c| c.display_name).as_deref(), Some("Jane Doe"));

    let by_id = db.pool.find_by_id(id).await.expect("query succeeds");
    assert_eq!(by_id.map(|c| c.card_username), Some("jane".to_string()));

    let missing = db.pool.find_by_username("john").await.expect("query succeeds");
    assert!(missing.is_none());

    db.cleanup().await;
}

#[test_log::test(tokio::test)]
async fn soft_deleted_username_can_be_reused() {
    let Some(db) = test_db().await else { return };

    let mut old = Card::new("jane");
    old.display_name = Some("Old Jane".to_string());
    old.deleted_at = Some(chrono::Utc::now());
    let old_id = old.id;
    db.insert_card(&old).await.expect("insert deleted card");

    let current = jane();
    db.insert_card(&current).await.expect("username is free again");

    let found = db.pool.find_by_username("jane").await.expect("query succeeds");
    assert_eq!(found.map(|c| c.id), Some(current.id));
    assert!(db.pool.find_by_id(old_id).await.expect("query succeeds").is_none());

    db.cleanup().await;
}

#[test_log::test(tokio::test)]
async fn download_from_database() {
    let Some(db) = test_db().await else { return };

    db.insert_card(&jane()).await.expect("insert card");

    let mut res = TestClient::get("http://127.0.0.1:8698/api/cards/username/jane/vcard")
        .add_header("host", "example.com", true)
        .add_header("x-forwarded-proto", "https", true)
        .send(db.service())
        .await;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert_eq!(
        res.take_string().await.expect("body is text"),
        "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nN:Jane Doe;;;;\r\n\
         TEL;TYPE=voice,HOME:+1234567890\r\nEMAIL:jane@x.com\r\n\
         URL:https://example.com/view-card/jane\r\nNOTE:Hi\\nthere\r\nEND:VCARD\r\n"
    );

    db.cleanup().await;
}

#[test_log::test(tokio::test)]
async fn actions_stored_as_json_string_are_exported() {
    let Some(db) = test_db().await else { return };

    let mut card = Card::new("legacy");
    card.display_name = Some("Legacy Card".to_string());
    card.floating_actions = Some(json!(
        r#"[{"type":"WhatsApp","url":"https://wa.me/15550001111"},{"type":"Email","url":"mailto:legacy@x.com"}]"#
    ));
    let id = card.id;
    db.insert_card(&card).await.expect("insert card");

    let mut res = TestClient::get(format!("http://127.0.0.1:8698/api/cards/{id}/vcard"))
        .add_header("host", "example.com", true)
        .send(db.service())
        .await;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    let body = res.take_string().await.expect("body is text");
    assert!(body.contains("\r\nTEL;TYPE=cell,WhatsApp:15550001111\r\nEMAIL:legacy@x.com\r\n"));

    db.cleanup().await;
}
