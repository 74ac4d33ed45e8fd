//! End-to-end API tests against a running server with a migrated database

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5500/api/v1";

async fn create(client: &Client, path: &str, body: Value) -> Value {
    let response = client
        .post(format!("{}/{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201, "creating {}", path);
    response.json().await.expect("Failed to parse response")
}

async fn delete(client: &Client, path: &str) -> u16 {
    client
        .delete(format!("{}/{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
        .status()
        .as_u16()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_inspection_lifecycle_drives_alerts() {
    let client = Client::new();

    let type_epi = create(
        &client,
        "types-epi",
        json!({ "libelle": "Harnais test", "periodicite_controle": 365 }),
    )
    .await;
    let epi = create(
        &client,
        "epis",
        json!({
            "identifiant_perso": "TEST-HAR-01",
            "marque": "Petzl",
            "modele": "Avao",
            "date_mise_service": "2000-01-01",
            "type_epi_id": type_epi["id"]
        }),
    )
    .await;
    let epi_id = epi["id"].as_i64().expect("No EPI ID");
    assert_eq!(epi["type_epi"]["periodicite_controle"], 365);
    assert!(epi["dernier_controle"].is_null());

    // Service date far in the past: overdue whatever the threshold
    let alerts: Value = client
        .get(format!("{}/epis/alerts?days=0&sort=urgency", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let alert = alerts
        .as_array()
        .expect("alerts array")
        .iter()
        .find(|a| a["epi"]["id"] == epi_id)
        .expect("overdue EPI not alerted");
    assert_eq!(alert["severity"], "overdue");

    let gestionnaire = create(&client, "gestionnaires", json!({ "nom": "Test", "prenom": "Jean" })).await;
    let statuts: Value = client
        .get(format!("{}/statuts", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let statut_id = statuts[0]["id"].clone();

    let today = chrono::Local::now().date_naive().to_string();
    let controle = create(
        &client,
        "controles",
        json!({
            "epi_id": epi_id,
            "gestionnaire_id": gestionnaire["id"],
            "statut_id": statut_id,
            "date_controle": today,
            "remarques": "RAS"
        }),
    )
    .await;
    assert_eq!(controle["epi_identifiant"], "TEST-HAR-01");

    // The fresh inspection resets the schedule
    let epi: Value = client
        .get(format!("{}/epis/{}", BASE_URL, epi_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(epi["dernier_controle"], today.as_str());

    // Still referenced by the inspection
    assert_eq!(delete(&client, &format!("gestionnaires/{}", gestionnaire["id"])).await, 409);

    // Cleanup: the inspection goes with its EPI
    assert_eq!(delete(&client, &format!("epis/{}", epi_id)).await, 204);
    assert_eq!(delete(&client, &format!("controles/{}", controle["id"])).await, 404);
    assert_eq!(delete(&client, &format!("gestionnaires/{}", gestionnaire["id"])).await, 204);
    assert_eq!(delete(&client, &format!("types-epi/{}", type_epi["id"])).await, 204);
}

#[tokio::test]
#[ignore]
async fn test_get_missing_epi() {
    let client = Client::new();

    let response = client
        .get(format!("{}/epis/{}", BASE_URL, i32::MAX))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
