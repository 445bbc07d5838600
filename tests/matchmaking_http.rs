mod support;

use serde_json::{Value, json};

async fn join(client: &reqwest::Client, base_url: &str, player_id: &str) -> Value {
    let res = client
        .post(format!("{base_url}/join"))
        .json(&json!({ "id": player_id }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    res.json().await.expect("join body should be json")
}

// The only test in this binary that enqueues players, so the FIFO grouping is
// not disturbed by other tests running in parallel.
#[tokio::test]
async fn test_three_joins_form_a_match_and_leave_placeholders_behind() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();
    let run = uuid::Uuid::new_v4();
    let players: Vec<String> = (1..=3).map(|n| format!("p{n}-{run}")).collect();

    let first = join(&client, base_url, &players[0]).await;
    assert_eq!(first["players"], json!([players[0]]));
    assert_eq!(first["status"], "waiting");
    assert!(first.get("ready_at").is_none());

    join(&client, base_url, &players[1]).await;
    let third = join(&client, base_url, &players[2]).await;
    assert_eq!(third["players"], json!(players));
    assert_eq!(third["status"], "ready");
    assert_eq!(third["ready_at"], third["updated_at"]);

    let match_id = third["match_id"].as_str().expect("match id should be a string");
    let res = client
        .get(format!("{base_url}/status/{match_id}"))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let status: Value = res.json().await.expect("status body should be json");
    assert_eq!(status, third);

    // The placeholder returned to the first player never picks up the later joins.
    let placeholder_id = first["match_id"].as_str().expect("match id should be a string");
    let res = client
        .get(format!("{base_url}/status/{placeholder_id}"))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let placeholder: Value = res.json().await.expect("status body should be json");
    assert_eq!(placeholder["players"], json!([players[0]]));
    assert_eq!(placeholder["status"], "waiting");
}

#[tokio::test]
async fn test_unknown_match_returns_404() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{base_url}/status/nonexistent"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = res.json().await.expect("error body should be json");
    assert_eq!(body["error"], "match not found");
}

#[tokio::test]
async fn test_join_without_id_returns_400() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/join"))
        .json(&json!({ "id": "" }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_metrics_report_status_requests() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    client
        .get(format!("{base_url}/status/also-missing"))
        .send()
        .await
        .expect("request should succeed");

    let res = client
        .get(format!("{base_url}/metrics"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.expect("metrics body should be json");
    let count = body["endpoints"]["status"]["count"]
        .as_u64()
        .expect("status count should be a number");
    assert!(count >= 1);
}
