use api_client::error::ApiError;
use api_client::{ApiClient, CodeforcesClient};
use configuration::ApiConfig;
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> CodeforcesClient {
    let config = ApiConfig {
        base_url: server.url("/api/"),
    };
    CodeforcesClient::new(&config).unwrap()
}

#[tokio::test]
async fn fetches_user_info_by_handle() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/user.info")
                .query_param("handles", "tourist");
            then.status(200).json_body(json!({
                "status": "OK",
                "result": [{
                    "handle": "tourist",
                    "firstName": "Gennady",
                    "lastName": "Korotkevich",
                    "country": "Belarus",
                    "city": "Gomel",
                    "rating": 3800,
                    "rank": "legendary grandmaster",
                    "maxRating": 4009,
                    "maxRank": "tourist",
                    "contribution": 120,
                    "registrationTimeSeconds": 1265987288
                }]
            }));
        })
        .await;

    let client = client_for(&server);
    assert_eq!(client.base_url(), server.url("/api"));

    let info = client.fetch_user_info("tourist").await.unwrap();

    mock.assert_async().await;
    assert_eq!(info.first_name.as_deref(), Some("Gennady"));
    assert_eq!(info.organization, None);
    assert_eq!(info.max_rating, Some(4009));
    assert_eq!(info.registration_time_seconds, Some(1265987288));
}

#[tokio::test]
async fn fetches_submissions_and_rating_history() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/user.status")
                .query_param("handle", "petr");
            then.status(200).json_body(json!({
                "status": "OK",
                "result": [
                    {"id": 1, "verdict": "OK", "problem": {"contestId": 1, "index": "A"}},
                    {"id": 2, "verdict": "WRONG_ANSWER", "problem": {"contestId": 1, "index": "B"}},
                    {"id": 3, "problem": {"index": "C"}}
                ]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/user.rating")
                .query_param("handle", "petr");
            then.status(200).json_body(json!({
                "status": "OK",
                "result": [
                    {"contestId": 1, "contestName": "Round 1", "rank": 3, "oldRating": 1500, "newRating": 1700},
                    {"contestId": 2, "contestName": "Round 2", "rank": 1, "oldRating": 1700, "newRating": 1900}
                ]
            }));
        })
        .await;

    let client = client_for(&server);
    let submissions = client.fetch_submissions("petr").await.unwrap();
    let history = client.fetch_rating_history("petr").await.unwrap();

    assert_eq!(submissions.len(), 3);
    assert!(submissions[0].is_accepted());
    assert_eq!(submissions[2].verdict, None);
    assert_eq!(submissions[2].problem.contest_id, None);
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].new_rating, 1900);
}

#[tokio::test]
async fn non_success_status_carries_the_api_comment() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user.info");
            then.status(400).json_body(json!({
                "status": "FAILED",
                "comment": "handles: User with handle ghost not found"
            }));
        })
        .await;

    let err = client_for(&server).fetch_user_info("ghost").await.unwrap_err();

    match err {
        ApiError::Status {
            endpoint,
            status,
            comment,
        } => {
            assert_eq!(endpoint, "user.info");
            assert_eq!(status, 400);
            assert_eq!(comment, "handles: User with handle ghost not found");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn server_error_without_envelope_keeps_raw_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user.rating");
            then.status(503).body("Service Unavailable");
        })
        .await;

    let err = client_for(&server)
        .fetch_rating_history("tourist")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Status { status: 503, ref comment, .. } if comment == "Service Unavailable"
    ));
}

#[tokio::test]
async fn empty_user_info_result_is_invalid_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user.info");
            then.status(200).json_body(json!({"status": "OK", "result": []}));
        })
        .await;

    let err = client_for(&server).fetch_user_info("nobody").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidData(_)));
}

#[tokio::test]
async fn malformed_body_is_a_deserialization_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user.status");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = client_for(&server)
        .fetch_submissions("tourist")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Deserialization(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:1/api".to_string(),
    };
    let err = CodeforcesClient::new(&config)
        .unwrap()
        .fetch_user_info("tourist")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}
