use phrase_tag_common_config::PhraseTagConfig;
use phrase_tag_core::{KeyQuery, PhraseTagClient, TagError, TagService};
use tracing_test::traced_test;
use wiremock::matchers::{body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT_PATH: &str = "/v2/projects/PROJECT_ID";

fn client_for(server: &MockServer) -> PhraseTagClient {
    client_at(server.uri())
}

fn client_at(endpoint: String) -> PhraseTagClient {
    let mut config = PhraseTagConfig::default();
    config.phrase.project_id = "PROJECT_ID".to_string();
    config.phrase.api_token = "API_TOKEN".into();
    config.phrase.user_agent = "myProject".to_string();
    config.phrase.endpoint = endpoint;

    PhraseTagClient::from_config(&config).expect("Failed to create client")
}

fn query(key: Option<&str>, tags: &[&str]) -> KeyQuery {
    KeyQuery::new(
        key.map(str::to_string),
        tags.iter().map(|t| t.to_string()).collect(),
    )
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

#[tokio::test]
async fn test_list_returns_names_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PROJECT_PATH}/keys")))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .and(query_param("q", "error.* tags:messages,urgent"))
        .and(header("authorization", "token API_TOKEN"))
        .and(header("user-agent", "myProject"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "1", "name": "a", "description": null},
            {"id": "2", "name": "b"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let keys = client_for(&server)
        .list(&query(Some("error.*"), &["messages", "urgent"]))
        .await
        .unwrap();

    assert_eq!(keys, vec!["a", "b"]);
}

#[tokio::test]
async fn test_list_omits_empty_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PROJECT_PATH}/keys")))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let keys = client_for(&server).list(&KeyQuery::default()).await.unwrap();
    assert!(keys.is_empty());
}

#[tokio::test]
async fn test_list_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let err = client_for(&server).list(&KeyQuery::default()).await.unwrap_err();

    assert!(matches!(err, TagError::Provider { status: 500, ref body } if body == "server error"));
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("server error"));
}

#[tokio::test]
async fn test_list_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list(&KeyQuery::default()).await.unwrap_err();
    assert!(matches!(err, TagError::Response(_)));
}

#[tokio::test]
#[traced_test]
async fn test_tag_returns_count_and_logs() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{PROJECT_PATH}/keys/tag")))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .and(body_string("q=tags%3Amessages&tags=new-tag"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"records_affected": "6"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server)
        .tag(&query(None, &["messages"]), &tags(&["new-tag"]))
        .await
        .unwrap();

    assert_eq!(records, 6);
    assert!(logs_contain("tagged 6 keys"));
    assert!(logs_contain("tags:messages"));
    assert!(logs_contain("new-tag"));
    assert!(!logs_contain("untagged"));
}

#[tokio::test]
#[traced_test]
async fn test_tag_joins_multiple_tags() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{PROJECT_PATH}/keys/tag")))
        .and(body_string("q=error.*&tags=new-tag%2Canother-new-tag"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"records_affected": "2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server)
        .tag(&query(Some("error.*"), &[]), &tags(&["new-tag", "another-new-tag"]))
        .await
        .unwrap();

    assert_eq!(records, 2);
    assert!(logs_contain("new-tag, another-new-tag"));
}

#[tokio::test]
async fn test_tag_omits_empty_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{PROJECT_PATH}/keys/tag")))
        .and(body_string("tags=new-tag"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"records_affected": "0"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server)
        .tag(&KeyQuery::default(), &tags(&["new-tag"]))
        .await
        .unwrap();
    assert_eq!(records, 0);
}

#[tokio::test]
async fn test_tag_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{PROJECT_PATH}/keys/tag")))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .tag(&query(None, &["messages"]), &tags(&["new-tag"]))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("server error"));
}

#[tokio::test]
async fn test_tag_rejects_non_numeric_count() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"records_affected": "many"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .tag(&query(None, &["messages"]), &tags(&["new-tag"]))
        .await
        .unwrap_err();
    assert!(matches!(err, TagError::InvalidCount { ref value } if value == "many"));
}

#[tokio::test]
#[traced_test]
async fn test_untag_returns_count_and_logs() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{PROJECT_PATH}/keys/untag")))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .and(body_string("q=error.*+tags%3Amessages&tags=old-tag"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"records_affected": "6"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server)
        .untag(&query(Some("error.*"), &["messages"]), &tags(&["old-tag"]))
        .await
        .unwrap();

    assert_eq!(records, 6);
    assert!(logs_contain("untagged 6 keys"));
    assert!(logs_contain("error.* tags:messages"));
    assert!(logs_contain("old-tag"));
}

#[tokio::test]
async fn test_untag_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{PROJECT_PATH}/keys/untag")))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .untag(&query(None, &["messages"]), &tags(&["old-tag"]))
        .await
        .unwrap_err();

    assert!(matches!(err, TagError::Provider { status: 500, ref body } if body == "server error"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_at(format!("http://127.0.0.1:{port}"));

    let err = client.list(&KeyQuery::default()).await.unwrap_err();
    assert!(matches!(err, TagError::Transport(_)));
    assert_eq!(err.status(), None);
}
