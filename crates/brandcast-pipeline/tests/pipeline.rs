//! End-to-end pipeline tests against a wiremock model endpoint.

use brandcast_core::content::ContentBody;
use brandcast_core::session::SessionState;
use brandcast_model::ModelClient;
use brandcast_pipeline::{analyze_website, generate_content, GenerationRequest, ResearchInput};
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ModelClient {
    ModelClient::with_base_url("test-key", "test-model", 30, base_url)
        .expect("client construction should not fail")
}

fn research_input() -> ResearchInput {
    ResearchInput {
        website_url: "https://example.com".to_string(),
        vertical: "Food & Beverage".to_string(),
        notes: String::new(),
    }
}

fn profile_body() -> serde_json::Value {
    serde_json::json!({
        "content": [{ "text": serde_json::json!({
            "businessNature": "Sells coffee gear.",
            "mission": "Better mornings.",
            "vision": "v",
            "values": ["Craft"],
            "targetAudience": {
                "demographic": "d", "psychographic": "p",
                "painPoints": ["stale beans"], "aspirations": ["great coffee"],
                "contentHabits": "h", "summary": "Urban coffee enthusiasts"
            },
            "uniqueValue": { "primary": "Lab-tested burrs.", "supporting": [], "proofPoints": [] },
            "brandVoice": {
                "description": "Warm and precise.", "toneAttributes": [],
                "doStatements": [], "dontStatements": [], "example": ""
            },
            "competitiveAdvantages": [], "strategicPriorities": [],
            "industryContext": { "trends": [], "opportunities": [], "challenges": [] }
        }).to_string() }]
    })
}

fn campaigns_body() -> serde_json::Value {
    serde_json::json!({
        "content": [{ "text": "```json\n{\"campaigns\": [{\"name\": \"Launch Week\", \"objective\": \"awareness\"}]}\n```" }]
    })
}

async fn mount_research_mocks(server: &MockServer) {
    Mock::given(method("POST"))
        .and(body_string_contains("Brand Strategy Consultant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("Campaign Strategist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(campaigns_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn research_commits_profile_and_campaigns_together() {
    let server = MockServer::start().await;
    mount_research_mocks(&server).await;

    let client = test_client(&server.uri());
    let mut session = SessionState::new();
    let (profile, campaigns) = analyze_website(&client, &mut session, research_input())
        .await
        .expect("research should succeed");

    assert_eq!(profile.mission, "Better mornings.");
    assert_eq!(campaigns.len(), 1);
    assert!(session.research_complete());
    assert_eq!(session.stage1.campaigns[0].name, "Launch Week");
}

#[tokio::test]
async fn research_failure_leaves_session_untouched() {
    let server = MockServer::start().await;

    // Profile call succeeds, campaigns call returns prose with no JSON.
    Mock::given(method("POST"))
        .and(body_string_contains("Brand Strategy Consultant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("Campaign Strategist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [{ "text": "I'm unable to produce campaigns right now." }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut session = SessionState::new();
    let result = analyze_website(&client, &mut session, research_input()).await;

    assert!(result.is_err());
    assert!(!session.research_complete(), "partial results were committed");
}

#[tokio::test]
async fn generation_assigns_ids_and_recounts_thread_characters() {
    let server = MockServer::start().await;
    mount_research_mocks(&server).await;

    // Stage-2 shapes: a post and a thread with lying character counts.
    Mock::given(method("POST"))
        .and(body_string_contains("social media post"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [{ "text": serde_json::json!({
                "contentNumber": 99,
                "contentType": "ignored",
                "platform": "ignored",
                "contentStructure": "single",
                "title": "Post title",
                "hook": "h", "body": "b", "cta": "c",
                "hashtags": ["coffee"]
            }).to_string() }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("8-tweet thread"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [{ "text": serde_json::json!({
                "contentStructure": "thread",
                "title": "Thread topic",
                "tweets": [
                    {"tweetNumber": 1, "content": "Ten chars!", "characterCount": 280},
                    {"tweetNumber": 2, "content": "Two.", "characterCount": 0}
                ]
            }).to_string() }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut session = SessionState::new();
    analyze_website(&client, &mut session, research_input())
        .await
        .unwrap();

    let produced = generate_content(
        &client,
        &mut session,
        GenerationRequest {
            total: 3,
            kind_ids: vec!["post".to_string(), "thread".to_string()],
            platform_ids: vec!["linkedin".to_string()],
        },
    )
    .await
    .expect("generation should succeed");

    assert_eq!(produced, 3);
    let items = &session.stage2.items;
    assert_eq!(items.len(), 3);

    // pieces_per_kind = 2: two posts then one thread, numbered locally.
    assert_eq!(items[0].id, "content-1");
    assert_eq!(items[0].content_number, 1);
    assert_eq!(items[0].content_type, "Social Posts");
    assert_eq!(items[0].platform, "LinkedIn");
    assert_eq!(items[2].content_type, "Twitter Threads");

    match &items[2].body {
        ContentBody::Thread { tweets } => {
            assert_eq!(tweets[0].character_count, 10);
            assert_eq!(tweets[1].character_count, 4);
        }
        other => panic!("expected thread body, got {other:?}"),
    }
}

#[tokio::test]
async fn one_bad_piece_aborts_the_whole_batch() {
    let server = MockServer::start().await;
    mount_research_mocks(&server).await;

    Mock::given(method("POST"))
        .and(body_string_contains("social media post"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [{ "text": serde_json::json!({
                "contentStructure": "single", "title": "ok"
            }).to_string() }]
        })))
        .mount(&server)
        .await;
    // The ad call returns unusable prose.
    Mock::given(method("POST"))
        .and(body_string_contains("ad copy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [{ "text": "no json here" }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut session = SessionState::new();
    analyze_website(&client, &mut session, research_input())
        .await
        .unwrap();

    let result = generate_content(
        &client,
        &mut session,
        GenerationRequest {
            total: 2,
            kind_ids: vec!["post".to_string(), "ad".to_string()],
            platform_ids: vec!["linkedin".to_string()],
        },
    )
    .await;

    assert!(result.is_err());
    assert!(
        session.stage2.items.is_empty(),
        "partial batch was committed"
    );
    // Stage-1 progress survives the stage-2 failure.
    assert!(session.research_complete());
}
