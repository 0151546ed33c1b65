mod common;

use std::sync::Arc;

use common::{MockPlatform, uncached_bot, workspace};
use slack_mcp::features::{WorkflowOutcome, summarize_and_post};

#[tokio::test]
async fn test_end_to_end_posts_summary_to_general() {
    let mock = workspace();
    let bot = uncached_bot(&mock);

    let outcome = summarize_and_post(&bot, "general", 5).await;
    assert!(outcome.is_completed());

    let text = outcome.to_string();
    assert_eq!(
        text,
        "Summary generated and posted to #general. Post result: Message posted successfully"
    );
    assert_eq!(
        mock.posts(),
        vec![(
            "C01".to_string(),
            "Summary: deploy finished tests are green lunch?".to_string()
        )]
    );
    assert_eq!(mock.history_calls(), vec![("C01".to_string(), 5)]);
}

#[tokio::test]
async fn test_empty_fetch_stops_before_posting() {
    let mock = Arc::new(MockPlatform::with_channels(&[("C05", "quiet")]));
    let bot = uncached_bot(&mock);

    let outcome = summarize_and_post(&bot, "quiet", 10).await;
    assert!(!outcome.is_completed());
    assert_eq!(
        outcome.to_string(),
        "Failed to fetch messages: No messages found"
    );
    assert!(mock.posts().is_empty());
}

#[tokio::test]
async fn test_fetch_error_stops_before_posting() {
    let mock = workspace();
    mock.fail_history("ratelimited");
    let bot = uncached_bot(&mock);

    let outcome = summarize_and_post(&bot, "general", 10).await;
    match &outcome {
        WorkflowOutcome::FetchFailed { reason } => {
            assert_eq!(reason, "Slack API Error: ratelimited");
        }
        other => panic!("expected FetchFailed, got {other:?}"),
    }
    assert!(outcome.to_string().contains("Failed"));
    assert!(mock.posts().is_empty());
}

#[tokio::test]
async fn test_unknown_channel_stops_before_posting() {
    let mock = workspace();
    let bot = uncached_bot(&mock);

    let outcome = summarize_and_post(&bot, "mcp", 10).await;
    assert_eq!(
        outcome.to_string(),
        "Failed to fetch messages: Channel 'mcp' not found"
    );
    assert!(mock.posts().is_empty());
}

#[tokio::test]
async fn test_messages_mentioning_errors_are_still_summarized() {
    let mock = workspace();
    mock.set_history("C02", &["Error: build 42 failed"]);
    let bot = uncached_bot(&mock);

    let outcome = summarize_and_post(&bot, "random", 10).await;
    assert!(outcome.is_completed());
    assert_eq!(
        mock.posts(),
        vec![("C02".to_string(), "Summary: Error: build 42 failed".to_string())]
    );
}

#[tokio::test]
async fn test_failed_post_still_completes_with_inner_result() {
    let mock = workspace();
    mock.fail_post("channel_is_archived");
    let bot = uncached_bot(&mock);

    let outcome = summarize_and_post(&bot, "general", 3).await;
    assert!(outcome.is_completed());
    assert_eq!(
        outcome.to_string(),
        "Summary generated and posted to #general. Post result: Slack API Error: channel_is_archived"
    );
    if let WorkflowOutcome::Completed { summary, post, .. } = outcome {
        assert!(summary.starts_with("Summary: "));
        assert!(post.is_err());
    }
}

#[tokio::test]
async fn test_zero_count_stops_before_posting() {
    let mock = workspace();
    let bot = uncached_bot(&mock);

    let outcome = summarize_and_post(&bot, "general", 0).await;
    assert!(!outcome.is_completed());
    assert_eq!(
        outcome.to_string(),
        "Failed to fetch messages: No messages found"
    );
    assert!(mock.posts().is_empty());
    assert!(mock.history_calls().is_empty());
}
