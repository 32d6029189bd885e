use anyhow::Result;
use image_prompt::describe::{describe_image, send_request, ImagePrompt};
use image_prompt::encoder::{decode, encode, encode_file, ImageSource};
use image_prompt::errors::PromptError;
use image_prompt::payload::{build_request, DEFAULT_SYSTEM_PROMPT};
use image_prompt::providers::configs::OpenAiProviderConfig;
use image_prompt::providers::openai::OpenAiProvider;
use mockito::{Matcher, Server};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const FIXTURE_BASE64: &str = "/9j/4AAQSkZJRgABAQAAAQABAAD/2wBDAAgGBgcGBQgHBwcJCQgKDBQNDAsLDBkSEw8UHRofHh0aHBwgJC4nICIsIxwcKDcpLDAxNDQ0Hyc5PTgyPC4zNDL/wAALCAACAAIBAREA/8QAHwAAAQUBAQEBAQEAAAAAAAAAAAECAwQFBgcICQoL/8QAtRAAAgEDAwIEAwUFBAQAAAF9AQIDAAQRBRIhMUEGE1FhByJxFDKBkaEII0KxwRVS0fAkM2JyggkKFhcYGRolJicoKSo0NTY3ODk6Q0RFRkdISUpTVFVWV1hZWmNkZWZnaGlqc3R1dnd4eXqDhIWGh4iJipKTlJWWl5iZmqKjpKWmp6ipqrKztLW2t7i5usLDxMXGx8jJytLT1NXW19jZ2uHi4+Tl5ufo6erx8vP09fb3+Pn6/9oACAEBAAA/ACv/2Q==";

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/2x2.jpeg")
}

#[test]
fn test_fixture_encodes_to_known_text() -> Result<()> {
    let path = fixture();
    let from_path = encode_file(&path)?;
    assert_eq!(from_path, FIXTURE_BASE64);

    let bytes = fs::read(&path)?;
    assert_eq!(encode(&ImageSource::bytes(bytes.clone()))?, FIXTURE_BASE64);
    assert_eq!(decode(&from_path)?, bytes);
    Ok(())
}

#[test]
fn test_fixture_request_embeds_data_uri() -> Result<()> {
    let base64_image = encode_file(fixture())?;
    let request = build_request(
        &base64_image,
        "image/jpeg",
        DEFAULT_SYSTEM_PROMPT,
        "What is in the image?",
        "llama-3",
        128,
    )?;

    let user = &request.messages()[1];
    assert_eq!(user.content.parts()[0].as_text(), Some("What is in the image?"));
    assert_eq!(
        user.content.parts()[1].as_image_url(),
        Some(format!("data:image/jpeg;base64,{}", FIXTURE_BASE64).as_str())
    );
    Ok(())
}

#[test]
fn test_describe_image_against_endpoint() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer xxx")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama-3",
            "max_tokens": 128,
            "messages": [
                {"role": "system", "content": DEFAULT_SYSTEM_PROMPT},
                {"role": "user", "content": [
                    {"type": "text", "text": "What is in the image?"},
                    {"type": "image_url", "image_url": {
                        "url": format!("data:image/jpeg;base64,{}", FIXTURE_BASE64)
                    }}
                ]}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "This image is a gray square."},
                    "finish_reason": "stop"
                }]
            })
            .to_string(),
        )
        .expect(1)
        .create();

    let provider = OpenAiProvider::new(OpenAiProviderConfig::new(server.url(), "xxx"))?;
    let reply = describe_image(&provider, &ImageSource::path(fixture()), &ImagePrompt::default())?;

    mock.assert();
    assert_eq!(reply, "This image is a gray square.");
    Ok(())
}

#[test]
fn test_unreachable_endpoint_is_provider_error() -> Result<()> {
    // Nothing listens on port 9 (discard) in the test environment
    let config = OpenAiProviderConfig::new("http://127.0.0.1:9", "xxx").with_timeout(Duration::from_secs(5));
    let provider = OpenAiProvider::new(config)?;
    let request = build_request(FIXTURE_BASE64, "image/jpeg", "s", "u", "llama-3", 16)?;

    let result = send_request(&provider, &request);
    assert!(matches!(result, Err(PromptError::Provider(_))));
    Ok(())
}

#[test]
fn test_empty_choices_from_endpoint_is_malformed() -> Result<()> {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(json!({"choices": []}).to_string())
        .create();

    let provider = OpenAiProvider::new(OpenAiProviderConfig::new(server.url(), "xxx"))?;
    let result = describe_image(&provider, &ImageSource::path(fixture()), &ImagePrompt::default());
    assert!(matches!(result, Err(PromptError::MalformedResponse(_))));
    Ok(())
}

#[test]
fn test_unusable_reply_content_is_malformed() -> Result<()> {
    let bodies = [
        json!({"choices": [{"message": {"role": "assistant", "content": 123}}]}),
        json!({"choices": [{"message": {"role": "assistant", "content": [
            {"type": "refusal", "refusal": "I can't describe this image."}
        ]}}]}),
        json!({"choices": [{"message": {"role": "tool", "content": null}}]}),
        json!({"choices": null}),
    ];
    let request = build_request(FIXTURE_BASE64, "image/jpeg", "s", "u", "llama-3", 16)?;

    for body in bodies {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create();

        let provider = OpenAiProvider::new(OpenAiProviderConfig::new(server.url(), "xxx"))?;
        let result = send_request(&provider, &request);
        assert!(
            matches!(result, Err(PromptError::MalformedResponse(_))),
            "expected a malformed response for {}, got {:?}",
            body,
            result
        );
    }
    Ok(())
}

#[test]
fn test_unknown_role_with_text_still_replies() -> Result<()> {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(json!({"choices": [{"message": {"role": "tool", "content": "This image is dark."}}]}).to_string())
        .create();

    let provider = OpenAiProvider::new(OpenAiProviderConfig::new(server.url(), "xxx"))?;
    let request = build_request(FIXTURE_BASE64, "image/jpeg", "s", "u", "llama-3", 16)?;
    assert_eq!(send_request(&provider, &request)?, "This image is dark.");
    Ok(())
}
