//! Integration tests for whole-model and single-attribute translation.
//!
//! A recording model implementation stands in for the host persistence
//! layer; wiremock stands in for the translation endpoint.

use assert_json_diff::assert_json_eq;
use async_trait::async_trait;
use deepl_translator::{
    DeeplClient, LocalizedAttributeMap, ModelTranslator, Result, Translatable, TranslationError,
    TranslatorConfig,
};
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// An article with two translatable attributes that records every
/// update call instead of persisting it.
struct Article {
    title: String,
    body: String,
    updates: Vec<LocalizedAttributeMap>,
}

impl Article {
    fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            updates: Vec::new(),
        }
    }
}

#[async_trait]
impl Translatable for Article {
    fn translated_attributes(&self) -> Vec<String> {
        vec!["title".to_string(), "body".to_string()]
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "title" => Some(self.title.clone()),
            "body" => Some(self.body.clone()),
            _ => None,
        }
    }

    async fn update(&mut self, translations: LocalizedAttributeMap) -> Result<()> {
        self.updates.push(translations);
        Ok(())
    }
}

/// A model whose persistence layer rejects every update.
struct ReadOnlyArticle;

#[async_trait]
impl Translatable for ReadOnlyArticle {
    fn translated_attributes(&self) -> Vec<String> {
        vec!["title".to_string()]
    }

    fn attribute(&self, _name: &str) -> Option<String> {
        Some("Hello".to_string())
    }

    async fn update(&mut self, _translations: LocalizedAttributeMap) -> Result<()> {
        Err(TranslationError::UpdateError {
            message: "read-only storage".to_string(),
        })
    }
}

fn translator_for(server: &MockServer) -> ModelTranslator {
    let config = TranslatorConfig::new(server.uri(), "test_key");
    ModelTranslator::new(DeeplClient::new(config).unwrap())
}

fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.into_owned())
}

fn translation_body(text: &str) -> String {
    format!(r#"{{"translations":[{{"text":"{}"}}]}}"#, text)
}

/// Test that every non-empty attribute is translated, one request per
/// attribute, in declared order, and persisted as a single bundle.
#[tokio::test]
async fn test_translates_attributes_in_declared_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(query_param("text", "Hi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(translation_body("Salut")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(query_param("text", "World"))
        .respond_with(ResponseTemplate::new(200).set_body_string(translation_body("Monde")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut article = Article::new("Hi", "World");
    let result = translator_for(&mock_server)
        .translate_model(&mut article, "fr", Some("en"))
        .await;

    assert!(result.is_ok(), "translation should succeed: {:?}", result.err());

    let requests = mock_server.received_requests().await.unwrap();
    let texts: Vec<Option<String>> = requests.iter().map(|r| query_value(r, "text")).collect();
    assert_eq!(
        texts,
        [Some("Hi".to_string()), Some("World".to_string())],
        "requests should follow attribute declaration order"
    );

    assert_eq!(article.updates.len(), 1, "exactly one update call");
    assert_json_eq!(
        serde_json::to_value(&article.updates[0]).unwrap(),
        json!({ "fr": { "title": "Salut", "body": "Monde" } })
    );
}

/// Test that an empty attribute value produces neither a request nor a
/// map entry.
#[tokio::test]
async fn test_empty_attribute_is_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(query_param("text", "Hi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(translation_body("Salut")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut article = Article::new("Hi", "");
    let result = translator_for(&mock_server)
        .translate_model(&mut article, "fr", None)
        .await;

    assert!(result.is_ok(), "translation should succeed: {:?}", result.err());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "empty body must not be sent for translation");

    assert_json_eq!(
        serde_json::to_value(&article.updates[0]).unwrap(),
        json!({ "fr": { "title": "Salut" } })
    );
}

/// Test that a transport failure on any attribute aborts the whole
/// operation before anything is persisted.
#[tokio::test]
async fn test_transport_error_aborts_whole_operation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let mut article = Article::new("Hi", "World");
    let result = translator_for(&mock_server)
        .translate_model(&mut article, "fr", None)
        .await;

    assert!(matches!(result, Err(TranslationError::ApiError { .. })));
    assert!(article.updates.is_empty(), "nothing may be persisted on failure");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "the loop must stop at the first failure");
}

/// Test the single-attribute path. An empty value is still sent to the
/// endpoint here, unlike the whole-model path which skips it.
#[tokio::test]
async fn test_single_attribute_sends_empty_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(query_param("text", ""))
        .respond_with(ResponseTemplate::new(200).set_body_string(translation_body("")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut article = Article::new("", "World");
    let result = translator_for(&mock_server)
        .translate_model_attribute(&mut article, "title", "fr", None)
        .await;

    assert!(result.is_ok(), "translation should succeed: {:?}", result.err());
    assert_json_eq!(
        serde_json::to_value(&article.updates[0]).unwrap(),
        json!({ "fr": { "title": "" } })
    );
}

/// Test that an attribute the model does not expose fails without any
/// network activity.
#[tokio::test]
async fn test_unknown_attribute_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(translation_body("x")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut article = Article::new("Hi", "World");
    let result = translator_for(&mock_server)
        .translate_model_attribute(&mut article, "subtitle", "fr", None)
        .await;

    assert!(matches!(
        result,
        Err(TranslationError::UnknownAttribute { .. })
    ));
    assert!(article.updates.is_empty());
}

/// Test that a rejected update call surfaces the persistence error.
#[tokio::test]
async fn test_update_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(translation_body("Hallo")))
        .mount(&mock_server)
        .await;

    let mut article = ReadOnlyArticle;
    let result = translator_for(&mock_server)
        .translate_model(&mut article, "de", None)
        .await;

    assert!(matches!(result, Err(TranslationError::UpdateError { .. })));
}
