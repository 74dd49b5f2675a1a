//! HTTP client for the article, document, and court-practice services.

use async_trait::async_trait;
use lexdesk_core::{ApiConfig, Article, Document, PracticeResult};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::info;
use url::form_urlencoded;

use crate::{ClientError, LegalApi};

/// [`LegalApi`] over plain `GET` requests returning JSON.
///
/// No timeouts or retries; a failed request is reported once to the caller.
pub struct HttpLegalApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpLegalApi {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        info!(url = %url, "fetching");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }
        decode(&body)
    }

    fn practice_url(&self) -> Result<&str, ClientError> {
        self.config
            .practice_url
            .as_deref()
            .ok_or(ClientError::NotConfigured("court practice"))
    }
}

/// Build an endpoint URL with percent-encoded query parameters.
///
/// Spaces go out as `%20`, not `+`: article codes always contain spaces and
/// the services match them exactly.
fn endpoint(base: &str, params: &[(&str, &str)]) -> Result<Url, ClientError> {
    let mut url = Url::parse(base).map_err(|e| ClientError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }
    Ok(url)
}

fn encode_component(s: &str) -> String {
    // byte_serialize writes a literal '+' as %2B, so every '+' left is a space.
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl LegalApi for HttpLegalApi {
    async fn list_articles(&self) -> Result<Vec<Article>, ClientError> {
        let url = endpoint(&self.config.articles_url, &[])?;
        let articles: Vec<Article> = self.get_json(url).await?;
        info!(count = articles.len(), "loaded article catalog");
        Ok(articles)
    }

    async fn search_articles(&self, query: &str) -> Result<Vec<Article>, ClientError> {
        let url = endpoint(&self.config.articles_url, &[("search", query)])?;
        let articles: Vec<Article> = self.get_json(url).await?;
        info!(query, count = articles.len(), "article search complete");
        Ok(articles)
    }

    async fn article_by_code(&self, code: &str) -> Result<Option<Article>, ClientError> {
        let url = endpoint(&self.config.articles_url, &[("code", code)])?;
        let article: Option<Article> = self.get_json(url).await?;
        info!(code, found = article.is_some(), "article lookup complete");
        Ok(article)
    }

    async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        let url = endpoint(&self.config.documents_url, &[])?;
        let documents: Vec<Document> = self.get_json(url).await?;
        info!(count = documents.len(), "loaded document library");
        Ok(documents)
    }

    async fn court_practice(&self, article_code: &str) -> Result<PracticeResult, ClientError> {
        let url = endpoint(self.practice_url()?, &[("article_code", article_code)])?;
        let result: PracticeResult = self.get_json(url).await?;
        info!(
            article_code,
            total = result.total,
            cases = result.cases.len(),
            "court practice lookup complete"
        );
        Ok(result)
    }
}
