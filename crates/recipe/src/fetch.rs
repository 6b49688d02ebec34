use std::time::Duration;

use kondate_shared::{Error, recipe::RecipeDraft};
use url::Url;

/// Accepts only absolute `http`/`https` urls.
pub fn parse_url(raw: &str) -> kondate_shared::Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|_| Error::InvalidUrl(raw.to_owned()))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(Error::InvalidUrl(raw.to_owned()));
    }

    Ok(url)
}

/// Thin HTTP client that downloads recipe pages.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> kondate_shared::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|err| Error::Unknown(err.into()))?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &Url) -> kondate_shared::Result<String> {
        let unavailable = |reason: String| Error::MarkupUnavailable {
            url: url.to_string(),
            reason,
        };

        tracing::info!(url = %url, "fetching recipe page");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| unavailable(err.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(unavailable(format!("server returned {status}")));
        }

        let markup = resp
            .text()
            .await
            .map_err(|err| unavailable(err.to_string()))?;

        tracing::debug!(url = %url, bytes = markup.len(), "fetched recipe page");

        Ok(markup)
    }
}

/// Fetches a page and normalizes it into a draft. Nothing is persisted.
#[derive(Clone)]
pub struct Importer {
    fetcher: Fetcher,
}

impl Importer {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    #[tracing::instrument(skip(self))]
    pub async fn import(&self, url: &str) -> kondate_shared::Result<RecipeDraft> {
        let url = parse_url(url)?;
        let markup = self.fetcher.fetch(&url).await?;

        let draft = crate::normalize(&markup).map_err(|err| match err {
            Error::Extraction(reason) => Error::Extraction(format!("{url}: {reason}")),
            err => err,
        })?;

        tracing::info!(
            url = %url,
            name = %draft.name,
            ingredients = draft.ingredients.len(),
            instructions = draft.instructions.len(),
            "recipe extracted"
        );

        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        assert!(parse_url("https://example.com/recipes/miso").is_ok());
        assert!(parse_url(" http://localhost:8080/a ").is_ok());

        for raw in ["", "example.com/recipe", "/recipes/1", "ftp://example.com/r", "mailto:a@b.c"] {
            let err = parse_url(raw).unwrap_err();
            assert!(matches!(err, Error::InvalidUrl(_)), "{raw}");
        }
    }
}
