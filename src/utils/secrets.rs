// src/utils/secrets.rs

use url::Url;

const REDACTED: &str = "***";

/// Render a URL with its password and `apikey` query value masked.
pub fn redact_url(url: &Url) -> String {
    let mut redacted = url.clone();

    if redacted.password().is_some() {
        // Only fails for cannot-be-a-base URLs, which carry no credentials.
        let _ = redacted.set_password(Some(REDACTED));
    }

    if url.query_pairs().any(|(k, _)| k == "apikey") {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let value = if k == "apikey" {
                    REDACTED.to_string()
                } else {
                    v.into_owned()
                };
                (k.into_owned(), value)
            })
            .collect();
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }

    redacted.to_string()
}
