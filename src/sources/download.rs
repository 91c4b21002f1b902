use std::time::Duration;

use reqwest::blocking::Client;

use super::FetchError;

pub fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(client)
}

/// GET `url` and return the body, failing on non-success statuses.
pub fn download_text(client: &Client, url: &str) -> Result<String, FetchError> {
    log::debug!("GET {}", url);
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    Ok(response.text()?)
}
