// src/core/net.rs

// Single-page GET over HTTPS via reqwest's blocking client.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HOST, USER_AGENT};
use crate::error::ScrapeError;

pub fn http_get(path: &str) -> Result<String, ScrapeError> {
    let url = format!("https://{}{}", HOST, path);

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(15))
        .build()?;

    let resp = client.get(&url).send()?;
    let status = resp.status();
    if !status.is_success() {
        loge!("GET {} -> {}", url, status);
        return Err(ScrapeError::Status { status: status.as_u16(), url });
    }

    logd!("GET {} -> {}", url, status);
    Ok(resp.text()?)
}
