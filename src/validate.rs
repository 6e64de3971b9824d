use std::collections::BTreeSet;

use anyhow::{Context, Result, bail, ensure};
use reqwest::Url;

const WEBHOOK_HOSTS: [&str; 4] = [
    "discord.com",
    "discordapp.com",
    "canary.discord.com",
    "ptb.discord.com",
];

/// Checks that the URL has the shape `https://discord.com/api/webhooks/<id>/<token>`.
pub fn webhook_url(url: &Url) -> Result<()> {
    assert_url_part("Scheme", "https", url.scheme())?;

    let host = url.host_str().unwrap_or("");
    if !WEBHOOK_HOSTS.contains(&host) {
        bail!("URL Host is {host:?} instead of one of {WEBHOOK_HOSTS:?}");
    }

    let segments = url.path_segments().map_or(vec![], |x| x.collect());
    if segments.len() != 4 {
        bail!("Expected 4 URL path segments, got {}", segments.len());
    }
    assert_url_part("Segment #1", "api", segments[0])?;
    assert_url_part("Segment #2", "webhooks", segments[1])?;
    segments[2].parse::<u64>().context("Invalid Webhook ID")?;
    webhook_token(segments[3])?;

    if let Some(query) = url.query() {
        bail!("Expected no query, got {query}");
    }
    if let Some(frag) = url.fragment() {
        bail!("Expected no fragment, got {frag}");
    }
    Ok(())
}

fn assert_url_part(label: &'static str, expected: &'static str, actual: &str) -> Result<()> {
    if expected != actual {
        bail!("URL {label} is {actual:?} instead of {expected:?}");
    }
    Ok(())
}

fn webhook_token(token: &str) -> Result<()> {
    ensure!(!token.is_empty(), "Token is empty");

    let invalid: BTreeSet<char> = token
        .chars()
        .filter(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .collect();
    ensure!(invalid.is_empty(), "Token contains invalid characters: {invalid:?}");
    Ok(())
}
