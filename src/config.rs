// src/config.rs
use std::{env, net::SocketAddr, time::Duration};

use anyhow::{Context, bail};

/// Runtime configuration, read once at startup.
///
/// The upstream endpoint is a deployment secret, so there is no compiled-in
/// default; everything else falls back to the values the service has always
/// shipped with.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Remote RAG chat endpoint receiving `{ sessionId, action, chatInput }`.
    pub rag_api_url: String,
    /// Outbound call timeout. Generous, since backend generation is slow.
    pub request_timeout: Duration,
    /// Fixed delay before dispatching upstream. Zero disables it.
    pub pacing_delay: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let rag_api_url = match env::var("RAG_API_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => bail!("RAG_API_URL environment variable is required"),
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a port number")?,
            Err(_) => 5000,
        };
        let bind_addr = format!("{host}:{port}")
            .parse()
            .with_context(|| format!("invalid bind address {host}:{port}"))?;

        let request_timeout = Duration::from_secs(match env::var("RAG_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().context("RAG_TIMEOUT_SECS must be a number")?,
            Err(_) => 140,
        });

        let pacing_delay = Duration::from_millis(match env::var("PACING_DELAY_MS") {
            Ok(raw) => raw.parse().context("PACING_DELAY_MS must be a number")?,
            Err(_) => 500,
        });

        Ok(Self {
            bind_addr,
            rag_api_url,
            request_timeout,
            pacing_delay,
        })
    }
}
