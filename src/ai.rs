// Copyright (c) SGBR.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Category suggestions from the external prompt service. The service is a
//! collaborator we don't own: we send a description plus the category names
//! we know about, and it answers with a subset. Responses are never trusted
//! blindly — they are clamped to [`MAX_SUGGESTIONS`] and filtered back
//! against the supplied list.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::http_client;

pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    pub transaction_description: String,
    pub available_categories: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub suggested_categories: Vec<String>,
}

pub struct SuggestClient {
    url: String,
    http: reqwest::blocking::Client,
}

impl SuggestClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Ok(SuggestClient {
            url: url.into(),
            http: http_client()?,
        })
    }

    pub fn from_env() -> Result<Self> {
        let url = std::env::var("SGBR_AI_URL")
            .context("SGBR_AI_URL is not set; point it at the suggestion service")?;
        SuggestClient::new(url)
    }

    /// Raw suggestions from the service; callers apply them through
    /// [`apply_suggestions`] so stale answers are dropped and the list is
    /// sanitized.
    pub fn suggest(&self, description: &str, available: &[String]) -> Result<Vec<String>> {
        let req = SuggestRequest {
            transaction_description: description.to_string(),
            available_categories: available.to_vec(),
        };
        let resp: SuggestResponse = self
            .http
            .post(&self.url)
            .json(&req)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(resp.suggested_categories)
    }
}

/// Keep only categories we actually offered, drop duplicates, cap at
/// [`MAX_SUGGESTIONS`].
pub fn sanitize_suggestions(suggested: Vec<String>, available: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for s in suggested {
        if available.contains(&s) && !out.contains(&s) {
            out.push(s);
        }
        if out.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    out
}

/// Orders in-flight suggestion requests so only the newest response is
/// applied. Each request takes a token from [`begin`](Self::begin); a
/// response is applied only when [`accept`](Self::accept) still matches,
/// which discards answers that arrive after a newer request started.
#[derive(Debug, Default)]
pub struct SuggestionTracker {
    latest: u64,
}

impl SuggestionTracker {
    pub fn new() -> Self {
        SuggestionTracker::default()
    }

    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn accept(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// Apply a suggestion response: `None` when `token` no longer names the
/// newest request, otherwise the sanitized list.
pub fn apply_suggestions(
    tracker: &SuggestionTracker,
    token: u64,
    suggested: Vec<String>,
    available: &[String],
) -> Option<Vec<String>> {
    tracker
        .accept(token)
        .then(|| sanitize_suggestions(suggested, available))
}
