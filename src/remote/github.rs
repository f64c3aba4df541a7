//! GitHub Contents API store for the tracked state file
//!
//! Every successful PUT is a commit. The blob sha returned by GitHub is the
//! revision token; a PUT based on a stale sha is rejected with 409.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::io::configuration::{
    COMMITTER_NAME_PREFIX, HTTP_TIMEOUT_SECS, NOREPLY_EMAIL_DOMAIN, USER_AGENT,
};
use crate::io::error::{GraphArtError, Result};
use crate::io::settings::Settings;
use crate::remote::store::{LoadedState, Revision, StateStore};

/// Characters left unescaped by a URI component encoder
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escape a single path segment or query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build the shared HTTP agent
pub fn http_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    #[serde(rename = "type")]
    kind: Option<String>,
    sha: Option<String>,
    content: Option<String>,
    encoding: Option<String>,
}

#[derive(Debug, Serialize)]
struct Committer {
    name: String,
    email: String,
}

#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    message: String,
    committer: Committer,
    content: String,
    sha: &'a str,
}

#[derive(Debug, Deserialize)]
struct UpdatedContent {
    sha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateResponse {
    content: Option<UpdatedContent>,
    commit: Option<serde_json::Value>,
}

/// State file held in a GitHub repository
pub struct GitHubStore {
    agent: ureq::Agent,
    url: String,
    token: String,
    user: String,
    path: String,
}

impl GitHubStore {
    /// Store for the repository and file named in the settings
    pub fn new(agent: ureq::Agent, api_url: &str, settings: &Settings) -> Self {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            api_url.trim_end_matches('/'),
            encode_component(&settings.user),
            encode_component(&settings.repo),
            encode_component(&settings.state_file),
        );

        Self {
            agent,
            url,
            token: settings.token.clone(),
            user: settings.user.clone(),
            path: settings.state_file.clone(),
        }
    }

    /// Contents endpoint of the state file
    pub fn url(&self) -> &str {
        &self.url
    }

    fn read_error(&self, reason: impl Into<String>) -> GraphArtError {
        GraphArtError::RemoteRead {
            url: self.url.clone(),
            reason: reason.into(),
        }
    }

    fn write_error(&self, reason: impl Into<String>) -> GraphArtError {
        GraphArtError::RemoteWrite {
            url: self.url.clone(),
            reason: reason.into(),
        }
    }

    fn committer(&self) -> Committer {
        Committer {
            name: format!("{COMMITTER_NAME_PREFIX} {}", self.user),
            email: format!("{}@{NOREPLY_EMAIL_DOMAIN}", self.user),
        }
    }
}

/// Decode file content as returned by the Contents API
///
/// # Errors
///
/// Returns a description of the problem if the encoding is unsupported or the
/// payload is not valid for it
pub fn decode_content(content: &str, encoding: &str) -> std::result::Result<String, String> {
    match encoding {
        "base64" => {
            let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = STANDARD
                .decode(compact)
                .map_err(|e| format!("invalid base64 content: {e}"))?;
            String::from_utf8(bytes).map_err(|e| format!("content is not UTF-8: {e}"))
        }
        "utf-8" | "utf8" => Ok(content.to_string()),
        other => Err(format!("unsupported content encoding \"{other}\"")),
    }
}

fn status_reason(error: ureq::Error) -> (Option<u16>, String) {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            (Some(code), format!("HTTP {code}: {body}"))
        }
        ureq::Error::Transport(transport) => (None, transport.to_string()),
    }
}

impl StateStore for GitHubStore {
    fn load(&self) -> Result<LoadedState> {
        tracing::debug!(url = %self.url, "fetching state file");
        let response = self
            .agent
            .get(&self.url)
            .set("Authorization", &format!("token {}", self.token))
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.read_error(status_reason(e).1))?;

        let info: ContentsResponse = response
            .into_json()
            .map_err(|e| self.read_error(format!("expected a JSON object descriptor: {e}")))?;

        let kind = info.kind.unwrap_or_default();
        if kind != "file" {
            return Err(self.read_error(format!(
                "expected type of state file to be \"file\", received \"{kind}\""
            )));
        }
        let sha = info
            .sha
            .filter(|sha| !sha.is_empty())
            .ok_or_else(|| self.read_error("expected sha"))?;

        let content = decode_content(
            info.content.as_deref().unwrap_or_default(),
            info.encoding.as_deref().unwrap_or("base64"),
        )
        .map_err(|reason| self.read_error(reason))?;

        LoadedState::from_content(&content, Revision::new(sha))
    }

    fn save(&self, content: &str, revision: &Revision) -> Result<Revision> {
        let request = UpdateRequest {
            message: format!("Update {}", self.path),
            committer: self.committer(),
            content: STANDARD.encode(content),
            sha: revision.as_str(),
        };

        let response = self
            .agent
            .put(&self.url)
            .set("Authorization", &format!("token {}", self.token))
            .set("Accept", "application/json")
            .send_json(&request)
            .map_err(|e| match status_reason(e) {
                (Some(409), _) => GraphArtError::RevisionConflict {
                    revision: revision.to_string(),
                },
                (_, reason) => self.write_error(reason),
            })?;

        let info: UpdateResponse = response
            .into_json()
            .map_err(|e| self.write_error(format!("expected a JSON commit response: {e}")))?;

        let sha = info
            .content
            .and_then(|content| content.sha)
            .filter(|sha| !sha.is_empty())
            .ok_or_else(|| self.write_error("expected content sha to be returned"))?;
        if info.commit.is_none() {
            return Err(self.write_error("expected commit details to be returned"));
        }

        Ok(Revision::new(sha))
    }
}
