//! User agent rotation
//!
//! Each search request presents a randomly chosen browser user agent. When
//! no agent can be produced the request falls back to one fixed string.

use rand::seq::SliceRandom;
use thiserror::Error;

/// User agent sent when rotation fails
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_4) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/81.0.4044.138 Safari/537.36";

const BUILTIN_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.61 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:76.0) Gecko/20100101 Firefox/76.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.1 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:76.0) Gecko/20100101 Firefox/76.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.61 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:76.0) Gecko/20100101 Firefox/76.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 13_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.1.1 Mobile/15E148 Safari/604.1",
];

/// Errors that can occur while producing a user agent
#[derive(Debug, Error)]
pub enum UserAgentError {
    #[error("user agent pool is empty")]
    EmptyPool,

    #[error("user agent source unavailable: {0}")]
    Unavailable(String),
}

/// Something that can hand out a user agent string
pub trait UserAgentSource: Send + Sync {
    /// Returns the user agent for the next request
    fn user_agent(&self) -> Result<String, UserAgentError>;
}

/// Picks uniformly at random from a fixed list of user agents
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl UserAgentPool {
    /// Creates a pool from the given agents
    pub fn new(agents: Vec<String>) -> Self {
        Self { agents }
    }

    /// Creates a pool of common desktop and mobile browser agents
    pub fn builtin() -> Self {
        Self::new(BUILTIN_USER_AGENTS.iter().map(|s| s.to_string()).collect())
    }

    /// Consumes the pool, returning its agents
    pub fn into_agents(self) -> Vec<String> {
        self.agents
    }
}

impl UserAgentSource for UserAgentPool {
    fn user_agent(&self) -> Result<String, UserAgentError> {
        self.agents
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(UserAgentError::EmptyPool)
    }
}

/// Returns a user agent from `source`, or [`DEFAULT_USER_AGENT`] if it fails
pub fn pick_user_agent(source: &dyn UserAgentSource) -> String {
    match source.user_agent() {
        Ok(agent) => agent,
        Err(e) => {
            tracing::warn!("Falling back to default user agent: {}", e);
            DEFAULT_USER_AGENT.to_string()
        }
    }
}
