use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::endpoints;
use super::models::*;

pub const USER_AGENT: &str = concat!("mastery_bot/", env!("CARGO_PKG_VERSION"));

// Riot development keys allow 20 requests per second per platform.
const REQUESTS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(20) {
    Some(n) => n,
    None => panic!("rate limit must be non-zero"),
};

pub(crate) fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Maps a finished ureq call to its body, or to the error taxonomy used by the bot.
pub(crate) fn read_response(
    url: &str,
    response: Result<ureq::Response, ureq::Error>,
) -> Result<String, AppError> {
    match response {
        Ok(resp) => resp
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string())),
        Err(ureq::Error::Status(404, _)) => Err(AppError::NotFound(url.to_string())),
        Err(ureq::Error::Status(429, _)) => {
            warn!("Rate limited by upstream on {}", url);
            Err(AppError::RateLimited)
        }
        Err(e) => Err(AppError::HttpError(e.to_string())),
    }
}

/// Blocking client for one Riot platform (e.g. `euw1`).
pub struct RiotApiClient {
    platform: &'static str,
    api_key: String,
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl RiotApiClient {
    pub fn new(config: &Config, platform: &'static str) -> Self {
        let rate_limiter = RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND));
        RiotApiClient {
            platform,
            api_key: config.api_key.clone(),
            agent: build_agent(config.request_timeout),
            rate_limiter,
            clock: DefaultClock::default(),
        }
    }

    #[cfg(test)]
    pub fn platform(&self) -> &'static str {
        self.platform
    }

    /// Parks the calling thread until the local quota has room for one more request.
    fn wait_for_slot(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        self.wait_for_slot();
        debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .set("X-Riot-Token", &self.api_key)
            .call();

        read_response(url, response)
    }

    pub fn get_summoner_by_name(&self, name: &str) -> Result<SummonerDto, AppError> {
        let url = endpoints::summoner_by_name(self.platform, name);

        let body = self.execute_request(&url).map_err(|e| match e {
            AppError::NotFound(_) => AppError::PlayerNotFound(name.to_string()),
            other => other,
        })?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn get_champion_masteries(
        &self,
        summoner_id: &str,
    ) -> Result<Vec<ChampionMasteryDto>, AppError> {
        let url = endpoints::masteries_by_summoner(self.platform, summoner_id);

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }
}
