use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::champions::{ChampionCache, ChampionSnapshot, ChampionSource};
use crate::error::AppError;
use crate::region::Region;
use crate::stats::StatsApi;

/// Expected, user-facing reasons a lookup can't produce data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    NoSuchRegion,
    NoSuchSummoner,
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupFailure::NoSuchRegion => write!(f, "No such region"),
            LookupFailure::NoSuchSummoner => write!(f, "No such summoner"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionPoints {
    pub champion: String,
    pub points: i64,
}

/// A player's mastery, ordered ascending by points.
#[derive(Debug, Clone)]
pub struct Masteries {
    pub region: Region,
    pub entries: Vec<ChampionPoints>,
    /// The champion data the names were resolved against.
    pub champions: Arc<ChampionSnapshot>,
}

impl Masteries {
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.champion.as_str()).collect()
    }

    pub fn points(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.points).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_points(&self) -> i64 {
        self.entries.iter().map(|e| e.points).sum()
    }

    /// Highest mastery first.
    pub fn descending(&self) -> impl Iterator<Item = &ChampionPoints> {
        self.entries.iter().rev()
    }
}

#[derive(Debug, Clone)]
pub enum MasteryLookup {
    Found(Masteries),
    Failed(LookupFailure),
}

pub struct MasteryService<S, C> {
    stats: S,
    champions: ChampionCache<C>,
}

impl<S: StatsApi, C: ChampionSource> MasteryService<S, C> {
    pub fn new(stats: S, champions: ChampionCache<C>) -> Self {
        MasteryService { stats, champions }
    }

    pub fn champions(&self) -> &ChampionCache<C> {
        &self.champions
    }

    /// Looks up a player's champion mastery.
    ///
    /// Unknown regions and players come back as [`MasteryLookup::Failed`];
    /// network and decoding problems are returned as errors.
    pub async fn get_masteries(&self, name: &str, region: &str) -> Result<MasteryLookup, AppError> {
        let Some(region) = Region::parse(region) else {
            return Ok(MasteryLookup::Failed(LookupFailure::NoSuchRegion));
        };

        let summoner = match self.stats.summoner_by_name(region, name).await {
            Ok(summoner) => summoner,
            Err(AppError::PlayerNotFound(_)) => {
                debug!("No summoner named {} in {}", name, region.code);
                return Ok(MasteryLookup::Failed(LookupFailure::NoSuchSummoner));
            }
            Err(e) => return Err(e),
        };

        let masteries = self.stats.champion_masteries(region, &summoner.id).await?;
        let ids: Vec<i64> = masteries.iter().map(|m| m.champion_id).collect();
        let champions = self.champions.ensure(region, &ids).await?;

        // Upstream returns highest points first
        let entries = masteries
            .iter()
            .rev()
            .map(|m| {
                let champion = champions
                    .name(m.champion_id)
                    .ok_or(AppError::UnknownChampion(m.champion_id))?;
                Ok(ChampionPoints {
                    champion: champion.to_string(),
                    points: m.champion_points,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        info!(
            "Fetched {} champion masteries for {} ({})",
            entries.len(),
            name,
            region.code
        );

        Ok(MasteryLookup::Found(Masteries {
            region,
            entries,
            champions,
        }))
    }
}
