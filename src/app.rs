use crate::api::ddragon::DataDragonClient;
use crate::champions::ChampionCache;
use crate::config::Config;
use crate::mastery::MasteryService;
use crate::stats::StatsPool;

pub type LiveMasteryService = MasteryService<StatsPool, DataDragonClient>;

/// Everything a command needs, built once at startup and shared by reference.
pub struct AppContext {
    pub config: Config,
    pub masteries: LiveMasteryService,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let stats = StatsPool::new(&config);
        let champions = ChampionCache::new(DataDragonClient::new(&config));

        AppContext {
            masteries: MasteryService::new(stats, champions),
            config,
        }
    }
}
