use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::api::ddragon::DataDragonClient;
use crate::api::endpoints;
use crate::api::models::ChampionFullDto;
use crate::error::AppError;
use crate::region::Region;

/// Champion names, icons and the Data Dragon version they came from.
///
/// A snapshot is never mutated; a refresh builds a new one and swaps it in,
/// so the version always matches the records next to it.
#[derive(Debug, Default)]
pub struct ChampionSnapshot {
    version: String,
    names: HashMap<i64, String>,
    images: HashMap<String, String>,
}

impl ChampionSnapshot {
    pub fn from_champion_data(version: String, data: ChampionFullDto) -> Result<Self, AppError> {
        let mut names = HashMap::with_capacity(data.data.len());
        let mut images = HashMap::with_capacity(data.data.len());

        for info in data.data.into_values() {
            let id = info.key.parse::<i64>().map_err(|_| {
                AppError::JsonError(format!("champion {} has a non-numeric key '{}'", info.name, info.key))
            })?;
            images.insert(info.name.clone(), info.image.full);
            names.insert(id, info.name);
        }

        Ok(ChampionSnapshot { version, names, images })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn name(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn image(&self, name: &str) -> Option<&str> {
        self.images.get(name).map(String::as_str)
    }

    pub fn icon_url(&self, name: &str) -> Option<String> {
        self.image(name)
            .map(|image| endpoints::champion_icon(&self.version, image))
    }

    pub fn contains_all(&self, ids: &[i64]) -> bool {
        ids.iter().all(|id| self.names.contains_key(id))
    }
}

/// Where fresh champion snapshots come from.
pub trait ChampionSource: Send + Sync {
    fn fetch_snapshot(
        &self,
        region: Region,
    ) -> impl Future<Output = Result<ChampionSnapshot, AppError>> + Send;
}

impl ChampionSource for DataDragonClient {
    async fn fetch_snapshot(&self, region: Region) -> Result<ChampionSnapshot, AppError> {
        let client = self.clone();

        tokio::task::spawn_blocking(move || {
            let realm = client.get_realm(region.code)?;
            let version = realm.n.champion;
            let data = client.get_champion_full(&version)?;
            ChampionSnapshot::from_champion_data(version, data)
        })
        .await?
    }
}

pub struct ChampionCache<C> {
    source: C,
    current: RwLock<Arc<ChampionSnapshot>>,
    refresh_locks: HashMap<&'static str, Mutex<()>>,
}

impl<C: ChampionSource> ChampionCache<C> {
    /// Starts empty; the first lookup that needs a champion triggers a refresh.
    pub fn new(source: C) -> Self {
        ChampionCache {
            source,
            current: RwLock::new(Arc::new(ChampionSnapshot::default())),
            refresh_locks: Region::all().map(|region| (region.code, Mutex::new(()))).collect(),
        }
    }

    pub fn snapshot(&self) -> Arc<ChampionSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Unconditionally refetches the champion data for `region`.
    pub async fn refresh(&self, region: Region) -> Result<Arc<ChampionSnapshot>, AppError> {
        self.refresh_unless(region, |_| false).await
    }

    /// Returns a snapshot that knows every id in `ids`, refreshing at most once.
    ///
    /// Concurrent callers for the same region queue behind one refresh; whoever
    /// gets the lock second re-checks and reuses the fresh snapshot.
    pub async fn ensure(&self, region: Region, ids: &[i64]) -> Result<Arc<ChampionSnapshot>, AppError> {
        let current = self.snapshot();
        if current.contains_all(ids) {
            return Ok(current);
        }

        self.refresh_unless(region, |snapshot| snapshot.contains_all(ids))
            .await
    }

    /// Refetches under the region's refresh lock unless the snapshot seen
    /// after taking the lock already satisfies `fresh_enough`.
    async fn refresh_unless<F>(&self, region: Region, fresh_enough: F) -> Result<Arc<ChampionSnapshot>, AppError>
    where
        F: Fn(&ChampionSnapshot) -> bool,
    {
        let _guard = match self.refresh_locks.get(region.code) {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        let current = self.snapshot();
        if fresh_enough(&current) {
            debug!("Champion data refreshed by a concurrent lookup");
            return Ok(current);
        }

        self.fetch_and_swap(region).await
    }

    async fn fetch_and_swap(&self, region: Region) -> Result<Arc<ChampionSnapshot>, AppError> {
        let fresh = Arc::new(self.source.fetch_snapshot(region).await?);
        info!(
            "Loaded {} champions from Data Dragon {} ({})",
            fresh.len(),
            fresh.version(),
            region.code
        );

        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = fresh.clone();
        Ok(fresh)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::models::{ChampionImage, ChampionInfo};
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) fn champion_data(champions: &[(i64, &str)]) -> ChampionFullDto {
        ChampionFullDto {
            data: champions
                .iter()
                .map(|(id, name)| {
                    let file_id = name.replace(' ', "");
                    (
                        file_id.clone(),
                        ChampionInfo {
                            key: id.to_string(),
                            name: name.to_string(),
                            image: ChampionImage {
                                full: format!("{}.png", file_id),
                            },
                        },
                    )
                })
                .collect(),
        }
    }

    /// Serves a fixed champion list and counts how often it was asked.
    pub(crate) struct FakeChampionSource {
        pub version: String,
        pub champions: Vec<(i64, String)>,
        pub fetches: Arc<AtomicUsize>,
    }

    impl FakeChampionSource {
        pub(crate) fn new(version: &str, champions: &[(i64, &str)]) -> Self {
            FakeChampionSource {
                version: version.to_string(),
                champions: champions.iter().map(|(id, n)| (*id, n.to_string())).collect(),
                fetches: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl ChampionSource for FakeChampionSource {
        async fn fetch_snapshot(&self, _region: Region) -> Result<ChampionSnapshot, AppError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;

            let champions: Vec<(i64, &str)> =
                self.champions.iter().map(|(id, n)| (*id, n.as_str())).collect();
            ChampionSnapshot::from_champion_data(self.version.clone(), champion_data(&champions))
        }
    }

    struct FailingSource;

    impl ChampionSource for FailingSource {
        async fn fetch_snapshot(&self, _region: Region) -> Result<ChampionSnapshot, AppError> {
            Err(AppError::HttpError("connection reset".to_string()))
        }
    }

    fn na() -> Region {
        Region::parse("na").unwrap()
    }

    #[test]
    fn snapshot_maps_ids_names_and_images() {
        let snapshot = ChampionSnapshot::from_champion_data(
            "14.1.1".to_string(),
            champion_data(&[(103, "Ahri"), (62, "Wukong")]),
        )
        .unwrap();

        assert_eq!(snapshot.version(), "14.1.1");
        assert_eq!(snapshot.name(103), Some("Ahri"));
        assert_eq!(snapshot.image("Ahri"), Some("Ahri.png"));
        assert_eq!(
            snapshot.icon_url("Wukong").as_deref(),
            Some("https://ddragon.leagueoflegends.com/cdn/14.1.1/img/champion/Wukong.png")
        );
        assert!(snapshot.contains_all(&[103, 62]));
        assert!(!snapshot.contains_all(&[103, 1]));
        assert!(snapshot.contains_all(&[]));
    }

    #[test]
    fn non_numeric_key_is_a_decoding_error() {
        let mut data = champion_data(&[(103, "Ahri")]);
        if let Some(info) = data.data.get_mut("Ahri") {
            info.key = "Ahri".to_string();
        }

        let err = ChampionSnapshot::from_champion_data("1".to_string(), data).unwrap_err();
        assert!(matches!(err, AppError::JsonError(_)));
    }

    #[tokio::test]
    async fn ensure_refreshes_once_for_unknown_ids() {
        let source = FakeChampionSource::new("14.1.1", &[(1, "Ahri"), (2, "Zed")]);
        let fetches = source.fetches.clone();
        let cache = ChampionCache::new(source);

        assert_eq!(cache.snapshot().len(), 0);

        let snapshot = cache.ensure(na(), &[1, 2]).await.unwrap();
        assert_eq!(snapshot.name(2), Some("Zed"));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        cache.ensure(na(), &[1, 2]).await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_ensures_share_one_refresh() {
        let source = FakeChampionSource::new("14.1.1", &[(1, "Ahri")]);
        let fetches = source.fetches.clone();
        let cache = ChampionCache::new(source);

        let (a, b) = tokio::join!(cache.ensure(na(), &[1]), cache.ensure(na(), &[1]));

        assert_eq!(a.unwrap().name(1), Some("Ahri"));
        assert_eq!(b.unwrap().name(1), Some("Ahri"));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refresh_replaces_the_whole_snapshot() {
        let source = FakeChampionSource::new("14.2.1", &[(1, "Ahri")]);
        let cache = ChampionCache::new(source);

        let before = cache.snapshot();
        let after = cache.refresh(na()).await.unwrap();

        assert_eq!(before.version(), "");
        assert_eq!(before.name(1), None);
        assert_eq!(after.version(), "14.2.1");
        assert_eq!(cache.snapshot().name(1), Some("Ahri"));
    }

    #[tokio::test]
    async fn refresh_refetches_even_when_ids_are_known() {
        let source = FakeChampionSource::new("14.1.1", &[(1, "Ahri")]);
        let fetches = source.fetches.clone();
        let cache = ChampionCache::new(source);

        cache.ensure(na(), &[1]).await.unwrap();
        cache.refresh(na()).await.unwrap();
        cache.ensure(na(), &[1]).await.unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_old_snapshot() {
        let cache = ChampionCache::new(FailingSource);

        let err = cache.ensure(na(), &[1]).await.unwrap_err();

        assert!(matches!(err, AppError::HttpError(_)));
        assert_eq!(cache.snapshot().len(), 0);
    }
}
