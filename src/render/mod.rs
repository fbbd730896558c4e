//! Turns a mastery lookup into something the bot can post.

pub mod chart;
pub mod summary;

use crate::champions::ChampionSource;
use crate::error::AppError;
use crate::mastery::{LookupFailure, MasteryLookup, MasteryService};
use crate::stats::StatsApi;

pub use summary::MasterySummary;

/// Output of a renderer, or the reason the lookup behind it came up empty.
#[derive(Debug)]
pub enum Rendered<T> {
    Ready(T),
    Failed(LookupFailure),
}

/// Bar chart of every champion's mastery, as PNG bytes.
pub async fn generate_visual<S, C>(
    service: &MasteryService<S, C>,
    name: &str,
    region: &str,
) -> Result<Rendered<Vec<u8>>, AppError>
where
    S: StatsApi,
    C: ChampionSource,
{
    let masteries = match service.get_masteries(name, region).await? {
        MasteryLookup::Found(masteries) => masteries,
        MasteryLookup::Failed(reason) => return Ok(Rendered::Failed(reason)),
    };

    // Rasterising is CPU work, keep it off the async workers
    let name = name.to_string();
    let png = tokio::task::spawn_blocking(move || {
        chart::render_chart(&name, &masteries.names(), &masteries.points())
    })
    .await??;

    Ok(Rendered::Ready(png))
}

/// Summary with the top champions and their share of the player's total.
pub async fn generate_embed<S, C>(
    service: &MasteryService<S, C>,
    name: &str,
    region: &str,
) -> Result<Rendered<MasterySummary>, AppError>
where
    S: StatsApi,
    C: ChampionSource,
{
    match service.get_masteries(name, region).await? {
        MasteryLookup::Found(masteries) => Ok(Rendered::Ready(summary::build_summary(name, &masteries))),
        MasteryLookup::Failed(reason) => Ok(Rendered::Failed(reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mastery::tests::service;
    use crate::render::chart::tests::has_sans_serif_font;

    #[tokio::test]
    async fn renderers_pass_lookup_failures_through() {
        let service = service(&[(1, 100)], &[(1, "Ahri")]);

        let visual = generate_visual(&service, "Faker", "atlantis").await.unwrap();
        assert!(matches!(visual, Rendered::Failed(LookupFailure::NoSuchRegion)));

        let embed = generate_embed(&service, "Nobody", "na").await.unwrap();
        assert!(matches!(embed, Rendered::Failed(LookupFailure::NoSuchSummoner)));
    }

    #[tokio::test]
    async fn embed_is_built_from_the_lookup() {
        let service = service(&[(1, 100), (2, 50)], &[(1, "Ahri"), (2, "Zed")]);

        let Rendered::Ready(summary) = generate_embed(&service, "Faker", "EUW").await.unwrap() else {
            panic!("expected a summary");
        };

        assert_eq!(summary.fields[0].name, "Ahri");
        assert_eq!(summary.fields[0].value, "100\n(66.67%)");
        assert_eq!(summary.url, "https://euw.op.gg/summoner/userName=Faker");
    }

    #[tokio::test]
    async fn visual_renders_png_for_empty_history() {
        if !has_sans_serif_font() {
            eprintln!("no sans-serif font installed, skipping chart rendering");
            return;
        }
        let service = service(&[], &[(1, "Ahri")]);

        let Rendered::Ready(png) = generate_visual(&service, "Faker", "na").await.unwrap() else {
            panic!("expected an image");
        };

        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
