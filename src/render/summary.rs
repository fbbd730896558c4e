use crate::api::endpoints;
use crate::mastery::Masteries;

/// How many champions get their own field.
pub const TOP_FIELDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Chat-ready summary of a player's mastery, independent of the Discord library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterySummary {
    pub title: String,
    pub url: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub fields: Vec<SummaryField>,
}

/// `"{points}\n({share}%)"`, share to two decimals. `total` must be non-zero.
pub fn format_share(points: i64, total: i64) -> String {
    let share = points as f64 / total as f64 * 100.0;
    format!("{}\n({:.2}%)", points, share)
}

pub fn build_summary(name: &str, masteries: &Masteries) -> MasterySummary {
    let total = masteries.total_points();
    let top: Vec<_> = masteries.descending().collect();

    let thumbnail = top
        .first()
        .and_then(|best| masteries.champions.icon_url(&best.champion));

    // Nothing to take a share of when the player has no points at all
    let fields = if total > 0 {
        top.iter()
            .take(TOP_FIELDS)
            .map(|entry| SummaryField {
                name: entry.champion.clone(),
                value: format_share(entry.points, total),
                inline: true,
            })
            .collect()
    } else {
        Vec::new()
    };

    MasterySummary {
        title: "Player summary".to_string(),
        url: endpoints::opgg_profile(masteries.region.code, name),
        description: format!("{}\nMastery points: {}", name, total),
        thumbnail,
        fields,
    }
}
