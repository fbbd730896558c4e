/// Short region codes accepted from users, paired with the Riot platform id.
pub const REGIONS: &[(&str, &str)] = &[
    ("br", "br1"),
    ("eune", "eun1"),
    ("euw", "euw1"),
    ("jp", "jp1"),
    ("kr", "kr"),
    ("lan", "la1"),
    ("las", "la2"),
    ("na", "na1"),
    ("oce", "oc1"),
    ("tr", "tr1"),
    ("ru", "ru"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub code: &'static str,
    pub platform: &'static str,
}

impl Region {
    /// Case-insensitive lookup in the region table.
    pub fn parse(input: &str) -> Option<Region> {
        let wanted = input.trim().to_lowercase();
        REGIONS
            .iter()
            .find(|(code, _)| *code == wanted)
            .map(|(code, platform)| Region { code, platform })
    }

    pub fn all() -> impl Iterator<Item = Region> {
        REGIONS
            .iter()
            .map(|(code, platform)| Region { code, platform })
    }
}
