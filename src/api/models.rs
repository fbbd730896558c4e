use serde::Deserialize;
use std::collections::HashMap;

// Summoner V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct SummonerDto {
    pub id: String,
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summoner_level: i64,
}

// Champion Mastery V4 response entry
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_points: i64,
    #[serde(default)]
    pub champion_level: i64,
}

// Data Dragon realm manifest (realms/{region}.json)
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct RealmDto {
    /// Per-data-type versions, `champion` is the one we need.
    pub n: RealmVersions,
    /// Locale advertised by the realm. Not used, the configured locale wins.
    #[serde(default)]
    pub l: String,
}

#[derive(Debug, Deserialize)]
pub struct RealmVersions {
    pub champion: String,
}

// Data Dragon championFull.json
#[derive(Debug, Deserialize)]
pub struct ChampionFullDto {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    /// Numeric champion id, serialized as a string.
    pub key: String,
    pub name: String,
    pub image: ChampionImage,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionImage {
    pub full: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realm_manifest_parses() {
        let body = r#"{"n":{"item":"14.1.1","champion":"14.1.2"},"v":"14.1.1","l":"en_US","cdn":"https://ddragon.leagueoflegends.com/cdn"}"#;
        let realm: RealmDto = serde_json::from_str(body).unwrap();

        assert_eq!(realm.n.champion, "14.1.2");
        assert_eq!(realm.l, "en_US");
    }

    #[test]
    fn champion_full_parses_and_ignores_extra_fields() {
        let body = r#"{
            "type": "champion",
            "version": "14.1.1",
            "data": {
                "Ahri": {"id": "Ahri", "key": "103", "name": "Ahri", "title": "the Nine-Tailed Fox",
                         "image": {"full": "Ahri.png", "sprite": "champion0.png"}},
                "MonkeyKing": {"id": "MonkeyKing", "key": "62", "name": "Wukong",
                               "image": {"full": "MonkeyKing.png"}}
            }
        }"#;
        let full: ChampionFullDto = serde_json::from_str(body).unwrap();

        assert_eq!(full.data.len(), 2);
        assert_eq!(full.data["MonkeyKing"].name, "Wukong");
        assert_eq!(full.data["MonkeyKing"].image.full, "MonkeyKing.png");
        assert_eq!(full.data["Ahri"].key, "103");
    }

    #[test]
    fn mastery_list_parses() {
        let body = r#"[
            {"puuid":"p","championId":103,"championLevel":7,"championPoints":250000},
            {"championId":238,"championPoints":1200}
        ]"#;
        let list: Vec<ChampionMasteryDto> = serde_json::from_str(body).unwrap();

        assert_eq!(list[0].champion_id, 103);
        assert_eq!(list[0].champion_points, 250000);
        assert_eq!(list[1].champion_level, 0);
    }
}
