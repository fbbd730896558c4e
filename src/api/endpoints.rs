// API endpoint definitions and URL builders

pub const DATA_DRAGON_URL: &str = "https://ddragon.leagueoflegends.com";
pub const OPGG_HOST: &str = "op.gg";

pub fn platform_host(platform: &str) -> String {
    format!("https://{}.api.riotgames.com", platform)
}

pub fn summoner_by_name(platform: &str, name: &str) -> String {
    format!(
        "{}/lol/summoner/v4/summoners/by-name/{}",
        platform_host(platform),
        urlencoding::encode(name)
    )
}

pub fn masteries_by_summoner(platform: &str, summoner_id: &str) -> String {
    format!(
        "{}/lol/champion-mastery/v4/champion-masteries/by-summoner/{}",
        platform_host(platform),
        urlencoding::encode(summoner_id)
    )
}

pub fn realm(region_code: &str) -> String {
    format!("{}/realms/{}.json", DATA_DRAGON_URL, region_code)
}

pub fn champion_full(version: &str, locale: &str) -> String {
    format!(
        "{}/cdn/{}/data/{}/championFull.json",
        DATA_DRAGON_URL, version, locale
    )
}

pub fn champion_icon(version: &str, image: &str) -> String {
    format!("{}/cdn/{}/img/champion/{}", DATA_DRAGON_URL, version, image)
}

/// Profile page on op.gg, with the player name as a query parameter.
pub fn opgg_profile(region_code: &str, name: &str) -> String {
    format!(
        "https://{}.{}/summoner/userName={}",
        region_code,
        OPGG_HOST,
        form_encode(name)
    )
}

/// `application/x-www-form-urlencoded` value: spaces become `+`, a literal
/// `+` stays distinguishable as `%2B`.
fn form_encode(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn riot_urls_use_platform_host_and_encode_names() {
        assert_eq!(
            summoner_by_name("euw1", "Faker Fan"),
            "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Faker%20Fan"
        );
        assert_eq!(
            masteries_by_summoner("kr", "abc-123"),
            "https://kr.api.riotgames.com/lol/champion-mastery/v4/champion-masteries/by-summoner/abc-123"
        );
    }

    #[test]
    fn data_dragon_urls() {
        assert_eq!(realm("na"), "https://ddragon.leagueoflegends.com/realms/na.json");
        assert_eq!(
            champion_full("14.1.1", "en_AU"),
            "https://ddragon.leagueoflegends.com/cdn/14.1.1/data/en_AU/championFull.json"
        );
        assert_eq!(
            champion_icon("14.1.1", "Ahri.png"),
            "https://ddragon.leagueoflegends.com/cdn/14.1.1/img/champion/Ahri.png"
        );
    }

    #[test]
    fn opgg_link_encodes_the_name() {
        assert_eq!(
            opgg_profile("na", "Doublelift & co"),
            "https://na.op.gg/summoner/userName=Doublelift+%26+co"
        );
    }

    #[test]
    fn opgg_link_form_encodes_spaces_and_plus() {
        assert_eq!(form_encode("Hide on bush"), "Hide+on+bush");
        assert_eq!(form_encode("C++ main"), "C%2B%2B+main");
        assert_eq!(form_encode("Faker"), "Faker");
    }
}
