use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::options::UnknownCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Portuguese,
        Language::Russian,
        Language::Chinese,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Chinese => "zh",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Chinese => "Chinese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| UnknownCode::new("language", s))
    }
}

/// Region codes as Google News expects them in `gl` and `ceid`.
///
/// `UK` is kept as-is rather than the ISO `GB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "US")]
    UnitedStates,
    #[serde(rename = "UK")]
    UnitedKingdom,
    #[serde(rename = "CA")]
    Canada,
    #[serde(rename = "AU")]
    Australia,
    #[serde(rename = "IN")]
    India,
    #[serde(rename = "FR")]
    France,
    #[serde(rename = "DE")]
    Germany,
    #[serde(rename = "JP")]
    Japan,
    #[serde(rename = "BR")]
    Brazil,
    #[serde(rename = "MX")]
    Mexico,
    #[serde(rename = "IT")]
    Italy,
    #[serde(rename = "ES")]
    Spain,
    #[serde(rename = "NL")]
    Netherlands,
    #[serde(rename = "RU")]
    Russia,
    #[serde(rename = "ZA")]
    SouthAfrica,
}

impl Region {
    pub const ALL: [Region; 15] = [
        Region::UnitedStates,
        Region::UnitedKingdom,
        Region::Canada,
        Region::Australia,
        Region::India,
        Region::France,
        Region::Germany,
        Region::Japan,
        Region::Brazil,
        Region::Mexico,
        Region::Italy,
        Region::Spain,
        Region::Netherlands,
        Region::Russia,
        Region::SouthAfrica,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Region::UnitedStates => "US",
            Region::UnitedKingdom => "UK",
            Region::Canada => "CA",
            Region::Australia => "AU",
            Region::India => "IN",
            Region::France => "FR",
            Region::Germany => "DE",
            Region::Japan => "JP",
            Region::Brazil => "BR",
            Region::Mexico => "MX",
            Region::Italy => "IT",
            Region::Spain => "ES",
            Region::Netherlands => "NL",
            Region::Russia => "RU",
            Region::SouthAfrica => "ZA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::UnitedStates => "United States",
            Region::UnitedKingdom => "United Kingdom",
            Region::Canada => "Canada",
            Region::Australia => "Australia",
            Region::India => "India",
            Region::France => "France",
            Region::Germany => "Germany",
            Region::Japan => "Japan",
            Region::Brazil => "Brazil",
            Region::Mexico => "Mexico",
            Region::Italy => "Italy",
            Region::Spain => "Spain",
            Region::Netherlands => "Netherlands",
            Region::Russia => "Russia",
            Region::SouthAfrica => "South Africa",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCode::new("region", s))
    }
}

/// Language and region applied to the whole generated URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    pub language: Language,
    pub region: Region,
}

impl FeedSettings {
    pub fn new(language: Language, region: Region) -> Self {
        Self { language, region }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = FeedSettings::default();
        assert_eq!(settings.language.code(), "en");
        assert_eq!(settings.region.code(), "US");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Japanese);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_region_parse_is_case_insensitive() {
        assert_eq!("uk".parse::<Region>().unwrap(), Region::UnitedKingdom);
        assert_eq!("ZA".parse::<Region>().unwrap(), Region::SouthAfrica);
        assert!("GB".parse::<Region>().is_err());
    }

    #[test]
    fn test_settings_deserialize_from_codes() {
        let settings: FeedSettings =
            serde_json::from_str(r#"{"language": "de", "region": "DE"}"#).unwrap();
        assert_eq!(settings, FeedSettings::new(Language::German, Region::Germany));
    }
}
