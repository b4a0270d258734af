//! Catalog content models
//!
//! Content items are owned by a production company and carry a single
//! content type plus any number of genre tags.

use serde::{Deserialize, Serialize};

pub type ContentId = i64;
pub type ProductionCompanyId = i64;

/// Kind of catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Movie,
    TvShow,
    Documentary,
    ShortFilm,
    Miniseries,
}

impl ContentType {
    /// Canonical tag, as stored and as shown on dashboards
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "MOVIE",
            ContentType::TvShow => "TV_SHOW",
            ContentType::Documentary => "DOCUMENTARY",
            ContentType::ShortFilm => "SHORT_FILM",
            ContentType::Miniseries => "MINISERIES",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MOVIE" => Some(ContentType::Movie),
            "TV_SHOW" => Some(ContentType::TvShow),
            "DOCUMENTARY" => Some(ContentType::Documentary),
            "SHORT_FILM" => Some(ContentType::ShortFilm),
            "MINISERIES" => Some(ContentType::Miniseries),
            _ => None,
        }
    }
}

/// Genre tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    War,
    Western,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "ACTION",
            Genre::Adventure => "ADVENTURE",
            Genre::Animation => "ANIMATION",
            Genre::Comedy => "COMEDY",
            Genre::Crime => "CRIME",
            Genre::Documentary => "DOCUMENTARY",
            Genre::Drama => "DRAMA",
            Genre::Family => "FAMILY",
            Genre::Fantasy => "FANTASY",
            Genre::History => "HISTORY",
            Genre::Horror => "HORROR",
            Genre::Music => "MUSIC",
            Genre::Mystery => "MYSTERY",
            Genre::Romance => "ROMANCE",
            Genre::SciFi => "SCI_FI",
            Genre::Thriller => "THRILLER",
            Genre::War => "WAR",
            Genre::Western => "WESTERN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let genre = match s.trim().to_ascii_uppercase().as_str() {
            "ACTION" => Genre::Action,
            "ADVENTURE" => Genre::Adventure,
            "ANIMATION" => Genre::Animation,
            "COMEDY" => Genre::Comedy,
            "CRIME" => Genre::Crime,
            "DOCUMENTARY" => Genre::Documentary,
            "DRAMA" => Genre::Drama,
            "FAMILY" => Genre::Family,
            "FANTASY" => Genre::Fantasy,
            "HISTORY" => Genre::History,
            "HORROR" => Genre::Horror,
            "MUSIC" => Genre::Music,
            "MYSTERY" => Genre::Mystery,
            "ROMANCE" => Genre::Romance,
            "SCI_FI" | "SCIFI" | "SCIENCE_FICTION" => Genre::SciFi,
            "THRILLER" => Genre::Thriller,
            "WAR" => Genre::War,
            "WESTERN" => Genre::Western,
            _ => return None,
        };
        Some(genre)
    }
}

/// A catalog entry owned by a production company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub content_type: ContentType,
    /// Zero or more genre tags; never null
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub production_company_id: ProductionCompanyId,
}
