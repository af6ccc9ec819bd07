use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::data::{ACTORS, ACTRESSES, DIRECTORS, GENRES, MOVIE_TITLES, TV_SHOWS};
use crate::error::Error;
use crate::table::CategoryTable;

/// Film and television data categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Genre,
    MovieTitle,
    TvShow,
    Director,
    Actor,
    Actress,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Genre,
        Category::MovieTitle,
        Category::TvShow,
        Category::Director,
        Category::Actor,
        Category::Actress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Genre => "genre",
            Category::MovieTitle => "movie_title",
            Category::TvShow => "tv_show",
            Category::Director => "director",
            Category::Actor => "actor",
            Category::Actress => "actress",
        }
    }

    pub fn table(self) -> &'static CategoryTable {
        match self {
            Category::Genre => &GENRES,
            Category::MovieTitle => &MOVIE_TITLES,
            Category::TvShow => &TV_SHOWS,
            Category::Director => &DIRECTORS,
            Category::Actor => &ACTORS,
            Category::Actress => &ACTRESSES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts snake_case or kebab-case names, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| Error::UnknownCategory(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snake_and_kebab_case() {
        assert_eq!("tv_show".parse::<Category>(), Ok(Category::TvShow));
        assert_eq!("movie-title".parse::<Category>(), Ok(Category::MovieTitle));
        assert_eq!(" Actress ".parse::<Category>(), Ok(Category::Actress));
    }

    #[test]
    fn unknown_name_errors() {
        assert_eq!(
            "composer".parse::<Category>(),
            Err(Error::UnknownCategory("composer".to_string()))
        );
    }

    #[test]
    fn display_matches_serde_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).expect("serialize category");
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn table_names_match_categories() {
        for category in Category::ALL {
            assert_eq!(category.table().name(), category.as_str());
        }
    }
}
