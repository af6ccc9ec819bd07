//! Integration with the `fake` crate.
//!
//! Each unit struct is a faker config, usable with [`fake::Fake`]:
//!
//! ```
//! use fake::Fake;
//! use marquee_generate::faker::Director;
//!
//! let name: String = Director.fake();
//! assert!(!name.is_empty());
//! ```

use fake::Dummy;
use marquee_core::Category;
use rand::Rng;
use serde::{Deserialize, Serialize};

macro_rules! category_faker {
    ($name:ident, $category:expr) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            pub const CATEGORY: Category = $category;
        }

        impl Dummy<$name> for &'static str {
            fn dummy_with_rng<R: Rng + ?Sized>(_: &$name, rng: &mut R) -> Self {
                $name::CATEGORY.table().pick(rng)
            }
        }

        impl Dummy<$name> for String {
            fn dummy_with_rng<R: Rng + ?Sized>(config: &$name, rng: &mut R) -> Self {
                <&'static str as Dummy<$name>>::dummy_with_rng(config, rng).to_string()
            }
        }
    };
}

category_faker!(Genre, Category::Genre);
category_faker!(MovieTitle, Category::MovieTitle);
category_faker!(TvShow, Category::TvShow);
category_faker!(Director, Category::Director);
category_faker!(Actor, Category::Actor);
category_faker!(Actress, Category::Actress);

/// A full record with one value per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Dummy)]
pub struct MovieRecord {
    #[dummy(faker = "MovieTitle")]
    pub title: String,
    #[dummy(faker = "Genre")]
    pub genre: String,
    #[dummy(faker = "Director")]
    pub director: String,
    #[dummy(faker = "Actor")]
    pub lead_actor: String,
    #[dummy(faker = "Actress")]
    pub lead_actress: String,
    #[dummy(faker = "TvShow")]
    pub tv_show: String,
}
