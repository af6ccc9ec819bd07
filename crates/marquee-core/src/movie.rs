//! Film and television accessors.
//!
//! The free functions draw from the thread-local generator, so they are safe
//! to call from any thread without coordination. [`Movie`] offers the same
//! accessors over an owned random source for reproducible sequences.

use rand::RngCore;
use rand_chacha::ChaCha8Rng;

use crate::data::{ACTORS, ACTRESSES, DIRECTORS, GENRES, MOVIE_TITLES, TV_SHOWS};
use crate::selector::RandomSelector;
use crate::table::CategoryTable;

fn pick_thread_local(table: &CategoryTable) -> &'static str {
    table.pick(&mut rand::rng())
}

/// Random movie genre, e.g. `"Film-Noir"`.
pub fn genre() -> &'static str {
    pick_thread_local(&GENRES)
}

/// Random movie title.
pub fn movie_title() -> &'static str {
    pick_thread_local(&MOVIE_TITLES)
}

/// Random TV show title.
pub fn tv_show() -> &'static str {
    pick_thread_local(&TV_SHOWS)
}

/// Random film director.
pub fn director() -> &'static str {
    pick_thread_local(&DIRECTORS)
}

/// Random actor.
pub fn actor() -> &'static str {
    pick_thread_local(&ACTORS)
}

/// Random actress.
pub fn actress() -> &'static str {
    pick_thread_local(&ACTRESSES)
}

/// Category accessors bound to an explicit random source.
#[derive(Debug, Clone)]
pub struct Movie<R> {
    selector: RandomSelector<R>,
}

impl<R: RngCore> Movie<R> {
    pub fn new(rng: R) -> Self {
        Self {
            selector: RandomSelector::new(rng),
        }
    }

    pub fn genre(&mut self) -> &'static str {
        self.selector.choose(&GENRES)
    }

    pub fn movie_title(&mut self) -> &'static str {
        self.selector.choose(&MOVIE_TITLES)
    }

    pub fn tv_show(&mut self) -> &'static str {
        self.selector.choose(&TV_SHOWS)
    }

    pub fn director(&mut self) -> &'static str {
        self.selector.choose(&DIRECTORS)
    }

    pub fn actor(&mut self) -> &'static str {
        self.selector.choose(&ACTORS)
    }

    pub fn actress(&mut self) -> &'static str {
        self.selector.choose(&ACTRESSES)
    }
}

impl Movie<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            selector: RandomSelector::seeded(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_accessors_replay() {
        let mut first = Movie::seeded(42);
        let mut second = Movie::seeded(42);
        for _ in 0..20 {
            assert_eq!(first.genre(), second.genre());
            assert_eq!(first.director(), second.director());
            assert_eq!(first.actress(), second.actress());
        }
    }

    #[test]
    fn free_accessors_return_table_members() {
        for _ in 0..200 {
            assert!(GENRES.contains(genre()));
            assert!(TV_SHOWS.contains(tv_show()));
            assert!(ACTORS.contains(actor()));
        }
    }
}
