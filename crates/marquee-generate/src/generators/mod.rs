use std::collections::BTreeMap;

use marquee_core::Category;
use rand::RngCore;

/// Generator trait for a single output column.
pub trait Generator: Send + Sync {
    fn id(&self) -> &'static str;

    fn category(&self) -> Category;

    fn generate(&self, rng: &mut dyn RngCore) -> &'static str {
        self.category().table().pick(rng)
    }
}

/// Registry of generators keyed by id.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            generators: BTreeMap::new(),
        };
        for category in Category::ALL {
            registry.register_generator(Box::new(CategoryGenerator { category }));
        }
        registry
    }

    /// Register a generator, replacing any previous one with the same id.
    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.id(), generator);
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(|generator| generator.as_ref())
    }

    /// First registered generator (by id) that draws from `category`.
    pub fn for_category(&self, category: Category) -> Option<&dyn Generator> {
        self.generators
            .values()
            .find(|generator| generator.category() == category)
            .map(|generator| generator.as_ref())
    }

    /// Sorted, unique generator ids.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable generator id for a category.
pub fn generator_id(category: Category) -> &'static str {
    match category {
        Category::Genre => "movie.genre",
        Category::MovieTitle => "movie.title",
        Category::TvShow => "movie.tv_show",
        Category::Director => "movie.director",
        Category::Actor => "movie.actor",
        Category::Actress => "movie.actress",
    }
}

struct CategoryGenerator {
    category: Category,
}

impl Generator for CategoryGenerator {
    fn id(&self) -> &'static str {
        generator_id(self.category)
    }

    fn category(&self) -> Category {
        self.category
    }
}
