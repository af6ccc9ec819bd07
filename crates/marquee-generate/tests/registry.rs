use marquee_core::Category;
use marquee_generate::generators::{Generator, GeneratorRegistry, generator_id};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn generator_ids_are_sorted_and_unique() {
    let registry = GeneratorRegistry::new();
    let ids = registry.generator_ids();
    assert_eq!(ids.len(), Category::ALL.len());

    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted);
}

#[test]
fn every_category_has_a_generator() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for category in Category::ALL {
        let generator = registry
            .generator(generator_id(category))
            .expect("generator exists");
        assert_eq!(generator.category(), category);
        assert!(category.table().contains(generator.generate(&mut rng)));
    }
}

#[test]
fn unknown_id_is_absent() {
    let registry = GeneratorRegistry::new();
    assert!(registry.generator("movie.composer").is_none());
}

struct FixedGenre;

impl Generator for FixedGenre {
    fn id(&self) -> &'static str {
        "movie.genre"
    }

    fn category(&self) -> Category {
        Category::Genre
    }

    fn generate(&self, _rng: &mut dyn rand::RngCore) -> &'static str {
        "Western"
    }
}

#[test]
fn registering_same_id_replaces_generator() {
    let mut registry = GeneratorRegistry::new();
    registry.register_generator(Box::new(FixedGenre));
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let generator = registry
        .for_category(Category::Genre)
        .expect("genre generator");
    for _ in 0..10 {
        assert_eq!(generator.generate(&mut rng), "Western");
    }
    assert_eq!(registry.generator_ids().len(), Category::ALL.len());
}
