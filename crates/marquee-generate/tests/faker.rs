use fake::{Fake, Faker};
use marquee_core::Category;
use marquee_generate::faker::{Actor, Actress, Director, Genre, MovieRecord, MovieTitle, TvShow};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn fakers_draw_from_their_tables() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..500 {
        let genre: &str = Genre.fake_with_rng(&mut rng);
        assert!(Category::Genre.table().contains(genre));

        let title: String = MovieTitle.fake_with_rng(&mut rng);
        assert!(Category::MovieTitle.table().contains(&title));

        let show: String = TvShow.fake_with_rng(&mut rng);
        assert!(Category::TvShow.table().contains(&show));

        let director: String = Director.fake_with_rng(&mut rng);
        assert!(Category::Director.table().contains(&director));

        let actor: String = Actor.fake_with_rng(&mut rng);
        assert!(Category::Actor.table().contains(&actor));

        let actress: String = Actress.fake_with_rng(&mut rng);
        assert!(Category::Actress.table().contains(&actress));
    }
}

#[test]
fn fake_records_are_reproducible() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(9);
    let mut rng_b = ChaCha8Rng::seed_from_u64(9);
    let records_a: Vec<MovieRecord> = (0..20).map(|_| Faker.fake_with_rng(&mut rng_a)).collect();
    let records_b: Vec<MovieRecord> = (0..20).map(|_| Faker.fake_with_rng(&mut rng_b)).collect();
    assert_eq!(records_a, records_b);

    for record in &records_a {
        assert!(Category::Director.table().contains(&record.director));
        assert!(Category::Actress.table().contains(&record.lead_actress));
    }
}

#[test]
fn fake_without_rng_uses_thread_local_source() {
    let name: String = Director.fake();
    assert!(Category::Director.table().contains(&name));
}
