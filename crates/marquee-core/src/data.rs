//! Static category tables.
//!
//! Every table is built through [`CategoryTable::new`], which rejects empty
//! slices during const evaluation, so an empty table here fails the build.

use crate::table::CategoryTable;

pub static GENRES: CategoryTable = CategoryTable::new(
    "genre",
    &[
        "Action",
        "Adventure",
        "Animation",
        "Biography",
        "Comedy",
        "Crime",
        "Documentary",
        "Drama",
        "Family",
        "Fantasy",
        "Film-Noir",
        "History",
        "Horror",
        "Music",
        "Musical",
        "Mystery",
        "Romance",
        "Sci-Fi",
        "Sport",
        "Thriller",
        "War",
        "Western",
    ],
);

pub static MOVIE_TITLES: CategoryTable = CategoryTable::new(
    "movie_title",
    &[
        "The Shawshank Redemption",
        "The Godfather",
        "The Dark Knight",
        "The Godfather Part II",
        "12 Angry Men",
        "Schindler's List",
        "The Lord of the Rings: The Return of the King",
        "Pulp Fiction",
        "The Lord of the Rings: The Fellowship of the Ring",
        "The Good, the Bad and the Ugly",
        "Forrest Gump",
        "Fight Club",
        "The Lord of the Rings: The Two Towers",
        "Inception",
        "Star Wars: Episode V - The Empire Strikes Back",
        "The Matrix",
        "Goodfellas",
        "One Flew Over the Cuckoo's Nest",
        "Se7en",
        "Seven Samurai",
        "It's a Wonderful Life",
        "The Silence of the Lambs",
        "City of God",
        "Saving Private Ryan",
        "Life Is Beautiful",
        "The Green Mile",
        "Interstellar",
        "Star Wars",
        "Terminator 2: Judgment Day",
        "Back to the Future",
        "Spirited Away",
        "Psycho",
        "The Pianist",
        "Parasite",
        "Leon: The Professional",
        "The Lion King",
        "Gladiator",
        "American History X",
        "The Departed",
        "The Usual Suspects",
        "The Prestige",
        "Whiplash",
        "Casablanca",
        "Harakiri",
        "Grave of the Fireflies",
        "Modern Times",
        "Once Upon a Time in the West",
        "Rear Window",
        "Alien",
        "City Lights",
        "Cinema Paradiso",
        "Apocalypse Now",
        "Memento",
        "Django Unchained",
        "Raiders of the Lost Ark",
        "WALL-E",
    ],
);

pub static TV_SHOWS: CategoryTable = CategoryTable::new(
    "tv_show",
    &[
        "Breaking Bad",
        "Planet Earth II",
        "Planet Earth",
        "Band of Brothers",
        "Chernobyl",
        "The Wire",
        "Avatar: The Last Airbender",
        "Blue Planet II",
        "The Sopranos",
        "Cosmos: A Spacetime Odyssey",
        "Cosmos",
        "Our Planet",
        "Game of Thrones",
        "Rick and Morty",
        "The World at War",
        "Bluey",
        "Fullmetal Alchemist: Brotherhood",
        "Life",
        "The Last Dance",
        "Sherlock",
        "The Twilight Zone",
        "Attack on Titan",
        "Firefly",
        "Arcane",
        "True Detective",
        "The Office",
        "Seinfeld",
        "Friends",
        "Better Call Saul",
        "Fargo",
        "Dark",
        "Twin Peaks",
        "Stranger Things",
        "The Simpsons",
        "Mad Men",
        "Succession",
        "Frasier",
        "Fawlty Towers",
        "Black Mirror",
        "The Crown",
        "Peaky Blinders",
        "Cowboy Bebop",
    ],
);

pub static DIRECTORS: CategoryTable = CategoryTable::new(
    "director",
    &[
        "Steven Spielberg",
        "Martin Scorsese",
        "Alfred Hitchcock",
        "Stanley Kubrick",
        "Quentin Tarantino",
        "Orson Welles",
        "Francis Ford Coppola",
        "Ridley Scott",
        "Akira Kurosawa",
        "Joel Coen",
        "Ethan Coen",
        "Christopher Nolan",
        "Billy Wilder",
        "Charles Chaplin",
        "Ingmar Bergman",
        "Federico Fellini",
        "Sergio Leone",
        "David Fincher",
        "James Cameron",
        "Peter Jackson",
        "Frank Capra",
        "Roman Polanski",
        "Woody Allen",
        "David Lynch",
        "Sidney Lumet",
        "Clint Eastwood",
        "Hayao Miyazaki",
        "Denis Villeneuve",
        "Bong Joon Ho",
        "Wes Anderson",
        "Paul Thomas Anderson",
        "Kathryn Bigelow",
        "Sofia Coppola",
        "Greta Gerwig",
        "Jane Campion",
        "Spike Lee",
        "Guillermo del Toro",
        "Alfonso Cuaron",
        "Pedro Almodovar",
        "Andrei Tarkovsky",
    ],
);

pub static ACTORS: CategoryTable = CategoryTable::new(
    "actor",
    &[
        "Marlon Brando",
        "Humphrey Bogart",
        "Jack Nicholson",
        "Robert De Niro",
        "Al Pacino",
        "Daniel Day-Lewis",
        "Dustin Hoffman",
        "Tom Hanks",
        "Anthony Hopkins",
        "Paul Newman",
        "Denzel Washington",
        "Spencer Tracy",
        "Laurence Olivier",
        "Jack Lemmon",
        "Michael Caine",
        "James Stewart",
        "Robin Williams",
        "Robert Duvall",
        "Sean Penn",
        "Morgan Freeman",
        "Jeff Bridges",
        "Sidney Poitier",
        "Peter O'Toole",
        "Clint Eastwood",
        "Gene Hackman",
        "Charles Chaplin",
        "Ben Kingsley",
        "Philip Seymour Hoffman",
        "Leonardo DiCaprio",
        "Russell Crowe",
        "Kevin Spacey",
        "Cary Grant",
        "Gregory Peck",
        "Clark Gable",
        "Gary Cooper",
        "Henry Fonda",
        "Johnny Depp",
        "Brad Pitt",
        "Christian Bale",
        "Joaquin Phoenix",
        "Gary Oldman",
        "Samuel L. Jackson",
        "Harrison Ford",
        "Tom Cruise",
        "Matt Damon",
        "Heath Ledger",
        "Kirk Douglas",
        "Burt Lancaster",
        "James Dean",
        "Toshiro Mifune",
    ],
);

pub static ACTRESSES: CategoryTable = CategoryTable::new(
    "actress",
    &[
        "Meryl Streep",
        "Katharine Hepburn",
        "Bette Davis",
        "Ingrid Bergman",
        "Audrey Hepburn",
        "Elizabeth Taylor",
        "Cate Blanchett",
        "Judi Dench",
        "Kate Winslet",
        "Julianne Moore",
        "Frances McDormand",
        "Jodie Foster",
        "Vivien Leigh",
        "Greta Garbo",
        "Marilyn Monroe",
        "Grace Kelly",
        "Sophia Loren",
        "Natalie Portman",
        "Nicole Kidman",
        "Viola Davis",
        "Emma Thompson",
        "Helen Mirren",
        "Julia Roberts",
        "Sandra Bullock",
        "Halle Berry",
        "Charlize Theron",
        "Hilary Swank",
        "Jessica Lange",
        "Susan Sarandon",
        "Sigourney Weaver",
        "Diane Keaton",
        "Faye Dunaway",
        "Jane Fonda",
        "Sally Field",
        "Glenn Close",
        "Olivia de Havilland",
        "Joan Crawford",
        "Barbara Stanwyck",
        "Lauren Bacall",
        "Emma Stone",
        "Jennifer Lawrence",
        "Amy Adams",
        "Scarlett Johansson",
        "Penelope Cruz",
        "Tilda Swinton",
        "Michelle Yeoh",
        "Olivia Colman",
        "Saoirse Ronan",
        "Marion Cotillard",
        "Isabelle Huppert",
    ],
);
