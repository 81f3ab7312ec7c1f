//! Immutable configuration tables, loaded once at process start.
//!
//! Seed-title lists approximate "trending/popular" discovery against the
//! sparse provider, which has no native list concept. Titles are curated
//! well-known entries that the provider is known to resolve. The variant
//! and keyword tables back the substring matchers; the genre-id tables
//! translate category keywords for the rich provider's discovery endpoint.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::discovery::types::ListKind;

/// Short language code -> lowercase substring variants found in the sparse
/// provider's free-text language field.
pub static LANGUAGE_VARIANTS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let mut m: HashMap<&str, &[&str]> = HashMap::new();
        m.insert("en", &["english", "eng"]);
        m.insert("hi", &["hindi"]);
        m.insert("es", &["spanish", "espanol"]);
        m.insert("fr", &["french", "francais"]);
        m.insert("de", &["german", "deutsch"]);
        m.insert("ja", &["japanese"]);
        m.insert("ko", &["korean"]);
        m.insert("zh", &["chinese", "mandarin", "cantonese"]);
        m.insert("pt", &["portuguese"]);
        m.insert("it", &["italian"]);
        m.insert("ru", &["russian"]);
        m.insert("ar", &["arabic"]);
        m.insert("tr", &["turkish"]);
        m
    });

/// Category keyword -> lowercase substring variants found in the sparse
/// provider's free-text genre field.
pub static CATEGORY_KEYWORDS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let mut m: HashMap<&str, &[&str]> = HashMap::new();
        m.insert("action", &["action"]);
        m.insert("adventure", &["adventure"]);
        m.insert("animation", &["animation", "animated"]);
        m.insert("biography", &["biography", "biopic"]);
        m.insert("comedy", &["comedy", "parody"]);
        m.insert("crime", &["crime"]);
        m.insert("documentary", &["documentary"]);
        m.insert("drama", &["drama"]);
        m.insert("family", &["family"]);
        m.insert("fantasy", &["fantasy"]);
        m.insert("history", &["history", "historical"]);
        m.insert("horror", &["horror"]);
        m.insert("mystery", &["mystery"]);
        m.insert("romance", &["romance", "romantic"]);
        m.insert("sci-fi", &["sci-fi", "science fiction", "sci fi"]);
        m.insert("thriller", &["thriller", "suspense"]);
        m.insert("war", &["war"]);
        m.insert("western", &["western"]);
        m
    });

/// Category keyword -> rich-provider genre ids (movie and series ids where
/// the provider splits them).
pub static CATEGORY_TO_GENRE_IDS: Lazy<HashMap<&'static str, &'static [u32]>> = Lazy::new(|| {
    let mut m: HashMap<&str, &[u32]> = HashMap::new();
    m.insert("action", &[28, 10759]);
    m.insert("adventure", &[12, 10759]);
    m.insert("animation", &[16]);
    m.insert("comedy", &[35]);
    m.insert("crime", &[80]);
    m.insert("documentary", &[99]);
    m.insert("drama", &[18]);
    m.insert("family", &[10751]);
    m.insert("fantasy", &[14, 10765]);
    m.insert("history", &[36]);
    m.insert("horror", &[27]);
    m.insert("mystery", &[9648]);
    m.insert("romance", &[10749]);
    m.insert("sci-fi", &[878, 10765]);
    m.insert("thriller", &[53]);
    m.insert("war", &[10752, 10768]);
    m.insert("western", &[37]);
    m
});

/// Rich-provider genre id -> display name, used to resolve `genre_ids` on
/// list results into readable genre strings.
pub static GENRE_NAMES: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(28, "Action");
    m.insert(12, "Adventure");
    m.insert(16, "Animation");
    m.insert(35, "Comedy");
    m.insert(80, "Crime");
    m.insert(99, "Documentary");
    m.insert(18, "Drama");
    m.insert(10751, "Family");
    m.insert(14, "Fantasy");
    m.insert(36, "History");
    m.insert(27, "Horror");
    m.insert(10402, "Music");
    m.insert(9648, "Mystery");
    m.insert(10749, "Romance");
    m.insert(878, "Sci-Fi");
    m.insert(10770, "TV Movie");
    m.insert(53, "Thriller");
    m.insert(10752, "War");
    m.insert(37, "Western");
    m.insert(10759, "Action & Adventure");
    m.insert(10762, "Kids");
    m.insert(10763, "News");
    m.insert(10764, "Reality");
    m.insert(10765, "Sci-Fi & Fantasy");
    m.insert(10766, "Soap");
    m.insert(10767, "Talk");
    m.insert(10768, "War & Politics");
    m
});

/// Mood id -> rich-provider genre ids. The one static mood-to-genre mapping
/// this service carries; exposed read-only.
pub static MOOD_GENRES: Lazy<Vec<(&'static str, &'static [u32])>> = Lazy::new(|| {
    vec![
        ("happy", &[35, 10751][..]),
        ("romantic", &[10749]),
        ("excited", &[28, 12]),
        ("scared", &[27, 53]),
        ("funny", &[35]),
        ("thoughtful", &[18, 99]),
        ("magical", &[14, 16]),
        ("dramatic", &[18]),
        ("adventurous", &[12, 28]),
        ("scifi", &[878]),
    ]
});

type SeedMap = HashMap<ListKind, HashMap<&'static str, &'static [&'static str]>>;

/// Curated well-known titles per (list kind, language code), walked by the
/// sparse adapter in place of native discovery.
static SEED_TITLES: Lazy<SeedMap> = Lazy::new(|| {
    use ListKind::*;
    let mut m: SeedMap = HashMap::new();
    let mut add = |list: ListKind, lang: &'static str, titles: &'static [&'static str]| {
        m.entry(list).or_default().insert(lang, titles);
    };

    add(
        Trending,
        "all",
        &[
            "Breaking Bad", "Game of Thrones", "The Walking Dead", "Stranger Things",
            "The Office", "Friends", "The Big Bang Theory", "How I Met Your Mother",
            "The Dark Knight", "Inception", "Interstellar", "The Matrix",
            "The Crown", "House of Cards", "Sherlock", "Doctor Who",
            "The Mandalorian", "The Witcher", "Chernobyl", "True Detective",
        ],
    );
    add(
        Trending,
        "hi",
        &[
            "Sacred Games", "Scam 1992", "The Family Man", "Mirzapur",
            "Paatal Lok", "Delhi Crime", "Asur", "Breathe",
            "Dangal", "3 Idiots", "Lagaan", "Gully Boy",
            "Gangs of Wasseypur", "Queen", "Barfi!", "Zindagi Na Milegi Dobara",
            "Taare Zameen Par", "Swades", "Rang De Basanti", "Dil Chahta Hai",
        ],
    );
    add(
        Trending,
        "es",
        &[
            "La Casa de Papel", "Narcos", "Elite", "Money Heist",
            "Vis a Vis", "Las Chicas del Cable", "El Ministerio del Tiempo", "Velvet",
            "Pan's Labyrinth", "The Secret in Their Eyes", "Y Tu Mamá También", "Amores Perros",
            "Cable Girls", "The Platform", "Mirage", "The Invisible Guest",
            "Roma", "The Orphanage", "Time Share", "The Skin I Live In",
        ],
    );
    add(
        Trending,
        "fr",
        &[
            "Lupin", "Call My Agent!", "The Bureau", "Marseille",
            "Dix Pour Cent", "Versailles", "Spiral", "Braquo",
            "Amélie", "The Intouchables", "Blue Is the Warmest Color", "La Haine",
            "The Artist", "A Prophet", "The Class", "Cache",
            "Portrait of a Lady on Fire", "Raw", "Elle", "The Diving Bell and the Butterfly",
        ],
    );
    add(
        Trending,
        "ko",
        &[
            "Squid Game", "Parasite", "Crash Landing on You", "Itaewon Class",
            "Kingdom", "Signal", "Stranger", "My Mister",
            "Oldboy", "Memories of Murder", "The Handmaiden", "Train to Busan",
            "The Wailing", "Burning", "I Saw the Devil", "A Taxi Driver",
            "The Host", "Snowpiercer", "The Man from Nowhere", "New World",
        ],
    );
    add(
        Trending,
        "ja",
        &[
            "Attack on Titan", "Death Note", "One Piece", "Naruto",
            "Your Name", "Spirited Away", "My Neighbor Totoro", "Princess Mononoke",
            "Tokyo Story", "Seven Samurai", "Rashomon", "Grave of the Fireflies",
            "Akira", "Ghost in the Shell", "Perfect Blue", "Howl's Moving Castle",
            "The Tale of the Princess Kaguya", "The Wind Rises", "Monster", "Fullmetal Alchemist",
        ],
    );
    add(
        Trending,
        "zh",
        &[
            "Crouching Tiger, Hidden Dragon", "Infernal Affairs", "Hero", "House of Flying Daggers",
            "The Untamed", "Nirvana in Fire", "Story of Yanxi Palace", "The Longest Day in Chang'an",
            "Farewell My Concubine", "In the Mood for Love", "Chungking Express", "Raise the Red Lantern",
            "The Grandmaster", "Ip Man", "Red Cliff", "The Wandering Earth",
        ],
    );
    add(
        Trending,
        "de",
        &[
            "Dark", "Babylon Berlin", "The Lives of Others", "Downfall",
            "The White Ribbon", "Toni Erdmann", "Good Bye Lenin!", "Run Lola Run",
            "The Wave", "The Baader Meinhof Complex", "Head-On", "Victoria",
        ],
    );
    add(
        Trending,
        "pt",
        &[
            "City of God", "Elite Squad", "3%", "The Mechanism",
            "Central Station", "The Second Mother", "Bacurau", "Aquarius",
            "Neighboring Sounds", "The Given Word", "Black Orpheus", "Pixote",
        ],
    );
    add(
        Trending,
        "it",
        &[
            "Gomorrah", "The Young Pope", "My Brilliant Friend", "Suburra",
            "Life Is Beautiful", "Cinema Paradiso", "The Great Beauty", "Bicycle Thieves",
            "8½", "La Dolce Vita", "The Conformist", "The Best of Youth",
        ],
    );
    add(
        Trending,
        "ru",
        &[
            "Leviathan", "Loveless", "The Return", "Stalker",
            "Solaris", "Andrei Rublev", "The Mirror", "Ivan's Childhood",
            "Brother", "Night Watch", "Day Watch", "The Irony of Fate",
        ],
    );
    add(
        Trending,
        "ar",
        &[
            "The Yacoubian Building", "Cairo 678", "The Square", "Wadjda",
            "Omar", "Paradise Now", "Theeb", "Caramel",
            "West Beirut", "Where Do We Go Now?", "The Insult", "Capernaum",
        ],
    );
    add(
        Trending,
        "tr",
        &[
            "Winter Sleep", "Once Upon a Time in Anatolia", "The Wild Pear Tree", "Distant",
            "Uzak", "Climates", "Three Monkeys", "The Edge of Heaven",
            "The Butterfly's Dream", "Miracle", "The Gift", "Commitment",
        ],
    );

    add(
        Popular,
        "all",
        &[
            "Friends", "The Office", "Breaking Bad", "Game of Thrones",
            "The Big Bang Theory", "Stranger Things", "The Walking Dead", "Lost",
            "The Matrix", "Titanic", "Avatar", "The Avengers",
            "The Crown", "House of Cards", "Sherlock", "Doctor Who",
            "The Mandalorian", "The Witcher", "Chernobyl", "True Detective",
            "Pulp Fiction", "Forrest Gump", "The Godfather", "Schindler's List",
        ],
    );
    add(
        Popular,
        "hi",
        &[
            "Sacred Games", "Scam 1992", "The Family Man", "Mirzapur",
            "Paatal Lok", "Delhi Crime", "Asur", "Breathe",
            "Dangal", "3 Idiots", "Lagaan", "Gully Boy",
            "Gangs of Wasseypur", "Queen", "Barfi!", "Zindagi Na Milegi Dobara",
            "Taare Zameen Par", "Swades", "Rang De Basanti", "Dil Chahta Hai",
            "Bajrangi Bhaijaan", "PK", "Andhadhun", "Article 15",
        ],
    );
    add(
        Popular,
        "es",
        &[
            "La Casa de Papel", "Narcos", "Elite", "Money Heist",
            "Vis a Vis", "Las Chicas del Cable", "El Ministerio del Tiempo", "Velvet",
            "Cable Girls", "The Platform", "Mirage", "The Invisible Guest",
            "Y Tu Mamá También", "Pan's Labyrinth", "The Secret in Their Eyes", "Amores Perros",
            "Roma", "The Orphanage", "Time Share", "The Skin I Live In",
        ],
    );
    add(
        Popular,
        "fr",
        &[
            "Lupin", "Call My Agent!", "The Bureau", "Marseille",
            "Dix Pour Cent", "Versailles", "Spiral", "Braquo",
            "Amélie", "The Intouchables", "Blue Is the Warmest Color", "La Haine",
            "The Artist", "A Prophet", "The Class", "Cache",
            "Portrait of a Lady on Fire", "Raw", "Elle", "The Diving Bell and the Butterfly",
        ],
    );
    add(
        Popular,
        "ko",
        &[
            "Squid Game", "Parasite", "Crash Landing on You", "Itaewon Class",
            "Kingdom", "Signal", "Stranger", "My Mister",
            "Oldboy", "Memories of Murder", "The Handmaiden", "Train to Busan",
            "The Wailing", "Burning", "I Saw the Devil", "A Taxi Driver",
            "The Host", "Snowpiercer", "The Man from Nowhere", "New World",
        ],
    );
    add(
        Popular,
        "ja",
        &[
            "Attack on Titan", "Death Note", "One Piece", "Naruto",
            "Your Name", "Spirited Away", "My Neighbor Totoro", "Princess Mononoke",
            "Tokyo Story", "Seven Samurai", "Rashomon", "Grave of the Fireflies",
            "Akira", "Ghost in the Shell", "Perfect Blue", "Howl's Moving Castle",
            "The Tale of the Princess Kaguya", "The Wind Rises", "Monster", "Fullmetal Alchemist",
        ],
    );
    add(
        Popular,
        "zh",
        &[
            "Crouching Tiger, Hidden Dragon", "Infernal Affairs", "Hero", "House of Flying Daggers",
            "The Untamed", "Nirvana in Fire", "Story of Yanxi Palace", "The Longest Day in Chang'an",
            "Farewell My Concubine", "In the Mood for Love", "Chungking Express", "Raise the Red Lantern",
            "The Grandmaster", "Ip Man", "Red Cliff", "The Wandering Earth",
        ],
    );
    add(
        Popular,
        "de",
        &[
            "Dark", "Babylon Berlin", "The Lives of Others", "Downfall",
            "The White Ribbon", "Toni Erdmann", "Good Bye Lenin!", "Run Lola Run",
            "The Wave", "The Baader Meinhof Complex", "Head-On", "Victoria",
        ],
    );
    add(
        Popular,
        "pt",
        &[
            "City of God", "Elite Squad", "3%", "The Mechanism",
            "Central Station", "The Second Mother", "Bacurau", "Aquarius",
            "Neighboring Sounds", "The Given Word", "Black Orpheus", "Pixote",
        ],
    );
    add(
        Popular,
        "it",
        &[
            "Gomorrah", "The Young Pope", "My Brilliant Friend", "Suburra",
            "Life Is Beautiful", "Cinema Paradiso", "The Great Beauty", "Bicycle Thieves",
            "8½", "La Dolce Vita", "The Conformist", "The Best of Youth",
        ],
    );
    add(
        Popular,
        "ru",
        &[
            "Leviathan", "Loveless", "The Return", "Stalker",
            "Solaris", "Andrei Rublev", "The Mirror", "Ivan's Childhood",
            "Brother", "Night Watch", "Day Watch", "The Irony of Fate",
        ],
    );
    add(
        Popular,
        "ar",
        &[
            "The Yacoubian Building", "Cairo 678", "The Square", "Wadjda",
            "Omar", "Paradise Now", "Theeb", "Caramel",
            "West Beirut", "Where Do We Go Now?", "The Insult", "Capernaum",
        ],
    );
    add(
        Popular,
        "tr",
        &[
            "Winter Sleep", "Once Upon a Time in Anatolia", "The Wild Pear Tree", "Distant",
            "Uzak", "Climates", "Three Monkeys", "The Edge of Heaven",
            "The Butterfly's Dream", "Miracle", "The Gift", "Commitment",
        ],
    );

    add(
        TopRated,
        "all",
        &[
            "The Shawshank Redemption", "The Godfather", "The Dark Knight",
            "Pulp Fiction", "Fight Club", "Forrest Gump", "Inception",
            "Breaking Bad", "Game of Thrones", "The Wire", "The Sopranos", "Chernobyl",
            "The Godfather Part II", "Schindler's List", "12 Angry Men", "The Lord of the Rings",
            "Goodfellas", "The Matrix", "Star Wars", "The Silence of the Lambs",
        ],
    );
    add(
        TopRated,
        "hi",
        &[
            "3 Idiots", "Dangal", "Lagaan", "Taare Zameen Par",
            "Gangs of Wasseypur", "Zindagi Na Milegi Dobara", "Queen", "Barfi!",
            "Swades", "Rang De Basanti", "Dil Chahta Hai", "Bajrangi Bhaijaan",
            "PK", "Andhadhun", "Article 15", "Masaan",
        ],
    );
    add(
        TopRated,
        "es",
        &[
            "The Secret in Their Eyes", "Pan's Labyrinth", "Y Tu Mamá También",
            "Amores Perros", "The Motorcycle Diaries", "Biutiful", "Talk to Her",
            "Roma", "The Orphanage", "The Skin I Live In", "Volver",
            "All About My Mother", "The Spirit of the Beehive", "Viridiana",
            "The Discreet Charm of the Bourgeoisie",
        ],
    );
    add(
        TopRated,
        "fr",
        &[
            "Amélie", "The Intouchables", "Blue Is the Warmest Color", "La Haine",
            "The Artist", "A Prophet", "The Class", "Cache",
            "Portrait of a Lady on Fire", "Raw", "Elle", "The Diving Bell and the Butterfly",
            "The 400 Blows", "Breathless", "The Rules of the Game", "Children of Paradise",
        ],
    );
    add(
        TopRated,
        "ko",
        &[
            "Parasite", "Oldboy", "Memories of Murder", "The Handmaiden",
            "Train to Busan", "The Wailing", "Burning", "I Saw the Devil",
            "A Taxi Driver", "The Host", "Snowpiercer", "The Man from Nowhere",
            "New World", "The Chaser", "Mother", "The Yellow Sea",
        ],
    );
    add(
        TopRated,
        "ja",
        &[
            "Seven Samurai", "Tokyo Story", "Rashomon", "Spirited Away",
            "Your Name", "Princess Mononoke", "Grave of the Fireflies", "Akira",
            "Ghost in the Shell", "Perfect Blue", "Howl's Moving Castle", "The Wind Rises",
            "Ikiru", "Harakiri", "High and Low", "Yojimbo",
        ],
    );
    add(
        TopRated,
        "zh",
        &[
            "Farewell My Concubine", "In the Mood for Love", "Chungking Express", "Raise the Red Lantern",
            "The Grandmaster", "Ip Man", "Red Cliff", "The Wandering Earth",
            "Crouching Tiger, Hidden Dragon", "Hero", "House of Flying Daggers", "Infernal Affairs",
        ],
    );
    add(
        TopRated,
        "de",
        &[
            "The Lives of Others", "Downfall", "The White Ribbon", "Toni Erdmann",
            "Good Bye Lenin!", "Run Lola Run", "The Wave", "The Baader Meinhof Complex",
            "Head-On", "Victoria", "Dark", "Babylon Berlin",
        ],
    );
    add(
        TopRated,
        "pt",
        &[
            "City of God", "Central Station", "The Second Mother", "Bacurau",
            "Aquarius", "Neighboring Sounds", "The Given Word", "Black Orpheus",
            "Pixote", "Elite Squad", "3%", "The Mechanism",
        ],
    );
    add(
        TopRated,
        "it",
        &[
            "Life Is Beautiful", "Cinema Paradiso", "The Great Beauty", "Bicycle Thieves",
            "8½", "La Dolce Vita", "The Conformist", "The Best of Youth",
            "Gomorrah", "The Young Pope", "My Brilliant Friend", "Suburra",
        ],
    );
    add(
        TopRated,
        "ru",
        &[
            "Stalker", "Solaris", "Andrei Rublev", "The Mirror",
            "Ivan's Childhood", "Leviathan", "Loveless", "The Return",
            "Brother", "Night Watch", "Day Watch", "The Irony of Fate",
        ],
    );
    add(
        TopRated,
        "ar",
        &[
            "The Square", "Wadjda", "Omar", "Paradise Now",
            "Theeb", "Caramel", "West Beirut", "Where Do We Go Now?",
            "The Insult", "Capernaum", "The Yacoubian Building", "Cairo 678",
        ],
    );
    add(
        TopRated,
        "tr",
        &[
            "Winter Sleep", "Once Upon a Time in Anatolia", "The Wild Pear Tree", "Distant",
            "Uzak", "Climates", "Three Monkeys", "The Edge of Heaven",
            "The Butterfly's Dream", "Miracle", "The Gift", "Commitment",
        ],
    );

    add(
        Upcoming,
        "all",
        &[
            "Dune", "No Time to Die", "The Matrix Resurrections", "Spider-Man",
            "The Batman", "Top Gun: Maverick", "Black Widow", "Eternals",
            "Doctor Strange", "Thor", "Black Panther", "Avengers",
            "John Wick", "Fast & Furious", "Mission Impossible", "James Bond",
        ],
    );
    add(
        Upcoming,
        "hi",
        &[
            "RRR", "Brahmastra", "Pathaan", "Animal",
            "Jawan", "Tiger 3", "Fighter", "Dunki",
            "Salaar", "Pushpa", "KGF", "Baahubali",
            "War", "Dhoom", "Don", "Sholay",
        ],
    );
    add(
        Upcoming,
        "es",
        &[
            "El Camino", "The Platform", "Mirage", "The Invisible Guest",
            "Time Share", "The Bar", "The Skin I Live In", "The Orphanage",
            "Roma", "Y Tu Mamá También", "Pan's Labyrinth", "The Secret in Their Eyes",
            "Amores Perros", "The Motorcycle Diaries", "Biutiful", "Talk to Her",
        ],
    );
    add(
        Upcoming,
        "fr",
        &[
            "Lupin Part 3", "The French Dispatch", "Annette", "Titane",
            "Petite Maman", "The Worst Person in the World", "Drive My Car", "Parallel Mothers",
            "Amélie", "The Intouchables", "Blue Is the Warmest Color", "La Haine",
            "The Artist", "A Prophet", "The Class", "Cache",
        ],
    );
    add(
        Upcoming,
        "ko",
        &[
            "Parasite 2", "The Roundup", "Decision to Leave", "Broker",
            "The Witch: Part 2", "Hunt", "Emergency Declaration", "Alienoid",
            "Squid Game", "Crash Landing on You", "Itaewon Class", "Kingdom",
            "Signal", "Stranger", "My Mister", "Oldboy",
        ],
    );
    add(
        Upcoming,
        "ja",
        &[
            "Your Name", "Spirited Away", "My Neighbor Totoro", "Princess Mononoke",
            "Attack on Titan", "Death Note", "One Piece", "Naruto",
            "Tokyo Story", "Seven Samurai", "Rashomon", "Grave of the Fireflies",
            "Akira", "Ghost in the Shell", "Perfect Blue", "Howl's Moving Castle",
        ],
    );
    add(
        Upcoming,
        "zh",
        &[
            "The Wandering Earth", "The Grandmaster", "Ip Man", "Red Cliff",
            "Crouching Tiger, Hidden Dragon", "Hero", "House of Flying Daggers", "Infernal Affairs",
            "The Untamed", "Nirvana in Fire", "Story of Yanxi Palace", "The Longest Day in Chang'an",
        ],
    );
    add(
        Upcoming,
        "de",
        &[
            "Dark", "Babylon Berlin", "The Lives of Others", "Downfall",
            "The White Ribbon", "Toni Erdmann", "Good Bye Lenin!", "Run Lola Run",
        ],
    );
    add(
        Upcoming,
        "pt",
        &[
            "City of God", "Elite Squad", "3%", "The Mechanism",
            "Central Station", "The Second Mother", "Bacurau", "Aquarius",
        ],
    );
    add(
        Upcoming,
        "it",
        &[
            "Gomorrah", "The Young Pope", "My Brilliant Friend", "Suburra",
            "Life Is Beautiful", "Cinema Paradiso", "The Great Beauty", "Bicycle Thieves",
        ],
    );
    add(
        Upcoming,
        "ru",
        &[
            "Leviathan", "Loveless", "The Return", "Stalker",
            "Solaris", "Andrei Rublev", "The Mirror", "Ivan's Childhood",
        ],
    );
    add(
        Upcoming,
        "ar",
        &[
            "The Yacoubian Building", "Cairo 678", "The Square", "Wadjda",
            "Omar", "Paradise Now", "Theeb", "Caramel",
        ],
    );
    add(
        Upcoming,
        "tr",
        &[
            "Winter Sleep", "Once Upon a Time in Anatolia", "The Wild Pear Tree", "Distant",
            "Uzak", "Climates", "Three Monkeys", "The Edge of Heaven",
        ],
    );

    m
});

/// Seed titles for a (list kind, language) pair, with the fallback chain:
/// exact key, then the list kind's "all" entry, then (popular, "all").
pub fn seed_titles(list: ListKind, language: &str) -> &'static [&'static str] {
    let key = if language.is_empty() { "all" } else { language };
    let lookup = |list: ListKind, lang: &str| {
        SEED_TITLES
            .get(&list)
            .and_then(|by_lang| by_lang.get(lang))
            .copied()
    };
    lookup(list, key)
        .or_else(|| lookup(list, "all"))
        .or_else(|| lookup(ListKind::Popular, "all"))
        .unwrap_or(&[])
}
