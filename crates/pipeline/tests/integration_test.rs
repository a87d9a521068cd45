//! Integration tests for the pipeline.
//!
//! These tests run the standard rules over a ten-film table, both in memory
//! and end to end through CSV files on disk.

use data_loader::{DataLoadError, FilmTable, parse_films_from_reader};
use pipeline::{FilterEngine, FilterOptions, RuleResults, filter_films};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const FILMS_CSV: &str = "\
title,description,characters,actors,year,rating
Inception,A thief who steals corporate secrets through the use of dream-sharing technology.,\"Dom Cobb, Arthur, Mal Cobb\",\"Leonardo DiCaprio, Joseph Gordon-Levitt, Ellen Page\",2010,8.8
The Dark Knight,\"When the menace known as the Joker emerges from his mysterious past, he wreaks havoc and chaos on the people of Gotham.\",\"Bruce Wayne, Joker, Harvey Dent\",\"Christian Bale, Heath Ledger, Aaron Eckhart\",2008,9.0
Interstellar,A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.,\"Cooper, Brand, Murph\",\"Matthew McConaughey, Anne Hathaway, Jessica Chastain\",2014,8.6
Titanic,\"A seventeen-year-old aristocrat falls in love with a kind but poor artist aboard the luxurious, ill-fated R.M.S. Titanic.\",\"Jack Dawson, Rose DeWitt Bukater, Cal Hockley\",\"Leonardo DiCaprio, Kate Winslet, Billy Zane\",1997,7.8
The Matrix,A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.,\"Neo, Morpheus, Trinity\",\"Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss\",1999,8.7
Avatar,A paraplegic Marine dispatched to the moon Pandora on a unique mission becomes torn between following his orders and protecting the world he feels is his home.,\"Jake Sully, Neytiri, Dr. Grace Augustine\",\"Sam Worthington, Zoe Saldana, Sigourney Weaver\",2009,7.8
The Godfather,The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.,\"Don Vito Corleone, Michael Corleone, Sonny Corleone\",\"Marlon Brando, Al Pacino, James Caan\",1972,9.2
Pulp Fiction,\"The lives of two mob hitmen, a boxer, a gangster's wife, and a pair of diner bandits intertwine in four tales of violence and redemption.\",\"Vincent Vega, Jules Winnfield, Mia Wallace\",\"John Travolta, Samuel L. Jackson, Uma Thurman\",1994,8.9
The Shawshank Redemption,\"Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.\",\"Andy Dufresne, Ellis Boyd 'Red' Redding, Warden Norton\",\"Tim Robbins, Morgan Freeman, Bob Gunton\",1994,9.3
Forrest Gump,\"The presidencies of Kennedy and Johnson, the Vietnam War, the Watergate scandal and other historical events unfold through the perspective of an Alabama man with an IQ of 75.\",\"Forrest Gump, Jenny Curran, Lieutenant Dan Taylor\",\"Tom Hanks, Robin Wright, Gary Sinise\",1994,8.8
";

const HEADER: &str = "title,description,characters,actors,year,rating\n";

fn films_table() -> FilmTable {
    parse_films_from_reader(FILMS_CSV.as_bytes()).unwrap()
}

fn titles(results: &RuleResults, name: &str) -> Vec<String> {
    results
        .get(name)
        .unwrap()
        .column_values("title")
        .unwrap()
        .into_iter()
        .map(String::from)
        .collect()
}

fn write_fixture(dir: &Path, contents: &str) -> std::path::PathBuf {
    let input = dir.join("films.csv");
    fs::write(&input, contents).unwrap();
    input
}

#[test]
fn test_standard_rules_on_fixture() {
    let results = FilterEngine::standard().apply(&films_table()).unwrap();

    assert_eq!(results.len(), 7);
    assert_eq!(titles(&results, "filtered_films_1"), vec!["The Matrix"]);
    assert_eq!(titles(&results, "filtered_films_2"), vec!["The Dark Knight"]);
    assert_eq!(titles(&results, "filtered_films_3"), vec!["Inception"]);
    assert_eq!(
        titles(&results, "filtered_films_4"),
        vec!["Inception", "The Dark Knight", "Titanic"]
    );

    let long_descriptions = titles(&results, "filtered_films_5");
    assert_eq!(long_descriptions.len(), 9);
    assert!(!long_descriptions.contains(&"Inception".to_string()));

    assert_eq!(
        titles(&results, "filtered_films_6"),
        vec!["The Godfather", "The Shawshank Redemption", "The Dark Knight", "Inception"]
    );
    assert_eq!(
        results
            .get("filtered_films_6")
            .unwrap()
            .column_values("decade")
            .unwrap(),
        vec!["1970", "1990", "2000", "2010"]
    );

    assert_eq!(
        titles(&results, "filtered_films_7"),
        vec!["The Dark Knight", "The Matrix", "The Godfather", "The Shawshank Redemption"]
    );
}

#[test]
fn test_rules_never_invent_rows() {
    let films = films_table();
    let input_rows: BTreeSet<&Vec<String>> = films.rows().iter().collect();
    let results = FilterEngine::standard().apply(&films).unwrap();

    for (name, output) in results.iter() {
        if name == "filtered_films_6" {
            continue;
        }
        assert_eq!(output.headers(), films.headers(), "{name}");
        for row in output.rows() {
            assert!(input_rows.contains(row), "{name} produced a row not in the input");
        }
    }

    // rule 6 rows are input rows plus their decade
    let best = results.get("filtered_films_6").unwrap();
    for row in best.rows() {
        assert!(input_rows.contains(&row[..6].to_vec()));
    }
}

#[test]
fn test_empty_input_gives_empty_outputs() {
    let films = parse_films_from_reader(HEADER.as_bytes()).unwrap();
    let results = FilterEngine::standard().apply(&films).unwrap();

    assert_eq!(results.len(), 7);
    for (name, output) in results.iter() {
        assert!(output.is_empty(), "{name}");
    }
}

#[test]
fn test_invalid_data_types() {
    let data = format!(
        "{HEADER}Invalid Film,Invalid description,Invalid characters,Invalid actors,Invalid year,Invalid rating\n"
    );
    let films = parse_films_from_reader(data.as_bytes()).unwrap();

    let err = FilterEngine::standard().apply(&films).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DataLoadError>(),
        Some(DataLoadError::InvalidValue { field, .. }) if field == "year"
    ));
}

#[test]
fn test_missing_columns() {
    let mut films = FilmTable::new(["title", "description", "characters", "actors"]);
    films
        .push_row(["Film", "Description", "Characters", "Actors"])
        .unwrap();

    let engine = FilterEngine::standard();
    assert!(engine.apply(&films).is_err());
    assert!(engine.apply_parallel(&films).is_err());

    let err = engine.apply(&films).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DataLoadError>(),
        Some(DataLoadError::MissingColumn { .. })
    ));
}

#[test]
fn test_no_matches_found() {
    let data = format!(
        "{HEADER}Inception,A thief who steals corporate secrets through the use of dream-sharing technology.,\"Dom Cobb, Arthur, Mal Cobb\",\"Leonardo DiCaprio, Joseph Gordon-Levitt, Ellen Page\",2010,8.8\n"
    );
    let films = parse_films_from_reader(data.as_bytes()).unwrap();
    let results = FilterEngine::standard().apply(&films).unwrap();

    assert!(results.get("filtered_films_1").unwrap().is_empty());
    assert!(results.get("filtered_films_2").unwrap().is_empty());
    assert!(results.get("filtered_films_5").unwrap().is_empty());
    assert!(results.get("filtered_films_7").unwrap().is_empty());
    assert_eq!(results.get("filtered_films_3").unwrap().len(), 1);
}

#[test]
fn test_parallel_matches_sequential() {
    let films = films_table();
    let engine = FilterEngine::standard();

    assert_eq!(engine.apply(&films).unwrap(), engine.apply_parallel(&films).unwrap());
}

#[test]
fn test_filter_films_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), FILMS_CSV);

    let results = filter_films(&input, &FilterOptions::default()).unwrap();
    assert_eq!(results.len(), 7);

    for i in 1..=7 {
        let path = dir.path().join(format!("filtered_films_{i}.csv"));
        assert!(path.exists(), "{} missing", path.display());
    }

    let first = fs::read_to_string(dir.path().join("filtered_films_1.csv")).unwrap();
    assert_eq!(
        first,
        format!(
            "{HEADER}The Matrix,A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.,\"Neo, Morpheus, Trinity\",\"Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss\",1999,8.7\n"
        )
    );

    let sixth = fs::read_to_string(dir.path().join("filtered_films_6.csv")).unwrap();
    assert!(sixth.starts_with("title,description,characters,actors,year,rating,decade\n"));
    assert_eq!(sixth.lines().count(), 5);
}

#[test]
fn test_outputs_are_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), FILMS_CSV);

    filter_films(&input, &FilterOptions::default()).unwrap();
    let first_run: Vec<Vec<u8>> = (1..=7)
        .map(|i| fs::read(dir.path().join(format!("filtered_films_{i}.csv"))).unwrap())
        .collect();

    filter_films(&input, &FilterOptions { parallel: true }).unwrap();
    let second_run: Vec<Vec<u8>> = (1..=7)
        .map(|i| fs::read(dir.path().join(format!("filtered_films_{i}.csv"))).unwrap())
        .collect();

    assert_eq!(first_run, second_run);
}

#[test]
fn test_empty_input_file_writes_headers() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), HEADER);

    filter_films(&input, &FilterOptions::default()).unwrap();

    let fourth = fs::read_to_string(dir.path().join("filtered_films_4.csv")).unwrap();
    assert_eq!(fourth, HEADER);
    let sixth = fs::read_to_string(dir.path().join("filtered_films_6.csv")).unwrap();
    assert_eq!(sixth, "title,description,characters,actors,year,rating,decade\n");
}

#[test]
fn test_failed_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let data = format!("{HEADER}Film,Desc,Chars,Actors,Invalid year,8.0\n");
    let input = write_fixture(dir.path(), &data);

    assert!(filter_films(&input, &FilterOptions::default()).is_err());

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the input file should exist");
}

#[test]
fn test_structural_error_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "title,description,characters,actors\nFilm,Desc,Chars,Actors\n");

    let err = filter_films(&input, &FilterOptions::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DataLoadError>(),
        Some(DataLoadError::MissingColumn { column }) if column == "year"
    ));
}
