use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

use movie_catalog::config::DEFAULT_DATA_PATH;
use movie_catalog::{find_by_id, find_by_title, parse_movie_id, MovieStore, ScoreSummary};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("movie-catalog");

    match args.get(1).map(String::as_str) {
        Some("stats") => run_stats(data_path(args.get(2))),
        Some("id") => match args.get(2) {
            Some(raw) => run_id(raw, data_path(args.get(3))),
            None => usage(program),
        },
        Some("title") => match args.get(2) {
            Some(text) => run_title(text, data_path(args.get(3))),
            None => usage(program),
        },
        _ => usage(program),
    }
}

fn data_path(arg: Option<&String>) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

fn usage(program: &str) -> Result<()> {
    eprintln!("Usage: {} stats [data.json]", program);
    eprintln!("       {} id <movie id> [data.json]", program);
    eprintln!("       {} title <text> [data.json]", program);
    eprintln!("Run the web UI with: cargo run --bin movie-server");
    std::process::exit(1);
}

fn run_stats(path: PathBuf) -> Result<()> {
    println!("📂 Loading {:?}...", path);
    let store = MovieStore::from_file(&path)?;
    let summary = ScoreSummary::of(store.movies());

    println!("✓ Movies:            {}", summary.total);
    println!("✓ With Metascore:    {}", summary.scored);
    println!("✓ Without Metascore: {}", summary.unscored);

    Ok(())
}

fn run_id(raw: &str, path: PathBuf) -> Result<()> {
    let id = parse_movie_id(raw)?;
    let store = MovieStore::from_file(&path)?;

    match find_by_id(store.movies(), id) {
        Some(movie) => {
            println!("{}", serde_json::to_string_pretty(&movie)?);
            Ok(())
        }
        None => bail!("Movie ID {} not found in {:?}", id, path),
    }
}

fn run_title(text: &str, path: PathBuf) -> Result<()> {
    let store = MovieStore::from_file(&path)?;
    let movies = find_by_title(store.movies(), text);

    for movie in &movies {
        println!("{:>6}  {}", movie.id_text(), movie.title);
    }
    println!("\n{} movie(s) matching {:?}", movies.len(), text);

    Ok(())
}
