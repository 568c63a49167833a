use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use yomi_core::models::{Album, Artist, SortCandidate};
use yomi_core::{
    create_indexable_name, AppConfig, ComparatorFactory, SortFieldResolver, YomiError,
};
use yomi_text::{is_japanese_readable, ReadingAnalyzer};

#[derive(Parser)]
#[command(name = "yomi")]
#[command(about = "Inspect readings and natural sort order of catalog names")]
struct Cli {
    /// Config file to use instead of the user config.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the reading and sort fields derived for each name.
    Reading {
        #[arg(required = true)]
        names: Vec<String>,

        /// Print analyzed entries as JSON lines.
        #[arg(long)]
        json: bool,
    },
    /// Sort album names read from a file or stdin, one per line.
    ///
    /// A line may carry a release year after a tab: `name<TAB>1998`.
    Sort {
        file: Option<PathBuf>,

        /// Override numeric ordering of digit runs.
        #[arg(long)]
        alphanum: Option<bool>,

        /// Override ordering by release year.
        #[arg(long)]
        by_year: Option<bool>,

        /// Artist the albums belong to.
        #[arg(long)]
        artist: Option<String>,
    },
    /// Print the index name and index letter for each name.
    Index {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() -> Result<(), YomiError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yomi=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let provider = config.reading_provider()?;
    let resolver = SortFieldResolver::new(ReadingAnalyzer::new(std::sync::Arc::new(provider)));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Reading { names, json } => {
            for name in names {
                let mut candidate = SortCandidate::new(name);
                resolver.analyze(&mut candidate);
                if json {
                    let line = serde_json::to_string(&candidate).map_err(io::Error::from)?;
                    writeln!(out, "{line}")?;
                } else {
                    let name = candidate.name.as_str();
                    writeln!(
                        out,
                        "{name}\t{}\t{}",
                        candidate.reading.as_deref().unwrap_or("-"),
                        if is_japanese_readable(name) { "ja" } else { "-" },
                    )?;
                }
            }
        }
        Command::Sort {
            file,
            alphanum,
            by_year,
            artist,
        } => {
            let mut settings = config.sort.clone();
            if let Some(alphanum) = alphanum {
                settings.sort_alphanum = alphanum;
            }
            if let Some(by_year) = by_year {
                settings.sort_albums_by_year = by_year;
            }

            let mut albums = read_albums(file.as_deref())?;
            resolver.analyze_all(&mut albums);

            let artist = artist.map(|name| Artist::new(0, name));
            let factory = ComparatorFactory::japanese(settings);
            factory.sort_albums(&mut albums, artist.as_ref());

            for album in &albums {
                let name = album.name.as_deref().unwrap_or_default();
                match album.year {
                    Some(year) => writeln!(out, "{name}\t{year}")?,
                    None => writeln!(out, "{name}")?,
                }
            }
        }
        Command::Index { names } => {
            for name in names {
                let mut candidate = SortCandidate::new(name);
                resolver.analyze(&mut candidate);
                let indexable = create_indexable_name(&candidate).unwrap_or_default();
                let letter = yomi_core::index_letter(&indexable)
                    .map(String::from)
                    .unwrap_or_default();
                writeln!(out, "{letter}\t{indexable}")?;
            }
        }
    }

    Ok(())
}

fn read_albums(file: Option<&std::path::Path>) -> Result<Vec<Album>, YomiError> {
    let lines: Vec<String> = match file {
        Some(path) => std::fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect(),
        None => io::stdin().lock().lines().collect::<Result<_, _>>()?,
    };

    let albums: Vec<Album> = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| parse_album_line(i as i64, line))
        .collect();
    tracing::debug!(count = albums.len(), "Read albums");
    Ok(albums)
}

fn parse_album_line(id: i64, line: &str) -> Album {
    let (name, year) = match line.rsplit_once('\t') {
        Some((name, year)) => match year.trim().parse::<i32>() {
            Ok(year) => (name, Some(year)),
            Err(_) => {
                tracing::warn!(line, "Ignoring unparsable year");
                (name, None)
            }
        },
        None => (line, None),
    };
    let mut album = Album::new(id, name);
    album.year = year;
    album
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_album_line() {
        let album = parse_album_line(1, "98\t1998");
        assert_eq!(album.name.as_deref(), Some("98"));
        assert_eq!(album.year, Some(1998));

        let album = parse_album_line(2, "奥田民生");
        assert_eq!(album.name.as_deref(), Some("奥田民生"));
        assert_eq!(album.year, None);

        let album = parse_album_line(3, "name\tsoon");
        assert_eq!(album.name.as_deref(), Some("name"));
        assert_eq!(album.year, None);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["yomi", "sort", "--alphanum", "false", "albums.txt"]).unwrap();
        match cli.command {
            Command::Sort { alphanum, file, .. } => {
                assert_eq!(alphanum, Some(false));
                assert_eq!(file, Some(PathBuf::from("albums.txt")));
            }
            _ => panic!("expected sort"),
        }
    }
}
