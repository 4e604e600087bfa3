use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use smartsearch::dictionary::Dictionary;
use smartsearch::session::SearchSession;

/// Interactive prefix search over a learned word table.
///
/// Reads one query per stdin line and answers with one JSON line of
/// suggestions. A line starting with '!' records the selection of
/// that word; when the word was known, the dictionary is saved
/// immediately after learning.
#[derive(Parser)]
struct Args {
    /// Where the word -> frequency table is stored.
    #[arg(long, default_value = "word_frequencies.json")]
    dictionary: PathBuf,
}

#[derive(Serialize)]
struct QueryOutput<'a> {
    query: &'a str,
    suggestions: Vec<String>,
}

#[derive(Serialize)]
struct SelectionOutput<'a> {
    selected: &'a str,
    learned: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let dictionary = Dictionary::new(&args.dictionary);

    let mut session = SearchSession::new();
    session.bulk_load(dictionary.load_or_default());

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut line = String::new();
    while let Ok(nb_read) = stdin.read_line(&mut line) {
        if nb_read == 0 {
            break; // End of file, nothing more to read.
        }

        let input = line.trim().to_lowercase();

        if let Some(word) = input.strip_prefix('!') {
            let learned = session.record_selection(word);
            if learned {
                // Save immediately after learning.
                if let Err(error) = dictionary.save(&session.snapshot()) {
                    log::warn!("can't save dictionary: {}", error);
                }
            }

            serde_json::to_writer(&mut stdout, &SelectionOutput { selected: word, learned })?;
        } else {
            let suggestions = session.query(&input);
            serde_json::to_writer(&mut stdout, &QueryOutput { query: &input, suggestions })?;
        }

        writeln!(stdout)?;
        stdout.flush()?;

        line.clear(); // To prevent reading the same line again and again
    }

    Ok(())
}
