use braillecorrect::{Autocorrect, Config, Error, SuggestedCorrection};
use std::{
    env,
    io::{self, Write},
    path::Path,
};

const MAX_SUGGESTIONS: usize = 5;

fn main() -> io::Result<()> {
    let dict_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "words_100k.txt".into());

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {}", dict_path);
        std::process::exit(1);
    }

    let engine = Autocorrect::new(Config::default());
    match engine.load(&dict_path) {
        Ok(count) => println!("Loaded {count} words"),
        Err(e) => {
            eprintln!("Failed to load {}: {}", dict_path, e);
            std::process::exit(1);
        }
    }

    println!(
        "Chord REPL - dictionary: {}\n\
         type chords separated by spaces (keys D W Q K O P), \
         :learn WORD to save a correction, :q to quit",
        dict_path
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let line = input.trim();
        if line == ":q" {
            break;
        }
        if let Some(word) = line.strip_prefix(":learn") {
            match engine.learn(word) {
                Ok(saved) => println!("  saved {saved}"),
                Err(e) => println!("  {e}"),
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let outcome = match engine.process(line) {
            Ok(outcome) => outcome,
            Err(Error::EmptyIndex) => {
                println!("  no dictionary loaded");
                continue;
            }
            Err(e) => {
                println!("  {e}");
                continue;
            }
        };
        let decoded = outcome.decoded.to_string();
        match outcome.suggestion {
            SuggestedCorrection::NoMatch => println!("  {decoded}  ->  (no close match)"),
            SuggestedCorrection::Suggestion(best) if best.distance == 0 => {
                println!("  {decoded}  ->  {}", best.word)
            }
            SuggestedCorrection::Suggestion(_) => {
                let max_distance = engine.config().max_distance;
                let others = engine
                    .snapshot()
                    .map(|index| index.suggest_ranked(&decoded, max_distance, MAX_SUGGESTIONS))
                    .unwrap_or_default();
                let words: Vec<_> = others.into_iter().map(|s| s.word).collect();
                println!("  {decoded}  ->  {}", words.join(", "));
            }
        }
    }
    Ok(())
}
