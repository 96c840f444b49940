use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::time::Instant;

use katas_core::text::{
    concatenate, count_chars, or_default, repeated_words, replace_brand, to_lower, to_upper,
    ConcatOutput, ConvertedOutput, CountOutput, RepeatedOutput, TextError,
};

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Text processing exercises")]
#[command(after_help = "EXAMPLES:
  # Count the characters of the built-in paragraph:
  katas text count

  # Words that appear more than once:
  katas text repeated 'the cat and the dog'

  # Repeat a text 1000 times and report the elapsed time:
  katas text concat 'ab' --times 1000

NOTES:
  - Every command works on a built-in paragraph when TEXT is omitted or empty")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Count the characters of a text
    #[clap(name = "count")]
    Count(TextOptions),

    /// Convert a text to uppercase
    #[clap(name = "upper")]
    Upper(TextOptions),

    /// Convert a text to lowercase
    #[clap(name = "lower")]
    Lower(TextOptions),

    /// List the words that appear more than once
    #[clap(name = "repeated")]
    Repeated(TextOptions),

    /// Replace the company name with its anagram
    #[clap(name = "replace")]
    Replace(TextOptions),

    /// Repeat a text a number of times
    #[clap(name = "concat")]
    Concat(ConcatOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct TextOptions {
    /// Text to process
    text: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ConcatOptions {
    /// Text to repeat
    text: Option<String>,

    /// Number of repetitions (0 to 100000)
    #[arg(short, long, allow_hyphen_values = true)]
    times: i64,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Public data function - used by both CLI and HTTP server
pub fn count_data(text: &str) -> CountOutput {
    CountOutput {
        characters: count_chars(or_default(text)),
    }
}

/// Public data function - used by both CLI and HTTP server
pub fn upper_data(text: &str) -> ConvertedOutput {
    ConvertedOutput {
        text: to_upper(or_default(text)),
    }
}

/// Public data function - used by both CLI and HTTP server
pub fn lower_data(text: &str) -> ConvertedOutput {
    ConvertedOutput {
        text: to_lower(or_default(text)),
    }
}

/// Public data function - used by both CLI and HTTP server
pub fn repeated_data(text: &str) -> RepeatedOutput {
    RepeatedOutput {
        repeated_words: repeated_words(or_default(text)),
    }
}

/// Public data function - used by both CLI and HTTP server
pub fn replace_data(text: &str) -> ConvertedOutput {
    ConvertedOutput {
        text: replace_brand(or_default(text)),
    }
}

/// Public data function - used by both CLI and HTTP server
///
/// The repeated text itself is not returned, only its length and how long it
/// took to build.
pub fn concat_data(text: &str, times: i64) -> Result<ConcatOutput, TextError> {
    let start = Instant::now();
    let out = concatenate(or_default(text), times)?;
    let elapsed = start.elapsed();

    Ok(ConcatOutput {
        message: format!(
            "Concatenated the text {} times in {} ms",
            times,
            elapsed.as_millis()
        ),
        elapsed_ms: elapsed.as_millis(),
        length: out.chars().count(),
    })
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Count(options) => {
            let out = count_data(&input(&options.text, &global));
            print(&out, options.json, || out.characters.to_string())
        }
        Commands::Upper(options) => {
            let out = upper_data(&input(&options.text, &global));
            print(&out, options.json, || out.text.clone())
        }
        Commands::Lower(options) => {
            let out = lower_data(&input(&options.text, &global));
            print(&out, options.json, || out.text.clone())
        }
        Commands::Replace(options) => {
            let out = replace_data(&input(&options.text, &global));
            print(&out, options.json, || out.text.clone())
        }
        Commands::Repeated(options) => {
            let out = repeated_data(&input(&options.text, &global));
            if options.json {
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }
            if out.repeated_words.is_empty() {
                println!("No repeated words found.");
                return Ok(());
            }

            let mut table = new_table();
            table.add_row(prettytable::row!["Word".bold(), "Count".bold()]);
            for word in &out.repeated_words {
                table.add_row(prettytable::row![word.word, word.count]);
            }
            table.printstd();
            Ok(())
        }
        Commands::Concat(options) => {
            let text = input(&options.text, &global);
            let out = concat_data(&text, options.times).map_err(|e| eyre!("{}", e))?;
            print(&out, options.json, || {
                format!("{} ({} characters)", out.message, out.length)
            })
        }
    }
}

fn input(text: &Option<String>, global: &crate::Global) -> String {
    let text = text.clone().unwrap_or_default();
    if global.verbose && text.is_empty() {
        eprintln!("No text given, using the built-in paragraph");
        eprintln!();
    }
    text
}

fn print<T: serde::Serialize>(out: &T, json: bool, plain: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(out)?);
    } else {
        println!("{}", plain());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use katas_core::text::DEFAULT_TEXT;

    #[test]
    fn test_count_data_uses_default() {
        assert_eq!(count_data("").characters, DEFAULT_TEXT.chars().count());
        assert_eq!(count_data("héllo").characters, 5);
    }

    #[test]
    fn test_upper_lower_data() {
        assert_eq!(upper_data("Rust").text, "RUST");
        assert_eq!(lower_data("Rust").text, "rust");
    }

    #[test]
    fn test_replace_data_default_text() {
        let out = replace_data("");
        assert!(!out.text.contains("Proconsi"));
        assert!(out.text.contains("Isnocorp"));
    }

    #[test]
    fn test_repeated_data() {
        let out = repeated_data("a b a c b a");
        let words: Vec<(&str, usize)> = out
            .repeated_words
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect();
        assert_eq!(words, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_concat_data() {
        let out = concat_data("ab", 3).unwrap();
        assert_eq!(out.length, 6);
        assert!(out.message.starts_with("Concatenated the text 3 times"));
    }

    #[test]
    fn test_concat_data_limits() {
        assert_eq!(
            concat_data("ab", 100_001).unwrap_err(),
            TextError::TooManyRepetitions
        );
        assert_eq!(
            concat_data("ab", -1).unwrap_err(),
            TextError::NegativeRepetitions
        );
    }
}
