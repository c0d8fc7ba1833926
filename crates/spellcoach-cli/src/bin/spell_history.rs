// spell-history: Build wrong-spelling histories from a stream of attempts.
//
// Reads `word_id<TAB>target<TAB>attempt` lines from stdin, analyses each
// attempt and keeps a bounded history of distinct wrong spellings per word.
// Changes to the history are printed as they happen:
//   + 7 siad score=34     (inserted)
//   - 7 sxyz score=5      (evicted)
// followed by the final history of every word.
//
// Usage:
//   spell-history [OPTIONS]
//
// Options:
//   --keep-case          Treat upper and lower case as different
//   --keep-diacritics    Treat accented letters as different
//   --json               Print the final histories as JSON, one word per line
//   -h, --help           Print help

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use spellcoach_analysis::SpellingAnalyser;
use spellcoach_core::record::{RecordUpdate, SpellingRecord, WrongSpelling};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, args) = spellcoach_cli::parse_options(&args);

    if spellcoach_cli::wants_help(&args) {
        println!("spell-history: Build wrong-spelling histories from a stream of attempts.");
        println!();
        println!("Usage: spell-history [OPTIONS]");
        println!();
        println!("Reads lines of the form WORD_ID<TAB>TARGET<TAB>ATTEMPT. Prints:");
        println!("  + ID SPELLING score=N    (inserted into the history)");
        println!("  - ID SPELLING score=N    (evicted from the history)");
        println!();
        println!("Options:");
        println!("  --keep-case          Treat upper and lower case as different");
        println!("  --keep-diacritics    Treat accented letters as different");
        println!("  --json               Print the final histories as JSON");
        println!("  -h, --help           Print this help");
        return;
    }

    let json = args.iter().any(|a| a == "--json");
    if let Some(unknown) = args.iter().find(|a| a.as_str() != "--json") {
        spellcoach_cli::fatal(&format!("unknown option: {unknown}"));
    }

    let analyser = SpellingAnalyser::new(options);
    let mut records: BTreeMap<u64, SpellingRecord> = BTreeMap::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let (word_id, target, attempt) = match spellcoach_cli::parse_history_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("line {}: {e}", index + 1);
                continue;
            }
        };

        let word = analyser.analyse(&attempt, &target);
        let record = records
            .entry(word_id)
            .or_insert_with(|| SpellingRecord::new(word_id));

        let Some(RecordUpdate::Added { evicted }) = record.record_analysis(&word) else {
            log::debug!("word {word_id}: {attempt:?} not added ({})", word.state());
            continue;
        };
        if let Some(added) = WrongSpelling::from_analysis(&word) {
            print_change(&mut out, '+', word_id, &added);
        }
        for removed in &evicted {
            print_change(&mut out, '-', word_id, removed);
        }
    }

    for record in records.values() {
        if json {
            match serde_json::to_string(record) {
                Ok(s) => {
                    let _ = writeln!(out, "{s}");
                }
                Err(e) => spellcoach_cli::fatal(&format!("failed to serialize record: {e}")),
            }
        } else {
            let _ = writeln!(
                out,
                "{} attempts={} wrong={}",
                record.word_id,
                record.attempts,
                record.wrong_words().join(",")
            );
        }
    }
}

fn print_change(out: &mut impl Write, sign: char, word_id: u64, spelling: &WrongSpelling) {
    let _ = writeln!(
        out,
        "{sign} {word_id} {} score={}",
        spelling.spelling, spelling.score
    );
}
