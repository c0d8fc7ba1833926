// spell-analyse: Analyse spelling attempts from stdin.
//
// Reads `target<TAB>attempt` lines from stdin, where the target may list
// alternate spellings as `main|alt|alt`, and prints one analysis per line:
//   siad CSSC not-applicable score=34 diff=0 links=2 largest=1 avg=1.00 errors=1
//
// Usage:
//   spell-analyse [OPTIONS]
//
// Options:
//   --keep-case          Treat upper and lower case as different
//   --keep-diacritics    Treat accented letters as different
//   --candidates         Also print every candidate analysis
//   --json               Print one JSON object per line
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use spellcoach_analysis::SpellingAnalyser;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, args) = spellcoach_cli::parse_options(&args);

    if spellcoach_cli::wants_help(&args) {
        println!("spell-analyse: Analyse spelling attempts from stdin.");
        println!();
        println!("Usage: spell-analyse [OPTIONS]");
        println!();
        println!("Reads lines of the form TARGET<TAB>ATTEMPT, where TARGET may be");
        println!("MAIN|ALT|ALT to accept alternate spellings.");
        println!();
        println!("Options:");
        println!("  --keep-case          Treat upper and lower case as different");
        println!("  --keep-diacritics    Treat accented letters as different");
        println!("  --candidates         Also print every candidate analysis");
        println!("  --json               Print one JSON object per line");
        println!("  -h, --help           Print this help");
        return;
    }

    let show_candidates = args.iter().any(|a| a == "--candidates");
    let json = args.iter().any(|a| a == "--json");
    if let Some(unknown) = args
        .iter()
        .find(|a| !matches!(a.as_str(), "--candidates" | "--json"))
    {
        spellcoach_cli::fatal(&format!("unknown option: {unknown}"));
    }

    let analyser = SpellingAnalyser::new(options);

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
        let (target, attempt) = match spellcoach_cli::parse_analyse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("line {}: {e}", index + 1);
                continue;
            }
        };

        let word = analyser.analyse(&attempt, &target);
        if json {
            let report = spellcoach_cli::AnalysisReport::new(&target, &attempt, &word);
            match serde_json::to_string(&report) {
                Ok(s) => {
                    let _ = writeln!(out, "{s}");
                }
                Err(e) => spellcoach_cli::fatal(&format!("failed to serialize analysis: {e}")),
            }
        } else {
            let _ = writeln!(out, "{}", spellcoach_cli::format_analysis(&word));
        }

        if show_candidates {
            for candidate in analyser.candidates(&attempt, &target) {
                let config = candidate.config;
                let _ = writeln!(
                    out,
                    "  d={} {:?} swap={}: {}",
                    config.distance,
                    config.direction,
                    config.swap_on_the_fly,
                    spellcoach_cli::format_analysis(&candidate.word)
                );
            }
        }
    }
}
