use std::env;
use std::fs;
use std::process::ExitCode;

use xtask::predicate::{any_of, collect_ranges, digit, joiners, letter, marks, not};
use xtask::{contains, pack_ranges, parse_names, parse_ranges, render_tsv, unpack_ranges};

const DEFAULT_TABLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/letters.tsv");

fn header() -> String {
    let (major, minor, patch) = char::UNICODE_VERSION;
    format!(
        "# Code point ranges treated as letters when stripping text.\n\
         #\n\
         # Alphabetic code points, combining marks and U+200C/U+200D (joiners),\n\
         # merged into disjoint ranges. Unicode {}.{}.{}. Regenerate with\n\
         # `cargo run -p xtask -- gen-letters`.\n\
         #\n\
         # low\thigh\tfirst code point\n",
        major, minor, patch
    )
}

fn gen_letters(path: &str) -> Result<(), String> {
    let names = fs::read_to_string(path)
        .map(|old| parse_names(&old))
        .unwrap_or_default();
    let ranges = collect_ranges(letter);
    let with_digit = ranges
        .iter()
        .find(|&&(low, high)| (low..=high).filter_map(char::from_u32).any(digit));
    if let Some(&(low, _)) = with_digit {
        return Err(format!("range starting at {:04X} contains an ASCII digit", low));
    }
    let tsv = render_tsv(&ranges, &header(), &names);
    // never write something the build would reject
    parse_ranges(&tsv)?;
    fs::write(path, tsv).map_err(|e| format!("{}: {}", path, e))?;
    println!("wrote {} ranges to {}", ranges.len(), path);
    Ok(())
}

fn stats(path: &str) -> Result<(), String> {
    let tsv = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    let ranges = parse_ranges(&tsv)?;
    let code_points: u64 = ranges.iter().map(|r| (r.high - r.low + 1) as u64).sum();
    let astral = ranges.iter().filter(|r| r.high > 0xFFFF).count();
    let packed = pack_ranges(&ranges)?;
    if unpack_ranges(&packed)? != ranges {
        return Err("packed table does not decode to the same ranges".to_string());
    }

    // drift against the toolchain's Unicode data
    let (mut non_alpha, mut stale, mut missing) = (0u64, 0u64, 0u64);
    for ch in (0..=0x10FFFF).filter_map(char::from_u32) {
        let listed = contains(&ranges, ch as u32);
        if listed && any_of(&[marks, joiners], ch) {
            non_alpha += 1;
        }
        if listed && not(letter, ch) {
            stale += 1;
        }
        if !listed && letter(ch) {
            missing += 1;
        }
    }

    println!("ranges:          {}", ranges.len());
    println!("code points:     {}", code_points);
    println!("astral:          {}", astral);
    println!("marks/joiners:   {}", non_alpha);
    println!("packed bytes:    {}", packed.len());
    let (major, minor, patch) = char::UNICODE_VERSION;
    println!("stale vs {}.{}.{}:  {}", major, minor, patch, stale);
    println!("missing:         {}", missing);
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_TABLE);

    let result = match args.first().map(String::as_str) {
        Some("gen-letters") => gen_letters(path),
        Some("stats") => stats(path),
        _ => Err("usage: xtask <gen-letters|stats> [path/to/letters.tsv]".to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("xtask: {}", e);
            ExitCode::FAILURE
        }
    }
}
