use std::env;
use std::fs;
use std::path::Path;

const TABLE: &str = "data/letters.tsv";

fn main() {
    println!("cargo:rerun-if-changed={}", TABLE);
    println!("cargo:rerun-if-changed=build.rs");

    let tsv = fs::read_to_string(TABLE).unwrap_or_else(|e| panic!("{}: {}", TABLE, e));
    let ranges = xtask::parse_ranges(&tsv).unwrap_or_else(|e| panic!("{}: {}", TABLE, e));
    let blob = xtask::pack_ranges(&ranges).unwrap_or_else(|e| panic!("{}: {}", TABLE, e));

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("letters.bin");
    fs::write(&dest, blob).unwrap_or_else(|e| panic!("{}: {}", dest.display(), e));
}
