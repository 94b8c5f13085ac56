/**
 * Turns resources/ddd.txt into the area-code table compiled into the crate.
 */

use std::{collections::{BTreeMap, HashMap}, env, fs::File, io::{BufRead, BufReader, BufWriter, Write}, num::ParseIntError, path::Path};

use thiserror::Error;

const DDD_SOURCE: &str = "resources/ddd.txt";
const GENERATED_FILE: &str = "ddd_tables.rs";

/// Two-letter codes of the 26 states and the federal district.
const KNOWN_UFS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA",
    "PB", "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("OUT_DIR is not set, is this running outside of cargo?")]
    MissingOutDir,

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Line {line_num} is malformed, expected `DDD|UF|Region`")]
    MalformedLine { line_num: usize },

    #[error("Failed to parse DDD '{ddd}': {source}")]
    DddParseError {
        ddd: String,
        #[source]
        source: ParseIntError,
    },

    #[error("DDD {ddd} is not made of two digits in 1..=9")]
    DddOutOfRange { ddd: u8 },

    #[error("DDD {ddd} is declared more than once")]
    DuplicateDdd { ddd: u8 },

    #[error("Unknown UF '{uf}' for DDD {ddd}")]
    UnknownUf { ddd: u8, uf: String },

    #[error("UF {uf} has no DDD assigned")]
    UfWithoutDdd { uf: String },

    #[error("DDD {ddd} belongs to {uf}, which owns several DDDs, but declares no region")]
    MissingRegion { ddd: u8, uf: String },

    #[error("DDD {ddd} is the only DDD of {uf} and must not declare a region")]
    UnexpectedRegion { ddd: u8, uf: String },
}

struct DddRecord {
    uf: String,
    region: Option<String>,
}

fn parse_ddds(path: &str, ddds: &mut BTreeMap<u8, DddRecord>) -> Result<(), BuildError> {
    ddds.clear();

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if bytes_read > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.splitn(3, '|');
        let (Some(ddd_str), Some(uf), Some(region)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(BuildError::MalformedLine { line_num: line_number });
        };

        let ddd_str = ddd_str.trim();
        let ddd: u8 = ddd_str.parse().map_err(|e| BuildError::DddParseError {
            ddd: ddd_str.to_string(),
            source: e,
        })?;
        if !(11..=99).contains(&ddd) || ddd % 10 == 0 {
            return Err(BuildError::DddOutOfRange { ddd });
        }

        let uf = uf.trim();
        if !KNOWN_UFS.contains(&uf) {
            return Err(BuildError::UnknownUf { ddd, uf: uf.to_string() });
        }

        let region = region.trim();
        let record = DddRecord {
            uf: uf.to_string(),
            region: (!region.is_empty()).then(|| region.to_string()),
        };
        if ddds.insert(ddd, record).is_some() {
            return Err(BuildError::DuplicateDdd { ddd });
        }
    }

    Ok(())
}

/// A region is required exactly for the DDDs of units owning more than one DDD.
fn check_regions(ddds: &BTreeMap<u8, DddRecord>) -> Result<(), BuildError> {
    let mut ddd_count_by_uf = HashMap::<&str, usize>::new();
    for record in ddds.values() {
        *ddd_count_by_uf.entry(record.uf.as_str()).or_default() += 1;
    }

    if let Some(uf) = KNOWN_UFS.iter().find(|uf| !ddd_count_by_uf.contains_key(*uf)) {
        return Err(BuildError::UfWithoutDdd { uf: uf.to_string() });
    }

    for (&ddd, record) in ddds {
        let owns_several = ddd_count_by_uf.get(record.uf.as_str()).copied().unwrap_or(0) > 1;
        match (owns_several, &record.region) {
            (true, None) => {
                return Err(BuildError::MissingRegion { ddd, uf: record.uf.clone() });
            }
            (false, Some(_)) => {
                return Err(BuildError::UnexpectedRegion { ddd, uf: record.uf.clone() });
            }
            _ => {}
        }
    }
    Ok(())
}

/// "SP" -> "Sp", the variant name used by `i18n::Uf`.
fn uf_variant(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

fn write_table(out_path: &Path, ddds: &BTreeMap<u8, DddRecord>) -> Result<(), BuildError> {
    let mut out = BufWriter::new(File::create(out_path)?);

    writeln!(out, "// @generated from {} by build/rust_build.rs, do not edit.", DDD_SOURCE)?;
    writeln!(out, "pub static DDD_ENTRIES: &[(u8, crate::i18n::Uf, Option<&str>)] = &[")?;
    for (ddd, record) in ddds {
        let region = match &record.region {
            Some(region) => format!("Some({:?})", region),
            None => "None".to_string(),
        };
        writeln!(
            out,
            "    ({}, crate::i18n::Uf::{}, {}),",
            ddd,
            uf_variant(&record.uf),
            region
        )?;
    }
    writeln!(out, "];")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", DDD_SOURCE);
    println!("cargo:rerun-if-changed=build/rust_build.rs");

    let mut ddds = BTreeMap::new();
    parse_ddds(DDD_SOURCE, &mut ddds)?;
    check_regions(&ddds)?;

    let out_dir = env::var_os("OUT_DIR").ok_or(BuildError::MissingOutDir)?;
    write_table(&Path::new(&out_dir).join(GENERATED_FILE), &ddds)
}
