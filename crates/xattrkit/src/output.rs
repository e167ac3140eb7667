use std::collections::BTreeMap;
use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ValueOutput<'a> {
    path: String,
    key: &'a str,
    codec: &'a str,
    value: Option<&'a str>,
}

#[derive(Serialize)]
struct KeysOutput<'a> {
    path: String,
    keys: &'a [String],
}

#[derive(Serialize)]
struct DumpOutput<'a> {
    path: String,
    codec: &'a str,
    attributes: &'a BTreeMap<String, String>,
}

/// Print one attribute value. `None` means present but empty or not
/// decodable with `codec`.
pub fn print_value(path: &str, key: &str, codec: &str, value: Option<&str>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&ValueOutput {
            path: path.to_string(),
            key,
            codec,
            value,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["KEY", "CODEC", "VALUE"]);
            table.add_row(vec![key, codec, value.unwrap_or(NO_VALUE)]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{key} ({codec}) = {}", value.unwrap_or(NO_VALUE));
        }
        OutputFormat::Raw => {
            if let Some(value) = value {
                print_raw(value.as_bytes());
            }
        }
    }
}

pub fn print_keys(path: &str, keys: &[String], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&KeysOutput {
            path: path.to_string(),
            keys,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["KEY"]);
            for key in keys {
                table.add_row(vec![key.as_str()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for key in keys {
                println!("{key}");
            }
        }
    }
}

pub fn print_dump(
    path: &str,
    codec: &str,
    attributes: &BTreeMap<String, String>,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => print_json(&DumpOutput {
            path: path.to_string(),
            codec,
            attributes,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["KEY", "VALUE"]);
            for (key, value) in attributes {
                table.add_row(vec![key.as_str(), value.as_str()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (key, value) in attributes {
                println!("{key} = {value}");
            }
        }
        OutputFormat::Raw => {
            for (key, value) in attributes {
                println!("{key}\t{value}");
            }
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

const NO_VALUE: &str = "<no value>";

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}
