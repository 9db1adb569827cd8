// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, bail};
use wcwidth_table_gen::emit::{self, Language};
use wcwidth_table_gen::{DEFAULT_INPUT, Table};

const HELP: &str = "\
Usage: wcwidth-table-gen [options...] [EastAsianWidth.txt]
  -h, --help            Prints help information
  --lang=<c|rust>       Output language (default: c)
  --stats               Print table statistics to stderr

Without an input path, EastAsianWidth.txt is read from the current directory.
The table is written to stdout.

Download EastAsianWidth.txt at:
  https://www.unicode.org/Public/UCD/latest/ucd/EastAsianWidth.txt
";

fn main() -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        eprint!("{HELP}");
        return Ok(());
    }

    let arg_lang = args
        .opt_value_from_fn("--lang", |arg| match arg {
            "c" => Ok(Language::C),
            "rust" => Ok(Language::Rust),
            l => bail!("invalid language: \"{}\"", l),
        })?
        .unwrap_or_default();
    let arg_stats = args.contains("--stats");
    let arg_input = args
        .opt_free_from_os_str(|s| -> Result<PathBuf, &'static str> { Ok(s.into()) })?
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let arg_remaining = args.finish();
    if !arg_remaining.is_empty() {
        bail!("unrecognized arguments: {:?}", arg_remaining);
    }

    let table =
        wcwidth_table_gen::build_from_file(&arg_input).context("failed to build the table")?;

    emit::write(&table.bitmap, arg_lang, &mut std::io::stdout().lock())
        .context("failed to write the table to stdout")?;

    if arg_stats {
        print_stats(&table);
    }
    Ok(())
}

fn print_stats(table: &Table) {
    let stats = &table.stats;
    eprintln!("records:            {}", stats.records);
    eprintln!("full size records:  {}", stats.full_size_records);
    eprintln!("code points set:    {}", table.bitmap.count());
    eprintln!("truncated > U+FFFF: {}", stats.truncated);
    if stats.unrecognized != 0 {
        eprintln!("unrecognized ea:    {}", stats.unrecognized);
    }
}
