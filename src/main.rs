use std::fs::File;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use gcode_machine::config::Config;
use gcode_machine::dialect::DialectRegistry;
use gcode_machine::parser::parse_block;
use gcode_machine::Machine;

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    let level = log::LevelFilter::from_str(&config.log_level)
        .with_context(|| format!("invalid log level '{}'", config.log_level))?;
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut registry = DialectRegistry::with_builtin();
    for dir in &config.dialect_dirs {
        if dir.is_dir() {
            let added = registry.load_dir(dir)?;
            log::debug!("loaded {added} dialect(s) from {}", dir.display());
        }
    }
    if let Some(name) = &config.cli_dialect {
        if !registry.set_active(name) {
            bail!(
                "unknown dialect '{name}' (available: {})",
                registry.list().join(", ")
            );
        }
    }
    let dialect = registry
        .active()
        .context("no active dialect")?
        .clone();

    let mut machine = Machine::new(dialect.clone())?;

    let file = File::open(&config.file)
        .with_context(|| format!("cannot open {}", config.file.display()))?;
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let (code, comment) = split_comments(&line);

        let block = match parse_block(&code, &dialect) {
            Ok(block) => block,
            Err(e) if config.skip_errors => {
                log::warn!("line {line_no}: {e}; skipped");
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("line {line_no}")),
        };

        if let Err(e) = machine.process_block(&block) {
            if config.skip_errors {
                log::warn!("line {line_no}: {e}; skipped");
                continue;
            }
            return Err(e).with_context(|| format!("line {line_no}"));
        }

        if config.json {
            print_json(line_no, &block);
        } else {
            print_text(&block, comment.as_deref());
        }
    }

    Ok(())
}

/// Split a raw line into functional text and comment text. Handles both
/// semicolon comments (rest of line) and parenthetical comments (inline).
fn split_comments(line: &str) -> (String, Option<String>) {
    let mut code = String::with_capacity(line.len());
    let mut comments: Vec<String> = Vec::new();
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            ';' => {
                comments.push(chars.by_ref().collect::<String>().trim().to_string());
                break;
            }
            '(' => {
                let mut text = String::new();
                for inner in chars.by_ref() {
                    if inner == ')' {
                        break;
                    }
                    text.push(inner);
                }
                comments.push(text.trim().to_string());
            }
            _ => code.push(ch),
        }
    }

    let comment = if comments.is_empty() {
        None
    } else {
        Some(comments.join(". "))
    };
    (code, comment)
}

fn print_text(block: &gcode_machine::Block, comment: Option<&str>) {
    let text = block.to_text();
    match (text.is_empty(), comment) {
        (true, None) => {}
        (true, Some(c)) => println!("({c})"),
        (false, None) => println!("{text}"),
        (false, Some(c)) => println!("{text} ({c})"),
    }
}

fn print_json(line_no: usize, block: &gcode_machine::Block) {
    let commands: Vec<_> = block
        .commands()
        .iter()
        .map(|cmd| {
            serde_json::json!({
                "word": cmd.word().to_string(),
                "kind": cmd.kind().name,
                "params": cmd
                    .params()
                    .values()
                    .map(|w| w.to_string())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    let leftovers: Vec<_> = block
        .modal_params()
        .iter()
        .map(|w| w.to_string())
        .collect();
    let record = serde_json::json!({
        "line": line_no,
        "commands": commands,
        "modal_params": leftovers,
    });
    println!("{record}");
}
