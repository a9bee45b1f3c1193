use anyhow::{Context, Result};
use std::io::{IsTerminal, Read};
use std::path::Path;

pub const PROMPT: &str = "Enter the NOTAM message:";

/// Where the raw notice text comes from
#[derive(Debug)]
pub enum NotamSource<'a> {
    Inline(&'a str),
    File(&'a Path),
    Stdin,
}

pub fn read_notam(source: NotamSource<'_>) -> Result<String> {
    match source {
        NotamSource::Inline(text) => Ok(text.to_string()),
        NotamSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read NOTAM from {:?}", path)),
        NotamSource::Stdin => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("{}", PROMPT);
            }
            read_all(stdin.lock()).context("Failed to read NOTAM from stdin")
        }
    }
}

fn read_all(mut reader: impl Read) -> std::io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
