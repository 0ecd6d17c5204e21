// src/utils.rs
use anyhow::{Context, Result};

/// Parse a 1-based item list such as "1,3, 4" into 0-based indices.
pub fn parse_item_numbers(input: &str) -> Result<Vec<usize>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_item_number)
        .collect()
}

/// Parse one 1-based item number into a 0-based index.
pub fn parse_item_number(input: &str) -> Result<usize> {
    let n: usize = input
        .trim()
        .parse()
        .with_context(|| format!("Not an item number: '{}'", input.trim()))?;
    if n == 0 {
        anyhow::bail!("Item numbers start at 1");
    }
    Ok(n - 1)
}
