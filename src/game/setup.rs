//! Interactive map entry

use std::io::{BufRead, Write};

use crate::core::config::{GameConfig, MAX_NAME_LEN};
use crate::core::error::Result;
use crate::map::territory::Territory;
use crate::map::world_map::WorldMap;

/// Prompt for every territory slot in turn
///
/// Nothing here is fatal: a troop count that fails to parse or is zero
/// is coerced to 1 with a warning, and over-long names or colors are
/// clipped to the cap with a warning.
pub fn enter_map<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    mut output: W,
) -> Result<WorldMap> {
    let mut territories = Vec::with_capacity(config.territory_count);

    writeln!(
        output,
        "\n--- MAP SETUP ({} territories) ---",
        config.territory_count
    )?;

    for slot in 1..=config.territory_count {
        writeln!(output, "\nTerritory {}:", slot)?;

        write!(output, "  Name: ")?;
        output.flush()?;
        let name = read_capped(input, &mut output, "name")?;

        write!(output, "  Army color: ")?;
        output.flush()?;
        let color = read_capped(input, &mut output, "color")?;

        write!(output, "  Troops: ")?;
        output.flush()?;
        let troops = read_troops(input, &mut output)?;

        territories.push(Territory::new(name, color, troops)?);
    }

    tracing::info!(count = territories.len(), "map entered interactively");
    Ok(WorldMap::new(territories))
}

/// A trimmed line, clipped to the name/color cap with a warning
fn read_capped<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    what: &str,
) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let mut value = line.trim().to_string();

    if value.chars().count() > MAX_NAME_LEN {
        writeln!(
            output,
            "  The {} is longer than {} characters and was clipped.",
            what, MAX_NAME_LEN
        )?;
        value = value.chars().take(MAX_NAME_LEN).collect();
    }

    Ok(value)
}

/// A troop count; anything that is not a positive integer becomes 1
fn read_troops<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u32> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    match line.trim().parse::<u32>() {
        Ok(troops) if troops > 0 => Ok(troops),
        _ => {
            writeln!(output, "  Invalid troop count, defaulting to 1.")?;
            Ok(1)
        }
    }
}
