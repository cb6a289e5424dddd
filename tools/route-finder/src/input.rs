use anyhow::{bail, Context, Result};
use metro_transit::network::NetworkDefinition;
use metro_transit::provider::busan;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load a network definition from JSON, or fall back to the built-in tables
pub fn load_definition(path: Option<&Path>) -> Result<NetworkDefinition> {
    let Some(path) = path else {
        log::debug!("Using built-in Busan Metro network");
        return Ok(busan::definition());
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open network file {}", path.display()))?;
    let definition: NetworkDefinition = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse network file {}", path.display()))?;

    log::debug!(
        "Loaded {} lines and {} transfers from {}",
        definition.lines.len(),
        definition.transfers.len(),
        path.display()
    );
    Ok(definition)
}

/// Write a network definition as pretty-printed JSON
pub fn write_definition(definition: &NetworkDefinition, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, definition)?;
    writer.flush()?;
    Ok(())
}

/// Ask for a station name on `output` and read one line from `input`
pub fn prompt_station<R, W>(label: &str, input: &mut R, output: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("No {} station given (end of input)", label.to_lowercase());
    }

    let name = line.trim();
    if name.is_empty() {
        bail!("No {} station given", label.to_lowercase());
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_input() {
        let mut input = Cursor::new("  서면 \n");
        let mut output = Vec::new();

        let name = prompt_station("Origin", &mut input, &mut output).unwrap();
        assert_eq!(name, "서면");
        assert_eq!(String::from_utf8(output).unwrap(), "Origin: ");
    }

    #[test]
    fn test_prompt_rejects_empty() {
        let mut output = Vec::new();
        assert!(prompt_station("Origin", &mut Cursor::new("\n"), &mut output).is_err());
        assert!(prompt_station("Origin", &mut Cursor::new(""), &mut output).is_err());
    }

    #[test]
    fn test_definition_round_trips_through_file() {
        let path = std::env::temp_dir().join(format!("route-finder-{}.json", std::process::id()));

        let definition = busan::definition();
        write_definition(&definition, &path).unwrap();
        let loaded = load_definition(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, definition);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = Path::new("/nonexistent/network.json");
        let err = load_definition(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to open network file"));
    }
}
