use {
    crate::error::{Result, SirsError},
    serde::{de::DeserializeOwned, Serialize},
    serde_json::Value,
    std::{fs, io::Write},
};

/// Reads a parameter file. The raw json is returned as well so it can be
/// echoed next to the results.
pub fn parse_file<T>(path: &str) -> Result<(T, Value)>
where
    T: DeserializeOwned,
{
    let content = fs::read_to_string(path).map_err(|source| SirsError::Io {
        path: path.to_owned(),
        source,
    })?;
    let json: Value = serde_json::from_str(&content)?;
    let param = serde_json::from_value(json.clone())?;
    Ok((param, json))
}

/// Pretty printed default parameters, used as a template for new files.
pub fn example_json<T>() -> Result<String>
where
    T: Default + Serialize,
{
    Ok(serde_json::to_string_pretty(&T::default())?)
}

/// Writes `json` as a single comment line starting with `#`.
pub fn write_json<W: Write>(mut writer: W, json: &Value) -> std::io::Result<()> {
    write!(writer, "#")?;
    serde_json::to_writer(&mut writer, json)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use {super::*, crate::config::SimulationConfig};

    #[test]
    fn example_parses_back() {
        let example = example_json::<SimulationConfig>().unwrap();
        let parsed: SimulationConfig = serde_json::from_str(&example).unwrap();
        assert_eq!(parsed, SimulationConfig::default());
    }

    #[test]
    fn reads_file_and_keeps_raw_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(example_json::<SimulationConfig>().unwrap().as_bytes())
            .unwrap();
        let (config, json): (SimulationConfig, Value) =
            parse_file(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config, SimulationConfig::default());
        assert_eq!(json["degree"], 10);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = parse_file::<SimulationConfig>("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SirsError::Io { ref path, .. } if path == "/definitely/not/here.json"));
    }

    #[test]
    fn header_line() {
        let mut buf = Vec::new();
        write_json(&mut buf, &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "#{\"a\":1}\n");
    }
}
