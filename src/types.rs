use clap::ValueEnum;
use serde::Deserialize;

/// How a resolved order is written to stdout.
///
/// - `Text`: one `index<TAB>name` line per item (default).
/// - `Json`: a pretty-printed array of `{ "index": .., "name": .. }` objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

/// On-disk encoding of a graph document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Map a file extension (without the dot) to a document format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(DocumentFormat::Toml),
            "json" => Some(DocumentFormat::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Doc {
            format: OutputFormat,
        }
        let doc: Doc = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(doc.format, OutputFormat::Json);
        assert!(toml::from_str::<Doc>("format = \"yaml\"").is_err());
    }

    #[test]
    fn document_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("TOML"), Some(DocumentFormat::Toml));
        assert_eq!(DocumentFormat::from_extension("json"), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_extension("yaml"), None);
    }
}
