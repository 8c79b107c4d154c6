use crate::LoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Xml,
    Yaml,
}

impl DocumentFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "xml" => Some(Self::Xml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &str) -> Result<Self, LoadError> {
        infer_format_from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_string()))
    }
}

pub fn infer_format_from_path(path: &str) -> Option<DocumentFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".xml") {
        return Some(DocumentFormat::Xml);
    }
    if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        return Some(DocumentFormat::Yaml);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_from_extension() {
        assert_eq!(infer_format_from_path("vpnmgmt/vpnservers.xml"), Some(DocumentFormat::Xml));
        assert_eq!(infer_format_from_path("Flags.YML"), Some(DocumentFormat::Yaml));
        assert_eq!(infer_format_from_path("flags.yaml"), Some(DocumentFormat::Yaml));
        assert_eq!(infer_format_from_path("flags.json"), None);
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(DocumentFormat::parse(" XML "), Some(DocumentFormat::Xml));
        assert_eq!(DocumentFormat::parse("yml"), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::parse("toml"), None);
    }
}
