use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Webp,
    Jpg,
    Png,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Webp, Self::Jpg, Self::Png];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Webp => "webp",
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.value().eq_ignore_ascii_case(value))
    }

    /// File name offered when the generated image is saved.
    pub fn download_file_name(&self) -> String {
        format!("generated-image.{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!(OutputFormat::from_value("PNG"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_value("gif"), None);
    }

    #[test]
    fn download_name_uses_extension() {
        assert_eq!(
            OutputFormat::Jpg.download_file_name(),
            "generated-image.jpg"
        );
    }
}
