use specgen_core::{DetailLevel, Language};

pub fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::Ru => "Write the entire specification in Russian language.",
        Language::En => "Write the entire specification in English language.",
    }
}

pub fn detail_instruction(detail: DetailLevel) -> &'static str {
    match detail {
        DetailLevel::Brief => {
            "Create a concise specification with main sections only (2-3 pages worth of content)"
        }
        DetailLevel::Standard => {
            "Create a standard specification with all essential sections and reasonable detail (4-6 pages worth of content)"
        }
        DetailLevel::Detailed => {
            "Create a comprehensive, detailed specification covering all aspects thoroughly (8-10 pages worth of content)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_instruction_content() {
        assert!(language_instruction(Language::Ru).contains("Russian"));
        assert!(language_instruction(Language::En).contains("English"));
    }

    #[test]
    fn detail_instruction_content() {
        assert!(detail_instruction(DetailLevel::Brief).contains("2-3 pages"));
        assert!(detail_instruction(DetailLevel::Standard).contains("4-6 pages"));
        assert!(detail_instruction(DetailLevel::Detailed).contains("8-10 pages"));
    }

    #[test]
    fn unrecognized_values_get_default_instructions() {
        assert_eq!(
            detail_instruction(DetailLevel::parse_or_default("novel")),
            detail_instruction(DetailLevel::Standard)
        );
        assert_eq!(
            language_instruction(Language::parse_or_default("fr")),
            language_instruction(Language::Ru)
        );
    }
}
