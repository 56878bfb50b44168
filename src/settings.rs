//! Index-creation payload for the `user_id` index.
//!
//! The analysis chain configured here is the contract the rest of the crate
//! leans on: a mapping char filter that strips `-`, then a lowercase filter,
//! applied both by the text field's analyzer (index time and query time) and
//! by the keyword sub-field's normalizer. [`crate::analysis`] replicates the
//! same two steps locally.

use serde::Serialize;
use std::collections::HashMap;

/// Name of the custom analyzer on the `user_id` text field.
pub const ANALYZER: &str = "dashless";
/// Name of the normalizer on the keyword sub-field.
pub const NORMALIZER: &str = "dashless";
/// Name of the shared mapping char filter.
pub const CHAR_FILTER: &str = "strip_dashes";
/// Name of the keyword sub-field under `user_id`.
pub const RAW_SUBFIELD: &str = "raw";

#[derive(Debug, Clone, Serialize)]
pub struct IndexBody {
    pub settings: Settings,
    pub mappings: Mappings,
}

#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub analysis: Analysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub normalizer: HashMap<String, Normalizer>,
    pub char_filter: HashMap<String, CharFilter>,
    pub analyzer: HashMap<String, Analyzer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Normalizer {
    #[serde(rename = "type")]
    pub kind: String,
    pub char_filter: Vec<String>,
    pub filter: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CharFilter {
    #[serde(rename = "type")]
    pub kind: String,
    pub mappings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analyzer {
    pub tokenizer: String,
    pub char_filter: Vec<String>,
    pub filter: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mappings {
    pub properties: HashMap<String, FieldMapping>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldMapping {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, SubField>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubField {
    #[serde(rename = "type")]
    pub kind: String,
    pub normalizer: String,
}

impl IndexBody {
    /// Index body for dash-insensitive, case-insensitive `user_id` search:
    /// `user_id` as text analyzed by [`ANALYZER`], with a [`RAW_SUBFIELD`]
    /// keyword sub-field normalized the same way for exact lookups.
    pub fn user_ids() -> Self {
        let strip = |name: &str| vec![name.to_string()];

        IndexBody {
            settings: Settings {
                analysis: Analysis {
                    normalizer: HashMap::from([(
                        NORMALIZER.to_string(),
                        Normalizer {
                            kind: "custom".to_string(),
                            char_filter: strip(CHAR_FILTER),
                            filter: vec!["lowercase".to_string()],
                        },
                    )]),
                    char_filter: HashMap::from([(
                        CHAR_FILTER.to_string(),
                        CharFilter {
                            kind: "mapping".to_string(),
                            mappings: vec!["- => ".to_string()],
                        },
                    )]),
                    analyzer: HashMap::from([(
                        ANALYZER.to_string(),
                        Analyzer {
                            tokenizer: "standard".to_string(),
                            char_filter: strip(CHAR_FILTER),
                            filter: vec!["lowercase".to_string()],
                        },
                    )]),
                },
            },
            mappings: Mappings {
                properties: HashMap::from([(
                    crate::query::USER_ID_FIELD.to_string(),
                    FieldMapping {
                        kind: "text".to_string(),
                        analyzer: Some(ANALYZER.to_string()),
                        fields: Some(HashMap::from([(
                            RAW_SUBFIELD.to_string(),
                            SubField {
                                kind: "keyword".to_string(),
                                normalizer: NORMALIZER.to_string(),
                            },
                        )])),
                    },
                )]),
            },
        }
    }
}
