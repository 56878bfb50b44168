//! Phrase-prefix query construction and response reduction.
//!
//! Both halves are pure: [`build_query`] turns a raw phrase into the store's
//! search payload, [`extract_hits`] reduces a store response to the ordered
//! records it matched. HTTP transport lives in [`crate::client`]; assertion
//! logic belongs to the caller.

use serde::Serialize;
use serde_json::Value;

use crate::error::{DashmatchError, Result};
use crate::types::UserRecord;

/// Field targeted by every query this crate builds.
pub const USER_ID_FIELD: &str = "user_id";

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: QueryClause,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryClause {
    #[serde(rename = "bool")]
    pub boolean: BoolQuery,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoolQuery {
    pub must: Vec<MustClause>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MustClause {
    pub multi_match: MultiMatch,
}

#[derive(Debug, Clone, Serialize)]
pub struct MultiMatch {
    pub query: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    PhrasePrefix,
}

/// Build the search payload for `phrase`: a boolean must clause wrapping a
/// `phrase_prefix` multi-match on [`USER_ID_FIELD`].
///
/// Accepts any string, including empty; degenerate input is the store's to
/// reject. Case- and dash-insensitivity come from the field's analysis
/// chain (see [`crate::analysis`]), not from anything done here; the
/// phrase is passed through as given.
pub fn build_query(phrase: &str) -> SearchRequest {
    SearchRequest {
        query: QueryClause {
            boolean: BoolQuery {
                must: vec![MustClause {
                    multi_match: MultiMatch {
                        query: phrase.to_string(),
                        match_type: MatchType::PhrasePrefix,
                        fields: vec![USER_ID_FIELD.to_string()],
                    },
                }],
            },
        },
    }
}

/// Reduce a raw search response to the matched records, in store order.
///
/// Expects the hit list at `hits.hits`, each hit carrying its record under
/// `_source`. A missing path is [`DashmatchError::MalformedResponse`]: the
/// request shape was wrong, so fail hard rather than treat it as an empty
/// result.
pub fn extract_hits(response: &Value) -> Result<Vec<UserRecord>> {
    let hits = response
        .get("hits")
        .and_then(|h| h.get("hits"))
        .and_then(Value::as_array)
        .ok_or(DashmatchError::MalformedResponse { path: "hits.hits" })?;

    hits.iter()
        .map(|hit| {
            let source = hit
                .get("_source")
                .ok_or(DashmatchError::MalformedResponse {
                    path: "hits.hits[]._source",
                })?;
            serde_json::from_value(source.clone()).map_err(DashmatchError::from)
        })
        .collect()
}
