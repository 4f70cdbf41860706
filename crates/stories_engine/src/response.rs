use serde::{Deserialize, Deserializer};
use stories_core::{Item, ItemId};

use crate::{FailureKind, FetchError};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<SearchHit>,
}

// The API returns `null` for the text and counter fields of some records.
#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    num_comments: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    points: i64,
    #[serde(rename = "objectID")]
    object_id: ItemId,
}

impl From<SearchHit> for Item {
    fn from(hit: SearchHit) -> Self {
        Item {
            title: hit.title,
            url: hit.url,
            author: hit.author,
            comment_count: hit.num_comments,
            score: hit.points,
            id: hit.object_id,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a search response body into items, keeping server order.
pub fn decode_search_response(bytes: &[u8]) -> Result<Vec<Item>, FetchError> {
    let response: SearchResponse = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::MalformedBody, err.to_string()))?;
    Ok(response.hits.into_iter().map(Item::from).collect())
}
