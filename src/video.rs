//! Wire schema shared by the gateway and the processing service.
//!
//! The same shape travels client → gateway → downstream, so it is defined
//! once here and used for both inbound parsing and outbound encoding.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A request to process the video found at `url`.
///
/// `url` is not checked for well-formedness. Decoding is lenient the way
/// browser clients expect:
/// - the key matches case-insensitively (`url`, `URL`, `Url`)
/// - a `null` value, or a `null` body, counts as absent
/// - when the key repeats, the last non-null value wins
/// - unknown keys are ignored
///
/// Absent decodes to an empty string; only a body that fails to parse, or is
/// not an object, is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoRequest {
    pub url: String,
}

impl<'de> Deserialize<'de> for VideoRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(VideoRequestVisitor)
    }
}

struct VideoRequestVisitor;

impl<'de> Visitor<'de> for VideoRequestVisitor {
    type Value = VideoRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with a \"url\" string")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut video = VideoRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("url") {
                if let Some(url) = map.next_value::<Option<String>>()? {
                    video.url = url;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(video)
    }
}

impl VideoRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Decode an inbound body. Content type is not consulted.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let video: Option<VideoRequest> = serde_json::from_slice(body)?;
        Ok(video.unwrap_or_default())
    }

    /// Encode for the downstream call.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
