//! Output formats and the response dispatcher that turns a finished HTTP
//! response into a [`Payload`].

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

/// Output format a caller asks an endpoint for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Structured data, decoded into a [`serde_json::Value`]. This is the default.
    #[default]
    Json,
    Csv,
    Xml,
    /// Atom syndication feed (OData endpoints only).
    Atom,
}

impl Format {
    /// Whether a body in this format is handed back verbatim instead of decoded.
    pub fn is_text(&self) -> bool {
        !matches!(self, Format::Json)
    }

    /// Value for the OData `$format` option.
    pub fn odata_value(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "text/csv",
            Format::Xml => "xml",
            Format::Atom => "atom",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Format::Json => "json",
                Format::Csv => "csv",
                Format::Xml => "xml",
                Format::Atom => "atom",
            }
        )
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "csv" | "text/csv" => Ok(Format::Csv),
            "xml" => Ok(Format::Xml),
            "atom" => Ok(Format::Atom),
            _ => Err(Error::UnknownVariant {
                kind: "format",
                value: s.to_string(),
            }),
        }
    }
}

/// Result of one call: decoded JSON or the raw body text.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text.as_str()),
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text),
        }
    }

    /// Deserializes the payload into a caller-chosen type.
    ///
    /// Text payloads are parsed as JSON, so this also works for a Senado
    /// response that came back without a JSON content type.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, Error> {
        match self {
            Payload::Json(value) => Ok(serde_json::from_value(value)?),
            Payload::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

/// A completed HTTP response, already read into memory.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub body: String,
}

impl RawResponse {
    /// 2xx and 3xx count as ok; anything from 400 up is a failure.
    pub fn is_ok(&self) -> bool {
        self.status < 400
    }

    fn into_json(self) -> Result<Payload, Error> {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(value) => Ok(Payload::Json(value)),
            Err(e) => {
                tracing::error!("Failed to decode JSON from {}: {}", self.url, e);
                Err(Error::Decode(e))
            }
        }
    }
}

/// How a response body is turned into a [`Payload`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The format the caller asked for decides.
    Requested(Format),
    /// Response headers decide: CSV headers give text, a JSON content type
    /// gives JSON, anything else gives text.
    Negotiated,
}

impl Dispatch {
    pub fn apply(self, response: RawResponse) -> Result<Payload, Error> {
        if !response.is_ok() {
            tracing::error!(
                "Request to {} failed with status {}",
                response.url,
                response.status
            );
            return Err(Error::Api {
                url: response.url,
                status: response.status,
                body: response.body,
            });
        }

        match self {
            Dispatch::Requested(format) if format.is_text() => Ok(Payload::Text(response.body)),
            Dispatch::Requested(_) => response.into_json(),
            Dispatch::Negotiated => {
                let content_type = response
                    .content_type
                    .as_deref()
                    .unwrap_or("")
                    .to_ascii_lowercase();
                let disposition = response
                    .content_disposition
                    .as_deref()
                    .unwrap_or("")
                    .to_ascii_lowercase();

                if content_type.contains("text/csv") || disposition.contains(".csv") {
                    Ok(Payload::Text(response.body))
                } else if content_type.contains("application/json") {
                    response.into_json()
                } else {
                    Ok(Payload::Text(response.body))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
        RawResponse {
            url: "https://example.com/x".to_string(),
            status,
            content_type: content_type.map(str::to_string),
            content_disposition: None,
            body: body.to_string(),
        }
    }

    #[test]
    fn format_round_trips_through_display() {
        for format in [Format::Json, Format::Csv, Format::Xml, Format::Atom] {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn redirect_status_is_ok() {
        let payload = Dispatch::Negotiated
            .apply(response(302, None, "moved"))
            .unwrap();
        assert_eq!(payload, Payload::Text("moved".to_string()));
    }

    #[test]
    fn text_formats_skip_decoding() {
        for format in [Format::Csv, Format::Xml, Format::Atom] {
            let payload = Dispatch::Requested(format)
                .apply(response(200, Some("application/json"), "{not json"))
                .unwrap();
            assert_eq!(payload.as_text(), Some("{not json"));
        }
    }

    #[test]
    fn payload_deserialize_accepts_text_json() {
        let payload = Payload::Text("[1,2,3]".to_string());
        let numbers: Vec<u32> = payload.deserialize().unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
