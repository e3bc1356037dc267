use crate::{Error, Result};
use base64::engine::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer};

/// Top-level HAR object
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Har {
    pub log: Log,
}

/// One capture session
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Log {
    pub version: String,
    pub creator: Creator,
    /// Absent for logs not recorded by a browser
    pub browser: Option<Creator>,
    pub pages: Option<Vec<Page>>,
    pub entries: Vec<Entry>,
    pub comment: Option<String>,
}

impl Log {
    /// Find a page by its `id`
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.as_deref()?.iter().find(|page| page.id == id)
    }

    /// Entries whose `pageref` points at the given page, in capture order
    pub fn entries_for_page<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.page_ref.as_deref() == Some(id))
    }
}

/// Creator/Browser information
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Creator {
    pub name: String,
    pub version: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub started_date_time: String,
    pub id: String,
    pub title: String,
    pub page_timings: PageTimings,
    pub comment: Option<String>,
}

/// Page-level timing marks, in milliseconds since `startedDateTime`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTimings {
    pub on_content_load: Option<f64>,
    pub on_load: Option<f64>,
    pub comment: Option<String>,
}

/// Individual HTTP transaction entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(rename = "pageref")]
    pub page_ref: Option<String>,
    pub started_date_time: String,
    /// Total elapsed time in milliseconds
    pub time: f64,
    pub request: Request,
    pub response: Response,
    pub cache: Cache,
    pub timings: Timings,
    #[serde(rename = "serverIPAddress")]
    pub server_ip_address: Option<String>,
    pub connection: Option<String>,
    pub comment: Option<String>,
}

/// HTTP request as captured
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub method: String,
    pub url: String,
    pub http_version: String,
    pub cookies: Vec<Cookie>,
    pub headers: Vec<Header>,
    pub query_string: Vec<QueryParam>,
    pub post_data: Option<PostData>,
    pub headers_size: i64,
    pub body_size: i64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status: i64,
    pub status_text: String,
    pub http_version: String,
    pub cookies: Vec<Cookie>,
    pub headers: Vec<Header>,
    pub content: Content,
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
    pub headers_size: i64,
    pub body_size: i64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub expires: Option<String>,
    pub http_only: Option<bool>,
    pub secure: Option<bool>,
    pub comment: Option<String>,
}

/// HTTP header. Repeated names are kept as separate entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
    pub comment: Option<String>,
}

/// Query parameter
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryParam {
    pub name: String,
    pub value: String,
    pub comment: Option<String>,
}

/// Request body, carried either as raw `text` or as a `params` list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub mime_type: String,
    /// Empty when the key is absent or `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub params: Vec<Param>,
    pub text: Option<String>,
    pub comment: Option<String>,
}

impl PostData {
    /// Reconstruct the request body.
    ///
    /// Non-empty `text` wins. Otherwise each param is rendered with
    /// [`Param::pair`] and the pairs are concatenated back to back, with no
    /// separator between them. Returns an empty string when neither carries data.
    pub fn body(&self) -> String {
        self.body_with_separator("")
    }

    /// Same selection as [`PostData::body`], joining params with `separator`
    pub fn body_with_separator(&self, separator: &str) -> String {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => self
                .params
                .iter()
                .map(Param::pair)
                .collect::<Vec<_>>()
                .join(separator),
        }
    }
}

/// POST parameter
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    pub name: String,
    pub value: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub comment: Option<String>,
}

impl Param {
    /// `name` alone when there is no value, `name=value` otherwise
    pub fn pair(&self) -> String {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => format!("{}={}", self.name, value),
            _ => self.name.clone(),
        }
    }
}

/// Response content
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub size: i64,
    pub compression: Option<i64>,
    pub mime_type: String,
    pub text: Option<String>,
    /// `"base64"` for binary bodies
    pub encoding: Option<String>,
    pub comment: Option<String>,
}

impl Content {
    /// Decode the captured body into raw bytes.
    ///
    /// Returns `Ok(None)` when no text was captured.
    pub fn decoded_body(&self) -> Result<Option<Vec<u8>>> {
        let Some(text) = self.text.as_deref() else {
            return Ok(None);
        };

        match self.encoding.as_deref() {
            Some(encoding) if encoding.eq_ignore_ascii_case("base64") => STANDARD
                .decode(text.trim())
                .map(Some)
                .map_err(|e| Error::Content(format!("Invalid base64 body: {}", e))),
            _ => Ok(Some(text.as_bytes().to_vec())),
        }
    }
}

/// Cache information. Both snapshots may be missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cache {
    pub before_request: Option<CacheEntry>,
    pub after_request: Option<CacheEntry>,
    pub comment: Option<String>,
}

/// State of a cache entry before or after the request
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub expires: Option<String>,
    pub last_access: String,
    #[serde(rename = "eTag")]
    pub e_tag: String,
    pub hit_count: i64,
    pub comment: Option<String>,
}

/// Per-phase timing breakdown in milliseconds.
///
/// The optional phases keep the raw value: `None` when the key is absent,
/// `Some(-1.0)` when the recorder marked the phase as not applicable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Timings {
    pub blocked: Option<f64>,
    pub dns: Option<f64>,
    pub connect: Option<f64>,
    pub send: f64,
    pub wait: f64,
    pub receive: f64,
    pub ssl: Option<f64>,
    pub comment: Option<String>,
}

impl Timings {
    pub fn blocked_ms(&self) -> Option<f64> {
        measured(self.blocked)
    }

    pub fn dns_ms(&self) -> Option<f64> {
        measured(self.dns)
    }

    pub fn connect_ms(&self) -> Option<f64> {
        measured(self.connect)
    }

    pub fn ssl_ms(&self) -> Option<f64> {
        measured(self.ssl)
    }

    /// Sum of all measured phases.
    ///
    /// `ssl` is left out since HAR already counts it inside `connect`.
    pub fn total(&self) -> f64 {
        [self.blocked, self.dns, self.connect]
            .into_iter()
            .filter_map(measured)
            .chain([self.send, self.wait, self.receive].into_iter().filter(|v| *v >= 0.0))
            .sum()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v >= 0.0)
}
