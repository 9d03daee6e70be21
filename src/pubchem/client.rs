//! # PubChem PUG REST Client Module
//!
//! ## Aim
//! This module talks to the PubChem PUG REST service (https://pubchem.ncbi.nlm.nih.gov/rest/pug).
//! It resolves a chemical name into the list of matching compound records and fetches the
//! synonyms of a compound by its CID.
//!
//! ## Main Data Structures and Logic
//! - `PubChemClient<C>`: Generic client with dependency injection for the HTTP transport (enables testing)
//! - `HttpClient` trait: the one transport call the client needs, implemented for `reqwest::blocking::Client`
//! - `HttpResponse`: status code and body text, so PUG REST faults (HTTP 4xx/5xx with JSON bodies) can be decoded
//! - `PubChemError`: every way a lookup can go wrong
//!
//! ## Key Methods
//! - `get_compounds()`: name lookup, returns the candidates in PubChem's order
//! - `get_synonyms()`: synonyms of one CID
//! - `with_synonyms()`: completes a record with its synonyms (and so its common name)
//! - `compound_by_name_url()`, `synonyms_url()`: URL construction
//!
//! ## Usage
//! ```rust, ignore
//! let client = PubChemClient::new()?;
//! let compounds = client.get_compounds("Aspirin")?;
//! let first = client.with_synonyms(compounds.into_iter().next().unwrap())?;
//! println!("{:?}", first.molecular_formula);
//! ```
//!
//! ## Interesting Features
//! - A `PUGREST.NotFound` fault is not an error: it is an empty candidate list
//! - Names are percent-encoded as a single path segment, so "sodium chloride" or "1/2" are safe

use crate::pubchem::compound::CompoundRecord;
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// fault code PUG REST answers with when nothing matches
pub const FAULT_NOT_FOUND: &str = "PUGREST.NotFound";

/// status and body of one HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client trait for dependency injection
pub trait HttpClient {
    fn get_text(&self, url: &str) -> Result<HttpResponse, PubChemError>;
}

// Implementation for the real reqwest client
impl HttpClient for Client {
    fn get_text(&self, url: &str) -> Result<HttpResponse, PubChemError> {
        let response = self.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

impl<C: HttpClient> HttpClient for &C {
    fn get_text(&self, url: &str) -> Result<HttpResponse, PubChemError> {
        (**self).get_text(url)
    }
}

/// error types of the PubChem client
#[derive(Debug, Error)]
pub enum PubChemError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Compound not found")]
    NotFound,
    #[error("PubChem service error (HTTP {status}) {code}: {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
    },
    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub struct PubChemClient<C: HttpClient> {
    client: C,
    api_base: Url,
}

impl PubChemClient<Client> {
    pub fn new() -> Result<Self, PubChemError> {
        Self::with_timeout(DEFAULT_API_BASE, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// reqwest-backed client against `api_base` with a per-request timeout
    pub fn with_timeout(api_base: &str, timeout: Duration) -> Result<Self, PubChemError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("chemfinder/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(client, api_base)
    }
}

impl<C: HttpClient> PubChemClient<C> {
    pub fn with_client(client: C, api_base: &str) -> Result<Self, PubChemError> {
        let api_base = Url::parse(api_base)?;
        if api_base.cannot_be_a_base() {
            return Err(PubChemError::Url(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self { client, api_base })
    }

    ////////////////////////////////URLS//////////////////////////////////////////////////////////////
    fn endpoint(&self, segments: &[&str]) -> Result<Url, PubChemError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| PubChemError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn compound_by_name_url(&self, name: &str) -> Result<Url, PubChemError> {
        self.endpoint(&["compound", "name", name, "JSON"])
    }

    pub fn synonyms_url(&self, cid: u64) -> Result<Url, PubChemError> {
        let cid = cid.to_string();
        self.endpoint(&["compound", "cid", &cid, "synonyms", "JSON"])
    }

    ////////////////////////////////REQUESTS//////////////////////////////////////////////////////////
    /// Looks `name` up in the `name` namespace. An empty vector means PubChem knows no such compound.
    pub fn get_compounds(&self, name: &str) -> Result<Vec<CompoundRecord>, PubChemError> {
        let url = self.compound_by_name_url(name)?;
        info!("looking up '{}' at {}", name, url);
        let Some(json) = self.get_json(&url)? else {
            return Ok(Vec::new());
        };
        let records = json
            .get("PC_Compounds")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                PubChemError::MalformedResponse("no PC_Compounds list in response".to_string())
            })?;
        debug!("{} candidate(s) for '{}'", records.len(), name);
        records
            .iter()
            .map(|record| CompoundRecord::from_pug_record(name, record))
            .collect()
    }

    /// `Ok(None)` when PubChem has no synonyms for `cid`
    pub fn get_synonyms(&self, cid: u64) -> Result<Option<Vec<String>>, PubChemError> {
        let url = self.synonyms_url(cid)?;
        let Some(json) = self.get_json(&url)? else {
            return Ok(None);
        };
        let synonyms = json
            .pointer("/InformationList/Information/0/Synonym")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            });
        Ok(synonyms)
    }

    /// Completes `record` with its synonyms. Records without a CID are returned as they are.
    pub fn with_synonyms(&self, record: CompoundRecord) -> Result<CompoundRecord, PubChemError> {
        match record.cid {
            Some(cid) => {
                let synonyms = self.get_synonyms(cid)?;
                Ok(record.with_synonyms(synonyms))
            }
            None => Ok(record),
        }
    }

    /// Fetches `url` and decodes the JSON body. A `PUGREST.NotFound` fault gives `Ok(None)`;
    /// any other non-2xx answer, a bare 404 included, is a `Service` error.
    fn get_json(&self, url: &Url) -> Result<Option<Value>, PubChemError> {
        let response = self.client.get_text(url.as_str())?;
        debug!("HTTP {} from {}", response.status, url);
        if response.is_success() {
            return Ok(Some(serde_json::from_str(&response.body)?));
        }
        let (code, message) = parse_fault(&response.body);
        if code == FAULT_NOT_FOUND {
            debug!("not found: {}", message);
            return Ok(None);
        }
        Err(PubChemError::Service {
            status: response.status,
            code,
            message,
        })
    }
}

/// Code and message of a PUG REST fault body; non-JSON bodies become the message as they are.
pub fn parse_fault(body: &str) -> (String, String) {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        let message = body.trim();
        let message = if message.is_empty() {
            "no details given".to_string()
        } else {
            message.to_string()
        };
        return (String::new(), message);
    };
    let fault = json.get("Fault").unwrap_or(&Value::Null);
    let code = fault
        .get("Code")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let mut message = fault
        .get("Message")
        .and_then(Value::as_str)
        .unwrap_or("no details given")
        .to_string();
    if let Some(details) = fault.get("Details").and_then(Value::as_array) {
        let details: Vec<&str> = details.iter().filter_map(Value::as_str).collect();
        if !details.is_empty() {
            message = format!("{} ({})", message, details.join("; "));
        }
    }
    (code, message)
}
