//! canned PUG REST payloads and a scripted HTTP client shared by the unit tests
use crate::pubchem::client::{HttpClient, HttpResponse, PubChemError};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;

pub const API_BASE: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";
pub const ASPIRIN_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/Aspirin/JSON";
pub const ASPIRIN_SYNONYMS_URL: &str =
    "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/cid/2244/synonyms/JSON";
pub const UNKNOWN_URL: &str =
    "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/not-a-real-chemical-xyz/JSON";

const ASPIRIN_RECORD: &str = r#"{
    "id": {"id": {"cid": 2244}},
    "atoms": {
        "aid": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21],
        "element": [8, 8, 8, 8, 6, 6, 6, 6, 6, 6, 6, 6, 6, 1, 1, 1, 1, 1, 1, 1, 1]
    },
    "bonds": {
        "aid1": [1, 1, 2, 2, 3, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 10, 11, 12, 13, 13, 13],
        "aid2": [5, 12, 11, 21, 11, 12, 6, 7, 8, 11, 9, 14, 10, 15, 16, 17, 18, 19, 20, 21, 18],
        "order": [1, 1, 1, 1, 2, 2, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]
    },
    "coords": [{
        "type": [1, 5, 255],
        "aids": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21],
        "conformers": [{
            "x": [3.7320, 6.3301, 4.5981, 2.8660, 4.5981, 5.4641, 4.5981, 6.3301, 5.4641,
                  6.3301, 5.4641, 2.8660, 2.0000, 4.0611, 6.8671, 5.4641, 6.8671, 2.3100,
                  1.4631, 1.6900, 5.9951],
            "y": [-0.0600, 1.4400, 1.4400, -1.5600, -0.5600, -0.0600, -1.5600, -0.5600,
                  -2.0600, -1.5600, 0.9400, -0.5600, -0.0600, -1.8700, -0.2500, -2.6800,
                  -1.8700, 0.4769, -0.3700, -0.3700, 2.3700]
        }]
    }],
    "charge": 0,
    "props": [
        {"urn": {"label": "Compound Complexity", "name": "", "datatype": 7}, "value": {"fval": 212}},
        {"urn": {"label": "Count", "name": "Hydrogen Bond Acceptor"}, "value": {"ival": 4}},
        {"urn": {"label": "Count", "name": "Hydrogen Bond Donor"}, "value": {"ival": 1}},
        {"urn": {"label": "Count", "name": "Rotatable Bond"}, "value": {"ival": 3}},
        {"urn": {"label": "IUPAC Name", "name": "Systematic"}, "value": {"sval": "2-(acetyl)oxybenzoic acid"}},
        {"urn": {"label": "IUPAC Name", "name": "Preferred"}, "value": {"sval": "2-acetyloxybenzoic acid"}},
        {"urn": {"label": "InChI", "name": "Standard"},
         "value": {"sval": "InChI=1S/C9H8O4/c1-6(10)13-8-5-3-2-4-7(8)9(11)12/h2-5H,1H3,(H,11,12)"}},
        {"urn": {"label": "InChIKey", "name": "Standard"}, "value": {"sval": "BSYNRYMUTXBXSQ-UHFFFAOYSA-N"}},
        {"urn": {"label": "Log P", "name": "XLogP3"}, "value": {"fval": 1.2}},
        {"urn": {"label": "Mass", "name": "Exact"}, "value": {"sval": "180.04225873"}},
        {"urn": {"label": "Molecular Formula"}, "value": {"sval": "C9H8O4"}},
        {"urn": {"label": "Molecular Weight"}, "value": {"sval": "180.16"}},
        {"urn": {"label": "SMILES", "name": "Absolute"}, "value": {"sval": "CC(=O)OC1=CC=CC=C1C(=O)O"}},
        {"urn": {"label": "SMILES", "name": "Connectivity"}, "value": {"sval": "CC(=O)OC1=CC=CC=C1C(=O)O"}},
        {"urn": {"label": "Topological", "name": "Polar Surface Area"}, "value": {"fval": 63.6}},
        {"urn": {"label": "Weight", "name": "MonoIsotopic"}, "value": {"sval": "180.04225873"}}
    ],
    "count": {
        "heavy_atom": 13,
        "atom_chiral": 0,
        "atom_chiral_def": 0,
        "atom_chiral_undef": 0,
        "bond_chiral": 0,
        "bond_chiral_def": 0,
        "bond_chiral_undef": 0,
        "isotope_atom": 0,
        "covalent_unit": 1,
        "tautomers": -1
    }
}"#;

pub fn aspirin_record() -> Value {
    serde_json::from_str(ASPIRIN_RECORD).expect("aspirin fixture is valid JSON")
}

/// a record that carries structure but no computed properties
pub fn water_record_without_props() -> Value {
    json!({
        "id": {"id": {"cid": 962}},
        "atoms": {"aid": [1, 2, 3], "element": [8, 1, 1]},
        "charge": 0
    })
}

pub fn compounds_body(records: Vec<Value>) -> String {
    json!({ "PC_Compounds": records }).to_string()
}

pub fn aspirin_body() -> String {
    compounds_body(vec![aspirin_record()])
}

pub fn aspirin_synonyms_body() -> String {
    json!({
        "InformationList": {
            "Information": [{
                "CID": 2244,
                "Synonym": ["aspirin", "ACETYLSALICYLIC ACID", "50-78-2", "2-Acetoxybenzoic acid"]
            }]
        }
    })
    .to_string()
}

pub fn not_found_body() -> String {
    json!({
        "Fault": {
            "Code": "PUGREST.NotFound",
            "Message": "No CID found",
            "Details": ["No CID found that matches the given name"]
        }
    })
    .to_string()
}

/// HTTP client answering from a table of canned responses and recording every request
#[derive(Default)]
pub struct MockHttpClient {
    responses: HashMap<String, Result<HttpResponse, String>>,
    pub requests: RefCell<Vec<String>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock_response(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .insert(url.to_string(), Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn mock_failure(mut self, url: &str, message: &str) -> Self {
        self.responses
            .insert(url.to_string(), Err(message.to_string()));
        self
    }

    /// aspirin record plus its synonyms, the happy path most tests start from
    pub fn with_aspirin(self) -> Self {
        self.mock_response(ASPIRIN_URL, 200, aspirin_body())
            .mock_response(ASPIRIN_SYNONYMS_URL, 200, aspirin_synonyms_body())
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpClient for MockHttpClient {
    fn get_text(&self, url: &str) -> Result<HttpResponse, PubChemError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.get(url) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(PubChemError::Transport(message.clone())),
            None => Err(PubChemError::Transport(format!("no route to {}", url))),
        }
    }
}
