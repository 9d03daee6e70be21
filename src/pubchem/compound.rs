//! Compound records as PubChem returns them.
//!
//! A PUG REST record keeps most of its data in a `props` list of `{urn, value}` pairs and a few
//! structural members (`atoms`, `bonds`, `coords`, `count`). `CompoundRecord::from_pug_record`
//! flattens that into named fields once; every remote-sourced field is an `Option` so the
//! display layer never has to probe the JSON again.

use crate::pubchem::client::PubChemError;
use serde::Serialize;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// keys whose raw contents are replaced by an entry count in `raw_fields`
pub const BULKY_FIELDS: [&str; 4] = ["atoms", "bonds", "elements", "coordinates"];

/// (urn label, urn name, flattened key); `None` matches any name
const PROPERTY_KEYS: &[(&str, Option<&str>, &str)] = &[
    ("IUPAC Name", Some("Preferred"), "iupac_name"),
    ("Molecular Formula", None, "molecular_formula"),
    ("Molecular Weight", None, "molecular_weight"),
    ("SMILES", Some("Canonical"), "canonical_smiles"),
    ("SMILES", Some("Connectivity"), "canonical_smiles"),
    ("SMILES", Some("Isomeric"), "isomeric_smiles"),
    ("SMILES", Some("Absolute"), "isomeric_smiles"),
    ("InChI", Some("Standard"), "inchi"),
    ("InChIKey", Some("Standard"), "inchikey"),
    ("Log P", Some("XLogP3"), "xlogp"),
    ("Log P", Some("XLogP3-AA"), "xlogp"),
    ("Mass", Some("Exact"), "exact_mass"),
    ("Weight", Some("MonoIsotopic"), "monoisotopic_mass"),
    ("Topological", Some("Polar Surface Area"), "tpsa"),
    ("Compound Complexity", None, "complexity"),
    ("Count", Some("Hydrogen Bond Donor"), "h_bond_donor_count"),
    ("Count", Some("Hydrogen Bond Acceptor"), "h_bond_acceptor_count"),
    ("Count", Some("Rotatable Bond"), "rotatable_bond_count"),
    ("Fingerprint", Some("SubStructure Keys"), "fingerprint"),
];

/// PubChem delivers these as strings
const NUMERIC_STRING_KEYS: [&str; 3] = ["molecular_weight", "exact_mass", "monoisotopic_mass"];

/// (member of `count`, flattened key)
const COUNT_KEYS: &[(&str, &str)] = &[
    ("heavy_atom", "heavy_atom_count"),
    ("isotope_atom", "isotope_atom_count"),
    ("atom_chiral", "atom_stereo_count"),
    ("atom_chiral_def", "defined_atom_stereo_count"),
    ("atom_chiral_undef", "undefined_atom_stereo_count"),
    ("bond_chiral", "bond_stereo_count"),
    ("bond_chiral_def", "defined_bond_stereo_count"),
    ("bond_chiral_undef", "undefined_bond_stereo_count"),
    ("covalent_unit", "covalent_unit_count"),
];

/// One compound, built fresh for each search and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundRecord {
    /// the search key the user typed
    pub identifier: String,
    pub cid: Option<u64>,
    pub iupac_name: Option<String>,
    /// first synonym, when synonyms were fetched and there is at least one
    pub common_name: Option<String>,
    pub synonyms: Option<Vec<String>>,
    /// as PubChem wrote it, e.g. `"70.90"`; `raw_fields` carries the parsed number
    pub molecular_weight: Option<String>,
    pub molecular_formula: Option<String>,
    /// flattened record with bulky structural fields reduced to `[N entries]`
    pub raw_fields: BTreeMap<String, Value>,
}

impl CompoundRecord {
    pub fn from_pug_record(identifier: &str, record: &Value) -> Result<Self, PubChemError> {
        if !record.is_object() {
            return Err(PubChemError::MalformedResponse(
                "compound record is not a JSON object".to_string(),
            ));
        }
        let properties = raw_properties(record);
        let molecular_weight = properties.get("molecular_weight").and_then(value_text);
        let raw_fields = flatten_record(record, properties);

        let cid = raw_fields.get("cid").and_then(Value::as_u64);
        let iupac_name = string_field(&raw_fields, "iupac_name");
        let molecular_formula = string_field(&raw_fields, "molecular_formula");

        Ok(Self {
            identifier: identifier.to_string(),
            cid,
            iupac_name,
            common_name: None,
            synonyms: None,
            molecular_weight,
            molecular_formula,
            raw_fields,
        })
    }

    /// New record carrying `synonyms`; the first one becomes the common name.
    pub fn with_synonyms(self, synonyms: Option<Vec<String>>) -> Self {
        let common_name = synonyms.as_ref().and_then(|list| list.first().cloned());
        let mut raw_fields = self.raw_fields;
        if let Some(list) = &synonyms {
            raw_fields.insert(
                "synonyms".to_string(),
                Value::Array(list.iter().cloned().map(Value::String).collect()),
            );
        }
        Self {
            common_name,
            synonyms,
            raw_fields,
            ..self
        }
    }
}

fn string_field(fields: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// count placeholder shown instead of a bulky field
pub fn entries_placeholder(count: usize) -> String {
    format!("[{} entries]", count)
}

/// `props` values by flattened key, untouched
fn raw_properties(record: &Value) -> BTreeMap<&'static str, Value> {
    let mut properties = BTreeMap::new();
    let Some(props) = record.get("props").and_then(Value::as_array) else {
        return properties;
    };
    for prop in props {
        let label = prop.pointer("/urn/label").and_then(Value::as_str);
        let name = prop.pointer("/urn/name").and_then(Value::as_str);
        let Some(key) = label.and_then(|label| property_key(label, name)) else {
            continue;
        };
        // first occurrence wins, later ones are alternative spellings of the same property
        if properties.contains_key(key) {
            continue;
        }
        if let Some(value) = prop.get("value").and_then(prop_value) {
            properties.insert(key, value);
        }
    }
    properties
}

fn flatten_record(
    record: &Value,
    properties: BTreeMap<&'static str, Value>,
) -> BTreeMap<String, Value> {
    let mut fields = BTreeMap::new();

    if let Some(cid) = record.pointer("/id/id/cid") {
        fields.insert("cid".to_string(), cid.clone());
    }
    if let Some(charge) = record.get("charge") {
        fields.insert("charge".to_string(), charge.clone());
    }

    for (key, value) in properties {
        fields.insert(key.to_string(), normalize(key, value));
    }

    if let Some(count) = record.get("count") {
        for (member, key) in COUNT_KEYS {
            if let Some(value) = count.get(*member) {
                fields.insert(key.to_string(), value.clone());
            }
        }
    }

    let structural = [
        ("atoms", record.pointer("/atoms/aid")),
        ("elements", record.pointer("/atoms/element")),
        ("bonds", record.pointer("/bonds/aid1")),
        ("coordinates", record.pointer("/coords/0/conformers/0/x")),
    ];
    for (key, value) in structural {
        if let Some(entries) = value.and_then(Value::as_array) {
            fields.insert(
                key.to_string(),
                Value::String(entries_placeholder(entries.len())),
            );
        }
    }

    fields
}

fn property_key(label: &str, name: Option<&str>) -> Option<&'static str> {
    PROPERTY_KEYS
        .iter()
        .find(|(l, n, _)| *l == label && (n.is_none() || *n == name))
        .map(|(_, _, key)| *key)
}

fn prop_value(value: &Value) -> Option<Value> {
    ["sval", "fval", "ival", "binary"]
        .iter()
        .find_map(|kind| value.get(*kind))
        .cloned()
}

fn normalize(key: &str, value: Value) -> Value {
    if !NUMERIC_STRING_KEYS.contains(&key) {
        return value;
    }
    match value.as_str().map(str::trim).map(str::parse::<f64>) {
        Some(Ok(number)) => Number::from_f64(number).map(Value::Number).unwrap_or(value),
        _ => value,
    }
}
