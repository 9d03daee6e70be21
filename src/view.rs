//! What one search shows, independent of how it is drawn.
//!
//! `SearchView` is the response to one `SearchRequest`: either the compound laid out for the
//! two-column display plus the expandable details, or one of the two error banners.

use crate::pubchem::{CompoundRecord, PubChemSite};
use serde_json::Value;
use std::collections::BTreeMap;

pub const NOT_AVAILABLE: &str = "Not available";

/// one submit event
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub name: String,
}

impl SearchRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    Found(Box<CompoundView>),
    /// PubChem knows nothing under `term`
    NotFound { term: String },
    /// anything else went wrong; `message` is the error as text
    Failed { term: String, message: String },
}

impl SearchView {
    pub fn compound(&self) -> Option<&CompoundView> {
        match self {
            SearchView::Found(compound) => Some(&**compound),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchView::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructureImage {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub fields: BTreeMap<String, Value>,
    /// compound page on the PubChem site
    pub link: Option<String>,
}

/// Display strings of a found compound. Left column: names, weight, formula. Right column: CID and image.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundView {
    pub term: String,
    pub iupac_name: String,
    pub common_name: String,
    pub molecular_weight: String,
    pub molecular_formula: String,
    pub cid: Option<u64>,
    pub image: Option<StructureImage>,
    pub details: DetailsView,
}

impl CompoundView {
    pub fn from_record(record: &CompoundRecord, site: &PubChemSite) -> Self {
        let image = record.cid.map(|cid| StructureImage {
            url: site.image_url(cid),
            caption: format!("Structure of {}", record.identifier),
        });
        Self {
            term: record.identifier.clone(),
            iupac_name: or_not_available(record.iupac_name.clone()),
            common_name: or_not_available(record.common_name.clone()),
            molecular_weight: or_not_available(record.molecular_weight.clone()),
            molecular_formula: or_not_available(record.molecular_formula.clone()),
            cid: record.cid,
            image,
            details: DetailsView {
                fields: record.raw_fields.clone(),
                link: record.cid.map(|cid| site.compound_url(cid)),
            },
        }
    }
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pubchem::fixtures::{aspirin_record, water_record_without_props};

    fn aspirin() -> CompoundRecord {
        CompoundRecord::from_pug_record("Aspirin", &aspirin_record())
            .unwrap()
            .with_synonyms(Some(vec!["aspirin".to_string()]))
    }

    #[test]
    fn test_aspirin_view() {
        let view = CompoundView::from_record(&aspirin(), &PubChemSite::default());
        assert_eq!(view.iupac_name, "2-acetyloxybenzoic acid");
        assert_eq!(view.molecular_formula, "C9H8O4");
        assert_eq!(view.molecular_weight, "180.16");
        assert_eq!(view.common_name, "aspirin");
        assert_eq!(view.cid, Some(2244));
        let image = view.image.unwrap();
        assert_eq!(
            image.url,
            "https://pubchem.ncbi.nlm.nih.gov/image/imgsrv.fcgi?cid=2244&t=l"
        );
        assert_eq!(image.caption, "Structure of Aspirin");
        assert_eq!(
            view.details.link.as_deref(),
            Some("https://pubchem.ncbi.nlm.nih.gov/compound/2244")
        );
    }

    #[test]
    fn test_absent_fields_are_not_available() {
        let record = CompoundRecord::from_pug_record("water", &water_record_without_props())
            .unwrap()
            .with_synonyms(None);
        let view = CompoundView::from_record(&record, &PubChemSite::default());
        assert_eq!(view.iupac_name, NOT_AVAILABLE);
        assert_eq!(view.common_name, NOT_AVAILABLE);
        assert_eq!(view.molecular_weight, NOT_AVAILABLE);
        assert_eq!(view.molecular_formula, NOT_AVAILABLE);
    }

    #[test]
    fn test_weight_shown_as_sent() {
        let record = serde_json::json!({
            "id": {"id": {"cid": 24526}},
            "props": [
                {"urn": {"label": "Molecular Weight"}, "value": {"sval": "70.90"}}
            ]
        });
        let record = CompoundRecord::from_pug_record("Chlorine", &record).unwrap();
        let view = CompoundView::from_record(&record, &PubChemSite::default());
        assert_eq!(view.molecular_weight, "70.90");
    }

    #[test]
    fn test_no_cid_no_image_no_link() {
        let record =
            CompoundRecord::from_pug_record("mystery", &serde_json::json!({"props": []})).unwrap();
        let view = CompoundView::from_record(&record, &PubChemSite::default());
        assert!(view.cid.is_none());
        assert!(view.image.is_none());
        assert!(view.details.link.is_none());
    }

    #[test]
    fn test_search_view_accessors() {
        let found = SearchView::Found(Box::new(CompoundView::from_record(
            &aspirin(),
            &PubChemSite::default(),
        )));
        assert!(found.is_found());
        assert!(found.compound().is_some());

        let missing = SearchView::NotFound {
            term: "xyz".to_string(),
        };
        assert!(!missing.is_found());
        assert!(missing.compound().is_none());

        let failed = SearchView::Failed {
            term: "abc".to_string(),
            message: "boom".to_string(),
        };
        assert!(!failed.is_found());
        assert!(failed.compound().is_none());
    }
}
