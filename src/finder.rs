//! # Compound Finder
//!
//! Runs one search: looks the name up in PubChem, keeps the first candidate, completes it with
//! its synonyms and turns the outcome into a `SearchView`. Every error stops here and becomes
//! either the not-found view or the failure view, so callers never see a `PubChemError`.
//!
//! The first candidate is taken as it is; PubChem's order is the only ranking.

use crate::pubchem::{CompoundRecord, HttpClient, PubChemClient, PubChemError, PubChemSite};
use crate::settings::FinderSettings;
use crate::view::{CompoundView, SearchRequest, SearchView};
use log::{info, warn};
use reqwest::blocking::Client;
use std::time::Duration;

pub struct CompoundFinder<C: HttpClient> {
    client: PubChemClient<C>,
    site: PubChemSite,
    fetch_synonyms: bool,
}

impl CompoundFinder<Client> {
    /// Finder over a reqwest client configured from `settings`.
    pub fn from_settings(settings: &FinderSettings) -> Result<Self, PubChemError> {
        let client = PubChemClient::with_timeout(
            &settings.api_base_url,
            Duration::from_secs(settings.timeout_secs),
        )?;
        Ok(Self::new(client, settings))
    }
}

impl<C: HttpClient> CompoundFinder<C> {
    pub fn new(client: PubChemClient<C>, settings: &FinderSettings) -> Self {
        Self {
            client,
            site: PubChemSite::new(&settings.site_base_url, &settings.image_size),
            fetch_synonyms: settings.fetch_synonyms,
        }
    }

    pub fn search(&self, request: &SearchRequest) -> SearchView {
        let term = request.name.clone();
        match self.lookup(&request.name) {
            Ok(record) => {
                info!("found '{}' as CID {:?}", term, record.cid);
                SearchView::Found(Box::new(CompoundView::from_record(&record, &self.site)))
            }
            Err(PubChemError::NotFound) => {
                info!("nothing found for '{}'", term);
                SearchView::NotFound { term }
            }
            Err(e) => {
                warn!("search for '{}' failed: {}", term, e);
                SearchView::Failed {
                    term,
                    message: e.to_string(),
                }
            }
        }
    }

    /// First candidate for `name`, with synonyms when enabled.
    pub fn lookup(&self, name: &str) -> Result<CompoundRecord, PubChemError> {
        let first = self
            .client
            .get_compounds(name)?
            .into_iter()
            .next()
            .ok_or(PubChemError::NotFound)?;
        if self.fetch_synonyms {
            self.client.with_synonyms(first)
        } else {
            Ok(first)
        }
    }
}
