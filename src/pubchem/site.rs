//! Links into the PubChem web site: structure images and compound pages.
//! Both are only handed to the terminal (or a viewer), never fetched by the crate.

pub const DEFAULT_SITE_BASE: &str = "https://pubchem.ncbi.nlm.nih.gov";
/// `l` is the large rendering of the image service
pub const DEFAULT_IMAGE_SIZE: &str = "l";

#[derive(Debug, Clone, PartialEq)]
pub struct PubChemSite {
    base: String,
    image_size: String,
}

impl Default for PubChemSite {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_BASE, DEFAULT_IMAGE_SIZE)
    }
}

impl PubChemSite {
    pub fn new(base: &str, image_size: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            image_size: image_size.to_string(),
        }
    }

    pub fn image_url(&self, cid: u64) -> String {
        format!(
            "{}/image/imgsrv.fcgi?cid={}&t={}",
            self.base, cid, self.image_size
        )
    }

    pub fn compound_url(&self, cid: u64) -> String {
        format!("{}/compound/{}", self.base, cid)
    }
}
