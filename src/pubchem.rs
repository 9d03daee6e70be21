/// HTTP side of the PubChem PUG REST service: URLs, transport, faults
pub mod client;
/// compound records decoded from PUG REST JSON
pub mod compound;
/// links to images and pages of the PubChem web site
pub mod site;

#[cfg(test)]
pub(crate) mod fixtures;

pub use client::{HttpClient, HttpResponse, PubChemClient, PubChemError};
pub use compound::CompoundRecord;
pub use site::PubChemSite;
