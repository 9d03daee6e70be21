//! Terminal rendering of the page: header, About panel, search views and the details section.
//!
//! Everything here returns `String`s so the session decides where they go.
/* colors
Blue (\x1b[34m) - title and section headings
Yellow (\x1b[33m) - About panel
Red (\x1b[31m) - error banners
Cyan (\x1b[36m) - prompts
Reset (\x1b[0m) - back to normal after each colored section
*/
use crate::view::{CompoundView, DetailsView, SearchView};
use prettytable::{Cell, Row, Table};

pub const TITLE: &str = "Chemical Formula Finder";
pub const PROMPT: &str = "Enter chemical name";
pub const PLACEHOLDER: &str = "e.g., Methane, Aspirin, Caffeine";
pub const DETAILS_PROMPT: &str = "Show more details? [y/N]";

const BLUE: &str = "\x1b[34m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

pub fn render_header() -> String {
    format!(
        "{BLUE}\n {TITLE}\n{RESET}\
         This app lets you search for chemical information in PubChem.\n\
         Enter a chemical name to find its formula, IUPAC name, and other details.\n\
         Type the name and press Enter to Search.\n"
    )
}

pub fn render_about() -> String {
    format!(
        "{YELLOW}About\n\
         This app uses the PubChem PUG REST API to retrieve chemical information\n\
         from the PubChem database maintained by the National Institutes of Health.\n\
         Installation: cargo install chemfinder\n\
         Commands: :about shows this panel, :quit leaves{RESET}\n"
    )
}

pub fn render_prompt() -> String {
    format!("{CYAN}{PROMPT} ({PLACEHOLDER}): {RESET}")
}

pub fn render_details_prompt() -> String {
    format!("{CYAN}{DETAILS_PROMPT} {RESET}")
}

pub fn render_busy(name: &str) -> String {
    format!("Searching for {}...\n", name)
}

pub fn render_view(view: &SearchView) -> String {
    match view {
        SearchView::Found(compound) => render_compound(compound),
        SearchView::NotFound { term } => render_not_found(term),
        SearchView::Failed { message, .. } => render_failure(message),
    }
}

/// Heading plus the two-column table.
pub fn render_compound(compound: &CompoundView) -> String {
    let left = format!(
        "IUPAC Name: {}\nCommon Name: {}\nMolecular Weight: {}\nFormula: {}",
        compound.iupac_name,
        compound.common_name,
        compound.molecular_weight,
        compound.molecular_formula
    );
    let right = match (compound.cid, &compound.image) {
        (Some(cid), Some(image)) => {
            format!("PubChem CID: {}\n{}:\n{}", cid, image.caption, image.url)
        }
        (Some(cid), None) => format!("PubChem CID: {}", cid),
        _ => String::new(),
    };

    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new(&left), Cell::new(&right)]));
    format!("{BLUE}Chemical Information{RESET}\n{}", table)
}

/// The expandable section: the raw record as JSON and the link to the compound page.
pub fn render_details(details: &DetailsView) -> String {
    let json = serde_json::to_string_pretty(&details.fields)
        .unwrap_or_else(|e| format!("<record could not be printed: {}>", e));
    let mut out = format!("{BLUE}More Details{RESET}\n{}\n", json);
    if let Some(link) = &details.link {
        out.push_str(&format!("View on PubChem: {}\n", link));
    }
    out
}

pub fn render_not_found(term: &str) -> String {
    format!(
        "{RED}No information found for '{}'.{RESET}\n\
         Possible reasons:\n\
         - The chemical name may be misspelled\n\
         - The compound may not be in the PubChem database\n\
         - Try using a more common name or the IUPAC name\n",
        term
    )
}

pub fn render_failure(message: &str) -> String {
    format!(
        "{RED}An error occurred: {}{RESET}\n\
         Please try again or search for a different chemical.\n",
        message
    )
}
