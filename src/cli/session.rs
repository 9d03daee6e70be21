//! The interactive page: prompt, search, view, optional details, again.
//!
//! Each submitted line becomes its own `SearchRequest` and its own `SearchView`; nothing from one
//! search is carried into the next.

use crate::finder::CompoundFinder;
use crate::pubchem::HttpClient;
use crate::render;
use crate::utils::viewer::open_with_default_viewer;
use crate::view::{SearchRequest, SearchView};
use log::{debug, warn};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

/// Name to search for, if the input is non-empty and was submitted.
pub fn should_search(input: &str, submitted: bool) -> Option<String> {
    let name = input.trim();
    if submitted && !name.is_empty() {
        Some(name.to_string())
    } else {
        None
    }
}

enum Command {
    Quit,
    About,
    Submit(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        ":quit" | ":q" => Command::Quit,
        ":about" => Command::About,
        _ => Command::Submit(line.to_string()),
    }
}

pub struct Session<'a, C: HttpClient, R: BufRead, W: Write> {
    finder: &'a CompoundFinder<C>,
    input: R,
    output: W,
    open_images: bool,
}

impl<'a, C: HttpClient, R: BufRead, W: Write> Session<'a, C, R, W> {
    pub fn new(finder: &'a CompoundFinder<C>, input: R, output: W) -> Self {
        Self {
            finder,
            input,
            output,
            open_images: false,
        }
    }

    /// Hand structure image URLs of found compounds to the default viewer.
    pub fn open_images(mut self, open: bool) -> Self {
        self.open_images = open;
        self
    }

    /// Runs until `:quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        write!(self.output, "{}", render::render_header())?;
        write!(self.output, "{}", render::render_about())?;
        loop {
            write!(self.output, "\n{}", render::render_prompt())?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match parse_command(&line) {
                Command::Quit => break,
                Command::About => write!(self.output, "{}", render::render_about())?,
                Command::Submit(input) => {
                    // Enter is the submit action
                    let Some(name) = should_search(&input, true) else {
                        continue;
                    };
                    let view = self.search(&name)?;
                    if let Some(compound) = view.compound() {
                        if self.confirm_details()? {
                            write!(self.output, "{}", render::render_details(&compound.details))?;
                        }
                    }
                }
            }
        }
        writeln!(self.output, "\nGoodbye!")?;
        self.output.flush()
    }

    /// One search: busy line, lookup, view. Returns the view that was shown.
    pub fn search(&mut self, name: &str) -> io::Result<SearchView> {
        write!(self.output, "{}", render::render_busy(name))?;
        self.output.flush()?;
        let view = self.finder.search(&SearchRequest::new(name));
        write!(self.output, "{}", render::render_view(&view))?;
        if self.open_images {
            if let Some(image) = view.compound().and_then(|c| c.image.as_ref()) {
                if let Err(e) = open_with_default_viewer(&image.url) {
                    warn!("could not open {}: {}", image.url, e);
                }
            }
        }
        Ok(view)
    }

    fn confirm_details(&mut self) -> io::Result<bool> {
        write!(self.output, "{}", render::render_details_prompt())?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// `None` at end of input. Bytes that are not UTF-8 are replaced, never fatal.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = line {
            warn!("input line was not valid UTF-8, invalid bytes replaced");
        }
        Ok(Some(line.into_owned()))
    }
}
