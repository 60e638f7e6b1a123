//! Puzzle input resolution

use crate::config::ExplicitInput;
use crate::error::{ArcInputError, InputError};
use std::borrow::Cow;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Resolves the input text for each (year, day).
///
/// Lookup order: the explicit input (if any), then
/// `{input_dir}/{year}/day{DD}.txt`, then the solver's embedded input.
pub struct InputStore {
    input_dir: PathBuf,
    explicit: Option<String>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            explicit: None,
        }
    }

    /// Use `input` for every lookup instead of the input directory
    pub fn with_explicit(mut self, input: String) -> Self {
        self.explicit = Some(input);
        self
    }

    /// Get the file path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Load the input for `year`/`day`, falling back to `embedded`
    pub fn load(
        &self,
        year: u16,
        day: u8,
        embedded: Option<&'static str>,
    ) -> Result<Cow<'_, str>, ArcInputError> {
        let input = self.lookup(year, day, embedded)?;
        if input.trim().is_empty() {
            return Err(InputError::Empty { year, day }.into());
        }
        Ok(input)
    }

    fn lookup(
        &self,
        year: u16,
        day: u8,
        embedded: Option<&'static str>,
    ) -> Result<Cow<'_, str>, InputError> {
        if let Some(input) = &self.explicit {
            debug!(year, day, "using explicit input");
            return Ok(Cow::Borrowed(input.as_str()));
        }

        let path = self.input_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(year, day, path = %path.display(), "read input file");
                return Ok(Cow::Owned(content));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(InputError::Read { path, source }),
        }

        match embedded {
            Some(input) => {
                debug!(year, day, "using embedded input");
                Ok(Cow::Borrowed(input))
            }
            None => {
                warn!(year, day, path = %path.display(), "no input file");
                Err(InputError::Missing { year, day, path })
            }
        }
    }
}

/// Read an explicitly requested input from a file or stdin
pub fn read_explicit(source: &ExplicitInput) -> Result<String, ArcInputError> {
    match source {
        ExplicitInput::Stdin => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(InputError::Stdin)?;
            Ok(input)
        }
        ExplicitInput::File(path) => fs::read_to_string(path).map_err(|source| {
            InputError::Read {
                path: path.clone(),
                source,
            }
            .into()
        }),
    }
}
