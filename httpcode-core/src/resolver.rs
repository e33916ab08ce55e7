// Layered description lookup: user overrides shadow the parsed baseline

use crate::code::{DescriptionMap, StatusCode};
use crate::error::{Result, StatusError};
use crate::store::Store;
use httpcode_extract::{StatusMap, extract_file_lossy, extract_lossy};
use std::path::PathBuf;
use tracing::{info, warn};

const BUNDLED_HTML: &str = include_str!("../assets/status-codes.html");

/// Where the baseline is derived from when none is cached.
#[derive(Debug, Clone, Default)]
pub enum BaselineSource {
    /// The status code document compiled into the binary
    #[default]
    Bundled,
    /// An HTML document on disk
    File(PathBuf),
}

impl BaselineSource {
    pub fn label(&self) -> String {
        match self {
            BaselineSource::Bundled => "bundled status code document".to_string(),
            BaselineSource::File(path) => path.display().to_string(),
        }
    }

    /// Parse the source into a baseline. Failures are logged and yield an empty map.
    pub fn derive(&self) -> DescriptionMap {
        let raw = match self {
            BaselineSource::Bundled => extract_lossy(BUNDLED_HTML),
            BaselineSource::File(path) => extract_file_lossy(path),
        };
        into_description_map(raw)
    }
}

fn into_description_map(raw: StatusMap) -> DescriptionMap {
    raw.into_iter()
        .filter_map(|(code, description)| match code.parse::<StatusCode>() {
            Ok(code) => Some((code, description)),
            Err(_) => {
                warn!("Discarding extracted entry with malformed code {:?}", code);
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Baseline,
    Override,
}

/// The effective description of one code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub code: StatusCode,
    pub description: &'a str,
    pub origin: Origin,
}

pub struct Descriptions {
    store: Store,
    baseline: DescriptionMap,
    overrides: DescriptionMap,
    baseline_created: bool,
}

impl Descriptions {
    /// Load both maps from `store`, deriving and saving the baseline first if
    /// none is cached.
    pub fn open(store: Store, source: &BaselineSource) -> Result<Self> {
        let mut baseline = store.load_baseline();
        let mut baseline_created = false;

        if baseline.is_empty() {
            info!("No cached baseline, parsing {}", source.label());
            baseline = source.derive();
            if baseline.is_empty() {
                return Err(StatusError::Parse(format!(
                    "no status codes found in {}",
                    source.label()
                )));
            }
            store.save_baseline(&baseline)?;
            baseline_created = true;
            info!(
                "Saved {} baseline descriptions to {}",
                baseline.len(),
                store.baseline_path().display()
            );
        }

        let mut overrides = store.load_overrides();
        overrides.retain(|code, _| {
            let known = baseline.contains_key(code);
            if !known {
                warn!("Ignoring custom description for unknown code {}", code);
            }
            known
        });

        Ok(Self {
            store,
            baseline,
            overrides,
            baseline_created,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Whether [`Descriptions::open`] had to derive the baseline.
    pub fn baseline_created(&self) -> bool {
        self.baseline_created
    }

    pub fn baseline_len(&self) -> usize {
        self.baseline.len()
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn has_override(&self, code: &str) -> bool {
        self.overrides.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Result<Resolved<'_>> {
        let code: StatusCode = code.parse()?;

        if let Some(description) = self.overrides.get(&code) {
            return Ok(Resolved {
                code,
                description,
                origin: Origin::Override,
            });
        }

        match self.baseline.get(&code) {
            Some(description) => Ok(Resolved {
                code,
                description,
                origin: Origin::Baseline,
            }),
            None => Err(StatusError::CodeNotFound(code.to_string())),
        }
    }

    /// Every baseline code with its effective description, ordered by code.
    pub fn entries(&self) -> impl Iterator<Item = Resolved<'_>> + '_ {
        self.baseline.iter().map(|(code, baseline)| {
            let (description, origin) = match self.overrides.get(code) {
                Some(custom) => (custom.as_str(), Origin::Override),
                None => (baseline.as_str(), Origin::Baseline),
            };
            Resolved {
                code: code.clone(),
                description,
                origin,
            }
        })
    }

    /// Override the description of a code present in the baseline.
    pub fn set(&mut self, code: &str, description: impl Into<String>) -> Result<()> {
        let code: StatusCode = code.parse()?;
        if !self.baseline.contains_key(&code) {
            return Err(StatusError::CodeNotFound(code.to_string()));
        }

        let previous = self.overrides.insert(code.clone(), description.into());
        if let Err(e) = self.store.save_overrides(&self.overrides) {
            match previous {
                Some(previous) => self.overrides.insert(code, previous),
                None => self.overrides.remove(&code),
            };
            return Err(e);
        }

        info!("Custom description set for {}", code);
        Ok(())
    }

    /// Drop the override for `code`. Returns `false` if there was none.
    pub fn reset(&mut self, code: &str) -> Result<bool> {
        let code: StatusCode = code.parse()?;

        let Some(previous) = self.overrides.remove(&code) else {
            return Ok(false);
        };
        if let Err(e) = self.store.save_overrides(&self.overrides) {
            self.overrides.insert(code, previous);
            return Err(e);
        }

        info!("Custom description for {} reset", code);
        Ok(true)
    }

    /// Drop every override. Returns how many were removed.
    pub fn reset_all(&mut self) -> Result<usize> {
        let previous = std::mem::take(&mut self.overrides);
        if let Err(e) = self.store.save_overrides(&self.overrides) {
            self.overrides = previous;
            return Err(e);
        }

        info!("Reset {} custom descriptions", previous.len());
        Ok(previous.len())
    }

    /// Re-derive the baseline from `source`, replacing the cached one.
    ///
    /// Overrides whose code disappeared from the new baseline are dropped.
    /// Returns the number of codes in the new baseline.
    pub fn rebuild_baseline(&mut self, source: &BaselineSource) -> Result<usize> {
        let baseline = source.derive();
        if baseline.is_empty() {
            return Err(StatusError::Parse(format!(
                "no status codes found in {}",
                source.label()
            )));
        }
        self.store.save_baseline(&baseline)?;

        // From here on memory mirrors the new baseline on disk. Stray overrides
        // left in the file by a failed save are dropped again on the next open.
        self.baseline = baseline;
        self.baseline_created = true;

        let before = self.overrides.len();
        let baseline = &self.baseline;
        self.overrides.retain(|code, _| baseline.contains_key(code));
        if self.overrides.len() != before {
            warn!(
                "Dropping {} custom descriptions for codes no longer in the baseline",
                before - self.overrides.len()
            );
            self.store.save_overrides(&self.overrides)?;
        }

        info!("Rebuilt baseline with {} codes", self.baseline.len());
        Ok(self.baseline.len())
    }
}
