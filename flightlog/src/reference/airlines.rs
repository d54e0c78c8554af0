use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

pub const LOGO_VARIANT: &str = "logo";
pub const LOGO_MONO_VARIANT: &str = "logo_mono";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(rename = "variations", alias = "variants", default)]
    pub variants: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineEntry {
    #[serde(rename = "icao", alias = "code")]
    pub code: String,
    #[serde(rename = "name", alias = "display_name")]
    pub display_name: String,
    pub branding: Branding,
}

impl AirlineEntry {
    /// Lowercased display name with spaces replaced by hyphens, e.g. `Jet Star` -> `jet-star`.
    pub fn slug(&self) -> String {
        self.display_name.replace(' ', "-").to_lowercase()
    }

    /// The full-colour logo wins over the monochrome one; `None` when neither is available.
    pub fn icon_path(&self) -> Option<String> {
        let variants = &self.branding.variants;
        if variants.contains(LOGO_VARIANT) {
            Some(format!("{}.svg", self.slug()))
        } else if variants.contains(LOGO_MONO_VARIANT) {
            Some(format!("{}_mono.svg", self.slug()))
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct AirlineDirectory {
    airlines: HashMap<String, AirlineEntry>,
}

impl AirlineDirectory {
    pub fn build(entries: impl IntoIterator<Item = AirlineEntry>) -> Self {
        let airlines: HashMap<_, _> = entries
            .into_iter()
            .map(|airline| (airline.code.clone(), airline))
            .collect();
        debug!(airlines = airlines.len(), "built airline directory");
        Self { airlines }
    }

    pub fn lookup(&self, code: &str) -> Option<&AirlineEntry> {
        self.airlines.get(code)
    }

    pub fn len(&self) -> usize {
        self.airlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airlines.is_empty()
    }
}
