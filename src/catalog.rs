//! # Interval Catalog
//!
//! Named chords and scales, grouped by category, with a flat name lookup.
//!
//! ## Data
//! Catalogs are YAML documents: a list of categories, each with an ordered
//! list of entries. Intervals are semitone offsets above the root and may be
//! compound (14 for a 9th), so they are reduced modulo 12 before matching.
//!
//! ```yaml
//! - category: "TRIADS (3 notes)"
//!   entries:
//!     - name: "Major"
//!       intervals: [0, 4, 7]
//! ```
//!
//! Two variants are embedded: [`CatalogVariant::Standard`] and
//! [`CatalogVariant::Classic`]. They differ only in their Japanese scale
//! entries. Any other catalog can be loaded with [`Catalog::from_yaml`].
//!
//! ## Example
//! ```rust
//! use fretboard::Catalog;
//!
//! let catalog = Catalog::standard();
//! assert_eq!(catalog.lookup("Major").unwrap().offsets(), &[0, 4, 7]);
//! assert!(catalog.lookup("Major 42nd").is_none());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::error::FretboardError;

const STANDARD_YAML: &str = include_str!("../catalogs/standard.yaml");
const CLASSIC_YAML: &str = include_str!("../catalogs/classic.yaml");

static STANDARD: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_yaml(STANDARD_YAML).expect("embedded standard catalog is valid"));
static CLASSIC: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_yaml(CLASSIC_YAML).expect("embedded classic catalog is valid"));

/// Semitone offsets above a root. The first offset is always 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntervalSet(Vec<u8>);

impl IntervalSet {
    pub fn new(offsets: Vec<u8>) -> Result<Self, FretboardError> {
        match offsets.first() {
            Some(0) => Ok(IntervalSet(offsets)),
            Some(first) => Err(FretboardError::CatalogError(format!(
                "interval set must start at 0, found {}",
                first
            ))),
            None => Err(FretboardError::CatalogError(
                "interval set must not be empty".to_string(),
            )),
        }
    }

    pub fn offsets(&self) -> &[u8] {
        &self.0
    }

    /// Offsets reduced modulo 12, duplicates collapsed.
    pub fn pitch_class_set(&self) -> BTreeSet<u8> {
        reduce_to_pitch_class_set(&self.0)
    }
}

/// Reduce semitone offsets to the set of pitch-class distances in `0..12`.
///
/// ```rust
/// use fretboard::catalog::reduce_to_pitch_class_set;
///
/// let set = reduce_to_pitch_class_set(&[0, 4, 7, 12, 14]);
/// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![0, 2, 4, 7]);
/// ```
pub fn reduce_to_pitch_class_set(offsets: &[u8]) -> BTreeSet<u8> {
    offsets.iter().map(|offset| offset % 12).collect()
}

/// A named chord or scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub intervals: IntervalSet,
    /// Presentation only, never used for matching.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}

/// One row of a grouped chord selector.
///
/// `value` is `None` for the blank row and for category headers; picking
/// either means "no chord".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOption {
    pub label: String,
    pub value: Option<String>,
    pub depth: u8,
}

/// Which embedded catalog to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    #[default]
    Standard,
    Classic,
}

impl CatalogVariant {
    pub fn catalog(self) -> &'static Catalog {
        match self {
            CatalogVariant::Standard => &*STANDARD,
            CatalogVariant::Classic => &*CLASSIC,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    category: String,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    intervals: Vec<u8>,
}

/// Immutable chord/scale catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    index: HashMap<String, (usize, usize)>,
}

impl Catalog {
    /// The default catalog.
    pub fn standard() -> &'static Catalog {
        CatalogVariant::Standard.catalog()
    }

    /// The earlier catalog with a single pentatonic "Japanese Scale".
    pub fn classic() -> &'static Catalog {
        CatalogVariant::Classic.catalog()
    }

    /// Parse and validate a catalog from YAML.
    ///
    /// Entry names must be unique across all categories.
    pub fn from_yaml(source: &str) -> Result<Catalog, FretboardError> {
        let raw: Vec<RawCategory> = serde_yaml::from_str(source)
            .map_err(|e| FretboardError::CatalogError(e.to_string()))?;

        let mut categories = Vec::with_capacity(raw.len());
        let mut index = HashMap::new();

        for (cat_idx, raw_category) in raw.into_iter().enumerate() {
            let mut entries = Vec::with_capacity(raw_category.entries.len());
            for (entry_idx, raw_entry) in raw_category.entries.into_iter().enumerate() {
                let intervals = IntervalSet::new(raw_entry.intervals).map_err(|e| match e {
                    FretboardError::CatalogError(msg) => {
                        FretboardError::CatalogError(format!("'{}': {}", raw_entry.name, msg))
                    }
                    other => other,
                })?;
                if index.insert(raw_entry.name.clone(), (cat_idx, entry_idx)).is_some() {
                    return Err(FretboardError::CatalogError(format!(
                        "duplicate entry name '{}'",
                        raw_entry.name
                    )));
                }
                entries.push(CatalogEntry {
                    name: raw_entry.name,
                    intervals,
                    category: raw_category.category.clone(),
                });
            }
            categories.push(Category {
                name: raw_category.category,
                entries,
            });
        }

        Ok(Catalog { categories, index })
    }

    /// Intervals for an exact entry name.
    pub fn lookup(&self, name: &str) -> Option<&IntervalSet> {
        self.entry(name).map(|entry| &entry.intervals)
    }

    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        let &(cat_idx, entry_idx) = self.index.get(name)?;
        self.categories.get(cat_idx)?.entries.get(entry_idx)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All entries in presentation order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.categories.iter().flat_map(|category| category.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Rows for a grouped selector: a blank row, then each category header
    /// followed by its entries one level deeper.
    pub fn option_list(&self) -> Vec<CatalogOption> {
        let mut options = vec![CatalogOption {
            label: String::new(),
            value: None,
            depth: 0,
        }];
        for category in &self.categories {
            options.push(CatalogOption {
                label: category.name.clone(),
                value: None,
                depth: 0,
            });
            options.extend(category.entries.iter().map(|entry| CatalogOption {
                label: entry.name.clone(),
                value: Some(entry.name.clone()),
                depth: 1,
            }));
        }
        options
    }
}
