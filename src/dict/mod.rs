//! The glyph dictionary document.
//!
//! On disk this is a single JSON file shaped as:
//!
//! {
//!   "glyphs": {
//!     "00": {
//!       "id": 0,
//!       "combinations": {
//!         "standard": { "meaning": "...", "tactic": "", "description": "..." },
//!         "blue":     { "meaning": "...", "tactic": "" }
//!       }
//!     },
//!     ...
//!   },
//!   "colorMeanings": {
//!     "blue": { "name": "Azul", "meaning": "...", "hex": "#3498db" },
//!     ...
//!   }
//! }
//!
//! Member order matters to the maintainers, so the in-memory form is the
//! order-preserving `serde_json::Map` at every level; only combination
//! records are ever rebuilt, everything else passes through in place.

pub mod check;
pub mod file;

pub use check::{CheckReport, check_dictionary};
pub use file::{Document, load_dictionary, save_dictionary};
