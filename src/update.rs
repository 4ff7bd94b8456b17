//! The tactic insertion pass.
//!
//! Every combination record is rebuilt so its members read: `meaning` (if
//! present), `tactic` (always, empty), `description` (if present), then
//! every remaining member in its original relative order. Nothing else in
//! the document moves.

use crate::Result;
use anyhow::bail;
use serde_json::{Map, Value};

/// What an update pass rewrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub glyphs: usize,
    pub combinations: usize,
}

/// Rebuild one combination record in the required member order.
///
/// A pre-existing `tactic` value is dropped: the field always comes back
/// empty. The planned names live in the reference table and are not
/// applied here.
pub fn rewrite_combination(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut rebuilt = Map::new();

    if let Some(meaning) = fields.get("meaning") {
        rebuilt.insert("meaning".to_string(), meaning.clone());
    }

    rebuilt.insert("tactic".to_string(), Value::String(String::new()));

    if let Some(description) = fields.get("description") {
        rebuilt.insert("description".to_string(), description.clone());
    }

    for (key, value) in fields {
        if key == "meaning" || key == "tactic" || key == "description" {
            continue;
        }
        rebuilt.insert(key.clone(), value.clone());
    }

    rebuilt
}

/// Walk `glyphs` and rewrite every combination record in place.
///
/// A document without a `glyphs` member and a glyph without `combinations`
/// are fine (nothing to do). Either of those present with a non-object
/// value is an error, as is a non-object glyph or combination. The summary
/// counts rebuilt combinations and the glyphs that held them; a glyph with
/// nothing to rewrite adds to neither count.
pub fn insert_tactic_fields(doc: &mut Map<String, Value>) -> Result<UpdateSummary> {
    let mut summary = UpdateSummary::default();

    let glyphs = match doc.get_mut("glyphs") {
        Some(value) => value,
        None => return Ok(summary),
    };
    let Value::Object(glyphs) = glyphs else {
        bail!("glyphs is not an object");
    };

    for (glyph_key, glyph) in glyphs.iter_mut() {
        let Value::Object(glyph) = glyph else {
            bail!("glyph {glyph_key:?} is not an object");
        };

        let combinations = match glyph.get_mut("combinations") {
            Some(value) => value,
            None => continue,
        };
        let Value::Object(combinations) = combinations else {
            bail!("glyph {glyph_key:?}: combinations is not an object");
        };

        let mut rewritten = 0usize;
        for (combo_key, combo) in combinations.iter_mut() {
            let Value::Object(fields) = combo else {
                bail!("glyph {glyph_key:?}: combination {combo_key:?} is not an object");
            };
            let rebuilt = rewrite_combination(fields);
            *fields = rebuilt;
            rewritten += 1;
        }

        if rewritten > 0 {
            summary.glyphs += 1;
            summary.combinations += rewritten;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::{UpdateSummary, insert_tactic_fields, rewrite_combination};
    use pretty_assertions::assert_eq;
    use serde_json::{Map, Value, json};

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn tactic_lands_between_meaning_and_description() {
        let combo = as_map(json!({"meaning": "M", "description": "D", "extra": 1}));
        let rebuilt = rewrite_combination(&combo);
        assert_eq!(keys(&rebuilt), ["meaning", "tactic", "description", "extra"]);
        assert_eq!(rebuilt["tactic"], json!(""));
        assert_eq!(rebuilt["meaning"], json!("M"));
        assert_eq!(rebuilt["description"], json!("D"));
        assert_eq!(rebuilt["extra"], json!(1));
    }

    #[test]
    fn missing_meaning_puts_tactic_first() {
        let combo = as_map(json!({"description": "D"}));
        let rebuilt = rewrite_combination(&combo);
        assert_eq!(keys(&rebuilt), ["tactic", "description"]);
    }

    #[test]
    fn record_with_neither_known_field_keeps_extras_after_tactic() {
        let combo = as_map(json!({"b": 2, "a": 1}));
        let rebuilt = rewrite_combination(&combo);
        assert_eq!(keys(&rebuilt), ["tactic", "b", "a"]);
    }

    #[test]
    fn existing_tactic_value_is_reset_to_empty() {
        let combo = as_map(json!({
            "meaning": "M",
            "tactic": "Huertos Urbanos",
            "description": "D"
        }));
        let rebuilt = rewrite_combination(&combo);
        assert_eq!(keys(&rebuilt), ["meaning", "tactic", "description"]);
        assert_eq!(rebuilt["tactic"], json!(""));
    }

    #[test]
    fn null_meaning_counts_as_present() {
        let combo = as_map(json!({"meaning": null, "extra": true}));
        let rebuilt = rewrite_combination(&combo);
        assert_eq!(keys(&rebuilt), ["meaning", "tactic", "extra"]);
        assert_eq!(rebuilt["meaning"], Value::Null);
    }

    #[test]
    fn extras_keep_their_original_relative_order() {
        let combo = as_map(json!({
            "z": 1,
            "meaning": "M",
            "m": 2,
            "description": "D",
            "a": 3
        }));
        let rebuilt = rewrite_combination(&combo);
        assert_eq!(keys(&rebuilt), ["meaning", "tactic", "description", "z", "m", "a"]);
    }

    #[test]
    fn rewriting_twice_is_idempotent() {
        let combo = as_map(json!({"meaning": "M", "description": "D", "extra": 1}));
        let once = rewrite_combination(&combo);
        let twice = rewrite_combination(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn walk_updates_every_combination_and_counts() {
        let mut doc = as_map(json!({
            "glyphs": {
                "00": {
                    "id": 0,
                    "combinations": {
                        "standard": {"meaning": "a"},
                        "blue": {"meaning": "b"}
                    }
                },
                "01": {
                    "id": 1,
                    "combinations": {
                        "standard": {"meaning": "c"}
                    }
                }
            }
        }));
        let summary = insert_tactic_fields(&mut doc).unwrap();
        assert_eq!(
            summary,
            UpdateSummary {
                glyphs: 2,
                combinations: 3
            }
        );
        let blue = doc["glyphs"]["00"]["combinations"]["blue"].as_object().unwrap();
        assert_eq!(keys(blue), ["meaning", "tactic"]);
    }

    #[test]
    fn document_without_glyphs_is_left_alone() {
        let mut doc = as_map(json!({"colorMeanings": {}}));
        let summary = insert_tactic_fields(&mut doc).unwrap();
        assert_eq!(summary, UpdateSummary::default());
        assert_eq!(keys(&doc), ["colorMeanings"]);
    }

    #[test]
    fn glyph_without_combinations_is_tolerated() {
        let mut doc = as_map(json!({"glyphs": {"00": {"id": 0}}}));
        let summary = insert_tactic_fields(&mut doc).unwrap();
        assert_eq!(summary, UpdateSummary::default());
    }

    #[test]
    fn summary_counts_only_glyphs_with_rewritten_combinations() {
        let mut doc = as_map(json!({
            "glyphs": {
                "00": {"id": 0},
                "01": {"id": 1, "combinations": {}},
                "02": {"id": 2, "combinations": {"standard": {"meaning": "m"}}}
            }
        }));
        let summary = insert_tactic_fields(&mut doc).unwrap();
        assert_eq!(
            summary,
            UpdateSummary {
                glyphs: 1,
                combinations: 1
            }
        );
    }

    #[test]
    fn glyph_members_other_than_combinations_do_not_move() {
        let mut doc = as_map(json!({
            "glyphs": {
                "07": {
                    "image": "glyphs/07.svg",
                    "combinations": {"blue": {}},
                    "id": 7
                }
            }
        }));
        insert_tactic_fields(&mut doc).unwrap();
        let glyph = doc["glyphs"]["07"].as_object().unwrap();
        assert_eq!(keys(glyph), ["image", "combinations", "id"]);
        assert_eq!(glyph["id"], json!(7));
        assert_eq!(glyph["image"], json!("glyphs/07.svg"));
    }

    #[test]
    fn null_glyphs_is_an_error() {
        let mut doc = as_map(json!({"glyphs": null}));
        let err = insert_tactic_fields(&mut doc).unwrap_err();
        assert!(err.to_string().contains("glyphs is not an object"));
    }

    #[test]
    fn non_object_glyph_is_an_error() {
        let mut doc = as_map(json!({"glyphs": {"00": []}}));
        let err = insert_tactic_fields(&mut doc).unwrap_err();
        assert!(err.to_string().contains("glyph \"00\""));
    }

    #[test]
    fn null_combinations_is_an_error() {
        let mut doc = as_map(json!({"glyphs": {"00": {"combinations": null}}}));
        let err = insert_tactic_fields(&mut doc).unwrap_err();
        assert!(err.to_string().contains("combinations is not an object"));
    }

    #[test]
    fn non_object_combination_is_an_error() {
        let mut doc = as_map(json!({"glyphs": {"00": {"combinations": {"blue": 3}}}}));
        let err = insert_tactic_fields(&mut doc).unwrap_err();
        assert!(err.to_string().contains("combination \"blue\""));
    }
}
