//! Read-only structural checks over the dictionary.
//!
//! The site looks glyphs up by the zero-padded id, reads combinations by a
//! fixed set of color keys, and renders `meaning` straight onto the cards;
//! the checks flag anything those lookups would trip over. Shape problems
//! are findings rather than errors: the pass keeps walking so one report
//! covers the whole file.

use crate::dict::Document;
use serde_json::Value;

/// Combination keys the keyboard and the cards know about.
pub const KNOWN_COMBINATION_KEYS: [&str; 6] =
    ["standard", "blue", "green", "yellow", "red", "orange"];

/// What a check pass saw and what it flagged.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub glyphs: usize,
    pub combinations: usize,
    pub findings: Vec<String>,
}

/// Walk the document and collect findings. Never modifies anything.
pub fn check_dictionary(doc: &Document) -> CheckReport {
    let mut report = CheckReport::default();
    let mut missing_tactic = 0usize;
    // Non-standard colors referenced by combinations, in first-use order.
    let mut colors_in_use: Vec<String> = Vec::new();

    match doc.get("glyphs") {
        Some(Value::Object(glyphs)) => {
            for (glyph_key, glyph) in glyphs {
                let Value::Object(glyph) = glyph else {
                    report
                        .findings
                        .push(format!("glyph {glyph_key:?} is not an object"));
                    continue;
                };
                report.glyphs += 1;

                match glyph.get("id").and_then(Value::as_u64) {
                    Some(id) => {
                        let expected = format!("{:02}", id);
                        if *glyph_key != expected {
                            report.findings.push(format!(
                                "glyph {glyph_key:?}: key does not match id {id} (lookups use {expected:?})"
                            ));
                        }
                    }
                    None => {
                        report
                            .findings
                            .push(format!("glyph {glyph_key:?} has no numeric id"));
                    }
                }

                match glyph.get("combinations") {
                    None => {
                        report
                            .findings
                            .push(format!("glyph {glyph_key:?} has no combinations"));
                    }
                    Some(Value::Object(combinations)) if combinations.is_empty() => {
                        report
                            .findings
                            .push(format!("glyph {glyph_key:?} has no combinations"));
                    }
                    Some(Value::Object(combinations)) => {
                        for (combo_key, combo) in combinations {
                            if !KNOWN_COMBINATION_KEYS.contains(&combo_key.as_str()) {
                                report.findings.push(format!(
                                    "glyph {glyph_key:?}: unknown combination color {combo_key:?}"
                                ));
                            } else if combo_key != "standard" && !colors_in_use.contains(combo_key)
                            {
                                colors_in_use.push(combo_key.clone());
                            }

                            let Value::Object(fields) = combo else {
                                report.findings.push(format!(
                                    "glyph {glyph_key:?}: combination {combo_key:?} is not an object"
                                ));
                                continue;
                            };
                            report.combinations += 1;

                            if !fields.contains_key("meaning") {
                                report.findings.push(format!(
                                    "glyph {glyph_key:?}: combination {combo_key:?} has no meaning"
                                ));
                            }
                            if !fields.contains_key("tactic") {
                                missing_tactic += 1;
                            }
                        }
                    }
                    Some(_) => {
                        report
                            .findings
                            .push(format!("glyph {glyph_key:?}: combinations is not an object"));
                    }
                }
            }
        }
        Some(_) => report.findings.push("glyphs is not an object".to_string()),
        None => report
            .findings
            .push("dictionary has no glyphs mapping".to_string()),
    }

    if missing_tactic > 0 {
        report.findings.push(format!(
            "{missing_tactic} combination(s) have no tactic field (run update)"
        ));
    }

    match doc.get("colorMeanings") {
        Some(Value::Object(meanings)) => {
            for color in &colors_in_use {
                if !meanings.contains_key(color) {
                    report
                        .findings
                        .push(format!("colorMeanings has no entry for {color:?}"));
                }
            }
        }
        Some(_) => report
            .findings
            .push("colorMeanings is not an object".to_string()),
        None => {
            if !colors_in_use.is_empty() {
                report
                    .findings
                    .push("dictionary has no colorMeanings section".to_string());
            }
        }
    }

    report
}
