//! Planned tactic assignments for the first fifteen glyphs (ids 0-14).
//!
//! Reference data only: the update pass always writes an empty `tactic`
//! and never consults this table.

/// Glyph id to planned tactic name, annotated with the glyph's key color.
pub const PLANNED_TACTICS: &[(u32, &str)] = &[
    (0, "Captación Solar"),            // red
    (1, "Cosecha de Lluvia"),          // blue
    (2, "Huertos Urbanos"),            // green
    (3, "Bioconstrucción"),            // yellow
    (4, "Redes Mesh"),                 // orange
    (5, "Estufas Eficientes"),         // red
    (6, "Compostaje Comunitario"),     // green
    (7, "Filtración Bio-construida"),  // blue
    (8, "Radio Comunitaria"),          // orange
    (9, "Reacondicionamiento"),        // yellow
    (10, "Energía Cinética"),          // red
    (11, "Conservación y Fermentos"),  // green
    (12, "Reciclaje de Aguas Grises"), // blue
    (13, "Cifrado y Privacidad"),      // orange
    (14, "Espacios Polivalentes"),     // yellow
];
