use std::{path::Path, sync::Arc};

use usvg::fontdb;

/// Build the font database used for the summary text.
///
/// System fonts are always loaded; `extra_dir` adds bundled faces on top. If nothing answers
/// to the generic `sans-serif` family, it is remapped to the first available face so the text
/// still renders on minimal hosts.
pub fn load_fonts(extra_dir: Option<&Path>) -> Arc<fontdb::Database> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = extra_dir {
        db.load_fonts_dir(dir);
    }

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    if db.query(&query).is_none() {
        let fallback = db
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()));
        if let Some(name) = fallback {
            tracing::debug!(family = %name, "remapping sans-serif");
            db.set_sans_serif_family(name);
        } else {
            tracing::warn!("no font faces found; summary text will not render");
        }
    }

    tracing::debug!(faces = db.len(), "loaded fonts");
    Arc::new(db)
}
