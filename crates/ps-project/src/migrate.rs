//! Schema migration framework.

use crate::ProjectError;
use crate::schema::{DEFAULT_GST_PERCENT, QuoteFile};

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut file: QuoteFile) -> Result<QuoteFile, ProjectError> {
    while file.version < LATEST_VERSION {
        file = migrate_one_version(file)?;
    }
    Ok(file)
}

fn migrate_one_version(file: QuoteFile) -> Result<QuoteFile, ProjectError> {
    match file.version {
        0 => migrate_v0_to_v1(file),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files wrote an unset GST rate as 0.
fn migrate_v0_to_v1(mut file: QuoteFile) -> Result<QuoteFile, ProjectError> {
    if file.terms.gst_percent == 0.0 {
        file.terms.gst_percent = DEFAULT_GST_PERCENT;
    }
    file.version = 1;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PlantDef, TermsDef};

    #[test]
    fn migrate_latest_is_noop() {
        let file = QuoteFile::new("test", PlantDef::with_capacity(100.0));
        let migrated = migrate_to_latest(file.clone()).unwrap();
        assert_eq!(migrated, file);
    }

    #[test]
    fn migrate_v0_fills_gst() {
        let mut file = QuoteFile::new("old", PlantDef::with_capacity(100.0));
        file.version = 0;
        file.terms = TermsDef { gst_percent: 0.0 };

        let migrated = migrate_to_latest(file).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
        assert_eq!(migrated.terms.gst_percent, DEFAULT_GST_PERCENT);
    }

    #[test]
    fn migrate_v0_keeps_explicit_gst() {
        let mut file = QuoteFile::new("old", PlantDef::with_capacity(100.0));
        file.version = 0;
        file.terms = TermsDef { gst_percent: 12.0 };
        assert_eq!(migrate_to_latest(file).unwrap().terms.gst_percent, 12.0);
    }
}
