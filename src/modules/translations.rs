use std::collections::BTreeSet;

use crate::types::LibraryRecord;

use super::registry;

/// Maps the final library set to the translation-file stems it needs.
///
/// Every module entry whose library stem occurs in a record's file name
/// and that carries a translation stem contributes; the table is not
/// disjoint, so one library can pull in several stems.
pub fn resolve(libraries: &[LibraryRecord]) -> BTreeSet<String> {
    let registry = registry::global();
    let mut stems = BTreeSet::new();

    for record in libraries {
        let file_name = record.file_name();
        for entry in registry.matching(&file_name) {
            if let Some(translation) = entry.translation {
                stems.insert(translation.to_string());
            }
        }
    }

    stems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tier;

    fn record(path: &str) -> LibraryRecord {
        LibraryRecord::new(path, Tier::Framework, 1)
    }

    #[test]
    fn core_library_pulls_qtbase() {
        let stems = resolve(&[record("/opt/qt/lib/libQt5Core.so.5")]);
        assert_eq!(stems, BTreeSet::from(["qtbase".to_string()]));
    }

    #[test]
    fn duplicate_stems_collapse() {
        let stems = resolve(&[
            record("/opt/qt/lib/libQt5Core.so.5"),
            record("/opt/qt/lib/libQt5Gui.so.5"),
            record("/opt/qt/lib/libQt5Widgets.so.5"),
        ]);
        assert_eq!(stems, BTreeSet::from(["qtbase".to_string()]));
    }

    #[test]
    fn modules_without_translations_contribute_nothing() {
        let stems = resolve(&[record("/opt/qt/lib/libQt5Svg.so.5")]);
        assert!(stems.is_empty());
    }

    #[test]
    fn non_qt_libraries_contribute_nothing() {
        let stems = resolve(&[record("/usr/lib/libssl.so.1.1")]);
        assert!(stems.is_empty());
    }

    #[test]
    fn multiple_modules_accumulate() {
        let stems = resolve(&[
            record("/opt/qt/lib/libQt5Core.so.5"),
            record("/opt/qt/lib/libQt5Qml.so.5"),
            record("/opt/qt/lib/libQt5Help.so.5"),
        ]);
        assert_eq!(
            stems,
            BTreeSet::from([
                "qt_help".to_string(),
                "qtbase".to_string(),
                "qtdeclarative".to_string(),
            ])
        );
    }
}
