use once_cell::sync::Lazy;

/// Identifier for a deployable Qt module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QtModule {
    Bluetooth,
    Concurrent,
    Core,
    Declarative,
    Designer,
    DesignerComponents,
    Enginio,
    Gamepad,
    Gui,
    Help,
    Multimedia,
    MultimediaWidgets,
    MultimediaQuick,
    Network,
    Nfc,
    OpenGl,
    Positioning,
    PrintSupport,
    Qml,
    QmlTooling,
    Quick,
    QuickParticles,
    QuickWidgets,
    Script,
    ScriptTools,
    Sensors,
    SerialPort,
    Sql,
    Svg,
    Test,
    WebKit,
    WebKitWidgets,
    WebSockets,
    Widgets,
    WinExtras,
    Xml,
    XmlPatterns,
    WebEngineCore,
    WebEngine,
    WebEngineWidgets,
    ThreeDCore,
    ThreeDRender,
    ThreeDQuick,
    ThreeDQuickRender,
    ThreeDInput,
    ThreeDAnimation,
    ThreeDExtras,
    Location,
    WebChannel,
    TextToSpeech,
    SerialBus,
    WebView,
}

/// One row of the module table.
///
/// `library` is the file-name stem a deployed library is matched against,
/// `package` the Qt source package the module ships in, `translation` the
/// stem of its `.qm` translation files. The table order is only used for
/// display.
#[derive(Debug, Clone, Copy)]
pub struct ModuleEntry {
    pub module: QtModule,
    pub short_name: &'static str,
    pub library: &'static str,
    pub package: Option<&'static str>,
    pub translation: Option<&'static str>,
}

const fn entry(
    module: QtModule,
    short_name: &'static str,
    library: &'static str,
    package: Option<&'static str>,
    translation: Option<&'static str>,
) -> ModuleEntry {
    ModuleEntry {
        module,
        short_name,
        library,
        package,
        translation,
    }
}

/// The full Qt 5 module set. Not disjoint on `library`: a file name like
/// `libQt5QuickWidgets.so` also contains the `Qt5Quick` stem, and every
/// match is intended to contribute during translation resolution.
pub static QT_MODULE_TABLE: &[ModuleEntry] = &[
    entry(QtModule::Bluetooth, "bluetooth", "Qt5Bluetooth", Some("qtconnectivity"), None),
    entry(QtModule::Concurrent, "concurrent", "Qt5Concurrent", Some("qtbase"), Some("qtbase")),
    entry(QtModule::Core, "core", "Qt5Core", Some("qtbase"), Some("qtbase")),
    entry(QtModule::Declarative, "declarative", "Qt5Declarative", Some("qtquick1"), Some("qtquick1")),
    entry(QtModule::Designer, "designer", "Qt5Designer", Some("qttools"), None),
    entry(QtModule::DesignerComponents, "designercomponents", "Qt5DesignerComponents", Some("qttools"), None),
    entry(QtModule::Enginio, "enginio", "Enginio", None, None),
    entry(QtModule::Gamepad, "gamepad", "Qt5Gamepad", Some("qtgamepad"), None),
    entry(QtModule::Gui, "gui", "Qt5Gui", Some("qtbase"), Some("qtbase")),
    entry(QtModule::Help, "qthelp", "Qt5Help", Some("qttools"), Some("qt_help")),
    entry(QtModule::Multimedia, "multimedia", "Qt5Multimedia", Some("qtmultimedia"), Some("qtmultimedia")),
    entry(QtModule::MultimediaWidgets, "multimediawidgets", "Qt5MultimediaWidgets", Some("qtmultimedia"), Some("qtmultimedia")),
    entry(QtModule::MultimediaQuick, "multimediaquick", "Qt5MultimediaQuick_p", Some("qtmultimedia"), Some("qtmultimedia")),
    entry(QtModule::Network, "network", "Qt5Network", Some("qtbase"), Some("qtbase")),
    entry(QtModule::Nfc, "nfc", "Qt5Nfc", Some("qtconnectivity"), None),
    entry(QtModule::OpenGl, "opengl", "Qt5OpenGL", Some("qtbase"), None),
    entry(QtModule::Positioning, "positioning", "Qt5Positioning", Some("qtlocation"), None),
    entry(QtModule::PrintSupport, "printsupport", "Qt5PrintSupport", Some("qtbase"), None),
    entry(QtModule::Qml, "qml", "Qt5Qml", Some("qtdeclarative"), Some("qtdeclarative")),
    entry(QtModule::QmlTooling, "qmltooling", "qmltooling", Some("qtdeclarative"), None),
    entry(QtModule::Quick, "quick", "Qt5Quick", Some("qtdeclarative"), Some("qtdeclarative")),
    entry(QtModule::QuickParticles, "quickparticles", "Qt5QuickParticles", Some("qtdeclarative"), None),
    entry(QtModule::QuickWidgets, "quickwidgets", "Qt5QuickWidgets", Some("qtdeclarative"), None),
    entry(QtModule::Script, "script", "Qt5Script", Some("qtscript"), Some("qtscript")),
    entry(QtModule::ScriptTools, "scripttools", "Qt5ScriptTools", Some("qtscript"), Some("qtscript")),
    entry(QtModule::Sensors, "sensors", "Qt5Sensors", Some("qtsensors"), None),
    entry(QtModule::SerialPort, "serialport", "Qt5SerialPort", Some("qtserialport"), Some("qtserialport")),
    entry(QtModule::Sql, "sql", "Qt5Sql", Some("qtbase"), Some("qtbase")),
    entry(QtModule::Svg, "svg", "Qt5Svg", Some("qtsvg"), None),
    entry(QtModule::Test, "test", "Qt5Test", Some("qtbase"), Some("qtbase")),
    entry(QtModule::WebKit, "webkit", "Qt5WebKit", Some("qtwebkit"), None),
    entry(QtModule::WebKitWidgets, "webkitwidgets", "Qt5WebKitWidgets", Some("qtwebkit"), None),
    entry(QtModule::WebSockets, "websockets", "Qt5WebSockets", Some("qtwebsockets"), None),
    entry(QtModule::Widgets, "widgets", "Qt5Widgets", Some("qtbase"), Some("qtbase")),
    entry(QtModule::WinExtras, "winextras", "Qt5WinExtras", Some("qtwinextras"), None),
    entry(QtModule::Xml, "xml", "Qt5Xml", Some("qtbase"), Some("qtbase")),
    entry(QtModule::XmlPatterns, "xmlpatterns", "Qt5XmlPatterns", Some("qtxmlpatterns"), Some("qtxmlpatterns")),
    entry(QtModule::WebEngineCore, "webenginecore", "Qt5WebEngineCore", Some("qtwebengine"), None),
    entry(QtModule::WebEngine, "webengine", "Qt5WebEngine", Some("qtwebengine"), Some("qtwebengine")),
    entry(QtModule::WebEngineWidgets, "webenginewidgets", "Qt5WebEngineWidgets", Some("qtwebengine"), None),
    entry(QtModule::ThreeDCore, "3dcore", "Qt53DCore", Some("qt3d"), None),
    entry(QtModule::ThreeDRender, "3drenderer", "Qt53DRender", Some("qt3d"), None),
    entry(QtModule::ThreeDQuick, "3dquick", "Qt53DQuick", Some("qt3d"), None),
    entry(QtModule::ThreeDQuickRender, "3dquickrenderer", "Qt53DQuickRender", Some("qt3d"), None),
    entry(QtModule::ThreeDInput, "3dinput", "Qt53DInput", Some("qt3d"), None),
    entry(QtModule::ThreeDAnimation, "3danimation", "Qt53DAnimation", Some("qt3d"), None),
    entry(QtModule::ThreeDExtras, "3dextras", "Qt53DExtras", Some("qt3d"), None),
    entry(QtModule::Location, "geoservices", "Qt5Location", Some("qtlocation"), None),
    entry(QtModule::WebChannel, "webchannel", "Qt5WebChannel", Some("qtwebchannel"), None),
    entry(QtModule::TextToSpeech, "texttospeech", "Qt5TextToSpeech", Some("qtspeech"), None),
    entry(QtModule::SerialBus, "serialbus", "Qt5SerialBus", Some("qtserialbus"), None),
    entry(QtModule::WebView, "webview", "Qt5WebView", Some("qtwebview"), None),
];

/// Lookup facade over the static table.
pub struct ModuleRegistry {
    entries: &'static [ModuleEntry],
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            entries: QT_MODULE_TABLE,
        }
    }

    pub fn entries(&self) -> &'static [ModuleEntry] {
        self.entries
    }

    pub fn find_by_short_name(&self, short_name: &str) -> Option<&ModuleEntry> {
        self.entries.iter().find(|e| e.short_name == short_name)
    }

    /// Every entry whose library stem occurs in `file_name`. A file may
    /// match zero, one or several entries.
    pub fn matching<'a>(&'a self, file_name: &'a str) -> impl Iterator<Item = &'a ModuleEntry> {
        self.entries.iter().filter(move |e| file_name.contains(e.library))
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: Lazy<ModuleRegistry> = Lazy::new(ModuleRegistry::new);

/// Process-wide registry handle.
pub fn global() -> &'static ModuleRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_core_modules() {
        let registry = ModuleRegistry::new();
        let core = registry.find_by_short_name("core").unwrap();
        assert_eq!(core.library, "Qt5Core");
        assert_eq!(core.translation, Some("qtbase"));
        assert_eq!(core.package, Some("qtbase"));
    }

    #[test]
    fn matching_is_substring_based() {
        let registry = ModuleRegistry::new();
        let matches: Vec<_> = registry
            .matching("libQt5QuickWidgets.so.5")
            .map(|e| e.module)
            .collect();
        // Qt5Quick is a stem of Qt5QuickWidgets; both entries match.
        assert!(matches.contains(&QtModule::Quick));
        assert!(matches.contains(&QtModule::QuickWidgets));
    }

    #[test]
    fn unrelated_file_matches_nothing() {
        let registry = ModuleRegistry::new();
        assert_eq!(registry.matching("libssl.so.1.1").count(), 0);
    }

    #[test]
    fn short_names_are_unique() {
        let registry = ModuleRegistry::new();
        let mut seen = std::collections::HashSet::new();
        for e in registry.entries() {
            assert!(seen.insert(e.short_name), "duplicate short name {}", e.short_name);
        }
    }
}
