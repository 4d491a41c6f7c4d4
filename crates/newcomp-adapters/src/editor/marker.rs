//! Marker-based insertion into the build and composition files.
//!
//! Markers are literal substrings. Nothing is parsed: a marker inside a
//! comment or string matches just the same.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use newcomp_core::{
    application::{ApplicationError, ports::SourceEditor},
    domain::{Category, Insertion, InsertionKind, TextEdit, Wiring},
    error::ScaffoldResult,
};

use super::lines::LineBuffer;

/// The literal markers searched for in collaborator files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSet {
    /// Prefix of include-directory lines in the build file.
    pub include_directory: String,
    /// Prefix of source-glob lines in the build file.
    pub source_glob: String,
    /// Line after which global instances are inserted.
    pub component: String,
    /// Line opening the serial dispatch table.
    pub dispatch_table: String,
    /// Trimmed line closing the dispatch table.
    pub dispatch_close: String,
    /// Line after which periodic task entries are inserted.
    pub periodic: String,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            include_directory: "    ${CMAKE_CURRENT_SOURCE_DIR}/include/".into(),
            source_glob: "    \"${CMAKE_CURRENT_SOURCE_DIR}/source/".into(),
            component: "/* USER NEW COMPONENT BEGIN */".into(),
            dispatch_table: "g_serialMonitorSubscribers".into(),
            dispatch_close: "};".into(),
            periodic: "// USER NEW PERIODICS BEGIN".into(),
        }
    }
}

impl MarkerSet {
    /// `    "${CMAKE_CURRENT_SOURCE_DIR}/source/<category>/*.cpp"`
    pub fn source_glob_line(&self, category: &Category) -> String {
        format!("{}{}/*.cpp\"", self.source_glob, category)
    }

    /// `    ${CMAKE_CURRENT_SOURCE_DIR}/include/<category>`
    pub fn include_directory_line(&self, category: &Category) -> String {
        format!("{}{}", self.include_directory, category)
    }
}

/// Line-scan implementation of [`SourceEditor`].
#[derive(Debug, Clone, Default)]
pub struct MarkerEditor {
    markers: MarkerSet,
}

impl MarkerEditor {
    pub fn new(markers: MarkerSet) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }
}

/// An insertion positioned against the unmodified file.
struct Pending {
    before: usize,
    kind: InsertionKind,
    text: String,
}

/// Apply insertions located in the original text, in position order.
/// Equal positions keep their given order.
fn insert_all(buf: &mut LineBuffer, mut pending: Vec<Pending>) -> Vec<Insertion> {
    pending.sort_by_key(|p| p.before);
    pending
        .into_iter()
        .enumerate()
        .map(|(shift, p)| {
            let at = buf.insert(p.before + shift, p.text.clone());
            Insertion {
                kind: p.kind,
                line: at + 1,
                text: p.text,
            }
        })
        .collect()
}

fn marker_not_found(marker: &str, path: &Path) -> ApplicationError {
    ApplicationError::MarkerNotFound {
        marker: marker.trim().to_string(),
        path: path.to_path_buf(),
    }
}

impl SourceEditor for MarkerEditor {
    #[instrument(skip(self, content), fields(path = %build_file.display()))]
    fn register_category(
        &self,
        build_file: &Path,
        content: &str,
        category: &Category,
    ) -> ScaffoldResult<Option<TextEdit>> {
        let mut buf = LineBuffer::parse(content);
        let source_line = self.markers.source_glob_line(category);
        let include_line = self.markers.include_directory_line(category);

        if buf.lines().any(|l| l.trim() == source_line.trim()) {
            debug!("source glob already present");
            return Ok(None);
        }

        let last_source = buf
            .find_last(&self.markers.source_glob)
            .ok_or_else(|| marker_not_found(&self.markers.source_glob, build_file))?;
        let last_include = buf
            .find_last(&self.markers.include_directory)
            .ok_or_else(|| marker_not_found(&self.markers.include_directory, build_file))?;

        // Include position counts the source line inserted first.
        let mut source_at = buf.insert(last_source + 1, source_line.clone());
        let include_at = buf.insert(last_include + 2, include_line.clone());
        if include_at <= source_at {
            source_at += 1;
        }

        let mut insertions = vec![
            Insertion {
                kind: InsertionKind::SourceGlob,
                line: source_at + 1,
                text: source_line,
            },
            Insertion {
                kind: InsertionKind::IncludeDirectory,
                line: include_at + 1,
                text: include_line,
            },
        ];
        insertions.sort_by_key(|i| i.line);

        Ok(Some(TextEdit {
            content: buf.render(),
            insertions,
        }))
    }

    #[instrument(skip(self, content, wiring), fields(path = %composition_file.display()))]
    fn wire_component(
        &self,
        composition_file: &Path,
        content: &str,
        wiring: &Wiring,
    ) -> ScaffoldResult<TextEdit> {
        let mut buf = LineBuffer::parse(content);
        let m = &self.markers;
        let mut pending = Vec::with_capacity(wiring.composition_line_count());

        let component = buf
            .find_first(&m.component)
            .ok_or_else(|| marker_not_found(&m.component, composition_file))?;
        pending.push(Pending {
            before: component + 1,
            kind: InsertionKind::Instance,
            text: wiring.instance.clone(),
        });

        if let Some(entry) = &wiring.dispatch_entry {
            let table = buf
                .find_first_after(component, &m.dispatch_table)
                .ok_or_else(|| marker_not_found(&m.dispatch_table, composition_file))?;
            let close = buf
                .find_trimmed_after(table, &m.dispatch_close)
                .ok_or_else(|| marker_not_found(&m.dispatch_close, composition_file))?;
            pending.push(Pending {
                before: close,
                kind: InsertionKind::DispatchEntry,
                text: entry.clone(),
            });
        }

        if let Some(entry) = &wiring.task_entry {
            let periodic = buf
                .find_first_after(component, &m.periodic)
                .ok_or_else(|| marker_not_found(&m.periodic, composition_file))?;
            pending.push(Pending {
                before: periodic + 1,
                kind: InsertionKind::TaskEntry,
                text: entry.clone(),
            });
        }

        let insertions = insert_all(&mut buf, pending);
        debug!(inserted = insertions.len(), "composition file edited");

        Ok(TextEdit {
            content: buf.render(),
            insertions,
        })
    }
}

#[cfg(test)]
mod tests {
    use newcomp_core::domain::{ComponentSpec, WiringOptions};

    use super::*;

    const CMAKE: &str = "\
target_sources(${APP}
    \"${CMAKE_CURRENT_SOURCE_DIR}/source/brain/*.cpp\"
    \"${CMAKE_CURRENT_SOURCE_DIR}/source/utils/*.cpp\"
)

target_include_directories(${APP}
    ${CMAKE_CURRENT_SOURCE_DIR}/include/brain
    ${CMAKE_CURRENT_SOURCE_DIR}/include/utils
)
";

    const MAIN: &str = "\
#include <main.hpp>

/* USER NEW COMPONENT BEGIN */
brain::CKlmanager g_klmanager(g_rcCarControl);

drivers::CSerialMonitor::CSerialSubscriberMap g_serialMonitorSubscribers = {
    {\"kl\", mbed::callback(&g_klmanager, &brain::CKlmanager::serialCallbackKLCommand)},
};

utils::CTask* g_taskList[] = {
    // USER NEW PERIODICS BEGIN
    &g_klmanager,
};
";

    fn wiring(category: &str, name: &str, callback: bool) -> Wiring {
        let spec = ComponentSpec::new(category, name, callback).unwrap();
        Wiring::for_component(&spec, &WiringOptions::default())
    }

    #[test]
    fn registers_source_glob_and_include_directory() {
        let editor = MarkerEditor::default();
        let category = Category::new("sensors").unwrap();

        let edit = editor
            .register_category(Path::new("CMakeLists.txt"), CMAKE, &category)
            .unwrap()
            .unwrap();
        let lines: Vec<&str> = edit.content.lines().collect();

        assert_eq!(lines[3], "    \"${CMAKE_CURRENT_SOURCE_DIR}/source/sensors/*.cpp\"");
        assert_eq!(lines[9], "    ${CMAKE_CURRENT_SOURCE_DIR}/include/sensors");
        assert_eq!(lines[10], ")");
        assert_eq!(edit.content.lines().count(), CMAKE.lines().count() + 2);
        assert_eq!(edit.insertions[0].line, 4);
        assert_eq!(edit.insertions[1].line, 10);
    }

    #[test]
    fn registered_category_is_skipped() {
        let editor = MarkerEditor::default();
        let category = Category::new("sensors").unwrap();
        let once = editor
            .register_category(Path::new("CMakeLists.txt"), CMAKE, &category)
            .unwrap()
            .unwrap();

        let twice = editor
            .register_category(Path::new("CMakeLists.txt"), &once.content, &category)
            .unwrap();
        assert!(twice.is_none());
    }

    #[test]
    fn build_file_without_include_marker_fails() {
        let content = "    \"${CMAKE_CURRENT_SOURCE_DIR}/source/brain/*.cpp\"\n";
        let err = MarkerEditor::default()
            .register_category(
                Path::new("CMakeLists.txt"),
                content,
                &Category::new("sensors").unwrap(),
            )
            .unwrap_err();
        assert!(err.to_string().contains("${CMAKE_CURRENT_SOURCE_DIR}/include/"));
    }

    #[test]
    fn periodic_component_gets_instance_and_task_entry() {
        let edit = MarkerEditor::default()
            .wire_component(
                Path::new("main.cpp"),
                MAIN,
                &wiring("periodics", "speedsensor", false),
            )
            .unwrap();
        let lines: Vec<&str> = edit.content.lines().collect();

        assert_eq!(lines[2], "/* USER NEW COMPONENT BEGIN */");
        assert_eq!(
            lines[3],
            "periodics::CSpeedsensor g_speedsensor(g_baseTick * NO_OF_MILISECONDS);"
        );
        let marker = lines
            .iter()
            .position(|l| l.contains("USER NEW PERIODICS BEGIN"))
            .unwrap();
        assert_eq!(lines[marker + 1], "    &g_speedsensor,");
        assert_eq!(edit.inserted_lines(), 2);
    }

    #[test]
    fn callback_entry_goes_before_table_close() {
        let edit = MarkerEditor::default()
            .wire_component(Path::new("main.cpp"), MAIN, &wiring("drivers", "motor", true))
            .unwrap();
        let lines: Vec<&str> = edit.content.lines().collect();

        let close = lines
            .iter()
            .enumerate()
            .skip_while(|(_, l)| !l.contains("g_serialMonitorSubscribers"))
            .find(|(_, l)| l.trim() == "};")
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(
            lines[close - 1],
            "    {\"motor\", mbed::callback(&g_motor, &drivers::CMotor::serialCallbackMotorCommand)},"
        );
        assert!(!edit.content.contains("&g_motor,\n"));
        assert_eq!(edit.content.lines().count(), MAIN.lines().count() + 2);
    }

    #[test]
    fn insertion_lines_point_into_edited_text() {
        let edit = MarkerEditor::default()
            .wire_component(
                Path::new("main.cpp"),
                MAIN,
                &wiring("periodics", "imu", true),
            )
            .unwrap();
        let lines: Vec<&str> = edit.content.lines().collect();

        assert_eq!(edit.insertions.len(), 3);
        for insertion in &edit.insertions {
            assert_eq!(lines[insertion.line - 1], insertion.text);
        }
    }

    #[test]
    fn existing_lines_are_untouched() {
        let edit = MarkerEditor::default()
            .wire_component(Path::new("main.cpp"), MAIN, &wiring("drivers", "motor", true))
            .unwrap();
        let inserted: Vec<usize> = edit.insertions.iter().map(|i| i.line - 1).collect();
        let kept: Vec<&str> = edit
            .content
            .lines()
            .enumerate()
            .filter(|(i, _)| !inserted.contains(i))
            .map(|(_, l)| l)
            .collect();
        assert_eq!(kept, MAIN.lines().collect::<Vec<_>>());
    }

    #[test]
    fn missing_component_marker_fails() {
        let err = MarkerEditor::default()
            .wire_component(
                Path::new("main.cpp"),
                "int main() {}\n",
                &wiring("drivers", "motor", false),
            )
            .unwrap_err();
        assert!(err.to_string().contains("USER NEW COMPONENT BEGIN"));
    }

    #[test]
    fn markers_mentioned_above_component_marker_are_ignored() {
        let content = format!(
            "// New tasks go below // USER NEW PERIODICS BEGIN\n\
             // see g_serialMonitorSubscribers for commands\n{MAIN}"
        );
        let edit = MarkerEditor::default()
            .wire_component(
                Path::new("main.cpp"),
                &content,
                &wiring("periodics", "imu", true),
            )
            .unwrap();
        let lines: Vec<&str> = edit.content.lines().collect();

        assert_eq!(lines[0], "// New tasks go below // USER NEW PERIODICS BEGIN");
        assert_eq!(lines[1], "// see g_serialMonitorSubscribers for commands");
        assert_eq!(lines[2], "#include <main.hpp>");
        let task = lines
            .iter()
            .position(|l| *l == "    // USER NEW PERIODICS BEGIN")
            .unwrap();
        assert_eq!(lines[task + 1], "    &g_imu,");
        let close = lines
            .iter()
            .position(|l| l.starts_with("    {\"imu\""))
            .unwrap();
        assert_eq!(lines[close + 1], "};");
        assert_eq!(lines[close - 1], MAIN.lines().nth(6).unwrap());
    }

    #[test]
    fn dispatch_table_without_close_fails() {
        let content = "/* USER NEW COMPONENT BEGIN */\ng_serialMonitorSubscribers = {\n";
        let err = MarkerEditor::default()
            .wire_component(Path::new("main.cpp"), content, &wiring("drivers", "motor", true))
            .unwrap_err();
        assert!(err.to_string().contains("'};'"));
    }
}
