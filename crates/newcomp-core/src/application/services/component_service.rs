//! Component Service - the project mutator.
//!
//! The workflow has two phases:
//! 1. `plan`: render the component and compute every collaborator edit in
//!    memory. Missing files and markers fail here, before any write.
//! 2. `apply`: perform the plan's writes in order (build file, directories,
//!    header plus aggregate header, source plus composition file).
//!    Generated files are only ever created, never replaced.
//!
//! There is no rollback once `apply` has started.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ProjectLayout,
        ports::{ComponentRenderer, Filesystem, SourceEditor},
        services::plan::{
            CategoryRegistration, FileAction, MaterializePlan, MaterializeReport, PendingAppend,
            PendingEdit, StepOutcome,
        },
    },
    domain::{ComponentSpec, GeneratedFile, Wiring, WiringOptions},
    error::ScaffoldResult,
};

/// Creates component files and wires them into the project.
pub struct ComponentService {
    renderer: Box<dyn ComponentRenderer>,
    editor: Box<dyn SourceEditor>,
    filesystem: Box<dyn Filesystem>,
    layout: ProjectLayout,
    wiring: WiringOptions,
}

impl ComponentService {
    /// Create a new component service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use newcomp_core::application::{ComponentService, ProjectLayout};
    ///
    /// let service = ComponentService::new(
    ///     renderer,   // impl ComponentRenderer
    ///     editor,     // impl SourceEditor
    ///     filesystem, // impl Filesystem
    ///     ProjectLayout::new("."),
    /// );
    /// ```
    pub fn new(
        renderer: Box<dyn ComponentRenderer>,
        editor: Box<dyn SourceEditor>,
        filesystem: Box<dyn Filesystem>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            renderer,
            editor,
            filesystem,
            layout,
            wiring: WiringOptions::default(),
        }
    }

    /// Override the constructor arguments used for global instances.
    pub fn with_wiring(mut self, wiring: WiringOptions) -> Self {
        self.wiring = wiring;
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Plan and apply in one go.
    pub fn materialize(&self, spec: &ComponentSpec) -> ScaffoldResult<MaterializeReport> {
        let plan = self.plan(spec)?;
        self.apply(plan)
    }

    /// Compute every side effect of generating `spec` without writing.
    #[instrument(
        skip_all,
        fields(category = %spec.category(), component = %spec.name())
    )]
    pub fn plan(&self, spec: &ComponentSpec) -> ScaffoldResult<MaterializePlan> {
        let rendered = self.renderer.render(spec)?;
        let wiring = Wiring::for_component(spec, &self.wiring);

        let category = self.plan_category(spec)?;

        let directories = [
            self.layout.include_dir(spec.category()),
            self.layout.source_dir(spec.category()),
        ]
        .into_iter()
        .filter(|dir| !self.filesystem.is_dir(dir))
        .collect();

        let header_path = self.layout.header_path(spec);
        let header = if self.filesystem.exists(&header_path) {
            FileAction::Skip { path: header_path }
        } else {
            FileAction::Create(GeneratedFile::new(header_path, rendered.header))
        };

        let aggregate = if header.is_create() {
            Some(self.plan_aggregate(&wiring)?)
        } else {
            None
        };

        let source_path = self.layout.source_path(spec);
        let source = if self.filesystem.exists(&source_path) {
            FileAction::Skip { path: source_path }
        } else {
            FileAction::Create(GeneratedFile::new(source_path, rendered.source))
        };

        let composition = if source.is_create() {
            let path = self.layout.composition_file();
            let content = self.read_collaborator(&path)?;
            let edit = self.editor.wire_component(&path, &content, &wiring)?;
            Some(PendingEdit {
                path,
                edit,
                original: content,
            })
        } else {
            None
        };

        let plan = MaterializePlan {
            spec: spec.clone(),
            category,
            directories,
            header,
            aggregate,
            source,
            composition,
        };
        debug!(steps = plan.steps().len(), noop = plan.is_noop(), "plan ready");
        Ok(plan)
    }

    /// Perform a plan's writes.
    ///
    /// Collaborator files are re-read first; if one no longer matches the
    /// content the plan was computed from, nothing is written. A generated
    /// file that appeared after planning is kept and reported as already
    /// existing, and its collaborator edit is dropped.
    #[instrument(
        skip_all,
        fields(category = %plan.spec.category(), component = %plan.spec.name())
    )]
    pub fn apply(&self, plan: MaterializePlan) -> ScaffoldResult<MaterializeReport> {
        let registration = match &plan.category {
            CategoryRegistration::Register(pending) => Some(pending),
            _ => None,
        };
        for pending in registration.into_iter().chain(plan.composition.as_ref()) {
            self.ensure_unchanged(pending)?;
        }

        let mut steps = Vec::new();
        let category = plan.spec.category();

        match &plan.category {
            CategoryRegistration::Known => {}
            CategoryRegistration::AlreadyRegistered { path } => {
                steps.push(StepOutcome::CategoryAlreadyRegistered {
                    category: category.clone(),
                    path: path.clone(),
                });
            }
            CategoryRegistration::Register(pending) => {
                self.filesystem
                    .write_file(&pending.path, &pending.edit.content)?;
                info!(path = %pending.path.display(), "category registered");
                steps.push(StepOutcome::CategoryRegistered {
                    category: category.clone(),
                    path: pending.path.clone(),
                    lines: pending.edit.inserted_lines(),
                });
            }
        }

        for dir in &plan.directories {
            self.filesystem.create_dir_all(dir)?;
            steps.push(StepOutcome::DirectoryCreated { path: dir.clone() });
        }

        if self.create_generated(&plan.header, "header", &mut steps)? {
            if let Some(append) = &plan.aggregate {
                self.filesystem.append_file(&append.path, &append.text)?;
                steps.push(StepOutcome::Appended {
                    path: append.path.clone(),
                    lines: append.lines.len(),
                });
            }
        }

        if self.create_generated(&plan.source, "source", &mut steps)? {
            if let Some(pending) = &plan.composition {
                self.filesystem
                    .write_file(&pending.path, &pending.edit.content)?;
                info!(
                    path = %pending.path.display(),
                    lines = pending.edit.inserted_lines(),
                    "component wired"
                );
                steps.push(StepOutcome::Wired {
                    path: pending.path.clone(),
                    lines: pending.edit.inserted_lines(),
                });
            }
        }

        Ok(MaterializeReport {
            component: plan.spec,
            steps,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn plan_category(&self, spec: &ComponentSpec) -> ScaffoldResult<CategoryRegistration> {
        if self.layout.is_known(spec.category()) {
            return Ok(CategoryRegistration::Known);
        }

        let path = self.layout.build_file();
        let content = self.read_collaborator(&path)?;
        let registration = match self
            .editor
            .register_category(&path, &content, spec.category())?
        {
            Some(edit) => CategoryRegistration::Register(PendingEdit {
                path,
                edit,
                original: content,
            }),
            None => {
                debug!(path = %path.display(), "category already present in build file");
                CategoryRegistration::AlreadyRegistered { path }
            }
        };
        Ok(registration)
    }

    fn plan_aggregate(&self, wiring: &Wiring) -> ScaffoldResult<PendingAppend> {
        let path = self.layout.aggregate_header();
        let existing = if self.filesystem.exists(&path) {
            self.filesystem.read_file(&path)?
        } else {
            String::new()
        };

        let eol = if existing.contains("\r\n") { "\r\n" } else { "\n" };
        let mut text = String::new();
        if !existing.is_empty() && !existing.ends_with('\n') {
            text.push_str(eol);
        }
        for line in &wiring.aggregate_include {
            text.push_str(line);
            text.push_str(eol);
        }

        Ok(PendingAppend {
            path,
            lines: wiring.aggregate_include.clone(),
            text,
        })
    }

    /// Write a generated file unless something took its path since planning.
    /// Returns whether this run created it.
    fn create_generated(
        &self,
        action: &FileAction,
        kind: &'static str,
        steps: &mut Vec<StepOutcome>,
    ) -> ScaffoldResult<bool> {
        let file = match action {
            FileAction::Create(file) => file,
            FileAction::Skip { path } => {
                steps.push(StepOutcome::AlreadyExists { path: path.clone() });
                return Ok(false);
            }
        };

        if self.filesystem.create_file(&file.path, &file.body)? {
            info!(path = %file.path.display(), lines = file.line_count(), kind, "file written");
            steps.push(StepOutcome::Created {
                path: file.path.clone(),
            });
            Ok(true)
        } else {
            warn!(path = %file.path.display(), kind, "file appeared after planning, left untouched");
            steps.push(StepOutcome::AlreadyExists {
                path: file.path.clone(),
            });
            Ok(false)
        }
    }

    fn ensure_unchanged(&self, pending: &PendingEdit) -> ScaffoldResult<()> {
        let current = self.read_collaborator(&pending.path)?;
        if current != pending.original {
            return Err(ApplicationError::CollaboratorChanged {
                path: pending.path.clone(),
            }
            .into());
        }
        Ok(())
    }

    fn read_collaborator(&self, path: &std::path::Path) -> ScaffoldResult<String> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::MissingCollaborator {
                path: path.to_path_buf(),
            }
            .into());
        }
        self.filesystem.read_file(path)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockComponentRenderer, MockFilesystem, MockSourceEditor};
    use crate::domain::{Insertion, InsertionKind, RenderedComponent, TextEdit};
    use crate::error::ScaffoldError;

    fn renderer() -> MockComponentRenderer {
        let mut renderer = MockComponentRenderer::new();
        renderer.expect_render().returning(|spec| {
            Ok(RenderedComponent {
                header: format!("// header {}\n", spec.name()),
                source: format!("// source {}\n", spec.name()),
            })
        });
        renderer
    }

    fn wiring_editor() -> MockSourceEditor {
        let mut editor = MockSourceEditor::new();
        editor.expect_wire_component().returning(|_, content, wiring| {
            Ok(TextEdit {
                content: format!("{content}{}\n", wiring.instance),
                insertions: vec![Insertion {
                    kind: InsertionKind::Instance,
                    line: 1,
                    text: wiring.instance.clone(),
                }],
            })
        });
        editor
    }

    /// Project with the collaborator files present and no component yet.
    fn fresh_project(existing: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(move |p| {
            existing.iter().any(|e| p == Path::new(e))
                || p == Path::new("/p/source/main.cpp")
                || p == Path::new("/p/CMakeLists.txt")
        });
        fs.expect_is_dir().returning(|_| false);
        fs.expect_read_file()
            .returning(|p| Ok(format!("// {}\n", p.display())));
        fs
    }

    fn service(fs: MockFilesystem, editor: MockSourceEditor) -> ComponentService {
        ComponentService::new(
            Box::new(renderer()),
            Box::new(editor),
            Box::new(fs),
            ProjectLayout::new("/p"),
        )
    }

    #[test]
    fn plan_for_known_category_creates_both_files() {
        let svc = service(fresh_project(&[]), wiring_editor());
        let spec = ComponentSpec::new("drivers", "motor", false).unwrap();

        let plan = svc.plan(&spec).unwrap();

        assert_eq!(plan.category, CategoryRegistration::Known);
        assert_eq!(plan.directories.len(), 2);
        assert!(plan.header.is_create());
        assert!(plan.source.is_create());
        assert_eq!(
            plan.aggregate.as_ref().unwrap().path,
            PathBuf::from("/p/include/main.hpp")
        );
        assert_eq!(
            plan.composition.as_ref().unwrap().path,
            PathBuf::from("/p/source/main.cpp")
        );
    }

    #[test]
    fn existing_files_skip_collaborator_edits() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| true);
        fs.expect_read_file().never();

        let mut editor = MockSourceEditor::new();
        editor.expect_wire_component().never();

        let svc = service(fs, editor);
        let spec = ComponentSpec::new("drivers", "motor", true).unwrap();
        let plan = svc.plan(&spec).unwrap();

        assert!(plan.is_noop());
        assert!(plan.aggregate.is_none());
        assert!(plan.composition.is_none());
        assert!(plan.steps().iter().all(StepOutcome::is_skip));
    }

    #[test]
    fn unknown_category_requires_build_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_is_dir().returning(|_| false);

        let svc = service(fs, MockSourceEditor::new());
        let spec = ComponentSpec::new("sensors", "imu", false).unwrap();
        let err = svc.plan(&spec).unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::MissingCollaborator { ref path })
                if path == Path::new("/p/CMakeLists.txt")
        ));
    }

    #[test]
    fn unknown_category_already_in_build_file_is_not_registered_twice() {
        let mut editor = wiring_editor();
        editor.expect_register_category().returning(|_, _, _| Ok(None));

        let svc = service(fresh_project(&[]), editor);
        let spec = ComponentSpec::new("sensors", "imu", false).unwrap();
        let plan = svc.plan(&spec).unwrap();

        assert!(matches!(
            plan.category,
            CategoryRegistration::AlreadyRegistered { .. }
        ));
    }

    #[test]
    fn marker_error_aborts_plan() {
        let mut editor = MockSourceEditor::new();
        editor.expect_wire_component().returning(|path, _, _| {
            Err(ApplicationError::MarkerNotFound {
                marker: "/* USER NEW COMPONENT BEGIN */".into(),
                path: path.to_path_buf(),
            }
            .into())
        });

        let svc = service(fresh_project(&[]), editor);
        let spec = ComponentSpec::new("drivers", "motor", false).unwrap();
        assert!(svc.plan(&spec).is_err());
    }

    #[test]
    fn aggregate_append_terminates_unterminated_header() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| {
            p == Path::new("/p/include/main.hpp") || p == Path::new("/p/source/main.cpp")
        });
        fs.expect_is_dir().returning(|_| true);
        fs.expect_read_file().returning(|p| {
            if p == Path::new("/p/include/main.hpp") {
                Ok("#include <drivers/led.hpp>".into())
            } else {
                Ok(String::new())
            }
        });

        let svc = service(fs, wiring_editor());
        let spec = ComponentSpec::new("drivers", "motor", false).unwrap();
        let plan = svc.plan(&spec).unwrap();

        assert_eq!(
            plan.aggregate.unwrap().text,
            "\n/* Header file for the Motor functionality */\n#include <drivers/motor.hpp>\n"
        );
    }

    #[test]
    fn apply_writes_in_order() {
        let log = Arc::new(Mutex::new(Vec::<String>::new()));
        let mut fs = fresh_project(&[]);

        let writes = Arc::clone(&log);
        fs.expect_write_file().returning(move |p, _| {
            writes.lock().unwrap().push(format!("write {}", p.display()));
            Ok(())
        });
        let dirs = Arc::clone(&log);
        fs.expect_create_dir_all().returning(move |p| {
            dirs.lock().unwrap().push(format!("mkdir {}", p.display()));
            Ok(())
        });
        let appends = Arc::clone(&log);
        fs.expect_append_file().returning(move |p, _| {
            appends.lock().unwrap().push(format!("append {}", p.display()));
            Ok(())
        });
        let creates = Arc::clone(&log);
        fs.expect_create_file().returning(move |p, _| {
            creates.lock().unwrap().push(format!("create {}", p.display()));
            Ok(true)
        });

        let mut editor = wiring_editor();
        editor.expect_register_category().returning(|_, content, _| {
            Ok(Some(TextEdit {
                content: content.to_string(),
                insertions: vec![],
            }))
        });

        let svc = service(fs, editor);
        let spec = ComponentSpec::new("sensors", "imu", false).unwrap();
        let report = svc.materialize(&spec).unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "write /p/CMakeLists.txt",
                "mkdir /p/include/sensors",
                "mkdir /p/source/sensors",
                "create /p/include/sensors/imu.hpp",
                "append /p/include/main.hpp",
                "create /p/source/sensors/imu.cpp",
                "write /p/source/main.cpp",
            ]
        );
        assert_eq!(report.created_files(), 2);
    }

    #[test]
    fn file_created_after_planning_is_kept_and_not_wired() {
        let mut fs = fresh_project(&[]);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_file()
            .returning(|p, _| Ok(p != Path::new("/p/include/drivers/motor.hpp")));
        fs.expect_append_file().never();
        fs.expect_write_file()
            .withf(|p, _| p == Path::new("/p/source/main.cpp"))
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = service(fs, wiring_editor());
        let spec = ComponentSpec::new("drivers", "motor", false).unwrap();
        let report = svc.materialize(&spec).unwrap();

        assert!(report.steps.contains(&StepOutcome::AlreadyExists {
            path: "/p/include/drivers/motor.hpp".into()
        }));
        assert!(
            !report
                .steps
                .iter()
                .any(|s| matches!(s, StepOutcome::Appended { .. }))
        );
        assert_eq!(report.created_files(), 1);
    }

    #[test]
    fn changed_collaborator_aborts_apply_before_any_write() {
        let svc = service(fresh_project(&[]), wiring_editor());
        let spec = ComponentSpec::new("drivers", "motor", false).unwrap();
        let mut plan = svc.plan(&spec).unwrap();
        if let Some(pending) = plan.composition.as_mut() {
            pending.original = "// older content\n".into();
        }

        let mut fs = fresh_project(&[]);
        fs.expect_write_file().never();
        fs.expect_create_file().never();
        fs.expect_create_dir_all().never();
        fs.expect_append_file().never();
        let svc = service(fs, wiring_editor());

        let err = svc.apply(plan).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::CollaboratorChanged { ref path })
                if path == Path::new("/p/source/main.cpp")
        ));
    }
}
