//! Implementation of the `newcomp new` command.
//!
//! Responsibility: collect the component spec (flags or prompts), build the
//! service from configured adapters, and display the plan and the results.

use tracing::{debug, info, instrument};

use newcomp_adapters::{CppRenderer, LocalFilesystem, MarkerEditor, catalog};
use newcomp_core::{
    application::{
        CategoryRegistration, ComponentService, MaterializePlan, ProjectLayout,
        services::PendingEdit,
    },
    domain::{Category, ComponentName, ComponentSpec, DomainError},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    commands::resolve_layout,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `newcomp new` command.
///
/// Dispatch sequence:
/// 1. Validate the category and name flags
/// 2. Resolve the project layout (flag, config, or discovery), then prompt
///    for whatever the flags left out
/// 3. Plan every write; missing files or markers fail here
/// 4. Early-exit with the plan if `--dry-run`
/// 5. Confirm with the user unless `--yes` or `--quiet`
/// 6. Apply the plan and report each step
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Flags
    let flags = parse_flags(&args)?;

    // 2. Layout and spec
    let layout = resolve_layout(args.root.as_deref(), &config)?;
    let spec = resolve_spec(flags, &layout)?;
    debug!(
        category = %spec.category(),
        name = %spec.name(),
        callback = spec.wants_callback(),
        root = %layout.root().display(),
        "component resolved"
    );

    // 3. Plan
    let service = build_service(&config, layout);
    let plan = service.plan(&spec)?;

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        if output.is_json() {
            output.json(&plan)?;
        } else {
            output.info("Dry run: no files were written")?;
            show_plan(&plan, &output)?;
        }
        return Ok(());
    }

    // 5. Confirm
    if !global.quiet && !args.yes && !output.is_json() && !plan.is_noop() {
        show_plan(&plan, &output)?;
        if !prompt::confirm("Continue?", true)? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Apply
    info!(component = %spec.name(), "applying plan");
    let report = service.apply(plan)?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    output.steps(&report.steps)?;
    if report.created_files() > 0 {
        output.success(&format!(
            "Component '{}' added to '{}'",
            spec.name(),
            spec.category()
        ))?;
    }

    Ok(())
}

// ── Spec resolution ───────────────────────────────────────────────────────────

/// Component fields taken from the command line, already validated.
#[derive(Debug)]
struct SpecFlags {
    category: Option<Category>,
    name: Option<ComponentName>,
    callback: Option<bool>,
}

/// Validate the flags without looking at the project, so bad input is a
/// user error even outside a project tree. With `--yes` every field that
/// would otherwise be prompted for must be present (the callback defaults
/// to `false`).
fn parse_flags(args: &NewArgs) -> CliResult<SpecFlags> {
    let category = args.category.as_ref().map(Category::new).transpose()?;
    let name = args.name.as_ref().map(ComponentName::new).transpose()?;

    if args.yes {
        if category.is_none() {
            return Err(DomainError::MissingRequiredField { field: "category" }.into());
        }
        if name.is_none() {
            return Err(DomainError::MissingRequiredField { field: "name" }.into());
        }
    }

    Ok(SpecFlags {
        category,
        name,
        callback: args.callback.or(args.yes.then_some(false)),
    })
}

/// Flags first; prompts for whatever is missing.
fn resolve_spec(flags: SpecFlags, layout: &ProjectLayout) -> CliResult<ComponentSpec> {
    let category = match flags.category {
        Some(category) => category,
        None => prompt::ask_category(&category_choices(layout)?)?,
    };

    let name = match flags.name {
        Some(name) => name,
        None => prompt::ask_name()?,
    };

    let wants_callback = match flags.callback {
        Some(value) => value,
        None => prompt::ask_callback()?,
    };

    Ok(ComponentSpec::from_parts(category, name, wants_callback))
}

/// Known categories plus every category directory already in the project.
fn category_choices(layout: &ProjectLayout) -> CliResult<Vec<String>> {
    Ok(catalog::scan(layout)?
        .into_iter()
        .map(|entry| entry.name)
        .collect())
}

fn build_service(config: &AppConfig, layout: ProjectLayout) -> ComponentService {
    let renderer = match config.banner() {
        Some(banner) => CppRenderer::new().with_banner(banner),
        None => CppRenderer::new(),
    };

    ComponentService::new(
        Box::new(renderer),
        Box::new(MarkerEditor::new(config.markers.clone())),
        Box::new(LocalFilesystem::new()),
        layout,
    )
    .with_wiring(config.wiring.clone())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &MaterializePlan, out: &OutputManager) -> CliResult<()> {
    out.header(&format!(
        "Component '{}' in category '{}'",
        plan.spec.name(),
        plan.spec.category()
    ))?;
    for step in plan.steps() {
        out.print(&format!("  {step}"))?;
    }

    if let CategoryRegistration::Register(pending) = &plan.category {
        show_insertions(pending, out)?;
    }
    if let Some(pending) = &plan.composition {
        show_insertions(pending, out)?;
    }
    out.print("")?;
    Ok(())
}

fn show_insertions(pending: &PendingEdit, out: &OutputManager) -> CliResult<()> {
    out.print(&format!("  {}:", pending.path.display()))?;
    for insertion in &pending.edit.insertions {
        out.print(&format!(
            "    +{:<5} {}  ({})",
            insertion.line,
            insertion.text.trim_end(),
            insertion.kind
        ))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
