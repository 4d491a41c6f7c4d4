//! Lines inserted into the collaborator files for one component.

use serde::{Deserialize, Serialize};

use crate::domain::component::ComponentSpec;

/// Constructor arguments used when instantiating a component globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiringOptions {
    /// Argument for periodic tasks, typically a multiple of the base tick.
    pub periodic_argument: String,
    /// Placeholder argument for every other category.
    pub generic_argument: String,
}

impl Default for WiringOptions {
    fn default() -> Self {
        Self {
            periodic_argument: "g_baseTick * NO_OF_MILISECONDS".into(),
            generic_argument: "possible_argument".into(),
        }
    }
}

/// The text a new component contributes to the composition file and the
/// aggregate header. Lines carry no line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    /// `drivers::CMotor g_motor(possible_argument);`
    pub instance: String,
    /// Dispatch-table entry, present only when a callback was requested.
    pub dispatch_entry: Option<String>,
    /// Task-list entry, present only for periodic components.
    pub task_entry: Option<String>,
    /// Lines appended to the aggregate header.
    pub aggregate_include: Vec<String>,
}

impl Wiring {
    pub fn for_component(spec: &ComponentSpec, options: &WiringOptions) -> Self {
        let category = spec.category();
        let name = spec.name();
        let class = name.class_name();
        let global = name.global_name();

        let argument = if spec.is_periodic() {
            &options.periodic_argument
        } else {
            &options.generic_argument
        };

        let dispatch_entry = spec.wants_callback().then(|| {
            format!(
                "    {{\"{name}\", mbed::callback(&{global}, &{category}::{class}::{callback})}},",
                callback = name.callback_name(),
            )
        });

        Self {
            instance: format!("{category}::{class} {global}({argument});"),
            dispatch_entry,
            task_entry: spec.is_periodic().then(|| format!("    &{global},")),
            aggregate_include: vec![
                format!(
                    "/* Header file for the {} functionality */",
                    name.capitalized()
                ),
                format!("#include <{}>", spec.header_include()),
            ],
        }
    }

    /// Number of lines this wiring adds to the composition file.
    pub fn composition_line_count(&self) -> usize {
        1 + usize::from(self.dispatch_entry.is_some()) + usize::from(self.task_entry.is_some())
    }
}
