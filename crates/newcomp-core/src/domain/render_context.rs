//! Variable substitution for component templates.

use std::collections::HashMap;

use crate::domain::component::ComponentSpec;

/// Context for template rendering.
///
/// A **Value Object** containing all data needed to render a component
/// template. Immutable after creation; `with_variable` returns a new context.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `CATEGORY` | "drivers" | User input |
/// | `COMPONENT` | "motor" | User input |
/// | `CLASS_NAME` | "CMotor" | Computed |
/// | `CAPITALIZED` | "Motor" | Computed |
/// | `INCLUDE_GUARD` | "MOTOR_HPP" | Computed |
/// | `GLOBAL_NAME` | "g_motor" | Computed |
/// | `CALLBACK_NAME` | "serialCallbackMotorCommand" | Computed |
/// | `HEADER_INCLUDE` | "drivers/motor.hpp" | Computed |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a context holding the built-in variables of a component.
    pub fn for_component(spec: &ComponentSpec) -> Self {
        let name = spec.name();
        let mut vars = HashMap::new();

        vars.insert("CATEGORY".to_string(), spec.category().to_string());
        vars.insert("COMPONENT".to_string(), name.to_string());
        vars.insert("CLASS_NAME".to_string(), name.class_name());
        vars.insert("CAPITALIZED".to_string(), name.capitalized());
        vars.insert("INCLUDE_GUARD".to_string(), name.include_guard());
        vars.insert("GLOBAL_NAME".to_string(), name.global_name());
        vars.insert("CALLBACK_NAME".to_string(), name.callback_name());
        vars.insert("HEADER_INCLUDE".to_string(), spec.header_include());

        Self { variables: vars }
    }

    /// Add a custom variable, consuming self and returning a new context.
    ///
    /// User-defined variables can override built-ins.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// A single left-to-right pass; substituted values are never scanned
    /// again, so a value that itself contains `{{NAME}}` is emitted as is.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{COMPONENT}}{{COMPONENT}}` → both replaced
    /// - `{{` without a closing `}}` is copied through
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let value = after
                .find("}}")
                .and_then(|close| Some((self.variables.get(&after[..close])?, close)));
            match value {
                Some((value, close)) => {
                    out.push_str(value);
                    rest = &after[close + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// First placeholder in `template` this context has no value for.
    ///
    /// An unclosed `{{` is reported with the rest of its line.
    pub fn first_unresolved<'t>(&self, template: &'t str) -> Option<&'t str> {
        let mut rest = template;
        while let Some(open) = rest.find("{{") {
            let after = &rest[open + 2..];
            let Some(close) = after.find("}}") else {
                return Some(after.lines().next().unwrap_or_default());
            };
            let key = &after[..close];
            if !self.variables.contains_key(key) {
                return Some(key);
            }
            rest = &after[close + 2..];
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motor() -> ComponentSpec {
        ComponentSpec::new("drivers", "motor", true).unwrap()
    }

    #[test]
    fn builtin_variables_are_derived() {
        let ctx = RenderContext::for_component(&motor());
        assert_eq!(ctx.get("CLASS_NAME"), Some("CMotor"));
        assert_eq!(ctx.get("INCLUDE_GUARD"), Some("MOTOR_HPP"));
        assert_eq!(ctx.get("GLOBAL_NAME"), Some("g_motor"));
        assert_eq!(ctx.get("HEADER_INCLUDE"), Some("drivers/motor.hpp"));
    }

    #[test]
    fn render_replaces_every_occurrence() {
        let ctx = RenderContext::for_component(&motor());
        assert_eq!(
            ctx.render("{{CLASS_NAME}}::{{CLASS_NAME}}()"),
            "CMotor::CMotor()"
        );
    }

    #[test]
    fn unknown_placeholder_is_left_alone() {
        let ctx = RenderContext::for_component(&motor());
        assert_eq!(ctx.render("{{NOPE}} {{COMPONENT}}"), "{{NOPE}} motor");
    }

    #[test]
    fn custom_variable_overrides_builtin() {
        let ctx = RenderContext::for_component(&motor()).with_variable("COMPONENT", "other");
        assert_eq!(ctx.render("{{COMPONENT}}"), "other");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = RenderContext::for_component(&motor())
            .with_variable("AUTHOR", "{{CATEGORY}} team")
            .with_variable("NOTE", "{{AUTHOR}}");
        assert_eq!(
            ctx.render("{{NOTE}} / {{AUTHOR}} / {{CATEGORY}}"),
            "{{AUTHOR}} / {{CATEGORY}} team / drivers"
        );
    }

    #[test]
    fn unclosed_braces_are_copied_through() {
        let ctx = RenderContext::for_component(&motor());
        assert_eq!(ctx.render("a {{ b {{COMPONENT}}"), "a {{ b motor");
        assert_eq!(ctx.render("{{COMPONENT"), "{{COMPONENT");
    }

    #[test]
    fn first_unresolved_names_the_unknown_placeholder() {
        let ctx = RenderContext::for_component(&motor());
        assert_eq!(ctx.first_unresolved("{{COMPONENT}} {{NOPE}}"), Some("NOPE"));
        assert_eq!(ctx.first_unresolved("{{COMPONENT}} {{open\nnext"), Some("open"));
        assert_eq!(ctx.first_unresolved("{{CLASS_NAME}}()"), None);
    }
}
