//! Interactive questions for values missing from the command line.
//!
//! With the `interactive` feature (default) prompts use `dialoguer`;
//! without it they fall back to plain line reads on stdin.

use newcomp_core::domain::{Category, ComponentName};

use crate::error::{CliError, CliResult};

/// Prompt text listing the categories the user can pick from.
pub fn category_prompt(choices: &[String]) -> String {
    match choices.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!(
            "Type the category of the new component ({} or {last}, or the name for a new one)",
            rest.join(", ")
        ),
        Some((only, _)) => {
            format!("Type the category of the new component ({only}, or the name for a new one)")
        }
        None => "Type the category of the new component".into(),
    }
}

/// Ask for the category until it parses.
pub fn ask_category(choices: &[String]) -> CliResult<Category> {
    let answer = ask_validated(&category_prompt(choices), |s| {
        Category::new(s).map(|_| ()).map_err(|e| e.to_string())
    })?;
    Category::new(answer).map_err(CliError::from)
}

/// Ask for the component name until it parses.
pub fn ask_name() -> CliResult<ComponentName> {
    let answer = ask_validated("Type the name of the new component", |s| {
        ComponentName::new(s).map(|_| ()).map_err(|e| e.to_string())
    })?;
    ComponentName::new(answer).map_err(CliError::from)
}

/// Yes/no question defaulting to no.
pub fn ask_callback() -> CliResult<bool> {
    confirm("Should the component react to serial commands?", false)
}

fn prompt_error(err: impl std::error::Error + Send + Sync + 'static) -> CliError {
    CliError::Prompt {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}

#[cfg(feature = "interactive")]
fn ask_validated<F>(prompt: &str, check: F) -> CliResult<String>
where
    F: Fn(&str) -> Result<(), String>,
{
    dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| check(input))
        .interact_text()
        .map_err(prompt_error)
}

/// Yes/no question.
#[cfg(feature = "interactive")]
pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(prompt_error)
}

#[cfg(not(feature = "interactive"))]
fn ask_validated<F>(prompt: &str, check: F) -> CliResult<String>
where
    F: Fn(&str) -> Result<(), String>,
{
    loop {
        let answer = read_answer(&format!("{prompt}: "))?;
        match check(&answer) {
            Ok(()) => return Ok(answer),
            Err(reason) => eprintln!("{reason}"),
        }
    }
}

/// Yes/no question.
#[cfg(not(feature = "interactive"))]
pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let answer = read_answer(&format!("{prompt} {hint} "))?.to_ascii_lowercase();
    Ok(match answer.as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}

#[cfg(not(feature = "interactive"))]
fn read_answer(prompt: &str) -> CliResult<String> {
    use std::io::{self, BufRead, Write};

    print!("{prompt}");
    io::stdout().flush().map_err(prompt_error)?;

    let mut input = String::new();
    let read = io::stdin().lock().read_line(&mut input).map_err(prompt_error)?;
    if read == 0 {
        return Err(CliError::Cancelled);
    }
    Ok(input.trim().to_string())
}
