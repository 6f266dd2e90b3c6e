use dialoguer::Input;

use crate::error::Result;

/// Ask where the dinner was eaten.
pub fn prompt_location() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Where did you eat (home/restaurant/etc.)?")
        .allow_empty(true)
        .interact_text()?;

    Ok(normalize_location(&input))
}

/// Trim a location answer. Location is free text, so blank is kept as blank.
pub fn normalize_location(input: &str) -> String {
    input.trim().to_string()
}
