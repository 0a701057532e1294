use crate::app::MenuChoice;
use std::fmt;

pub struct MenuScreen;

impl fmt::Display for MenuScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== MENU ===")?;
        for choice in MenuChoice::all() {
            writeln!(f, "{}. {}", choice.key(), choice.as_str())?;
        }
        Ok(())
    }
}
