use crate::app::{App, MenuChoice};
use crate::error::{Result, SchedulerError};
use crate::models::FarmId;
use crate::ui::screens::{error_message, MenuScreen, NO_FARMS};
use dialoguer::Input;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Source of answers for the interactive prompts.
pub trait Prompt {
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Re-asks until the answer parses as a number.
    fn number(&mut self, prompt: &str) -> Result<f64>;
}

/// Prompts on a terminal via dialoguer.
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn text(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(value.trim().to_string())
    }

    fn number(&mut self, prompt: &str) -> Result<f64> {
        Ok(Input::new().with_prompt(prompt).interact_text()?)
    }
}

/// Line-by-line prompts for piped or scripted input.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn text(&mut self, prompt: &str) -> Result<String> {
        self.read_answer(prompt)
    }

    fn number(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let raw = self.read_answer(prompt)?;
            match raw.parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a valid number")?,
            }
        }
    }
}

fn is_end_of_input(err: &SchedulerError) -> bool {
    matches!(err, SchedulerError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

/// Menu loop. Ends on Exit, or when input closes at the menu prompt.
pub fn run<P: Prompt, W: Write>(app: &mut App, prompt: &mut P, out: &mut W) -> Result<()> {
    if app.config.display.show_banner {
        writeln!(out, "=== Farm Irrigation Scheduler ===")?;
        writeln!(out, "Track farms and flag the ones that need irrigation")?;
    }

    loop {
        write!(out, "{}", MenuScreen)?;
        out.flush()?;

        let choice = match prompt.text("Enter your choice") {
            Ok(choice) => choice,
            Err(e) if is_end_of_input(&e) => {
                debug!("Input closed, ending session");
                app.quit();
                break;
            }
            Err(e) => return Err(e),
        };

        match MenuChoice::from_key(&choice) {
            Some(MenuChoice::Insert) => handle_insert(app, prompt, out)?,
            Some(MenuChoice::Delete) => handle_delete(app, prompt, out)?,
            Some(MenuChoice::Display) => write!(out, "{}", app.farm_table())?,
            Some(MenuChoice::Search) => handle_search(app, prompt, out)?,
            Some(MenuChoice::CheckIrrigation) => write!(out, "{}", app.check_irrigation())?,
            Some(MenuChoice::Exit) => {
                writeln!(out, "Exiting program...")?;
                app.quit();
            }
            None => writeln!(out, "Invalid choice! Please try again.")?,
        }

        if let Some(status) = app.take_status() {
            writeln!(out, "{}", status)?;
        }

        if app.should_quit {
            break;
        }
    }

    out.flush()?;
    Ok(())
}

fn handle_insert<P: Prompt, W: Write>(app: &mut App, prompt: &mut P, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Insert New Farm ---")?;

    // Keep asking until the ID is well-formed; the registry itself only rejects once
    let farm_id = loop {
        out.flush()?;
        let raw = prompt.text("Enter Farm ID (alphanumeric, max 9 chars)")?;
        match FarmId::parse(&raw) {
            Ok(id) => break id,
            Err(e) => writeln!(out, "{}", error_message(&e))?,
        }
    };

    // Reject duplicates before asking for the remaining fields
    if !app.farm_id_available(&farm_id) {
        return Ok(());
    }

    let crop_type = prompt.text("Enter Crop Type")?;
    let soil_moisture = prompt.number("Enter Current Soil Moisture (%)")?;
    let weather_forecast = prompt.text("Enter Weather Forecast (Sunny/Rain/Cloudy)")?;

    app.insert_farm(farm_id.as_str(), &crop_type, soil_moisture, &weather_forecast);
    Ok(())
}

fn handle_delete<P: Prompt, W: Write>(app: &mut App, prompt: &mut P, out: &mut W) -> Result<()> {
    if app.registry.is_empty() {
        writeln!(out, "{}", NO_FARMS)?;
        return Ok(());
    }

    let farm_id = prompt.text("Enter Farm ID to delete")?;
    app.delete_farm(&farm_id);
    Ok(())
}

fn handle_search<P: Prompt, W: Write>(app: &mut App, prompt: &mut P, out: &mut W) -> Result<()> {
    if app.registry.is_empty() {
        writeln!(out, "{}", NO_FARMS)?;
        return Ok(());
    }

    let farm_id = prompt.text("Enter Farm ID to search")?;
    write!(out, "{}", app.search_farm(&farm_id))?;
    Ok(())
}
