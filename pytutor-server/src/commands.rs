use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use pytutor_core::content::curriculum::CURRICULUM;
use pytutor_types::WidgetConfig;

use crate::cli::ConfigCommands;

pub fn handle_lessons(json: bool) -> Result<()> {
    if json {
        let lessons: Vec<_> = CURRICULUM
            .iter()
            .map(|entry| serde_json::json!({"id": entry.id, "title": entry.title}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&lessons)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["ID", "Title"]);
    for entry in &CURRICULUM {
        table.add_row(vec![entry.id, entry.title]);
    }
    println!("{table}");
    Ok(())
}

pub fn handle_config_command(cmd: ConfigCommands, config: &WidgetConfig) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => show_config(config, json),
    }
}

fn show_config(config: &WidgetConfig, json: bool) -> Result<()> {
    if json {
        let mut value = serde_json::to_value(config)?;
        value["completion"]["has_credential"] = config.completion.has_credential().into();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let credential = if config.completion.has_credential() {
        "configured".green()
    } else {
        "missing (tutor & quiz will fail)".red()
    };
    let origins = if config.allow_origins.is_empty() {
        "(none)".to_string()
    } else {
        config.allow_origins.iter().collect::<Vec<_>>().join(", ")
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["Allowed origins".to_string(), origins]);
    table.add_row(vec!["Completion endpoint".to_string(), config.completion.endpoint()]);
    table.add_row(vec!["Model".to_string(), config.completion.model.clone()]);
    table.add_row(vec!["Temperature".to_string(), config.completion.temperature.to_string()]);
    table.add_row(vec!["Max tokens".to_string(), config.completion.max_tokens.to_string()]);
    table.add_row(vec!["OPENAI_API_KEY".to_string(), credential.to_string()]);
    println!("{table}");
    Ok(())
}
