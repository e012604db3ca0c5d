use crate::api::models::Clan;
use colored::*;

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_section(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}", "=".repeat(60).cyan());
}

/// The add-player form's clan choices (the select-element analog).
pub fn display_clan_options(clans: &[Clan]) {
    display_section("🏳 CLÃS DISPONÍVEIS (use com add-player --clan)");

    if clans.is_empty() {
        println!("{}", "No clans available".yellow());
        return;
    }

    for clan in clans {
        println!("  {} → {}", clan.id.to_string().bold(), clan.name);
    }
}
