//! Non-interactive command runner.
//!
//! Resolves one command the same way the prompt does and prints the lines
//! without animation. Effects such as opening the resume are reported on
//! stderr, never performed.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde_json::json;
use termfolio_core::commands::{self, CommandEffect, Outcome, Resolution};
use termfolio_core::config::Config;
use termfolio_core::line::{LineKind, OutputLine};
use termfolio_core::portfolio::Portfolio;

pub fn run(config: &Config, words: &[String], json: bool) -> Result<()> {
    let portfolio = Portfolio::load(config.portfolio_file.as_deref())?;
    let raw = words.join(" ");
    let resolution = commands::resolve(&portfolio, &raw);

    if json {
        let value = to_json(&resolution, config);
        let out = serde_json::to_string_pretty(&value).context("serialize output")?;
        println!("{out}");
    } else {
        print!("{}", to_text(resolution.output(), &portfolio));
        for effect in &resolution.effects {
            eprintln!("{}", describe_effect(*effect, config));
        }
    }
    Ok(())
}

fn to_text(lines: &[OutputLine], portfolio: &Portfolio) -> String {
    let mut out = String::new();
    for line in lines {
        match &line.kind {
            LineKind::ContactForm => {
                let _ = writeln!(
                    out,
                    "[CONTACT FORM: RUN `termfolio` OR WRITE TO {}]",
                    portfolio.contact.recipient.to_uppercase()
                );
            }
            LineKind::Link { url, .. } if !line.text.contains(url.as_str()) => {
                let _ = writeln!(out, "{} <{url}>", line.text);
            }
            _ => {
                let _ = writeln!(out, "{}", line.text);
            }
        }
    }
    out
}

fn to_json(resolution: &Resolution, config: &Config) -> serde_json::Value {
    let outcome = match resolution.outcome {
        Outcome::Cleared => "cleared",
        Outcome::Empty => "empty",
        Outcome::Lines(_) => "lines",
    };
    let effects: Vec<String> = resolution
        .effects
        .iter()
        .map(|effect| describe_effect(*effect, config))
        .collect();
    json!({
        "outcome": outcome,
        "lines": resolution.output(),
        "effects": effects,
    })
}

fn describe_effect(effect: CommandEffect, config: &Config) -> String {
    match effect {
        CommandEffect::OpenResume => match &config.resume {
            Some(resume) => format!("would open resume: {resume}"),
            None => "would open resume: none configured".to_string(),
        },
        CommandEffect::SetTheme(theme) => format!("would switch theme to {theme}"),
    }
}

#[cfg(test)]
mod tests {
    use termfolio_core::theme::Theme;

    use super::*;

    fn portfolio() -> Portfolio {
        Portfolio::builtin().unwrap()
    }

    #[test]
    fn test_text_output_keeps_line_order() {
        let portfolio = portfolio();
        let resolution = commands::resolve(&portfolio, "help");
        let text = to_text(resolution.output(), &portfolio);
        let first = text.find("AVAILABLE COMMANDS:").unwrap();
        let projects = text.find("projects").unwrap();
        assert!(first < projects);
        assert_eq!(text.lines().count(), resolution.output().len());
    }

    #[test]
    fn test_text_output_names_link_targets() {
        let lines = vec![OutputLine::link("[GITHUB]", "https://github.com/terry")];
        let text = to_text(&lines, &portfolio());
        assert_eq!(text, "[GITHUB] <https://github.com/terry>\n");
    }

    #[test]
    fn test_text_output_replaces_contact_form() {
        let portfolio = portfolio();
        let resolution = commands::resolve(&portfolio, "email");
        let text = to_text(resolution.output(), &portfolio);
        assert!(text.contains("[CONTACT FORM:"));
    }

    #[test]
    fn test_json_output_for_clear_is_empty() {
        let resolution = commands::resolve(&portfolio(), "clear");
        let value = to_json(&resolution, &Config::default());
        assert_eq!(value["outcome"], "cleared");
        assert_eq!(value["lines"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_output_tags_line_kinds() {
        let resolution = commands::resolve(&portfolio(), "projects");
        let value = to_json(&resolution, &Config::default());
        let lines = value["lines"].as_array().unwrap();
        assert!(lines.iter().any(|line| line["kind"] == "command"));
        assert!(lines.iter().all(|line| line["text"].is_string()));
    }

    #[test]
    fn test_effects_are_described() {
        let mut config = Config::default();
        assert_eq!(
            describe_effect(CommandEffect::OpenResume, &config),
            "would open resume: none configured"
        );
        config.resume = Some("https://terry.dev/resume.pdf".to_string());
        assert_eq!(
            describe_effect(CommandEffect::OpenResume, &config),
            "would open resume: https://terry.dev/resume.pdf"
        );
        assert_eq!(
            describe_effect(CommandEffect::SetTheme(Theme::Amber), &config),
            "would switch theme to amber"
        );
    }
}
