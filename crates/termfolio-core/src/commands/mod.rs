//! Command resolver.
//!
//! `resolve` maps a raw prompt string to a `Resolution`: an `Outcome`
//! (lines, a clear signal, or nothing) plus the side effects the command
//! asks for. Effects are returned as data so callers decide how (and
//! whether) to perform them.

mod format;

use crate::line::OutputLine;
use crate::portfolio::Portfolio;
use crate::theme::Theme;

/// Definition of a prompt command.
#[derive(Debug, Clone)]
pub struct Command {
    /// Name typed at the prompt.
    pub name: &'static str,
    /// Argument synopsis shown in help (empty when none).
    pub args: &'static str,
    /// Short description shown in help.
    pub description: &'static str,
    /// Hidden commands are left out of help and completion.
    pub hidden: bool,
}

impl Command {
    /// Returns the usage string, e.g. `theme [<name>]`.
    pub fn usage(&self) -> String {
        if self.args.is_empty() {
            self.name.to_string()
        } else {
            format!("{} {}", self.name, self.args)
        }
    }
}

const fn visible(name: &'static str, args: &'static str, description: &'static str) -> Command {
    Command {
        name,
        args,
        description,
        hidden: false,
    }
}

const fn hidden(name: &'static str) -> Command {
    Command {
        name,
        args: "",
        description: "",
        hidden: true,
    }
}

/// All commands, in help order.
pub const COMMANDS: &[Command] = &[
    visible("personnel", "", "View personnel file"),
    visible(
        "projects",
        "[<n>|all|search <kw>]",
        "Browse project archives",
    ),
    visible("records", "", "Access work history"),
    visible("comms", "", "External communications"),
    visible("skills", "", "Certifications & skills"),
    visible("awards", "", "Awards & recognition"),
    visible("college", "", "Education records"),
    visible("startups", "", "Ventures & startups"),
    visible("now", "", "Current focus"),
    visible("timeline", "", "Career timeline"),
    visible("theme", "[<name>]", "Change terminal color theme"),
    visible("email", "", "Open the contact form"),
    visible("resume", "", "Open resume document"),
    visible("help", "", "Display this help message"),
    visible("clear", "", "Clear terminal output"),
    hidden("whoami"),
    hidden("sudo"),
    hidden("hello"),
    hidden("coffee"),
    hidden("matrix"),
];

/// Names of the commands offered by help and tab completion, sorted.
pub fn public_command_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = COMMANDS
        .iter()
        .filter(|command| !command.hidden)
        .map(|command| command.name)
        .collect();
    names.sort_unstable();
    names
}

/// Returns the completion for `input`, if any.
///
/// The trimmed, lowercased input must be a non-empty prefix of at least one
/// public command. The lexicographically first match is returned unless it
/// equals the input already.
pub fn suggest(input: &str) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    public_command_names()
        .into_iter()
        .find(|name| name.starts_with(&needle))
        .filter(|name| *name != needle)
}

/// A side effect requested by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    /// Open the resume document.
    OpenResume,
    /// Switch the presentation theme.
    SetTheme(Theme),
}

/// What the session should do with a command's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Discard every rendered and pending line.
    Cleared,
    /// Blank input: no lines, nothing recorded.
    Empty,
    /// Lines to append to the output.
    Lines(Vec<OutputLine>),
}

/// Result of resolving one prompt string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub effects: Vec<CommandEffect>,
}

impl Resolution {
    fn lines(lines: Vec<OutputLine>) -> Self {
        Self {
            outcome: Outcome::Lines(lines),
            effects: Vec::new(),
        }
    }

    fn with_effect(lines: Vec<OutputLine>, effect: CommandEffect) -> Self {
        Self {
            outcome: Outcome::Lines(lines),
            effects: vec![effect],
        }
    }

    /// Returns the lines, or an empty slice for `Cleared`/`Empty`.
    pub fn output(&self) -> &[OutputLine] {
        match &self.outcome {
            Outcome::Lines(lines) => lines,
            Outcome::Cleared | Outcome::Empty => &[],
        }
    }
}

/// Resolves a raw prompt string against the portfolio.
///
/// Never fails: unknown commands and bad arguments produce error lines.
pub fn resolve(portfolio: &Portfolio, raw: &str) -> Resolution {
    let mut tokens = raw.split_whitespace();
    let Some(first) = tokens.next() else {
        return Resolution {
            outcome: Outcome::Empty,
            effects: Vec::new(),
        };
    };
    let name = first.to_lowercase();
    let args: Vec<&str> = tokens.collect();

    match name.as_str() {
        "clear" => Resolution {
            outcome: Outcome::Cleared,
            effects: Vec::new(),
        },
        "personnel" => Resolution::lines(format::personnel(portfolio)),
        "projects" => Resolution::lines(format::projects(portfolio, &args)),
        "records" => Resolution::lines(format::records(portfolio)),
        "comms" => Resolution::lines(format::comms(portfolio)),
        "skills" => Resolution::lines(format::skills(portfolio)),
        "awards" => Resolution::lines(format::awards(portfolio)),
        "college" => Resolution::lines(format::college(portfolio)),
        "startups" => Resolution::lines(format::startups(portfolio)),
        "now" => Resolution::lines(format::now(portfolio)),
        "timeline" => Resolution::lines(format::timeline(portfolio)),
        "theme" => theme(&args),
        "email" => Resolution::lines(format::email(portfolio)),
        "resume" => Resolution::with_effect(format::resume(), CommandEffect::OpenResume),
        "help" => Resolution::lines(format::help()),
        "whoami" | "sudo" | "hello" | "coffee" | "matrix" => {
            Resolution::lines(format::easter_egg(portfolio, &name))
        }
        _ => Resolution::lines(format::unrecognized(raw)),
    }
}

fn theme(args: &[&str]) -> Resolution {
    let Some(requested) = args.first() else {
        return Resolution::lines(format::theme_list());
    };
    match requested.parse::<Theme>() {
        Ok(theme) => {
            Resolution::with_effect(format::theme_set(theme), CommandEffect::SetTheme(theme))
        }
        Err(err) => Resolution::lines(format::theme_error(&err.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineKind;

    fn portfolio() -> Portfolio {
        Portfolio::builtin().unwrap()
    }

    fn texts(resolution: &Resolution) -> Vec<&str> {
        resolution
            .output()
            .iter()
            .map(|line| line.text.as_str())
            .collect()
    }

    fn first_non_blank(resolution: &Resolution) -> &str {
        resolution
            .output()
            .iter()
            .find(|line| !line.is_blank())
            .map(|line| line.text.as_str())
            .expect("non-blank line")
    }

    #[test]
    fn test_every_public_command_produces_lines() {
        let portfolio = portfolio();
        for command in COMMANDS.iter().filter(|c| c.name != "clear") {
            let resolution = resolve(&portfolio, command.name);
            assert!(
                matches!(&resolution.outcome, Outcome::Lines(lines) if !lines.is_empty()),
                "{} produced no lines",
                command.name
            );
        }
    }

    #[test]
    fn test_command_names_are_case_insensitive() {
        let portfolio = portfolio();
        assert_eq!(
            resolve(&portfolio, "PERSONNEL"),
            resolve(&portfolio, "personnel")
        );
        assert_eq!(
            resolve(&portfolio, "  Skills  "),
            resolve(&portfolio, "skills")
        );
    }

    #[test]
    fn test_clear_in_any_casing() {
        let portfolio = portfolio();
        for input in ["clear", "CLEAR", "  Clear "] {
            assert_eq!(resolve(&portfolio, input).outcome, Outcome::Cleared);
        }
    }

    #[test]
    fn test_blank_input_is_empty() {
        let portfolio = portfolio();
        for input in ["", "   ", "\t \n"] {
            let resolution = resolve(&portfolio, input);
            assert_eq!(resolution.outcome, Outcome::Empty);
            assert!(resolution.effects.is_empty());
        }
    }

    #[test]
    fn test_unknown_command_echoes_uppercased_input() {
        let portfolio = portfolio();
        for input in ["foo", "  rm -rf / ", "Bogus Command"] {
            let resolution = resolve(&portfolio, input);
            let expected = input.trim().to_uppercase();
            assert!(first_non_blank(&resolution).contains(&expected));
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let portfolio = portfolio();
        for input in ["projects 3", "theme amber", "nonsense", "help"] {
            assert_eq!(resolve(&portfolio, input), resolve(&portfolio, input));
        }
    }

    #[test]
    fn test_projects_index_out_of_range_cites_range() {
        let portfolio = portfolio();
        let count = portfolio.projects.len();
        for arg in ["0".to_string(), (count + 1).to_string(), "999".to_string()] {
            let resolution = resolve(&portfolio, &format!("projects {arg}"));
            let joined = texts(&resolution).join("\n");
            assert!(
                joined.contains(&format!("1-{count}")),
                "missing range in {joined}"
            );
        }
    }

    #[test]
    fn test_projects_index_in_range_names_project() {
        let portfolio = portfolio();
        for (i, project) in portfolio.projects.iter().enumerate() {
            let resolution = resolve(&portfolio, &format!("projects {}", i + 1));
            let joined = texts(&resolution).join("\n");
            assert!(joined.contains(project.title()));
        }
    }

    #[test]
    fn test_projects_non_numeric_index_is_error() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "projects banana");
        assert!(first_non_blank(&resolution).contains("INVALID"));
    }

    #[test]
    fn test_projects_search_matches_case_insensitively() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "projects search PYTHON");
        let command_lines: Vec<&OutputLine> = resolution
            .output()
            .iter()
            .filter(|line| matches!(line.kind, LineKind::Command { .. }))
            .collect();
        let expected = portfolio
            .projects
            .iter()
            .filter(|p| p.matches("python"))
            .count();
        assert!(expected > 0);
        assert_eq!(command_lines.len(), expected);
        for line in command_lines {
            let LineKind::Command { command_text } = &line.kind else {
                unreachable!()
            };
            let index: usize = command_text
                .strip_prefix("projects ")
                .unwrap()
                .parse()
                .unwrap();
            assert!(portfolio.projects[index - 1].matches("python"));
        }
    }

    #[test]
    fn test_projects_search_no_results() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "projects search zzzznotfound");
        let joined = texts(&resolution).join("\n");
        assert!(joined.contains("NO RESULTS"));
    }

    #[test]
    fn test_projects_search_missing_term() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "projects search");
        assert!(first_non_blank(&resolution).contains("SEARCH TERM"));
    }

    #[test]
    fn test_projects_all_lists_every_project() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "projects all");
        let joined = texts(&resolution).join("\n");
        for project in &portfolio.projects {
            assert!(joined.contains(project.title()));
        }
    }

    #[test]
    fn test_theme_valid_emits_effect() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "theme Amber");
        assert_eq!(
            resolution.effects,
            vec![CommandEffect::SetTheme(Theme::Amber)]
        );
    }

    #[test]
    fn test_theme_invalid_lists_options_without_effect() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "theme magenta");
        assert!(resolution.effects.is_empty());
        let joined = texts(&resolution).join("\n");
        assert!(joined.contains("MAGENTA"));
        assert!(joined.contains("green, amber, blue, purple, cyan"));
    }

    #[test]
    fn test_resume_requests_open() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "resume");
        assert_eq!(resolution.effects, vec![CommandEffect::OpenResume]);
        assert!(!resolution.output().is_empty());
    }

    #[test]
    fn test_email_includes_contact_form_marker() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "email");
        assert!(
            resolution
                .output()
                .iter()
                .any(|line| line.kind == LineKind::ContactForm)
        );
    }

    #[test]
    fn test_comms_email_link_is_copyable() {
        let portfolio = portfolio();
        let resolution = resolve(&portfolio, "comms");
        assert!(resolution.output().iter().any(|line| matches!(
            &line.kind,
            LineKind::Link { copyable: Some(text), .. } if text == "aiden.t.terry@gmail.com"
        )));
    }

    #[test]
    fn test_help_hides_easter_eggs() {
        let portfolio = portfolio();
        let joined = texts(&resolve(&portfolio, "help")).join("\n");
        assert!(joined.contains("personnel"));
        assert!(!joined.contains("whoami"));
        assert!(!public_command_names().contains(&"sudo"));
    }

    #[test]
    fn test_suggest_prefix() {
        assert_eq!(suggest("pro"), Some("projects"));
        assert_eq!(suggest("  PER"), Some("personnel"));
        assert_eq!(suggest("c"), Some("clear"));
        assert_eq!(suggest("projects"), None);
        assert_eq!(suggest("projects 1"), None);
        assert_eq!(suggest(""), None);
        assert_eq!(suggest("zzz"), None);
        assert_eq!(suggest("who"), None);
    }
}
