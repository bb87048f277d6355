//! Line builders for each command's output.

use crate::line::OutputLine;
use crate::portfolio::{Portfolio, Project};
use crate::theme::Theme;

use super::COMMANDS;

const SEP: &str = "════════════════════════════════════════";
const THIN: &str = "────────────────────────────────────────";

/// Width of the usage column in help output.
const USAGE_WIDTH: usize = 30;

fn line(text: impl Into<String>) -> OutputLine {
    OutputLine::plain(text)
}

fn blank() -> OutputLine {
    OutputLine::blank()
}

/// Opening block shared by every section view.
fn section(title: &str) -> Vec<OutputLine> {
    vec![blank(), line(SEP), line(format!("  {title}")), line(SEP)]
}

fn error(message: impl Into<String>) -> Vec<OutputLine> {
    vec![blank(), line(message), blank()]
}

pub(super) fn personnel(portfolio: &Portfolio) -> Vec<OutputLine> {
    let p = &portfolio.personnel;
    let mut out = section(&format!("PERSONNEL FILE: {}", p.name));
    out.push(line(format!("  DESIGNATION:  {}", p.designation)));
    out.push(line(format!("  STATUS:       {}", p.status)));
    out.push(line(format!("  LOCATION:     {}", p.location)));
    out.push(line(format!("  CLEARANCE:    {}", p.clearance)));
    out.push(blank());
    out.extend(p.bio.iter().map(|row| line(format!("  {row}"))));
    out.push(blank());
    out.push(line(SEP));
    out.push(blank());
    out
}

pub(super) fn projects(portfolio: &Portfolio, args: &[&str]) -> Vec<OutputLine> {
    match args {
        [] => projects_index(portfolio),
        [all] if all.eq_ignore_ascii_case("all") => projects_all(portfolio),
        [search, terms @ ..] if search.eq_ignore_ascii_case("search") => {
            project_search(portfolio, &terms.join(" "))
        }
        [index, ..] => project_detail(portfolio, index),
    }
}

fn index_label(i: usize) -> String {
    format!("[{:03}]", i + 1)
}

fn projects_index(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("PROJECT ARCHIVES");
    for (i, project) in portfolio.projects.iter().enumerate() {
        out.push(OutputLine::command(
            format!("  {} {}", index_label(i), project.title()),
            format!("projects {}", i + 1),
        ));
    }
    out.push(line(THIN));
    out.push(line("  'PROJECTS <N>' FOR DETAILS, 'PROJECTS ALL' FOR EVERYTHING,"));
    out.push(line("  'PROJECTS SEARCH <KEYWORD>' TO FILTER."));
    out.push(blank());
    out
}

fn project_rows(out: &mut Vec<OutputLine>, i: usize, project: &Project) {
    out.push(line(format!("  {} {}", index_label(i), project.title())));
    out.push(line(format!("        Status: {}", project.status)));
    out.push(line(format!("        Tech:   {}", project.tech)));
    out.push(line(format!("        Desc:   {}", project.description)));
    if let Some(url) = project.url() {
        out.push(OutputLine::link(format!("        Link:   {url}"), url));
    } else if let Some(link) = project.link.as_deref() {
        out.push(line(format!("        Link:   {}", link.trim())));
    }
    out.push(line(THIN));
}

fn projects_all(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("PROJECT ARCHIVES");
    for (i, project) in portfolio.projects.iter().enumerate() {
        project_rows(&mut out, i, project);
    }
    out.push(blank());
    out
}

fn project_detail(portfolio: &Portfolio, raw_index: &str) -> Vec<OutputLine> {
    let count = portfolio.projects.len();
    let Ok(index) = raw_index.parse::<usize>() else {
        return error(format!(
            "ERROR: INVALID PROJECT INDEX: \"{}\". VALID RANGE: 1-{count}",
            raw_index.to_uppercase()
        ));
    };
    let Some(project) = index
        .checked_sub(1)
        .and_then(|i| portfolio.projects.get(i))
    else {
        return error(format!(
            "ERROR: PROJECT {index} NOT FOUND. VALID RANGE: 1-{count}"
        ));
    };

    let mut out = section(&format!("PROJECT FILE {}", index_label(index - 1)));
    project_rows(&mut out, index - 1, project);
    out.push(blank());
    out
}

fn project_search(portfolio: &Portfolio, keyword: &str) -> Vec<OutputLine> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return error("ERROR: MISSING SEARCH TERM. USAGE: PROJECTS SEARCH <KEYWORD>");
    }

    let mut out = section(&format!("SEARCH RESULTS: \"{}\"", keyword.to_uppercase()));
    let mut found = 0;
    for (i, project) in portfolio.projects.iter().enumerate() {
        if project.matches(keyword) {
            found += 1;
            out.push(OutputLine::command(
                format!("  {} {}", index_label(i), project.title()),
                format!("projects {}", i + 1),
            ));
        }
    }
    if found == 0 {
        out.push(line("  NO RESULTS FOUND."));
    } else {
        out.push(line(THIN));
        out.push(line(format!("  {found} MATCH(ES).")));
    }
    out.push(blank());
    out
}

pub(super) fn records(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("WORK HISTORY RECORDS");
    for record in &portfolio.records {
        out.push(line(format!("  {}", record.title)));
        out.push(line(format!(
            "  {} | {}",
            record.organization, record.period
        )));
        out.push(line(format!("  {}", record.description)));
        out.push(line(THIN));
    }
    out.push(blank());
    out
}

pub(super) fn comms(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("EXTERNAL COMMUNICATIONS");
    for comm in &portfolio.comms {
        let text = match &comm.copyable {
            Some(copyable) => format!("  [{}] {copyable}  (CLICK TO COPY)", comm.label),
            None => format!("  [{}] {}", comm.label, comm.url),
        };
        out.push(match &comm.copyable {
            Some(copyable) => OutputLine::copy_link(text, &comm.url, copyable),
            None => OutputLine::link(text, &comm.url),
        });
        out.push(line(format!("    Type: {}", comm.kind)));
        out.push(line(THIN));
    }
    out.push(blank());
    out
}

pub(super) fn skills(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("CERTIFICATIONS & SKILLS");
    for skill in &portfolio.skills {
        out.push(line(format!("  [{}]", skill.category)));
        out.push(line(format!("    {}", skill.items.join(" | "))));
        out.push(line(THIN));
    }
    out.push(blank());
    out
}

pub(super) fn awards(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("AWARDS & RECOGNITION");
    for award in &portfolio.awards {
        out.push(line(format!("  {}", award.title)));
        out.push(line(format!("  {} | {}", award.issuer, award.year)));
        out.push(line(format!("  {}", award.description)));
        out.push(line(THIN));
    }
    out.push(blank());
    out
}

pub(super) fn college(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("EDUCATION RECORDS");
    for school in &portfolio.college {
        out.push(line(format!("  {}", school.institution)));
        out.push(line(format!("  {} | {}", school.program, school.period)));
        out.extend(
            school
                .highlights
                .iter()
                .map(|highlight| line(format!("    - {highlight}"))),
        );
        out.push(line(THIN));
    }
    out.push(blank());
    out
}

pub(super) fn startups(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("VENTURES & STARTUPS");
    for startup in &portfolio.startups {
        out.push(line(format!("  {} [{}]", startup.name, startup.status)));
        out.push(line(format!("    Role: {}", startup.role)));
        out.push(line(format!("    {}", startup.description)));
        out.push(line(THIN));
    }
    out.push(blank());
    out
}

pub(super) fn now(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("CURRENT FOCUS");
    out.extend(portfolio.now.iter().map(|item| line(format!("  > {item}"))));
    out.push(blank());
    out
}

pub(super) fn timeline(portfolio: &Portfolio) -> Vec<OutputLine> {
    let mut out = section("CAREER TIMELINE");
    out.extend(
        portfolio
            .timeline
            .iter()
            .map(|entry| line(format!("  {}  {}", entry.date, entry.event))),
    );
    out.push(blank());
    out
}

pub(super) fn theme_list() -> Vec<OutputLine> {
    vec![
        blank(),
        line("AVAILABLE THEMES:"),
        line(format!("  {}", Theme::names_list())),
        line("USAGE: THEME <NAME>"),
        blank(),
    ]
}

pub(super) fn theme_set(theme: Theme) -> Vec<OutputLine> {
    vec![
        blank(),
        line(format!("THEME SET: {}", theme.name().to_uppercase())),
        blank(),
    ]
}

pub(super) fn theme_error(requested: &str) -> Vec<OutputLine> {
    vec![
        blank(),
        line(format!(
            "ERROR: UNKNOWN THEME \"{}\"",
            requested.to_uppercase()
        )),
        line(format!("AVAILABLE THEMES: {}", Theme::names_list())),
        blank(),
    ]
}

pub(super) fn email(portfolio: &Portfolio) -> Vec<OutputLine> {
    vec![
        blank(),
        line(format!(
            "SECURE CHANNEL TO {}",
            portfolio.contact.recipient.to_uppercase()
        )),
        line("TAB/ARROWS TO MOVE BETWEEN FIELDS, ENTER ON [SEND] TO TRANSMIT."),
        OutputLine::contact_form(),
        blank(),
    ]
}

pub(super) fn resume() -> Vec<OutputLine> {
    vec![blank(), line("OPENING RESUME DOCUMENT..."), blank()]
}

pub(super) fn help() -> Vec<OutputLine> {
    let mut out = vec![blank(), line("AVAILABLE COMMANDS:")];
    out.extend(
        COMMANDS
            .iter()
            .filter(|command| !command.hidden)
            .map(|command| {
                line(format!(
                    "  {:<USAGE_WIDTH$} - {}",
                    command.usage(),
                    command.description
                ))
            }),
    );
    out.push(blank());
    out
}

pub(super) fn easter_egg(portfolio: &Portfolio, name: &str) -> Vec<OutputLine> {
    let text = match name {
        "whoami" => format!(
            "VISITOR. BUT THIS TERMINAL BELONGS TO {}.",
            portfolio.personnel.name.to_uppercase()
        ),
        "sudo" => "PERMISSION DENIED. THIS INCIDENT WILL BE REPORTED.".to_string(),
        "hello" => "HELLO, OPERATOR.".to_string(),
        "coffee" => "ERROR 418: I'M A TEAPOT.".to_string(),
        _ => "WAKE UP, NEO...".to_string(),
    };
    vec![blank(), line(text), blank()]
}

pub(super) fn unrecognized(raw: &str) -> Vec<OutputLine> {
    vec![
        blank(),
        line(format!(
            "ERROR: COMMAND NOT RECOGNIZED: \"{}\"",
            raw.trim().to_uppercase()
        )),
        line("TYPE 'HELP' FOR AVAILABLE COMMANDS."),
        blank(),
    ]
}
