//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use termfolio_core::commands::{self, CommandEffect, Outcome};
use termfolio_core::line::{LineKind, OutputLine};

use crate::contact::ContactOutcome;
use crate::effects::{OneShot, UiEffect};
use crate::events::UiEvent;
use crate::input::InputOutcome;
use crate::state::{AppState, CONTACT_RESET_DELAY, Focus, NOTICE_DURATION, Phase, TuiState};
use crate::transcript::RowTarget;
use crate::typewriter::Cue;
use crate::{boot, contact, header, input, transcript, typewriter};

/// Rows moved per mouse wheel notch.
const WHEEL_SCROLL_ROWS: usize = 3;

const WELCOME: &str = "SYSTEM READY. TYPE 'HELP' FOR AVAILABLE COMMANDS.";
const COPIED_NOTICE: &str = "COPIED TO CLIPBOARD";

/// Effects to run once, before the first event.
pub fn start(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = if app.settings.skip_boot {
        enter_shell(app)
    } else {
        vec![UiEffect::StartBootTimer {
            interval: app.settings.boot_interval,
        }]
    };
    effects.extend(typewriter::sync_schedule(
        &app.tui.lines,
        &mut app.tui.reveal_timer,
    ));
    effects
}

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = match event {
        UiEvent::Tick => {
            app.tui.tick_count = app.tui.tick_count.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::RevealTick { epoch } => {
            typewriter::handle_reveal_tick(&mut app.tui.lines, epoch)
                .map(UiEffect::PlayCue)
                .into_iter()
                .collect()
        }
        UiEvent::BootTick => match app.tui.phase {
            Phase::Boot => boot::handle_boot_tick(&mut app.tui.boot, app.settings.prompt_delay),
            Phase::Shell => vec![UiEffect::StopBootTimer],
        },
        UiEvent::BootPromptDue => {
            if app.tui.phase == Phase::Boot {
                boot::handle_prompt_due(&mut app.tui.boot);
            }
            vec![]
        }
        UiEvent::ContactResetDue { generation } => {
            app.tui.contact.expire_send(generation);
            vec![]
        }
        UiEvent::NoticeExpired { id } => {
            app.tui.expire_notice(id);
            vec![]
        }
        UiEvent::ThemeChanged(theme) => {
            tracing::debug!(%theme, "theme changed");
            app.tui.theme = theme;
            vec![]
        }
        UiEvent::ClipboardCopied => {
            let id = app.tui.show_notice(COPIED_NOTICE);
            vec![UiEffect::ScheduleOnce {
                delay: NOTICE_DURATION,
                timer: OneShot::NoticeExpiry { id },
            }]
        }
    };

    effects.extend(typewriter::sync_schedule(
        &app.tui.lines,
        &mut app.tui.reveal_timer,
    ));
    effects
}

fn handle_frame(tui: &mut TuiState, width: u16, height: u16) {
    tui.terminal_size = (width, height);
    let rows = transcript::build_rows(tui, width).len();
    tui.scroll
        .update_layout(rows, transcript::viewport_height(height));
}

/// Switches from the boot banner to the shell and queues the welcome batch.
fn enter_shell(app: &mut AppState) -> Vec<UiEffect> {
    if app.tui.phase == Phase::Shell {
        return vec![];
    }
    tracing::debug!("entering shell");
    app.tui.phase = Phase::Shell;

    let help = commands::resolve(&app.portfolio, "help");
    let mut welcome = vec![OutputLine::plain(WELCOME), OutputLine::blank()];
    welcome.extend(help.output().iter().cloned());
    app.tui.lines.enqueue(welcome);

    vec![UiEffect::StopBootTimer]
}

/// True when the contact form is drawn and can take input.
fn form_is_live(tui: &TuiState) -> bool {
    transcript::live_form_index(tui).is_some()
}

fn contact_focused(tui: &TuiState) -> bool {
    tui.focus == Focus::Contact && form_is_live(tui)
}

/// Runs a command line exactly as if it had been typed and submitted.
fn submit(app: &mut AppState, raw: &str) -> Vec<UiEffect> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return vec![];
    }
    app.tui.input.record(trimmed);
    app.tui.scroll.scroll_to_bottom();

    let resolution = commands::resolve(&app.portfolio, raw);
    match resolution.outcome {
        Outcome::Cleared => {
            tracing::debug!("transcript cleared");
            app.tui.lines.reset();
            app.tui.contact.reset();
            app.tui.focus = Focus::Prompt;
        }
        Outcome::Lines(lines) => {
            if lines.iter().any(|line| line.kind == LineKind::ContactForm) {
                app.tui.contact.reset();
                app.tui.focus = Focus::Contact;
            }
            let mut batch = Vec::with_capacity(lines.len() + 1);
            batch.push(OutputLine::echo(raw));
            batch.extend(lines);
            app.tui.lines.enqueue(batch);
        }
        Outcome::Empty => {}
    }

    resolution
        .effects
        .into_iter()
        .map(|effect| match effect {
            CommandEffect::OpenResume => UiEffect::OpenResume,
            CommandEffect::SetTheme(theme) => UiEffect::BroadcastTheme(theme),
        })
        .collect()
}

fn keystroke(typed: Option<char>) -> Vec<UiEffect> {
    typed
        .filter(|ch| !ch.is_whitespace())
        .map(|_| UiEffect::PlayCue(Cue::Keystroke))
        .into_iter()
        .collect()
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            if app.tui.phase == Phase::Shell {
                if contact_focused(&app.tui) {
                    contact::handle_paste(&mut app.tui.contact, &text);
                } else {
                    input::handle_paste(&mut app.tui.input, &text);
                }
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'd'))
    {
        app.tui.should_quit = true;
        return vec![UiEffect::Quit];
    }

    match app.tui.phase {
        Phase::Boot => {
            if key.code == KeyCode::Enter && app.tui.boot.prompt_visible {
                enter_shell(app)
            } else {
                vec![]
            }
        }
        Phase::Shell => handle_shell_key(app, key),
    }
}

fn handle_shell_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let skipped = key.code != KeyCode::Tab && app.tui.lines.is_animating();
    if skipped {
        app.tui.lines.skip();
    }

    match key.code {
        KeyCode::PageUp => {
            app.tui.scroll.page_up();
            return vec![];
        }
        KeyCode::PageDown => {
            app.tui.scroll.page_down();
            return vec![];
        }
        KeyCode::Esc if skipped => return vec![],
        _ => {}
    }

    if contact_focused(&app.tui) {
        let recipient = app.portfolio.contact.recipient.clone();
        return match contact::handle_key(&mut app.tui.contact, key, &recipient) {
            ContactOutcome::Ignored => vec![],
            ContactOutcome::Edited { typed } => keystroke(typed),
            ContactOutcome::Leave => {
                app.tui.focus = Focus::Prompt;
                vec![]
            }
            ContactOutcome::Send { url } => vec![
                UiEffect::OpenUrl { url },
                UiEffect::ScheduleOnce {
                    delay: CONTACT_RESET_DELAY,
                    timer: OneShot::ContactReset {
                        generation: app.tui.contact.generation,
                    },
                },
            ],
        };
    }

    if key.code == KeyCode::Esc {
        app.tui.input.clear();
        return vec![];
    }

    match input::handle_key(&mut app.tui.input, key) {
        InputOutcome::Ignored => vec![],
        InputOutcome::Edited { typed } => keystroke(typed),
        InputOutcome::Submitted(raw) => submit(app, &raw),
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.tui.scroll.scroll_up(WHEEL_SCROLL_ROWS);
            vec![]
        }
        MouseEventKind::ScrollDown => {
            app.tui.scroll.scroll_down(WHEEL_SCROLL_ROWS);
            vec![]
        }
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, mouse.column, mouse.row),
        _ => vec![],
    }
}

fn handle_click(app: &mut AppState, column: u16, row: u16) -> Vec<UiEffect> {
    if row == 0 {
        let Some(command) = header::hit_test(app.tui.terminal_size.0, column) else {
            return vec![];
        };
        let mut effects = enter_shell(app);
        effects.extend(submit(app, command));
        return effects;
    }

    match transcript::hit_test(&app.tui, column, row) {
        Some(RowTarget::Line(index)) => activate_line(app, index),
        Some(RowTarget::Field(field)) => {
            if !app.tui.contact.is_sending() {
                app.tui.focus = Focus::Contact;
                app.tui.contact.field = field;
            }
            vec![]
        }
        Some(RowTarget::Prompt) => {
            app.tui.focus = Focus::Prompt;
            vec![]
        }
        Some(RowTarget::Inert) | None => vec![],
    }
}

fn activate_line(app: &mut AppState, index: usize) -> Vec<UiEffect> {
    let Some(rendered) = app.tui.lines.lines().get(index) else {
        return vec![];
    };
    match rendered.line.kind.clone() {
        LineKind::Command { command_text } => {
            app.tui.focus = Focus::Prompt;
            submit(app, &command_text)
        }
        LineKind::Link {
            copyable: Some(text),
            ..
        } => vec![UiEffect::CopyToClipboard { text }],
        LineKind::Link { url, copyable: None } => vec![UiEffect::OpenUrl { url }],
        LineKind::Plain | LineKind::ContactForm => vec![],
    }
}
