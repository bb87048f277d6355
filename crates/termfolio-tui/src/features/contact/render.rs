//! Contact form rendering.
//!
//! The form is drawn inline in the transcript at its marker line, one row
//! per field plus the send button and an optional status row.

use ratatui::text::{Line, Span};

use super::state::{ContactField, ContactFormState, ContactStatus};
use crate::common::{Palette, truncate_with_ellipsis};
use crate::input::field_spans;

const LABEL_WIDTH: usize = 10;

/// Row shown in place of a form that was superseded by a newer one.
pub const CLOSED_FORM: &str = "  [TRANSMISSION FORM CLOSED]";

/// A rendered form row and the field it belongs to.
pub struct FormRow {
    pub line: Line<'static>,
    pub field: Option<ContactField>,
}

/// Builds the rows of the live form.
pub fn form_rows(
    form: &ContactFormState,
    palette: Palette,
    focused: bool,
    cursor_visible: bool,
    width: usize,
) -> Vec<FormRow> {
    let border = "─".repeat(width.saturating_sub(2).min(60));

    if form.is_sending() {
        return vec![
            FormRow {
                line: Line::styled(format!(" {border}"), palette.dim()),
                field: None,
            },
            FormRow {
                line: Line::styled("  ✓ OPENING EMAIL CLIENT...", palette.bold()),
                field: None,
            },
            FormRow {
                line: Line::styled(format!(" {border}"), palette.dim()),
                field: None,
            },
        ];
    }

    let mut rows = vec![FormRow {
        line: Line::styled(format!(" {border}"), palette.dim()),
        field: None,
    }];

    for field in ContactField::ALL {
        let active = focused && form.field == field;
        let line = match form.buffer(field) {
            Some(buffer) => {
                let label_style = if active {
                    palette.inverted()
                } else {
                    palette.text()
                };
                let mut spans = vec![
                    Span::raw("  "),
                    Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
                    Span::raw(" "),
                ];
                let value_width = width.saturating_sub(LABEL_WIDTH + 3);
                if active {
                    spans.extend(field_spans(buffer, palette, cursor_visible, value_width));
                } else if buffer.is_empty() {
                    spans.push(Span::styled(field.placeholder(), palette.dim()));
                } else {
                    spans.push(Span::styled(
                        truncate_with_ellipsis(buffer.text(), value_width),
                        palette.text(),
                    ));
                }
                Line::from(spans)
            }
            None => {
                let style = if active {
                    palette.inverted()
                } else {
                    palette.bold()
                };
                Line::from(vec![Span::raw("  "), Span::styled(field.label(), style)])
            }
        };
        rows.push(FormRow {
            line,
            field: Some(field),
        });
    }

    if let ContactStatus::Invalid(err) = form.status {
        rows.push(FormRow {
            line: Line::styled(format!("  ! {err}"), palette.bold()),
            field: None,
        });
    }
    rows.push(FormRow {
        line: Line::styled(format!(" {border}"), palette.dim()),
        field: None,
    });
    rows
}
