//! Boot banner progress.

/// Banner shown one line at a time before the shell starts.
pub const BOOT_LINES: &[&str] = &[
    "TERRY SYSTEMS (TM) PORTFOLIO INTERFACE",
    "AIDEN TERRY PROFESSIONAL ACCESS SYSTEM V1.0",
    "COPYRIGHT 2021 TERRY SYSTEMS",
    "",
    "INITIALIZING...",
    "LOADING PERSONNEL FILES... DONE",
    "LOADING PROJECT ARCHIVES... DONE",
    "LOADING WORK HISTORY... DONE",
    "LOADING COMMUNICATIONS... DONE",
    "LOADING CERTIFICATIONS... DONE",
    "",
];

pub const BOOT_PROMPT: &str = "> PRESS ENTER TO CONTINUE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootState {
    /// Number of banner lines shown.
    pub shown: usize,
    /// True once the continue prompt is visible.
    pub prompt_visible: bool,
}

impl BootState {
    pub fn visible_lines(&self) -> &'static [&'static str] {
        &BOOT_LINES[..self.shown.min(BOOT_LINES.len())]
    }

    pub fn is_exhausted(&self) -> bool {
        self.shown >= BOOT_LINES.len()
    }

    /// Shows one more banner line. Returns false once all are shown.
    pub fn advance(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.shown += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_until_exhausted() {
        let mut boot = BootState::default();
        let mut steps = 0;
        while boot.advance() {
            steps += 1;
        }
        assert_eq!(steps, BOOT_LINES.len());
        assert!(boot.is_exhausted());
        assert_eq!(boot.visible_lines(), BOOT_LINES);
        assert!(!boot.prompt_visible);
    }
}
