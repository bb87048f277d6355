//! Portfolio command handlers.

use termfolio_core::portfolio::Portfolio;

pub fn export() {
    print!("{}", Portfolio::builtin_source());
}
