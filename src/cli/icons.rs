//! Status glyphs for terminal output.

use console::{style, StyledObject};

pub fn success() -> StyledObject<&'static str> {
    style("✓").green()
}

pub fn error() -> StyledObject<&'static str> {
    style("✗").red()
}
