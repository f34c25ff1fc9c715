//! Terminal styles.
//!
//! Rendering code refers to styles by role (header, muted, warning, ...). The actual colors
//! come from a light or a dark palette, picked once via `dark-light`. When stdout is not a
//! terminal `console` drops the escape codes, so piped output is plain text.

use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    /// Column headers and section titles
    pub header: Style,
    /// Separators and secondary text
    pub faint: Style,
    /// Footers and hints
    pub muted: Style,
    /// Rows of inactive employees
    pub inactive: Style,
    /// Selected facet options
    pub selected: Style,
    pub info: Style,
    pub warning: Style,
    pub error: Style,
}

pub static THEME: Lazy<Theme> = Lazy::new(|| {
    if !console::colors_enabled() {
        return plain_theme();
    }
    match dark_light::detect() {
        dark_light::Mode::Light => light_theme(),
        _ => dark_theme(),
    }
});

fn plain_theme() -> Theme {
    Theme {
        header: Style::new(),
        faint: Style::new(),
        muted: Style::new(),
        inactive: Style::new(),
        selected: Style::new(),
        info: Style::new(),
        warning: Style::new(),
        error: Style::new(),
    }
}

fn light_theme() -> Theme {
    Theme {
        header: Style::new().black().bold(),
        faint: Style::new().color256(250),
        muted: Style::new().color256(243),
        inactive: Style::new().color256(246).italic(),
        selected: Style::new().color256(25).bold(),
        info: Style::new().color256(243),
        warning: Style::new().color256(136).bold(),
        error: Style::new().red().bold(),
    }
}

fn dark_theme() -> Theme {
    Theme {
        header: Style::new().white().bold(),
        faint: Style::new().color256(240),
        muted: Style::new().color256(248),
        inactive: Style::new().color256(244).italic(),
        selected: Style::new().color256(117).bold(),
        info: Style::new().color256(248),
        warning: Style::new().yellow().bold(),
        error: Style::new().red().bold(),
    }
}
