//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in most terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)
//! - `IconMode::Ascii` - plain ASCII for minimal fonts

use avatarhub_app::config::IconMode;
use avatarhub_app::stats::StatIcon;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    // --- Stat card icons ---

    pub fn users(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c0}", // nf-fa-users
            IconMode::Unicode => "\u{263a}",   // ☺
            IconMode::Ascii => "@",
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
            IconMode::Ascii => "v",
        }
    }

    pub fn chart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f080}", // nf-fa-bar_chart
            IconMode::Unicode => "\u{2587}",   // ▇
            IconMode::Ascii => "#",
        }
    }

    /// Glyph for a stat card; unknown icons render blank
    pub fn stat(&self, icon: StatIcon) -> &'static str {
        match icon {
            StatIcon::Users => self.users(),
            StatIcon::Check => self.check(),
            StatIcon::Chart => self.chart(),
            StatIcon::Empty => " ",
        }
    }

    // --- Avatar card ---

    pub fn avatar(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f2bd}", // nf-fa-user_circle
            IconMode::Unicode => "\u{25c9}",   // ◉
            IconMode::Ascii => "(o)",
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
            IconMode::Ascii => "*",
        }
    }

    pub fn view(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "[\u{f141}]", // nf-fa-ellipsis_h
            IconMode::Unicode => "[\u{2026}]",   // […]
            IconMode::Ascii => "[...]",
        }
    }

    pub fn edit(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "[\u{f044}]", // nf-fa-edit
            IconMode::Unicode => "[\u{270e}]",   // [✎]
            IconMode::Ascii => "[e]",
        }
    }

    // --- Header ---

    pub fn menu_closed(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c9}", // nf-fa-bars
            IconMode::Unicode => "\u{2630}",   // ☰
            IconMode::Ascii => "=",
        }
    }

    pub fn menu_open(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-close
            IconMode::Unicode => "\u{2715}",   // ✕
            IconMode::Ascii => "x",
        }
    }

    pub fn light(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f185}", // nf-fa-sun_o
            IconMode::Unicode => "\u{2600}",   // ☀
            IconMode::Ascii => "*",
        }
    }

    pub fn dark(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f186}", // nf-fa-moon_o
            IconMode::Unicode => "\u{263e}",   // ☾
            IconMode::Ascii => ")",
        }
    }

    pub fn bell(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f3}", // nf-fa-bell
            IconMode::Unicode => "\u{266a}",   // ♪
            IconMode::Ascii => "!",
        }
    }

    // --- Modal / misc ---

    pub fn upload(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f093}", // nf-fa-upload
            IconMode::Unicode => "\u{21e7}",   // ⇧
            IconMode::Ascii => "^",
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode | IconMode::Ascii => "/",
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
            IconMode::Ascii => "!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_menu_glyphs() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.menu_closed(), "☰");
        assert_eq!(icons.menu_open(), "✕");
    }

    #[test]
    fn test_ascii_glyphs_are_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for glyph in [
            icons.users(),
            icons.check(),
            icons.chart(),
            icons.avatar(),
            icons.dot(),
            icons.view(),
            icons.edit(),
            icons.menu_closed(),
            icons.menu_open(),
            icons.light(),
            icons.dark(),
            icons.upload(),
            icons.alert(),
        ] {
            assert!(glyph.is_ascii(), "{:?} is not ascii", glyph);
        }
    }

    #[test]
    fn test_empty_stat_icon_is_blank() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts, IconMode::Ascii] {
            assert_eq!(IconSet::new(mode).stat(StatIcon::Empty), " ");
        }
    }

    #[test]
    fn test_stat_icons_map_to_glyphs() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.stat(StatIcon::Check), "✓");
        assert_eq!(icons.stat(StatIcon::Users), icons.users());
    }
}
