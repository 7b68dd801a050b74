use ratatui::style::{Color, Modifier, Style};

/// Colors used by the renderer, passed in explicitly.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) focused: Style,
    pub(crate) blurred: Style,
    pub(crate) success: Style,
    pub(crate) error: Style,
    pub(crate) title: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Style::default().fg(Color::Indexed(205)),
            blurred: Style::default().fg(Color::Indexed(240)),
            success: Style::default().fg(Color::Indexed(42)),
            error: Style::default().fg(Color::Indexed(196)),
            title: Style::default()
                .fg(Color::Indexed(99))
                .add_modifier(Modifier::BOLD),
        }
    }
}
