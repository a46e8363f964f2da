use ratatui::{prelude::*, widgets::Paragraph};

use crate::i18n::Locale;

pub fn render(frame: &mut Frame, area: Rect, locale: Locale) {
    let strings = locale.strings();
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(5),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(Span::styled(
            strings.loading_title,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            strings.loading_body,
            Style::default().fg(Color::Yellow),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
