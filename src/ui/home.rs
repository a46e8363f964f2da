use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{DAILY_QUESTION_COUNT, OPTION_COUNT};
use crate::storage::KeyValueStore;

pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let strings = app.locale().strings();
    let already_generated = app.session().state().has_questions();

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(15),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let button = if already_generated {
        strings.review_label
    } else {
        strings.start_label
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings.home_title,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(strings.home_tagline.fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            app.locale().format_date(app.today()),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ ENTER ]  {}", button),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}", DAILY_QUESTION_COUNT), Style::default().bold()),
            Span::styled(format!(" {}", strings.stat_questions), Style::default().fg(Color::DarkGray)),
            Span::raw("   │   "),
            Span::styled("B1", Style::default().bold()),
            Span::styled(format!(" {}", strings.stat_level), Style::default().fg(Color::DarkGray)),
            Span::raw("   │   "),
            Span::styled(format!("{}", OPTION_COUNT), Style::default().bold()),
            Span::styled(format!(" {}", strings.stat_options), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new(strings.home_controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}
