mod home;
mod loading;
mod quiz;
mod results;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AppView;
use crate::storage::KeyValueStore;

pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let error = app.session().state().error.as_deref();
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(if error.is_some() { 5 } else { 0 }),
        Constraint::Fill(1),
    ])
    .split(area);

    render_header(frame, chunks[0], app);
    if let Some(message) = error {
        render_error(frame, chunks[1], app, message);
    }

    let body = chunks[2];
    if app.session().state().loading {
        loading::render(frame, body, app.locale());
        return;
    }

    match app.view() {
        AppView::Home => home::render(frame, body, app),
        AppView::Quiz => quiz::render(frame, body, app),
        AppView::Results => results::render(frame, body, app),
    }
}

fn render_header<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let mut spans = vec![
        Span::styled(" GR ", Style::default().fg(Color::White).bg(Color::Blue).bold()),
        Span::raw(" "),
        Span::styled("Greek", Style::default().fg(Color::White).bold()),
        Span::styled("Daily", Style::default().fg(Color::Cyan).bold()),
    ];

    if app.view() == AppView::Quiz && app.session().state().has_questions() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            app.locale().strings().level_badge,
            Style::default().fg(Color::DarkGray),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_error<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, message: &str) {
    let strings = app.locale().strings();
    let content = vec![
        Line::from(Span::styled(
            strings.error_title,
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::LightRed))),
        Line::from(Span::styled(
            strings.dismiss_hint,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Color::Red)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
