use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::i18n::Strings;
use crate::models::Question;
use crate::scoring::ResultTier;
use crate::storage::KeyValueStore;

pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &mut App<S>) {
    let strings = app.locale().strings();

    let chunks = Layout::vertical([
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], app, strings);
    render_review(frame, chunks[1], app, strings);
    render_controls(frame, chunks[2], strings);
}

fn tier_color(tier: ResultTier) -> Color {
    match tier {
        ResultTier::Excellent => Color::Green,
        ResultTier::VeryGood => Color::Cyan,
        ResultTier::Good => Color::Yellow,
        ResultTier::KeepPracticing => Color::Gray,
    }
}

fn render_score_summary<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, strings: &Strings) {
    let summary = app.session().summary();
    let color = tier_color(summary.tier);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings.results_title,
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            app.locale().tier_message(summary.tier),
            Style::default().fg(color),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", summary.score, summary.total, summary.percentage),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            format!("[ R ]  {}", strings.review_mode),
            Style::default().fg(Color::Green),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_review<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &mut App<S>, strings: &Strings) {
    let block = Block::default()
        .title(format!(" {} ", strings.review_answers))
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = app.session().state();
    let lines: Vec<Line> = state
        .questions
        .iter()
        .enumerate()
        .flat_map(|(index, question)| review_lines(index, question, state.answers.get(index).copied(), strings))
        .collect();
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false });

    // Long questions and explanations wrap, so the scroll bound depends on
    // the width.
    let content_lines = widget.line_count(inner.width);
    let viewport = inner.height as usize;
    let scroll = app
        .result_scroll()
        .min(content_lines.saturating_sub(viewport));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    frame.render_widget(widget.scroll((scroll, 0)), inner);

    app.fit_result_scroll(content_lines, viewport);
}

fn review_lines<'a>(
    index: usize,
    question: &'a Question,
    answer: Option<usize>,
    strings: &Strings,
) -> Vec<Line<'a>> {
    let is_correct = answer.is_some_and(|answer| question.is_correct(answer));
    let (symbol, color) = if is_correct {
        ("+", Color::Green)
    } else {
        ("-", Color::Red)
    };

    let mut lines = Vec::with_capacity(7);
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", symbol), Style::default().fg(color).bold()),
        Span::styled(format!("{:2}. ", index + 1), Style::default().fg(Color::DarkGray)),
        Span::styled(question.question_text.as_str(), Style::default().fg(Color::White)),
    ]));

    for (option_index, option) in question.options.iter().enumerate() {
        let chosen = answer == Some(option_index);
        let (style, marker) = if question.is_correct(option_index) {
            (Style::default().fg(Color::Green), format!("  ✓ {}", strings.correct_answer))
        } else if chosen {
            (Style::default().fg(Color::Red), format!("  ✗ {}", strings.your_answer))
        } else {
            (Style::default().fg(Color::DarkGray), String::new())
        };
        let marker = if chosen && question.is_correct(option_index) {
            format!("{} · {}", marker, strings.your_answer)
        } else {
            marker
        };

        lines.push(Line::from(vec![
            Span::styled("      ", style),
            Span::styled(option.as_str(), style),
            Span::styled(marker, style),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(format!("      {}: ", strings.explanation), Style::default().fg(Color::Gray).bold()),
        Span::styled(question.explanation.as_str(), Style::default().fg(Color::Gray).italic()),
    ]));
    lines.push(Line::from(""));
    lines
}

fn render_controls(frame: &mut Frame, area: Rect, strings: &Strings) {
    let widget = Paragraph::new(strings.results_controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
