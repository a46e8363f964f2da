use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::card::QuestionCard;
use crate::i18n::Strings;
use crate::models::Question;
use crate::scoring::Progress;
use crate::storage::KeyValueStore;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let Some(question) = app.current_question() else {
        return;
    };
    let strings = app.locale().strings();
    let card = app.card();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], chunks[1], app.session().progress(), strings);
    render_question_text(frame, chunks[2], &question.question_text);
    render_options(frame, chunks[3], question, card);

    if card.is_submitted() {
        render_explanation(frame, chunks[4], question, card, strings);
    }

    let controls = if card.is_submitted() {
        strings.next_controls
    } else {
        strings.select_controls
    };
    render_controls(frame, chunks[5], controls);
}

fn render_progress(frame: &mut Frame, label_area: Rect, bar_area: Rect, progress: Progress, strings: &Strings) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(label_area);

    let position = Paragraph::new(format!(
        "{} {} {} {}",
        strings.question_word, progress.question_number, strings.of_word, progress.total
    ))
    .fg(Color::DarkGray);
    let completed = Paragraph::new(format!("{}% {}", progress.completed_percent, strings.completed))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(position, halves[0]);
    frame.render_widget(completed, halves[1]);

    let bar = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .label("")
        .ratio(progress.bar_ratio);
    frame.render_widget(bar, bar_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, card: &QuestionCard) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (style, marker) = option_style(index, question, card);
        let pointer = if !card.is_submitted() && index == card.cursor() {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", pointer), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
            Span::styled(marker, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn option_style(index: usize, question: &Question, card: &QuestionCard) -> (Style, &'static str) {
    let selected = card.selected() == Some(index);

    if card.is_submitted() {
        if question.is_correct(index) {
            (Style::default().fg(Color::Green).bold(), "  ✓")
        } else if selected {
            (Style::default().fg(Color::Red), "  ✗")
        } else {
            (Style::default().fg(Color::DarkGray), "")
        }
    } else if selected {
        (Style::default().fg(Color::Cyan).bold(), "")
    } else if index == card.cursor() {
        (Style::default().fg(Color::White), "")
    } else {
        (Style::default().fg(Color::Gray), "")
    }
}

fn render_explanation(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    card: &QuestionCard,
    strings: &Strings,
) {
    let answered_correctly = card.selected().is_some_and(|answer| question.is_correct(answer));
    let color = if answered_correctly {
        Color::Green
    } else {
        Color::Yellow
    };

    let content = Line::from(vec![
        Span::styled(format!("{}: ", strings.explanation), Style::default().fg(color).bold()),
        Span::styled(question.explanation.as_str(), Style::default().fg(color)),
    ]);

    let widget = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, controls: &str) {
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
