//! Rendering layer: one frame per event-loop turn.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::state::{AppState, Screen};
use crate::theme::theme;

pub mod category;
pub mod detail;
pub mod helpers;
pub mod home;
pub mod search;

/// Tab labels in screen order.
const TAB_TITLES: [&str; 4] = ["홈", "레시피", "쇼핑", "카테고리"];

/// Render one full frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tabs(f, app, chunks[0]);
    match app.screen {
        Screen::Home => home::render(f, app, chunks[1]),
        Screen::Recipes => search::render_recipes(f, app, chunks[1]),
        Screen::Shopping => search::render_shopping(f, app, chunks[1]),
        Screen::Categories => category::render(f, app, chunks[1]),
    }
    render_footer(f, app, chunks[2]);
    detail::render_modal(f, app);
}

/// Render the screen tabs.
fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let selected = match app.screen {
        Screen::Home => 0,
        Screen::Recipes => 1,
        Screen::Shopping => 2,
        Screen::Categories => 3,
    };
    let tabs = Tabs::new(TAB_TITLES.map(Line::from).to_vec())
        .select(selected)
        .style(Style::default().fg(th.subtext))
        .highlight_style(
            Style::default()
                .fg(th.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(th.overlay))
                .title(" banchan "),
        );
    f.render_widget(tabs, area);
}

/// Render the status footer: loading indicator or key hints.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = if app.screen_loading() {
        Line::from(Span::styled(
            " 불러오는 중… ",
            Style::default().fg(th.yellow),
        ))
    } else {
        Line::from(Span::styled(
            " Tab 화면 전환 · Enter 선택 · F1 도움말 · Ctrl+C 종료 ",
            Style::default().fg(th.subtext),
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}
