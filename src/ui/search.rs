//! Rendering for the two search screens: query line plus results list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::truncate_width;

/// Render the recipe search screen.
pub fn render_recipes(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let chunks = split_search(area);
    let title = format!(" 레시피 검색 ({}) ", app.recipe_mode.label());
    render_input(f, app, chunks[0], &title);

    let width = chunks[1].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .recipe_search
        .results()
        .iter()
        .map(|r| {
            let meta = format!("  {} · {}", r.category, r.method);
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_width(&r.name, width.saturating_sub(meta.len())),
                    Style::default().fg(th.text),
                ),
                Span::styled(meta, Style::default().fg(th.subtext)),
            ]))
        })
        .collect();
    let count = app.recipe_search.results().len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(th.overlay))
                .title(format!(" 결과 {count} ")),
        )
        .highlight_style(
            Style::default()
                .fg(th.accent)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        );
    let selected = (app.focus == Focus::List && count > 0).then_some(app.recipe_selected);
    app.recipe_list.select(selected);
    f.render_stateful_widget(list, chunks[1], &mut app.recipe_list);
}

/// Render the shopping search screen.
pub fn render_shopping(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let chunks = split_search(area);
    render_input(f, app, chunks[0], " 쇼핑 검색 ");

    let width = chunks[1].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .shop_search
        .results()
        .iter()
        .map(|it| {
            let price = super::helpers::fmt_price(it.low_price);
            let meta = format!("  {price} · {}", it.mall_name);
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_width(&it.title, width.saturating_sub(meta.chars().count())),
                    Style::default().fg(th.text),
                ),
                Span::styled(meta, Style::default().fg(th.green)),
            ]))
        })
        .collect();
    let count = app.shop_search.results().len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(th.overlay))
                .title(format!(" 결과 {count} ")),
        )
        .highlight_style(
            Style::default()
                .fg(th.accent)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        );
    let selected = (app.focus == Focus::List && count > 0).then_some(app.shop_selected);
    app.shop_list.select(selected);
    f.render_stateful_widget(list, chunks[1], &mut app.shop_list);
}

/// Vertical split into input line and result area.
fn split_search(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area)
}

/// Render the query input line with a focus-dependent border.
fn render_input(f: &mut Frame, app: &AppState, area: Rect, title: &str) {
    let th = theme();
    let border = if app.focus == Focus::Input {
        Style::default().fg(th.accent)
    } else {
        Style::default().fg(th.overlay)
    };
    let text = if app.input.is_empty() && app.focus != Focus::Input {
        Span::styled("검색어를 입력하세요", Style::default().fg(th.subtext))
    } else {
        Span::styled(app.input.as_str(), Style::default().fg(th.text))
    };
    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title.to_owned()),
    );
    f.render_widget(input, area);
}
