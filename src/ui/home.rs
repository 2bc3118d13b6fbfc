//! Rendering for the home screen: banner strip plus the two featured
//! feeds.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::state::AppState;
use crate::theme::theme;
use crate::util::truncate_width;

/// Render the home screen.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);
    render_banner(f, app, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_featured_products(f, app, columns[0]);
    render_featured_recipes(f, app, columns[1]);
}

/// Render the five-product banner strip, or the credential hint when the
/// shopping feed could not be dispatched.
fn render_banner(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(th.overlay))
        .title(format!(" 추천 · {} ", app.settings.home_shop_query));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let banner = app.home_banner();
    if banner.is_empty() {
        let hint = if app.settings.has_naver_credentials() {
            "추천 상품을 불러오는 중…"
        } else {
            "Naver API 자격 증명이 없습니다 — settings.toml 을 확인하세요"
        };
        let p = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(th.subtext),
        )));
        f.render_widget(p, inner);
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, banner.len() as u32);
            banner.len()
        ])
        .split(inner);
    for (item, cell) in banner.iter().zip(cells.iter()) {
        let text = vec![
            Line::from(Span::styled(
                truncate_width(&item.title, cell.width as usize),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                super::helpers::fmt_price(item.low_price),
                Style::default().fg(th.green),
            )),
            Line::from(Span::styled(
                truncate_width(&item.mall_name, cell.width as usize),
                Style::default().fg(th.subtext),
            )),
        ];
        f.render_widget(Paragraph::new(text), *cell);
    }
}

/// Render the featured product list below the banner.
fn render_featured_products(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .home_rest()
        .iter()
        .map(|it| {
            let price = super::helpers::fmt_price(it.low_price);
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_width(&it.title, width.saturating_sub(price.len() + 2)),
                    Style::default().fg(th.text),
                ),
                Span::styled(format!("  {price}"), Style::default().fg(th.green)),
            ]))
        })
        .collect();
    let count = app.home_rest().len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(th.overlay))
                .title(" 상품 목록 "),
        )
        .highlight_style(
            Style::default()
                .fg(th.accent)
                .add_modifier(Modifier::REVERSED),
        );
    app.home_list
        .select((count > 0).then_some(app.home_selected));
    f.render_stateful_widget(list, area, &mut app.home_list);
}

/// Render the featured recipe list for the configured dish category.
fn render_featured_recipes(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .home_recipes
        .results()
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_width(&r.name, width.saturating_sub(r.method.len() + 2)),
                    Style::default().fg(th.text),
                ),
                Span::styled(format!("  {}", r.method), Style::default().fg(th.subtext)),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(th.overlay))
            .title(format!(
                " 오늘의 레시피 · {} ",
                app.settings.home_recipe_category
            )),
    );
    f.render_widget(list, area);
}
