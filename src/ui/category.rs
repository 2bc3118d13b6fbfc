//! Rendering for the category drill-down screen: breadcrumb plus either
//! the current category level or a leaf's product list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::state::AppState;
use crate::theme::theme;
use crate::util::truncate_width;

/// Render the category screen.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let Some(tree) = app.category_tree.clone() else {
        // Tree not delivered yet (or its load failed): loading indicator,
        // nothing selectable.
        let p = Paragraph::new(Line::from(Span::styled(
            "카테고리를 불러오는 중…",
            Style::default().fg(th.yellow),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(th.overlay))
                .title(" 카테고리 "),
        );
        f.render_widget(p, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    render_breadcrumb(f, app, chunks[0]);

    if app.nav.showing_products() {
        render_products(f, app, chunks[1]);
    } else {
        render_level(f, app, &tree, chunks[1]);
    }
}

/// Render the breadcrumb path from the root to the current depth.
fn render_breadcrumb(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut crumbs = vec![Span::styled("전체", Style::default().fg(th.subtext))];
    for node in app.nav.path() {
        crumbs.push(Span::styled(" › ", Style::default().fg(th.overlay)));
        crumbs.push(Span::styled(
            node.name.clone(),
            Style::default().fg(th.highlight),
        ));
    }
    let p = Paragraph::new(Line::from(crumbs)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(th.overlay))
            .title(" 카테고리 "),
    );
    f.render_widget(p, area);
}

/// Render the categories of the current level; interior nodes carry a
/// descend marker.
fn render_level(
    f: &mut Frame,
    app: &mut AppState,
    tree: &[crate::catalog::CategoryNode],
    area: Rect,
) {
    let th = theme();
    let level = app.nav.current_level(tree);
    let items: Vec<ListItem> = level
        .iter()
        .map(|node| {
            let marker = if node.is_leaf() { "  " } else { " ▸" };
            ListItem::new(Line::from(vec![
                Span::styled(node.name.clone(), Style::default().fg(th.text)),
                Span::styled(marker.to_owned(), Style::default().fg(th.overlay)),
            ]))
        })
        .collect();
    let count = level.len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(th.overlay))
                .title(format!(" 분류 {count} ")),
        )
        .highlight_style(
            Style::default()
                .fg(th.accent)
                .add_modifier(Modifier::REVERSED),
        );
    app.category_list
        .select((count > 0).then_some(app.category_selected));
    f.render_stateful_widget(list, area, &mut app.category_list);
}

/// Render the product list for the selected leaf category.
fn render_products(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .nav
        .current_results()
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
    let count = app.nav.current_results().len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(th.overlay))
                .title(format!(" 상품 목록 {count} ")),
        )
        .highlight_style(
            Style::default()
                .fg(th.accent)
                .add_modifier(Modifier::REVERSED),
        );
    app.category_list
        .select((count > 0).then_some(app.category_selected));
    f.render_stateful_widget(list, area, &mut app.category_list);
}
