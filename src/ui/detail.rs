//! Modal overlays: alerts, help, and the two record detail views.

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::state::{AppState, Modal, RecipeItem, ShoppingItem};
use crate::theme::theme;
use crate::ui::helpers::{centered_rect, fmt_price};

/// Render the active modal, if any.
pub fn render_modal(f: &mut Frame, app: &AppState) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => render_alert(f, message),
        Modal::Help => render_help(f),
        Modal::Recipe(item) => render_recipe_detail(f, item),
        Modal::Shopping(item) => render_shopping_detail(f, item),
    }
}

/// Bordered overlay box cleared of underlying content.
fn overlay_block(title: &str) -> Block<'_> {
    let th = theme();
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(th.highlight))
        .title(format!(" {title} "))
}

/// Render a non-interactive alert with the last error message.
fn render_alert(f: &mut Frame, message: &str) {
    let th = theme();
    let area = centered_rect(60, 25, f.area());
    f.render_widget(Clear, area);
    let p = Paragraph::new(vec![
        Line::from(Span::styled(
            message.to_owned(),
            Style::default().fg(th.red),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Enter/Esc 닫기",
            Style::default().fg(th.subtext),
        )),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(overlay_block("오류"));
    f.render_widget(p, area);
}

/// Render the keybinding help overlay.
fn render_help(f: &mut Frame) {
    let th = theme();
    let area = centered_rect(50, 55, f.area());
    f.render_widget(Clear, area);
    let key = |k: &str, what: &str| {
        Line::from(vec![
            Span::styled(format!("{k:>10}  "), Style::default().fg(th.accent)),
            Span::styled(what.to_owned(), Style::default().fg(th.text)),
        ])
    };
    let lines = vec![
        key("Tab", "다음 화면"),
        key("Shift+Tab", "이전 화면"),
        key("Enter", "검색 실행 / 선택 / 상세 보기"),
        key("↑ ↓", "목록 이동 (끝에서 다음 페이지 로딩)"),
        key("F2", "레시피 검색 기준 전환 (메뉴명/재료)"),
        key("Esc", "뒤로 / 입력으로"),
        key("r", "홈 피드 새로고침"),
        key("Ctrl+C", "종료"),
    ];
    let p = Paragraph::new(lines).block(overlay_block("도움말"));
    f.render_widget(p, area);
}

/// Render the recipe detail: metadata, ingredients, and manual steps.
fn render_recipe_detail(f: &mut Frame, item: &RecipeItem) {
    let th = theme();
    let area = centered_rect(70, 75, f.area());
    f.render_widget(Clear, area);
    let mut lines = vec![
        Line::from(Span::styled(
            item.name.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", item.category, item.method),
            Style::default().fg(th.subtext),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("재료: {}", item.ingredients.join(", ")),
            Style::default().fg(th.green),
        )),
        Line::default(),
    ];
    for (i, step) in item.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(th.accent)),
            Span::styled(step.text.clone(), Style::default().fg(th.text)),
        ]));
    }
    if item.steps.is_empty() {
        lines.push(Line::from(Span::styled(
            "조리 단계 정보가 없습니다",
            Style::default().fg(th.subtext),
        )));
    }
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(overlay_block("레시피"));
    f.render_widget(p, area);
}

/// Render the shopping product detail.
fn render_shopping_detail(f: &mut Frame, item: &ShoppingItem) {
    let th = theme();
    let area = centered_rect(65, 60, f.area());
    f.render_widget(Clear, area);
    let mut lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("최저가 {}", fmt_price(item.low_price)),
            Style::default().fg(th.green),
        )),
    ];
    if item.high_price.is_some() {
        lines.push(Line::from(Span::styled(
            format!("최고가 {}", fmt_price(item.high_price)),
            Style::default().fg(th.subtext),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("판매처 {}", item.mall_name),
        Style::default().fg(th.text),
    )));
    if !item.brand.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("브랜드 {}", item.brand),
            Style::default().fg(th.text),
        )));
    }
    if !item.maker.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("제조사 {}", item.maker),
            Style::default().fg(th.text),
        )));
    }
    if !item.categories.is_empty() {
        lines.push(Line::from(Span::styled(
            item.categories.join(" › "),
            Style::default().fg(th.subtext),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        item.link.clone(),
        Style::default().fg(th.accent),
    )));
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(overlay_block("상품"));
    f.render_widget(p, area);
}
