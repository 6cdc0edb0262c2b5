//! Cupcake Clicker rendering: the cupcake display, store, trophies, and log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions;
use super::logic::format_number;
use super::state::{BakeryState, ItemEffect};

/// Idle cupcake art — 4 lines, cycled every half second.
const CUPCAKE_ART: &[&[&str]] = &[
    &["   ( ^o^)   ", "  .-~~~~-.  ", "  |~~~~~~|  ", "  \\______/  "],
    &["   ( ^-^)   ", "  .-~~~~-.  ", "  |~~~~~~|  ", "  \\______/  "],
];

/// Pressed cupcake art — shown for a few ticks after a click.
const CUPCAKE_CLICK_ART: &[&str] = &["   ( >w<)!  ", "  .-####-.  ", "  |######|  ", "  \\______/  "];

/// Spinner characters for the auto-clicker indicator.
const SPINNER: &[char] = &['◐', '◓', '◑', '◒'];

pub fn render(
    state: &BakeryState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    // Log panel on the right when wide enough
    let (main_area, log_area) = if !is_narrow_layout(area.width) {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (area, None)
    };

    let banner_height: u16 = if state.banner.is_some() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),            // cupcake display
            Constraint::Length(banner_height), // trophy-unlock banner
            Constraint::Length(8),             // store (6 items + borders)
            Constraint::Min(3),                // trophies + help bar
        ])
        .split(main_area);

    render_cupcake_display(state, f, chunks[0], click_state);
    if banner_height > 0 {
        render_banner(state, f, chunks[1]);
    }
    render_store(state, f, chunks[2], click_state);
    render_trophies_and_help(state, f, chunks[3], click_state);

    if let Some(log_area) = log_area {
        render_log(state, f, log_area);
    }

    if state.show_help {
        render_help_overlay(state, f, area, click_state);
    }
}

fn render_cupcake_display(
    state: &BakeryState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let cupcakes_str = format_number(state.cupcakes);

    let art: &[&str] = if state.click_flash > 0 {
        CUPCAKE_CLICK_ART
    } else {
        CUPCAKE_ART[(state.anim_frame / 5) as usize % CUPCAKE_ART.len()]
    };
    let art_color = if state.click_flash > 0 {
        Color::White
    } else {
        Color::Magenta
    };

    let border_color = if state.purchase_flash > 0 {
        Color::White
    } else {
        Color::Magenta
    };
    let title = if state.purchase_flash > 0 {
        " ✦ Cupcake Clicker ✦ "
    } else {
        " Cupcake Clicker "
    };

    let mut lines: Vec<Line> = Vec::new();

    // Art rows 0-1 carry the big numbers alongside
    lines.push(Line::from(vec![
        Span::styled(art[0], Style::default().fg(art_color)),
        Span::styled(
            format!(" 🧁 {}", cupcakes_str),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let income_span = match state.auto_per_sec() {
        Some(per_sec) => {
            let spinner = SPINNER[(state.anim_frame / 3) as usize % SPINNER.len()];
            Span::styled(
                format!(" {} {:.1}/sec auto", spinner, per_sec),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        }
        None => Span::styled(" no auto-clicker", Style::default().fg(Color::DarkGray)),
    };
    lines.push(Line::from(vec![
        Span::styled(art[1], Style::default().fg(art_color)),
        income_span,
    ]));

    let click_style = if state.click_flash > 0 {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(art[2], Style::default().fg(art_color)),
        Span::styled(" ", Style::default()),
        Span::styled(
            format!("[C] BAKE! +{}", format_number(state.click_value)),
            click_style,
        ),
    ]));

    lines.push(Line::from(vec![
        Span::styled(art[3], Style::default().fg(art_color)),
        Span::styled(
            format!(" 👆 {} clicks", format_number(state.total_clicks)),
            Style::default().fg(Color::Cyan),
        ),
    ]));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title),
    );
    f.render_widget(widget, area);

    render_particles(state, f, area);

    // The whole display is one big bake button
    let mut cs = click_state.borrow_mut();
    cs.add_click_target(area, actions::CLICK_CUPCAKE);
}

/// Render floating "+N" particles rising over the cupcake display.
fn render_particles(state: &BakeryState, f: &mut Frame, area: Rect) {
    let center_x = area.x + area.width / 2;
    let base_y = area.y + area.height;

    for particle in &state.particles {
        let progress = 1.0 - (particle.life as f32 / particle.max_life as f32);
        let rise = (progress * 5.0) as u16;
        let y = base_y.saturating_sub(2 + rise);
        let x = (center_x as i16 + particle.col_offset).max(area.x as i16) as u16;

        let color = if particle.life > particle.max_life * 2 / 3 {
            Color::White
        } else if particle.life > particle.max_life / 3 {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        if y > area.y && y < area.y + area.height && x < area.x + area.width {
            let text_len = particle.text.chars().count() as u16;
            let available = area.x + area.width - x;
            let display_width = text_len.min(available);
            if display_width > 0 {
                let particle_area = Rect::new(x, y, display_width, 1);
                let widget = Paragraph::new(Span::styled(
                    &particle.text,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
                f.render_widget(widget, particle_area);
            }
        }
    }
}

fn render_banner(state: &BakeryState, f: &mut Frame, area: Rect) {
    let Some(banner) = &state.banner else {
        return;
    };
    let blink = (state.anim_frame / 3) % 2 == 0;
    let style = if blink {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        format!(" 🏆 {} ", banner.text),
        style,
    )));
    f.render_widget(widget, area);
}

fn render_store(
    state: &BakeryState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    for (i, item) in state.shop.iter().enumerate() {
        let can_afford = state.cupcakes >= item.cost;
        let owned_marker = if state.owns(item.id) { "✓" } else { " " };

        let key_style = if can_afford {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text_style = if can_afford {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let effect_style = match item.id.effect() {
            ItemEffect::ClickBoost(_) if can_afford => Style::default().fg(Color::Cyan),
            ItemEffect::AutoClicker { .. } if can_afford => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::DarkGray),
        };

        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!("{}[{}] ", owned_marker, item.id.key()), key_style),
                Span::styled(format!("{:<26}", item.id.name()), effect_style),
                Span::styled(format!("🧁 {}", format_number(item.cost)), text_style),
            ]),
            actions::BUY_ITEM_BASE + i as u16,
        );
    }

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1);
    }

    let border_color = if state.purchase_flash > 0 {
        Color::Yellow
    } else {
        Color::Green
    };
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Store — press 1-6 or tap to buy "),
    );
    f.render_widget(widget, area);
}

fn render_trophies_and_help(
    state: &BakeryState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    // Trophy strip: icons for unlocked, dim placeholders for locked,
    // then one line per unlocked trophy with its full text
    let mut spans: Vec<Span> = vec![Span::styled(
        format!(
            " 🏆 {}/{} ",
            state.unlocked_trophy_count(),
            state.trophies.len()
        ),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    for trophy in &state.trophies {
        if trophy.unlocked {
            spans.push(Span::styled(
                format!("{} ", trophy.id.icon()),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.push(Span::styled("🔒 ", Style::default().fg(Color::DarkGray)));
        }
    }
    let mut trophy_lines = vec![Line::from(spans)];
    for trophy in state.trophies.iter().filter(|t| t.unlocked) {
        trophy_lines.push(Line::from(Span::styled(
            format!("   {} {}", trophy.id.icon(), trophy.id.text()),
            Style::default().fg(Color::Yellow),
        )));
    }
    let trophy_widget = Paragraph::new(trophy_lines);
    f.render_widget(trophy_widget, chunks[0]);

    // Help bar, tappable
    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(Span::styled(
            " [H] help — tap the cupcake or press C to bake ",
            Style::default().fg(Color::DarkGray),
        )),
        actions::TOGGLE_HELP,
    );
    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(chunks[1], &mut cs, 0, 0);
    }
    let help_widget = Paragraph::new(cl.into_lines());
    f.render_widget(help_widget, chunks[1]);
}

fn render_log(state: &BakeryState, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;

    // Newest entries first
    let log_lines: Vec<Line> = state
        .log
        .iter()
        .rev()
        .take(visible_height)
        .enumerate()
        .map(|(i, entry)| {
            let is_recent = i < 3;
            if entry.is_important {
                let style = if is_recent {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                Line::from(Span::styled(&entry.text, style))
            } else if is_recent {
                Line::from(Span::styled(
                    &entry.text,
                    Style::default().fg(Color::White),
                ))
            } else {
                Line::from(Span::styled(
                    &entry.text,
                    Style::default().fg(Color::DarkGray),
                ))
            }
        })
        .collect();

    let widget = Paragraph::new(log_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Log "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_help_overlay(
    state: &BakeryState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let _ = state;

    // Centered box over everything
    let width = area.width.min(50);
    let height = area.height.min(14);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  C        bake a cupcake",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  1-6      buy a store item",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  H / ?    open this help",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Items can be bought again and again;",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  prices rise by half each time.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  A new auto-clicker replaces the old one.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key or tap to close",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    f.render_widget(Clear, overlay);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Help "),
    );
    f.render_widget(widget, overlay);

    // Registered last so it swallows every tap underneath
    let mut cs = click_state.borrow_mut();
    cs.add_click_target(area, actions::CLOSE_HELP);
}
