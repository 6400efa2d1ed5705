//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Title bar (always shown)
//! - The active screen: welcome, opening or the tabbed body
//! - Snackbars
//! - Status bar

use crate::app::{App, Screen};
use crate::body::{ActiveView, Body};
use crate::types::BodyTab;
use crate::ui::widgets;
use crate::views::{
    settings::{pending_locale, pending_palette},
    HomeAction, HomeView, SettingsItem, SettingsView, WelcomeItem, WelcomeView,
};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.theme;

    frame.render_widget(Block::default().style(theme.block_style()), area);

    // Main layout: title bar, screen, status bar
    let layout = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Min(3),    // Screen
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title_bar(frame, app, layout[0]);

    match &app.screen {
        Screen::Welcome(view) => render_welcome(frame, app, view, layout[1]),
        Screen::Opening => widgets::render_loading(
            frame,
            app.messages.get("opening.message"),
            app.frame,
            theme,
            layout[1],
        ),
        Screen::Body(body) => render_body(frame, app, body, layout[1]),
    }

    render_status_bar(frame, app, layout[2]);
}

/// Title bar: app name, account, document language
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let messages = &app.messages;

    let left = format!(
        " {} │ {} · {}",
        messages.get("app.name"),
        app.account.name,
        messages.get(app.account.account_type.label_key()),
    );
    frame.render_widget(Paragraph::new(left).style(theme.title_bar()), area);

    if let Some(lang) = &app.document.lang {
        let right = Paragraph::new(format!("{} ", lang))
            .style(theme.title_bar())
            .alignment(Alignment::Right);
        frame.render_widget(right, area);
    }
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.is_editing() {
        "status.edit"
    } else {
        match &app.screen {
            Screen::Welcome(_) => "status.welcome",
            Screen::Opening => "status.opening",
            Screen::Body(_) => "status.body",
        }
    };

    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    widgets::render_status_bar(frame, app.messages.get(hints), &version, &app.theme, area);
}

// === SCREENS ===

/// Onboarding panel
fn render_welcome(frame: &mut Frame, app: &App, view: &WelcomeView, area: Rect) {
    let theme = &app.theme;
    let messages = &app.messages;

    let panel = widgets::centered_rect(64, 12, area);
    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" {} ", messages.get("welcome.title")))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines = vec![
        Line::styled(messages.get("welcome.intro"), theme.text()),
        Line::raw(""),
    ];

    for (i, item) in WelcomeItem::all().iter().enumerate() {
        let style = if i == view.cursor && !view.finished {
            theme.selected()
        } else {
            theme.text()
        };

        let value = match item {
            WelcomeItem::AccountName => match &view.editing {
                Some(input) => format!("[{}_]", input.value()),
                None => format!("[{}]", app.account.name),
            },
            WelcomeItem::AccountType => {
                format!("[{}]", messages.get(app.account.account_type.label_key()))
            }
            WelcomeItem::Continue => String::new(),
        };

        lines.push(Line::from(vec![
            Span::styled(widgets::pad_to_width(messages.get(item.label_key()), 20), style),
            Span::styled(value, theme.value()),
        ]));
    }

    if view.finished {
        lines.push(Line::raw(""));
        lines.push(Line::styled(messages.get("welcome.done"), theme.success()));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Tab strip plus the active view
fn render_body(frame: &mut Frame, app: &App, body: &Body, area: Rect) {
    let layout = Layout::vertical([
        Constraint::Length(2), // Tab strip + divider
        Constraint::Min(1),    // Content
    ])
    .split(area);

    render_tab_strip(frame, app, body.active_tab(), layout[0]);

    match body.view() {
        ActiveView::Home(view) => render_home(frame, app, view, layout[1]),
        ActiveView::Settings(view) => render_settings(frame, app, view, layout[1]),
        ActiveView::Empty => {}
    }

    if !body.snackbars.is_empty() {
        widgets::render_snackbars(frame, body.snackbars.visible(), &app.theme, layout[1]);
    }
}

/// Centered tab strip with localized labels
fn render_tab_strip(frame: &mut Frame, app: &App, active: BodyTab, area: Rect) {
    let theme = &app.theme;

    let divider = Block::default()
        .style(theme.block_style())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    frame.render_widget(divider, area);

    let titles: Vec<Line> = BodyTab::all()
        .iter()
        .map(|tab| {
            let style = if *tab == active {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(app.messages.get(tab.title_key()), style)
        })
        .collect();

    // Each title is padded by one cell per side, titles are joined by a one-cell divider
    let strip_width = titles.iter().map(|t| t.width() as u16 + 2).sum::<u16>()
        + titles.len().saturating_sub(1) as u16;

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(theme.text())
        .highlight_style(theme.tab_active());

    let strip = widgets::centered_rect(strip_width, 1, Rect { height: 1, ..area });
    frame.render_widget(tabs, strip);
}

/// Home: greeting and quick actions
fn render_home(frame: &mut Frame, app: &App, view: &HomeView, area: Rect) {
    let theme = &app.theme;
    let messages = &app.messages;

    let greeting = messages.format("home.greeting", &[("name", app.account.name.as_str())]);

    let mut lines = vec![
        Line::raw(""),
        Line::styled(greeting, theme.title()),
        Line::styled(messages.get(app.account.account_type.label_key()), theme.text_dim()),
        Line::raw(""),
    ];

    for (i, action) in HomeAction::all().iter().enumerate() {
        let (marker, style) = if i == view.cursor {
            ("▸ ", theme.selected())
        } else {
            ("  ", theme.text())
        };
        lines.push(Line::styled(
            format!("{}{}", marker, messages.get(action.label_key())),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Settings list with current values
fn render_settings(frame: &mut Frame, app: &App, view: &SettingsView, area: Rect) {
    let theme = &app.theme;
    let messages = &app.messages;

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" {} ", messages.get("settings.title")))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let storage = app.local_storage();
    let active_locale = messages.locale();

    let items: Vec<ListItem> = SettingsItem::all()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let value = match item {
                SettingsItem::AccountName => match &view.editing {
                    Some(input) => format!("{}_", input.value()),
                    None => app.account.name.clone(),
                },
                SettingsItem::AccountType => {
                    messages.get(app.account.account_type.label_key()).to_string()
                }
                SettingsItem::Language => {
                    let pending = pending_locale(storage, active_locale);
                    pending_marker(&pending, pending != active_locale)
                }
                SettingsItem::ThemeColor => {
                    let pending = pending_palette(storage);
                    pending_marker(&pending, pending != theme.palette)
                }
            };

            let style = if i == view.cursor {
                theme.selected()
            } else {
                theme.text()
            };

            ListItem::new(Line::from(vec![
                Span::styled(widgets::pad_to_width(messages.get(item.label_key()), 24), style),
                Span::styled(format!("[{}]", value), theme.value()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);

    // Storage path at bottom
    let storage_path = storage
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".into());

    let path_area = Rect {
        x: inner.x,
        y: inner.y + inner.height.saturating_sub(1),
        width: inner.width,
        height: 1u16.min(inner.height),
    };
    let path_widget = Paragraph::new(format!("Storage: {}", storage_path))
        .style(theme.text_dim());
    frame.render_widget(path_widget, path_area);
}

fn pending_marker(value: &str, pending: bool) -> String {
    if pending {
        format!("{} ↻", value)
    } else {
        value.to_string()
    }
}
