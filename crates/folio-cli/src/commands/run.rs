use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
    Frame, Terminal,
};

use folio_core::AppConfig;
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    load_theme,
    page::Page,
    widgets::{HelpWidget, NavBarWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, file: Option<PathBuf>) -> Result<()> {
    let portfolio = super::load_portfolio(&config, file)?;
    let theme = load_theme(&config.ui.theme);

    // Construction fails eagerly on an empty title list
    let mut app = App::new(config, portfolio, theme)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("folio"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Release both animation timers before the UI goes away
    app.typing.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let events = EventHandler::new(app.config.ui.tick_rate_ms);
    app.typing.start(Instant::now());

    // Main loop
    while !app.should_quit {
        let size = terminal.size()?;
        app.viewport_height = size.height.saturating_sub(2);

        // Reflow the document for the current width; the tracker re-reads
        // this geometry on every scroll notification
        let page = Page::build(app, size.width, app.viewport_height);
        app.scroll = app.scroll.min(page.max_scroll(app.viewport_height));

        terminal.draw(|frame| draw(frame, app, &page))?;

        // Wake at the animator's next deadline, capped by the tick rate
        let timeout = app
            .typing
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()));

        match events.next(timeout)? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                apply_action(app, &page, action);
            }
            Some(AppEvent::Resize(_, _)) => {
                // Geometry changed: re-clamp and re-check the active section
                app.scroll_to(app.scroll, &page);
            }
            Some(AppEvent::Tick) | None => {}
        }

        let _ = app.typing.poll(Instant::now());
    }

    Ok(())
}

fn apply_action(app: &mut App, page: &Page, action: Action) {
    // Any action other than the first 'g' resets the pending sequence
    if action != Action::PendingG {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_down(page),
        Action::ScrollUp => app.scroll_up(page),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(page),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(page),
        Action::ScrollPageDown => app.scroll_page_down(page),
        Action::ScrollPageUp => app.scroll_page_up(page),
        Action::JumpToTop => app.jump_to_top(page),
        Action::JumpToBottom => app.jump_to_bottom(page),
        Action::PendingG => app.pending_key = Some('g'),
        Action::JumpToSection(section) => app.jump_to_section(section, page),
        Action::NextSection => app.next_section(page),
        Action::PrevSection => app.prev_section(page),
        Action::Help => app.mode = Mode::Help,
        Action::ExitMode => app.mode = Mode::Normal,
        Action::None => {}
    }
}

fn draw(frame: &mut Frame, app: &App, page: &Page) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation bar
            Constraint::Min(0),    // Document viewport
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    NavBarWidget::render(frame, chunks[0], app);

    let body = Paragraph::new(page.visible(app.scroll, chunks[1].height).to_vec())
        .style(Style::default().bg(app.theme.bg0));
    frame.render_widget(body, chunks[1]);

    StatusBarWidget::render(frame, chunks[2], app, page);

    if app.mode == Mode::Help {
        HelpWidget::render(frame, app);
    }
}
