//! Terminal setup and the main event loop

use crate::dialog::DialogHost;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, Component, EventHandler};
use crate::ui::routes::Route;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Options for [`run_app`] coming from the configuration and command line.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub start_route: Route,
    pub mouse_enabled: bool,
}

/// Run the TUI until the user quits
pub async fn run_app(ctx: AppContext, dialog_host: DialogHost, options: RunOptions) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if options.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(ctx, dialog_host);
    let mut event_handler = EventHandler::new();
    app.start(options.start_route);

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        needs_render = app.handle_event(event);

        if app.should_quit() {
            log::info!("Quitting");
            break;
        }
    }

    Ok(())
}
