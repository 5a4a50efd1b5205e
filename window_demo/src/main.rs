//! Window demo
//!
//! Opens one window, logs size changes and exits when the window manager asks
//! the window to close.
//!
//! Usage: `window_demo [config.toml|config.ron]`

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use native_window::prelude::*;

fn main() {
    native_window::logging::init();

    if let Err(e) = run() {
        log::error!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading window config from {}", path);
            WindowConfig::load_from_file(&path)?
        }
        None => WindowConfig {
            title: "Window".to_string(),
            flags: vec!["shown".to_string(), "resizable".to_string()],
            ..WindowConfig::default()
        },
    };

    let backend = share(GlfwBackend::new()?);
    let mut icon = config.icon.as_ref().map(|path| Icon::new(&backend, path)).transpose()?;
    let mut cursor = config
        .cursor
        .as_ref()
        .map(|c| Cursor::new(&backend, &c.path, c.hotspot_x, c.hotspot_y))
        .transpose()?;

    let mut window = Window::create(&backend, &config.to_descriptor()?, icon.as_ref(), cursor.as_mut())?;

    let running = Rc::new(Cell::new(true));
    let events = window.events_mut();
    events.size_changed.subscribe(|info| {
        log::info!("New size: Width = {}; Height = {}", info.new_size.width, info.new_size.height);
    });
    events.state_changed.subscribe(|state| log::debug!("State: {:?}", state));
    let flag = running.clone();
    events.close.subscribe(move |_| {
        log::info!("Closing the window...");
        flag.set(false);
    });

    while running.get() {
        for event in drain_events(&backend) {
            window.handle_event(&event);
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    window.dispose()?;
    if let Some(cursor) = cursor.as_mut() {
        cursor.dispose()?;
    }
    if let Some(icon) = icon.as_mut() {
        icon.dispose()?;
    }
    Ok(())
}
