//! Terminal demo: a couple of windows driven by crossterm.
//!
//! Run with `cargo run --example terminal`. Logs go to `gilt-imui.log`
//! (filter with `RUST_LOG`, e.g. `RUST_LOG=gilt_imui=debug`). Ctrl+C quits.

use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use gilt_imui::term::{feed_event, Canvas, CellMetrics, Driver};
use gilt_imui::{Context, Opt, Real, Rect, Response, Style};
use tracing_subscriber::EnvFilter;

struct Demo {
    clicks: u32,
    enabled: bool,
    name: String,
    volume: Real,
    speed: Real,
    log: Vec<String>,
}

impl Demo {
    fn new() -> Self {
        Self { clicks: 0, enabled: true, name: String::from("world"), volume: 50.0, speed: 1.0, log: Vec::new() }
    }

    fn push_log(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > 100 {
            self.log.remove(0);
        }
    }

    fn ui(&mut self, ctx: &mut Context) {
        ctx.window("Demo", Rect::new(2, 1, 48, 20), Opt::empty(), |ctx| {
            ctx.layout_row(&[12, -1], 0);
            ctx.label("Hello:");
            ctx.label(&self.name);

            ctx.label("Clicks:");
            ctx.label(&self.clicks.to_string());

            ctx.label("Name:");
            if ctx.textbox("name", &mut self.name).contains(Response::SUBMIT) {
                self.push_log(format!("name set to {:?}", self.name));
            }

            ctx.label("Volume:");
            ctx.slider("volume", &mut self.volume, 0.0, 100.0);
            ctx.label("Speed:");
            if ctx.number("speed", &mut self.speed, 0.1).contains(Response::CHANGE) {
                self.push_log(format!("speed {:.2}", self.speed));
            }

            ctx.layout_row(&[-1], 0);
            // Labels double as IDs and must not change between frames.
            if ctx.button("Click me").contains(Response::SUBMIT) {
                self.clicks += 1;
                self.push_log(format!("clicked {} times", self.clicks));
            }
            if ctx.checkbox("Enabled", &mut self.enabled).contains(Response::CHANGE) {
                self.push_log(format!("enabled: {}", self.enabled));
            }

            if ctx.header("About").contains(Response::ACTIVE) {
                ctx.text("Shift-click the slider or the number to type a value. Drag the title bar to move this window.");
            }
            ctx.tree_node("Tree", |ctx| {
                ctx.label("leaf");
                ctx.tree_node("Nested", |ctx| ctx.label("deeper leaf"));
            });

            if ctx.button("Menu...").contains(Response::SUBMIT) {
                ctx.open_popup("menu");
            }
            let reset = ctx.popup("menu", |ctx| ctx.button("Reset").contains(Response::SUBMIT));
            if reset == Some(true) {
                self.clicks = 0;
                self.volume = 50.0;
                self.speed = 1.0;
                self.push_log(String::from("reset"));
            }
        });

        ctx.window("Log", Rect::new(52, 1, 30, 20), Opt::empty(), |ctx| {
            ctx.layout_row(&[-1], -1);
            ctx.panel("lines", |ctx| {
                ctx.layout_row(&[-1], 0);
                for line in &self.log {
                    ctx.label(line);
                }
            });
        });
    }
}

fn is_quit(ev: &Event) -> bool {
    matches!(
        ev,
        Event::Key(KeyEvent { code: KeyCode::Char('c'), modifiers, .. }) if modifiers.contains(KeyModifiers::CONTROL)
    )
}

fn run(driver: &mut Driver<io::BufWriter<io::Stdout>>) -> io::Result<()> {
    let mut ctx = Context::new(CellMetrics).with_style(Style::terminal());
    let mut demo = Demo::new();

    let (mut w, mut h) = driver.size()?;
    // An empty previous canvas makes the next diff a full repaint.
    let mut prev = Canvas::new(0, 0);
    let mut next = Canvas::new(w, h);

    loop {
        ctx.begin();
        demo.ui(&mut ctx);
        if let Err(err) = ctx.end() {
            tracing::error!(%err, "frame dropped");
        }

        next.clear();
        next.replay(ctx.commands());
        driver.apply(&next.diff(&prev))?;
        driver.flush()?;
        std::mem::swap(&mut prev, &mut next);
        if next.width() != w || next.height() != h {
            next.resize(w, h);
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        loop {
            let ev = event::read()?;
            if is_quit(&ev) {
                return Ok(());
            }
            if let Event::Resize(cols, rows) = ev {
                (w, h) = (cols, rows);
                prev = Canvas::new(0, 0);
                next.resize(w, h);
                tracing::debug!(cols, rows, "terminal resized");
            } else {
                feed_event(&mut ctx, &ev);
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}

fn main() -> io::Result<()> {
    let file = File::create("gilt-imui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!("starting terminal demo");

    let mut driver = Driver::stdout();
    driver.enter()?;
    let res = run(&mut driver);
    driver.leave()?;
    res
}
