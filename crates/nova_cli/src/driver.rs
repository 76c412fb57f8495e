//! Scripted headless run

use crate::surface::LoggingSurface;
use anyhow::{Context, Result};
use nova_platform::{ControlFlow, Event, HeadlessWindow, InputEvent};
use nova_scene::{SceneConfig, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

const FRAME_DT: f32 = 1.0 / 60.0;
/// Document height the simulated scroll runs over, in viewports
const DOCUMENT_VIEWPORTS: f32 = 5.0;

pub struct RunOptions {
    pub frames: u64,
    pub seed: Option<u64>,
    pub width: u32,
    pub height: u32,
    pub json: bool,
    pub script: ScrollScript,
}

/// Scroll linearly to the end over the first half, then click at intervals
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollScript {
    scroll_frames: u64,
    clicks: u32,
    click_interval: u64,
}

impl ScrollScript {
    pub fn new(frames: u64, clicks: u32) -> Self {
        let scroll_frames = (frames / 2).max(1);
        let remaining = frames.saturating_sub(scroll_frames);
        let click_interval = (remaining / (clicks as u64 + 1)).max(1);
        Self {
            scroll_frames,
            clicks,
            click_interval,
        }
    }

    /// Events delivered before frame `frame` is ticked
    pub fn events(&self, frame: u64, width: u32, height: u32) -> Vec<Event> {
        let mut events = Vec::new();
        if frame < self.scroll_frames {
            let progress = (frame + 1) as f32 / self.scroll_frames as f32;
            let viewport = height as f32;
            let content = viewport * DOCUMENT_VIEWPORTS;
            events.push(Event::Input(InputEvent::scroll(
                progress * (content - viewport),
                content,
                viewport,
            )));
        } else {
            let since = frame - self.scroll_frames;
            if since > 0 && since % self.click_interval == 0 {
                let index = since / self.click_interval;
                if index <= self.clicks as u64 {
                    let x = width as f32 * index as f32 / (self.clicks as f32 + 1.0);
                    events.push(Event::Input(InputEvent::click(x, height as f32 * 0.4)));
                }
            }
        }
        events.push(Event::Frame);
        events
    }
}

pub fn run(config: SceneConfig, options: &RunOptions) -> Result<()> {
    let window = HeadlessWindow::new(options.width, options.height);
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::attach(config, &window, rng).context("Failed to start session")?;
    let mut surface = LoggingSurface::new();
    let mut launched = 0;

    if let Some(hint) = session.take_hint_update() {
        info!("Hint: {}", hint.text);
    }

    'frames: for frame in 0..options.frames {
        for event in options.script.events(frame, options.width, options.height) {
            if event == Event::Frame {
                let stats = session.tick(FRAME_DT);
                session.render(&mut surface)?;
                if options.json {
                    println!("{}", serde_json::to_string(&stats)?);
                }
                continue;
            }

            let before = session.fireworks().len();
            if session.handle_event(event) == ControlFlow::Exit {
                break 'frames;
            }
            if session.fireworks().len() > before {
                launched += 1;
            }
        }
    }

    let state = session.timeline_state();
    info!(
        "Ran {} frames ({:.1}s): progress {:.2}, camera z {:.1}, {} fireworks launched, {} still active, peak {} points",
        surface.frames,
        state.elapsed,
        state.scroll_progress,
        session.camera().z(),
        launched,
        session.fireworks().len(),
        surface.peak_points
    );
    Ok(())
}
