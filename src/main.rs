//! Headless session driver: runs the coordinator in real time at ~60 Hz and
//! replays a short scripted interaction, logging what the renderer would
//! receive.
//!
//! Usage: `arix [options.toml]` (set `RUST_LOG=debug` for state transitions).

use std::path::Path;

use arix::input::{InputEvent, InputProcessor, MouseButton};
use arix::scene::layout::{spiral_layout, LayoutParams};
use arix::scene::LocketSet;
use arix::util::FrameClock;
use arix::{ArixError, Coordinator, FrameOutput, LocketId};

/// Scripted user input, keyed by session time in seconds.
enum Step {
    Click(Option<&'static str>),
    Key(&'static str),
}

const SCRIPT: &[(f32, Step)] = &[
    (0.5, Step::Click(Some("locket-3"))),
    // Rejected: the toggle is disabled while a locket is focused.
    (1.5, Step::Key("Space")),
    (3.0, Step::Click(None)),
    (3.5, Step::Key("Space")),
    (6.0, Step::Click(Some("locket-7"))),
    (7.0, Step::Key("Escape")),
];

const SESSION_SECONDS: f32 = 8.5;
const LOG_EVERY: u64 = 30;

fn main() -> Result<(), ArixError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => arix::options::Options::load(Path::new(&path))?,
        None => arix::options::Options::default(),
    };

    let lockets =
        LocketSet::from_poses(spiral_layout(&LayoutParams::default()))?;
    log::info!("scene: {} lockets", lockets.len());

    let mut input =
        InputProcessor::with_key_bindings(options.keybindings.clone());
    let mut coordinator = Coordinator::new(options, lockets);
    let mut clock = FrameClock::new(60);

    let mut session_time = 0.0_f32;
    let mut next_step = 0;

    while session_time < SESSION_SECONDS {
        std::thread::sleep(clock.time_until_next_frame());
        let elapsed = clock.tick();
        session_time += elapsed;

        while let Some((at, step)) = SCRIPT.get(next_step) {
            if *at > session_time {
                break;
            }
            replay(step, &mut input, &mut coordinator);
            next_step += 1;
        }

        let out = coordinator.frame(elapsed);
        if coordinator.frame_count() % LOG_EVERY == 0 {
            log_frame(session_time, &out, clock.fps());
        }
    }

    log::info!(
        "session finished after {} frames in state {}",
        coordinator.frame_count(),
        coordinator.state()
    );
    Ok(())
}

fn replay(
    step: &Step,
    input: &mut InputProcessor,
    coordinator: &mut Coordinator,
) {
    let cmd = match step {
        Step::Click(target) => {
            let hovered = target.map(LocketId::from);
            click(input, hovered.as_ref())
        }
        Step::Key(key) => input.handle_key_press(key),
    };
    let Some(cmd) = cmd else {
        return;
    };

    let enabled = coordinator.flags().formation_toggle_enabled;
    log::info!("input -> {cmd:?} (toggle enabled: {enabled})");
    coordinator.queue(cmd);
}

fn click(
    input: &mut InputProcessor,
    hovered: Option<&LocketId>,
) -> Option<arix::Command> {
    let press = InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    };
    let release = InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: false,
    };
    let _ = input.handle_event(press, hovered);
    input.handle_event(release, hovered)
}

fn log_frame(t: f32, out: &FrameOutput, fps: f32) {
    log::info!(
        "t={t:5.2}s {:>24} spot={:6.1} ambient={:.3} rim={:5.1} env={:.2} \
         blend={:.3} zoom={} toggle='{}'{} fps={fps:.0}",
        out.state.to_string(),
        out.lights.spot,
        out.lights.ambient,
        out.lights.rim,
        out.lights.environment,
        out.formation_blend,
        out.flags.camera_zoom_allowed,
        out.toggle_button.label,
        if out.toggle_button.enabled { "" } else { " (disabled)" },
    );
}
