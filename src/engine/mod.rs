//! The coordinator: owns the state store and every damped scene parameter,
//! and turns elapsed time into a [`FrameOutput`] once per rendered frame.

pub mod command;
mod frame;
mod lighting;

use std::collections::VecDeque;

use glam::Vec3;

pub use self::command::Command;
pub use self::frame::FrameOutput;
use self::lighting::LightingRig;
pub use self::lighting::LightLevels;
use crate::animation::DampedParam;
use crate::gate::{InteractionFlags, OrbitSettings, ToggleButtonView};
use crate::options::{AnimationOptions, Options};
use crate::scene::{LocketRecord, LocketSet};
use crate::state::{CoordinatorState, StateStore, SubscriptionId};
use crate::targets::resolve_targets;

/// Formation and focus coordinator.
///
/// The [`StateStore`] inside is the single source of truth. Commands are
/// applied either immediately ([`execute`](Self::execute)) or at the start of
/// the next frame ([`queue`](Self::queue)). [`frame`](Self::frame) snapshots
/// the state, resolves targets, advances the damped parameters and evaluates
/// the interaction gate.
///
/// # Usage
///
/// ```ignore
/// let mut coordinator = Coordinator::new(options, lockets);
/// loop {
///     for cmd in input_commands() {
///         coordinator.queue(cmd);
///     }
///     let out = coordinator.frame(clock.tick());
///     renderer.apply(&out);
/// }
/// ```
pub struct Coordinator {
    store: StateStore,
    options: Options,
    lockets: LocketSet,
    rig: LightingRig,
    formation_blend: DampedParam<f32>,
    /// Commands deferred to the start of the next frame.
    pending: VecDeque<Command>,
    frame_count: u64,
}

impl Coordinator {
    /// Create a coordinator in the `(Scattered, none)` state with every
    /// damped parameter resting at its target.
    ///
    /// Invalid animation options are replaced by the defaults.
    #[must_use]
    pub fn new(options: Options, lockets: LocketSet) -> Self {
        let options = usable(options);
        let store = StateStore::new();
        let targets = resolve_targets(store.state(), &options);
        let ao = &options.animation;
        let rig = LightingRig::new(&targets, ao.light_smooth_time);
        let formation_blend =
            DampedParam::new(targets.formation_blend, ao.formation_smooth_time);

        log::debug!("coordinator created with {} lockets", lockets.len());

        Self {
            store,
            options,
            lockets,
            rig,
            formation_blend,
            pending: VecDeque::new(),
            frame_count: 0,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Read-only access to the state store.
    #[must_use]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &CoordinatorState {
        self.store.state()
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The locket poses.
    #[must_use]
    pub fn lockets(&self) -> &LocketSet {
        &self.lockets
    }

    /// Number of frames produced so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Gate flags for the current state.
    #[must_use]
    pub fn flags(&self) -> InteractionFlags {
        InteractionFlags::from_state(self.store.state())
    }

    /// Current light intensities.
    #[must_use]
    pub fn light_levels(&self) -> LightLevels {
        self.rig.levels()
    }

    /// Current formation blend (0 = scattered, 1 = tree).
    #[must_use]
    pub fn formation_blend(&self) -> f32 {
        self.formation_blend.value()
    }

    /// Records for every locket with `active` derived from the current
    /// focus.
    pub fn locket_records(&self) -> impl Iterator<Item = LocketRecord<'_>> {
        self.lockets.records(self.store.state())
    }

    /// World positions of every locket at the current formation blend.
    #[must_use]
    pub fn locket_positions(&self) -> Vec<Vec3> {
        self.lockets.positions_at(self.formation_blend.value())
    }

    /// Commands waiting for the next frame.
    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    // ── Options ────────────────────────────────────────────────────────

    /// Replace options. New light levels are picked up as targets on the
    /// next frame; current values ease toward them. Invalid animation
    /// options are replaced by the defaults.
    pub fn set_options(&mut self, new: Options) {
        self.options = usable(new);
        let ao = &self.options.animation;
        self.rig.set_smooth_time(ao.light_smooth_time);
        self.formation_blend.set_smooth_time(ao.formation_smooth_time);
    }

    // ── Subscriptions ──────────────────────────────────────────────────

    /// Observe every state mutation with `(current, previous)`.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CoordinatorState, &CoordinatorState) + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // ── Commands ───────────────────────────────────────────────────────

    /// Apply a command now. Returns `false` if it was rejected.
    ///
    /// `ToggleFormation` is rejected while a locket is focused, and
    /// `FocusLocket` is rejected for ids outside the locket set.
    pub fn execute(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::ToggleFormation => {
                if !self.flags().formation_toggle_enabled {
                    log::debug!("formation toggle ignored while focused");
                    return false;
                }
                self.store.toggle_formation_mode();
            }
            Command::SetFormation { mode } => {
                self.store.set_formation_mode(mode);
            }
            Command::FocusLocket { id } => {
                if !self.lockets.contains(&id) {
                    log::warn!("focus requested for unknown locket {id}");
                    return false;
                }
                self.store.set_focus(Some(id));
            }
            Command::ClearFocus => {
                self.store.set_focus(None);
            }
        }
        true
    }

    /// Defer a command to the start of the next [`frame`](Self::frame).
    pub fn queue(&mut self, cmd: Command) {
        self.pending.push_back(cmd);
    }

    // ── Per-frame update ───────────────────────────────────────────────

    /// Advance one frame by `elapsed` seconds.
    ///
    /// Elapsed time longer than `options.animation.max_frame_time` is
    /// clamped so a stalled frame does not finish transitions in one jump.
    ///
    /// # Panics
    ///
    /// Panics if `elapsed` is negative or NaN.
    pub fn frame(&mut self, elapsed: f32) -> FrameOutput {
        assert!(
            elapsed >= 0.0,
            "frame: elapsed time must be non-negative, got {elapsed}"
        );

        while let Some(cmd) = self.pending.pop_front() {
            let _ = self.execute(cmd);
        }

        let state = self.store.get_state();
        let revision = self.store.revision();
        let targets = resolve_targets(&state, &self.options);

        let ao = &self.options.animation;
        let dt = elapsed.min(ao.max_frame_time);
        self.rig.retarget(&targets);
        self.formation_blend.set_target(targets.formation_blend);
        let lights_moving = self.rig.advance(dt, ao.settle_epsilon);
        let blend_moving = self.formation_blend.advance(dt, ao.settle_epsilon);

        let flags = InteractionFlags::from_state(&state);
        let toggle_button = ToggleButtonView::from_flags(&flags);
        let orbit = OrbitSettings::resolve(&flags, &self.options.camera);

        self.frame_count += 1;

        FrameOutput {
            state,
            revision,
            targets,
            lights: self.rig.levels(),
            formation_blend: self.formation_blend.value(),
            flags,
            toggle_button,
            orbit,
            animating: lights_moving || blend_moving,
        }
    }
}

/// Fall back to default animation options when the given ones would stall
/// or panic the frame loop.
fn usable(mut options: Options) -> Options {
    if let Err(e) = options.animation.validate() {
        log::warn!("{e}; using default animation options");
        options.animation = AnimationOptions::default();
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::layout::{spiral_layout, LayoutParams};
    use crate::state::{FormationMode, LocketId};

    const DT: f32 = 1.0 / 60.0;

    fn coordinator() -> Coordinator {
        let lockets =
            LocketSet::from_poses(spiral_layout(&LayoutParams::default()))
                .unwrap();
        Coordinator::new(Options::default(), lockets)
    }

    fn focus(id: &str) -> Command {
        Command::FocusLocket { id: id.into() }
    }

    #[test]
    fn starts_at_rest() {
        let mut c = coordinator();
        let out = c.frame(DT);
        assert_eq!(out.state, CoordinatorState::default());
        assert_eq!(out.lights.spot, 200.0);
        assert_eq!(out.lights.ambient, 0.5);
        assert_eq!(out.formation_blend, 0.0);
        assert!(!out.animating);
        assert!(out.flags.formation_toggle_enabled);
    }

    #[test]
    fn focusing_a_locket_dims_the_spotlight_gradually() {
        let mut c = coordinator();
        let _ = c.frame(DT);

        assert!(c.execute(focus("locket-3")));
        assert_eq!(c.state().focus, Some(LocketId::from("locket-3")));
        assert_eq!(c.state().formation, FormationMode::Scattered);

        let out = c.frame(DT);
        assert!(!out.flags.formation_toggle_enabled);
        assert_eq!(out.targets.spot_intensity, 140.0);

        let mut previous = out.lights.spot;
        assert!(previous < 200.0 && previous > 140.0);
        for _ in 0..120 {
            let spot = c.frame(DT).lights.spot;
            assert!(spot <= previous, "spot rose: {spot} > {previous}");
            assert!(spot >= 140.0, "spot overshot: {spot}");
            if spot > 140.0 {
                assert!(spot < previous, "spot stalled at {spot}");
            }
            previous = spot;
        }
        assert!((previous - 140.0).abs() < 0.5);
    }

    #[test]
    fn toggle_is_gated_while_focused() {
        let mut c = coordinator();
        assert!(c.execute(focus("locket-3")));
        assert!(!c.execute(Command::ToggleFormation));
        assert_eq!(c.state().formation, FormationMode::Scattered);
    }

    #[test]
    fn store_toggle_stays_permissive_while_focused() {
        // The gate lives in the command layer; the raw store still flips.
        let mut store = StateStore::new();
        store.set_focus(Some("locket-3".into()));
        assert!(!InteractionFlags::from_state(store.state())
            .formation_toggle_enabled);
        store.toggle_formation_mode();
        assert_eq!(store.state().formation, FormationMode::Assembled);
    }

    #[test]
    fn clearing_focus_restores_camera_and_ambient() {
        let mut c = coordinator();
        assert!(c.execute(Command::SetFormation {
            mode: FormationMode::Assembled,
        }));
        assert!(c.execute(focus("locket-1")));
        let out = c.frame(DT);
        assert!(!out.flags.camera_zoom_allowed);
        assert!(!out.flags.camera_auto_rotate_allowed);
        assert_eq!(out.targets.ambient_intensity, 0.3);

        assert!(c.execute(Command::ClearFocus));
        let out = c.frame(DT);
        assert_eq!(out.state.focus, None);
        assert_eq!(out.state.formation, FormationMode::Assembled);
        assert!(out.flags.camera_zoom_allowed);
        assert!(out.flags.camera_auto_rotate_allowed);
        assert!(out.orbit.enable_zoom && out.orbit.auto_rotate);
        assert_eq!(out.targets.ambient_intensity, 0.5);
    }

    #[test]
    fn unknown_locket_is_rejected() {
        let mut c = coordinator();
        assert!(!c.execute(focus("locket-404")));
        assert_eq!(c.state().focus, None);
        assert_eq!(c.store().revision(), 0);
    }

    #[test]
    fn refocusing_replaces_previous_focus() {
        let mut c = coordinator();
        assert!(c.execute(focus("locket-2")));
        assert!(c.execute(focus("locket-5")));
        let active: Vec<_> = c.locket_records().filter(|r| r.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].pose.id.as_str(), "locket-5");
    }

    #[test]
    fn queued_commands_apply_at_next_frame() {
        let mut c = coordinator();
        c.queue(Command::ToggleFormation);
        assert_eq!(c.pending_commands(), 1);
        assert_eq!(c.state().formation, FormationMode::Scattered);

        let out = c.frame(DT);
        assert_eq!(c.pending_commands(), 0);
        assert_eq!(out.state.formation, FormationMode::Assembled);
        assert_eq!(out.targets.formation_blend, 1.0);
        assert!(out.formation_blend > 0.0);
    }

    #[test]
    fn queued_commands_apply_in_order() {
        let mut c = coordinator();
        c.queue(focus("locket-1"));
        c.queue(Command::ToggleFormation);
        let out = c.frame(DT);
        // The toggle saw the focus applied before it and was rejected.
        assert_eq!(out.state.formation, FormationMode::Scattered);
        assert_eq!(out.state.focus, Some("locket-1".into()));
    }

    #[test]
    fn formation_blend_converges_and_moves_lockets() {
        let mut c = coordinator();
        assert!(c.execute(Command::ToggleFormation));
        let mut out = c.frame(DT);
        while out.animating {
            out = c.frame(DT);
            assert!(c.frame_count() < 10_000);
        }
        assert_eq!(out.formation_blend, 1.0);
        let tree: Vec<_> =
            c.lockets().poses().iter().map(|p| p.tree_position).collect();
        assert_eq!(c.locket_positions(), tree);
        assert_eq!(out.toggle_button.label, crate::gate::DISPERSE_LABEL);
    }

    #[test]
    fn zero_elapsed_frame_changes_nothing() {
        let mut c = coordinator();
        assert!(c.execute(focus("locket-0")));
        let before = c.light_levels();
        let out = c.frame(0.0);
        assert_eq!(out.lights, before);
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut c = coordinator();
        assert!(c.execute(Command::ToggleFormation));
        let out = c.frame(5.0);
        // One clamped 0.1 s step cannot finish a 1.2 s transition.
        assert!(out.formation_blend < 0.5);
    }

    #[test]
    fn subscribers_observe_commands() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut c = coordinator();
        let id = c.subscribe(move |current, _| {
            sink.borrow_mut().push(current.clone());
        });

        assert!(c.execute(focus("locket-4")));
        assert!(c.execute(Command::ClearFocus));
        assert!(c.unsubscribe(id));
        assert!(c.execute(Command::ToggleFormation));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].focus, Some("locket-4".into()));
        assert_eq!(seen[1].focus, None);
    }

    #[test]
    fn unusable_frame_time_clamp_falls_back_to_defaults() {
        for bad in [-0.1, 0.0, f32::NAN] {
            let mut opts = Options::default();
            opts.animation.max_frame_time = bad;
            let lockets =
                LocketSet::from_poses(spiral_layout(&LayoutParams::default()))
                    .unwrap();
            let mut c = Coordinator::new(opts, lockets);
            assert_eq!(c.options().animation, AnimationOptions::default());

            assert!(c.execute(Command::ToggleFormation));
            let out = c.frame(DT);
            assert!(out.formation_blend > 0.0, "{bad}");
            assert!(out.animating);
        }
    }

    #[test]
    fn set_options_rejects_unusable_animation_values() {
        let mut c = coordinator();
        let mut opts = Options::default();
        opts.animation.settle_epsilon = -1.0;
        opts.animation.light_smooth_time = 0.0;
        opts.lighting.spot_intensity = 100.0;
        c.set_options(opts);

        assert_eq!(c.options().animation, AnimationOptions::default());
        assert_eq!(c.options().lighting.spot_intensity, 100.0);
        let out = c.frame(DT);
        assert!(out.lights.spot < 200.0 && out.lights.spot > 100.0);
    }

    #[test]
    fn new_options_retarget_on_next_frame() {
        let mut c = coordinator();
        let mut opts = Options::default();
        opts.lighting.spot_intensity = 100.0;
        c.set_options(opts);
        let out = c.frame(DT);
        assert_eq!(out.targets.spot_intensity, 100.0);
        assert!(out.lights.spot < 200.0 && out.lights.spot > 100.0);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_elapsed_panics() {
        let mut c = coordinator();
        let _ = c.frame(-1.0);
    }
}
