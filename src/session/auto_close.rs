use crate::core::config::DemoConfig;
use crate::core::system::PostFrameSet;
use crate::simulation::AnimationLoop;
use bevy::prelude::*;

/// Session deadline armed from `window.autoClose`.
#[derive(Resource, Debug)]
pub struct SessionDeadline {
    timer: Timer,
}

impl SessionDeadline {
    /// `None` unless `seconds` is strictly positive (negative counts as disabled).
    pub fn from_config(cfg: &DemoConfig) -> Option<Self> {
        let secs = cfg.window.auto_close;
        (secs > 0.0).then(|| Self {
            timer: Timer::from_seconds(secs, TimerMode::Once),
        })
    }

    pub fn seconds(&self) -> f32 {
        self.timer.duration().as_secs_f32()
    }
}

/// Ends the session after `window.autoClose` seconds and reports how far the
/// animation got.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_deadline)
            .add_systems(Update, end_session_on_deadline.in_set(PostFrameSet));
    }
}

fn arm_deadline(mut commands: Commands, cfg: Res<DemoConfig>) {
    if let Some(deadline) = SessionDeadline::from_config(&cfg) {
        info!(target: "session", seconds = deadline.seconds(), "auto-close armed");
        commands.insert_resource(deadline);
    }
}

fn end_session_on_deadline(
    time: Res<Time>,
    deadline: Option<ResMut<SessionDeadline>>,
    anim: Option<Res<AnimationLoop>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut deadline) = deadline else {
        return;
    };
    if !deadline.timer.tick(time.delta()).just_finished() {
        return;
    }
    match anim {
        Some(anim) => info!(
            target: "session",
            frames = anim.frame_count(),
            contacts = anim.contact_count(),
            color_index = anim.state().color_index(),
            "auto-close deadline reached; exiting"
        ),
        None => info!(target: "session", "auto-close deadline reached; exiting"),
    }
    ev_exit.write(AppExit::Success);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn app_with(auto_close: f32) -> App {
        let mut cfg = DemoConfig::default();
        cfg.window.auto_close = auto_close;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(cfg)
            .add_plugins(AutoClosePlugin);
        app
    }

    #[test]
    fn zero_and_negative_leave_session_open() {
        for secs in [0.0, -3.0] {
            let mut app = app_with(secs);
            app.update();
            assert!(
                app.world().get_resource::<SessionDeadline>().is_none(),
                "deadline armed for {secs}"
            );
        }
    }

    #[test]
    fn positive_arms_deadline() {
        let mut app = app_with(1.5);
        app.update();
        let deadline = app.world().resource::<SessionDeadline>();
        assert!((deadline.seconds() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn expired_deadline_requests_exit() {
        let mut app = app_with(0.5);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(200)));
        let mut exit = None;
        for _ in 0..6 {
            app.update();
            exit = exit.or(app.should_exit());
        }
        assert_eq!(exit, Some(AppExit::Success));
    }

    #[test]
    fn open_deadline_does_not_exit() {
        let mut app = app_with(10.0);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(200)));
        for _ in 0..5 {
            app.update();
            assert!(app.should_exit().is_none());
        }
    }
}
