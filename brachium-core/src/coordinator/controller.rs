//! The coordinator and the motion context it owns

use brachium_hal::{Clock, OutputPin};
use brachium_protocol::{Command, CommandId};

use super::blink::StatusBlink;
use super::events::MotionEvent;
use super::machine::MotionState;
use super::report::{Report, Reports};
use crate::command::{CommandQueue, QueueError};
use crate::config::ArmConfig;
use crate::kinematics::{Elbow, IkSolver};
use crate::motion::{Interpolator, Point};
use crate::stepper::{JointAxes, JointPins, JointSteps};
use crate::traits::Effector;

/// Everything the control loop mutates
#[derive(Debug)]
pub struct MotionContext<P: OutputPin> {
    pub interpolator: Interpolator,
    pub solver: IkSolver,
    pub axes: JointAxes<P>,
    pub queue: CommandQueue,
}

/// Single-threaded motion coordinator
///
/// Call [`cycle`](Self::cycle) from the main loop as often as possible.
/// Each cycle steps the joints first, then either tracks the active move or,
/// when idle, holds position and dispatches one queued command.
pub struct Coordinator<P, C, G, L>
where
    P: OutputPin,
    C: Clock,
    G: Effector,
    L: Effector,
{
    config: ArmConfig,
    context: MotionContext<P>,
    state: MotionState,
    clock: C,
    gripper: G,
    indicator: L,
    blink: StatusBlink,
    overflow_reported: bool,
}

impl<P, C, G, L> Coordinator<P, C, G, L>
where
    P: OutputPin,
    C: Clock,
    G: Effector,
    L: Effector,
{
    /// Create a coordinator resting at the configured home pose
    ///
    /// The configuration should have passed [`ArmConfig::validate`]. The
    /// joint step counts are seeded from the home pose and the drivers are
    /// left disabled until `M17` or `G28`.
    ///
    /// # Arguments
    /// - `config`: arm geometry and axis hardware
    /// - `pins`: STEP/DIR/ENABLE outputs for the three joints
    /// - `clock`: microsecond clock driving interpolation and pulse timing
    /// - `gripper`: end effector switched by `M3`/`M5`
    /// - `indicator`: status LED
    pub fn new(config: ArmConfig, pins: JointPins<P>, clock: C, gripper: G, indicator: L) -> Self {
        let home = config.home;
        let mut solver = IkSolver::new(config.geometry);
        let solution = solver.solve(home.x, home.y, home.z);

        let mut axes = JointAxes::new(pins, &config);
        axes.set_current_angles(&solution.angles);

        let blink = StatusBlink::new(config.blink_period_ms, clock.now_us());

        Self {
            config,
            context: MotionContext {
                interpolator: Interpolator::new(home),
                solver,
                axes,
                queue: CommandQueue::new(),
            },
            state: MotionState::Idle,
            clock,
            gripper,
            indicator,
            blink,
            overflow_reported: false,
        }
    }

    /// Queue a command for execution
    pub fn enqueue(&mut self, command: Command) -> Result<(), QueueError> {
        self.context.queue.push(command)
    }

    /// Check if another command fits in the queue
    pub fn can_accept(&self) -> bool {
        !self.context.queue.is_full()
    }

    /// Run one control loop iteration
    pub fn cycle(&mut self) -> Reports {
        let mut reports = Reports::new();

        self.context.axes.tick(&mut self.clock);

        match self.state {
            MotionState::Moving => self.track_move(&mut reports),
            MotionState::Idle => {
                self.context.axes.hold();
                if let Some(command) = self.context.queue.pop() {
                    self.dispatch(command, &mut reports);
                }
            }
        }

        self.update_indicator();
        reports
    }

    /// Switch the stepper drivers on or off
    ///
    /// Switching off abandons any move in flight and re-synchronises the
    /// logical pose with the step counts, since the joints are free to move
    /// while released. The re-synced pose never crosses the centre line on
    /// step quantisation alone, so re-enabling cannot flip the elbow.
    pub fn set_stepper_power(&mut self, on: bool) -> Report {
        let ctx = &mut self.context;
        ctx.axes.hold();

        if on {
            ctx.axes.enable(true);
        } else {
            ctx.axes.enable(false);
            let commanded = ctx.interpolator.pose();
            let measured = ctx.solver.forward(&ctx.axes.angles()).with_e(commanded.e);
            let pose = resync_pose(
                commanded,
                measured,
                ctx.solver.elbow(),
                self.config.step_resolution_mm(),
            );
            ctx.interpolator.set_current_pose(pose);
            self.state = self.state.transition(MotionEvent::MoveAbandoned);
        }

        Report::StepperPower(on)
    }

    /// Re-seed the arm at the home pose
    pub fn home(&mut self) -> Report {
        let home = self.config.home;
        let ctx = &mut self.context;

        ctx.interpolator.set_current_pose(home);
        let solution = ctx.solver.solve(home.x, home.y, home.z);
        ctx.axes.set_current_angles(&solution.angles);
        ctx.axes.enable(true);
        ctx.axes.hold();

        self.state = self.state.transition(MotionEvent::MoveAbandoned);
        Report::HomingComplete
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Current commanded pose
    pub fn pose(&self) -> Point {
        self.context.interpolator.pose()
    }

    pub fn joint_steps(&self) -> JointSteps {
        self.context.axes.steps()
    }

    pub fn context(&self) -> &MotionContext<P> {
        &self.context
    }

    pub fn queue_len(&self) -> usize {
        self.context.queue.len()
    }

    pub fn config(&self) -> &ArmConfig {
        &self.config
    }

    pub fn gripper(&self) -> &G {
        &self.gripper
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    fn track_move(&mut self, reports: &mut Reports) {
        let now = self.clock.now_us();
        let ctx = &mut self.context;

        ctx.interpolator.advance(now);
        let pose = ctx.interpolator.pose();
        let solution = ctx.solver.solve(pose.x, pose.y, pose.z);
        ctx.axes.set_target_angles(&solution.angles);

        if solution.overflow && !self.overflow_reported {
            self.overflow_reported = true;
            let _ = reports.push(Report::ReachOverflow(pose));
        }

        if ctx.interpolator.is_finished() && ctx.axes.all_on_target() {
            self.state = self.state.transition(MotionEvent::MoveSettled);
            let _ = reports.push(Report::MoveComplete(pose));
        }
    }

    fn dispatch(&mut self, command: Command, reports: &mut Reports) {
        let report = match (command.id, command.num) {
            (CommandId::G, 0 | 1) => {
                self.begin_linear_move(&command);
                None
            }
            (CommandId::G, 4) => {
                self.dwell(command.t.unwrap_or(0.0));
                None
            }
            (CommandId::G, 28) => Some(self.home()),
            (CommandId::M, 3) => Some(self.set_gripper(true)),
            (CommandId::M, 5) => Some(self.set_gripper(false)),
            (CommandId::M, 17) => Some(self.set_stepper_power(true)),
            (CommandId::M, 18) => Some(self.set_stepper_power(false)),
            (CommandId::Invalid(reason), _) => Some(Report::ParseError(reason)),
            (id, num) => Some(Report::UnknownCommand {
                letter: id.letter().unwrap_or('?'),
                num,
            }),
        };

        if let Some(report) = report {
            let _ = reports.push(report);
        }
    }

    fn begin_linear_move(&mut self, command: &Command) {
        let ctx = &mut self.context;
        let from = ctx.interpolator.pose();
        let to = Point {
            x: command.x.unwrap_or(from.x),
            y: command.y.unwrap_or(from.y),
            z: command.z.unwrap_or(from.z),
            e: command.e.unwrap_or(from.e),
        };
        // Feed rate is mm/min; no feed rate means the default duration
        let speed = command.f.map_or(0.0, |f| f / 60.0);

        ctx.interpolator.begin_move(from, to, speed, self.clock.now_us());
        self.overflow_reported = false;
        self.state = self.state.transition(MotionEvent::MoveDispatched);
    }

    /// Blocks the loop; the steppers are not ticked meanwhile
    fn dwell(&mut self, seconds: f32) {
        if seconds.is_finite() && seconds > 0.0 {
            self.clock.delay_ms((seconds * 1000.0) as u32);
        }
    }

    fn set_gripper(&mut self, closed: bool) -> Report {
        self.gripper.set_active(closed);
        Report::Gripper(closed)
    }

    fn update_indicator(&mut self) {
        let lit = self.blink.update(self.clock.now_us());
        if lit != self.indicator.is_active() {
            self.indicator.set_active(lit);
        }
    }
}

/// Logical pose after the drivers are released
///
/// `measured` comes from quantised step counts. Within `resolution_mm` of the
/// commanded pose the commanded pose is kept. Otherwise an `x` that sits on
/// the far side of the centre line for the current elbow, by no more than
/// the resolution, is pinned to the centre line.
fn resync_pose(commanded: Point, measured: Point, elbow: Elbow, resolution_mm: f32) -> Point {
    if measured.distance_to(&commanded) <= resolution_mm {
        return commanded;
    }

    let crosses = match elbow {
        Elbow::Down => measured.x < 0.0,
        Elbow::Up => measured.x > 0.0,
    };
    if crosses && measured.x.abs() <= resolution_mm {
        Point { x: 0.0, ..measured }
    } else {
        measured
    }
}
