use std::{collections::VecDeque, io, time::Duration};

use rand::{rngs::StdRng, SeedableRng};
use spong::{
    audio::{Audio, Cue},
    ball::Velocity,
    display::{Display, Scene},
    input::{HeldKeys, Input, Key, Signal},
    play_match, play_round,
    round::Timer,
    Game, Params, Platform, Round, RoundEnd, Rules, Side,
};

/// Replays a fixed script of events, one batch per poll.
#[derive(Default)]
struct Script {
    polls: VecDeque<Vec<Signal>>,
    waits: VecDeque<Signal>,
    held: HeldKeys,
    wait_calls: usize,
}

impl Script {
    fn polls(polls: Vec<Vec<Signal>>) -> Self {
        Self {
            polls: polls.into(),
            ..Default::default()
        }
    }
}

impl Input for Script {
    fn held(&self) -> HeldKeys {
        self.held
    }

    fn poll(&mut self) -> io::Result<Vec<Signal>> {
        Ok(self.polls.pop_front().unwrap_or_default())
    }

    fn wait(&mut self) -> io::Result<Signal> {
        self.wait_calls += 1;
        self.waits
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script ran out"))
    }
}

#[derive(Default)]
struct Frames(Vec<Scene>);

impl Display for Frames {
    fn render(&mut self, scene: &Scene) -> io::Result<()> {
        self.0.push(scene.clone());
        Ok(())
    }
}

#[derive(Default)]
struct Cues(Vec<Cue>);

impl Audio for Cues {
    fn play(&mut self, cue: Cue) {
        self.0.push(cue);
    }
}

#[derive(Default)]
struct Clock(Vec<Duration>);

impl Timer for Clock {
    fn wait(&mut self, duration: Duration) {
        self.0.push(duration);
    }
}

struct Rig {
    input: Script,
    frames: Frames,
    cues: Cues,
    clock: Clock,
}

impl Rig {
    fn new(input: Script) -> Self {
        Self {
            input,
            frames: Frames::default(),
            cues: Cues::default(),
            clock: Clock::default(),
        }
    }

    fn platform(&mut self) -> Platform<'_> {
        Platform {
            input: &mut self.input,
            display: &mut self.frames,
            audio: &mut self.cues,
            timer: &mut self.clock,
        }
    }
}

fn new_round(game: &Game, rules: &Rules) -> Round {
    Round::new(game, rules, &mut StdRng::seed_from_u64(42))
}

#[test]
fn ball_runs_out_on_the_right() {
    let rules = Rules::default();
    let mut game = Game::default();
    game.points = (4, 5);
    let mut round = new_round(&game, &rules);
    round.ball.bounds.x = 540.0;
    round.ball.bounds.y = 20.0;
    round.ball.velocity = Velocity { x: 5.0, y: 1.0 };

    let mut rig = Rig::new(Script::default());
    let end = play_round(round, &mut game, &rules, &mut rig.platform()).unwrap();

    assert_eq!(end, RoundEnd::Scored(Side::Left));
    assert_eq!(game.points, (5, 5));
    assert!(game.serve_left);
    // x: 545, 550, then 555 crosses; the scoring tick is not drawn
    assert_eq!(rig.frames.0.len(), 2);
    assert_eq!(rig.clock.0, vec![Params::TICK; 2]);
    assert!(rig.cues.0.is_empty());
}

#[test]
fn ball_runs_out_on_the_left() {
    let rules = Rules::default();
    let mut game = Game::default();
    let mut round = new_round(&game, &rules);
    round.ball.bounds.x = 2.0;
    round.ball.bounds.y = 20.0;
    round.ball.velocity = Velocity { x: -3.0, y: -1.0 };

    let mut rig = Rig::new(Script::default());
    let end = play_round(round, &mut game, &rules, &mut rig.platform()).unwrap();

    assert_eq!(end, RoundEnd::Scored(Side::Right));
    assert_eq!(game.points, (0, 1));
    assert!(rig.frames.0.is_empty());
}

#[test]
fn pause_blocks_until_resumed() {
    let rules = Rules::default();
    let mut game = Game::default();
    let mut round = new_round(&game, &rules);
    round.ball.bounds.x = 540.0;
    round.ball.bounds.y = 20.0;
    round.ball.velocity = Velocity { x: 5.0, y: 1.0 };

    let mut script = Script::polls(vec![vec![], vec![Signal::Pause]]);
    script.waits = VecDeque::from(vec![Signal::Pause]);
    let mut rig = Rig::new(script);
    let end = play_round(round, &mut game, &rules, &mut rig.platform()).unwrap();

    assert_eq!(end, RoundEnd::Scored(Side::Left));
    assert_eq!(rig.input.wait_calls, 1);
    assert_eq!(rig.frames.0.len(), 2);
}

#[test]
fn exit_while_paused() {
    let rules = Rules::default();
    let mut game = Game::default();
    let round = new_round(&game, &rules);

    let mut script = Script::polls(vec![vec![], vec![], vec![Signal::Pause]]);
    script.waits = VecDeque::from(vec![Signal::Exit]);
    let mut rig = Rig::new(script);
    let end = play_round(round, &mut game, &rules, &mut rig.platform()).unwrap();

    assert_eq!(end, RoundEnd::Exit);
    assert_eq!(game, Game::default());
    assert_eq!(rig.frames.0.len(), 2);
}

#[test]
fn exit_while_running_skips_the_rest_of_the_batch() {
    let rules = Rules::default();
    let mut game = Game::default();
    let round = new_round(&game, &rules);

    let mut rig = Rig::new(Script::polls(vec![vec![Signal::Exit, Signal::Pause]]));
    let end = play_round(round, &mut game, &rules, &mut rig.platform()).unwrap();

    assert_eq!(end, RoundEnd::Exit);
    assert_eq!(rig.input.wait_calls, 0);
    assert!(rig.frames.0.is_empty());
}

#[test]
fn held_keys_move_the_right_paddle() {
    let rules = Rules::default();
    let mut game = Game::default();
    let round = new_round(&game, &rules);

    let mut script = Script::polls(vec![vec![], vec![], vec![], vec![Signal::Exit]]);
    script.held = HeldKeys::none().with(Key::RightUp);
    let mut rig = Rig::new(script);
    play_round(round, &mut game, &rules, &mut rig.platform()).unwrap();

    let ys: Vec<f32> = rig.frames.0.iter().map(|scene| scene.right.y).collect();
    assert_eq!(ys, vec![128.0, 126.0, 124.0]);
    assert!(rig.frames.0.iter().all(|scene| scene.left.y == 130.0));
}

#[test]
fn match_serves_again_after_a_point() {
    let rules = Rules::with_board(Params::MIN_WIDTH, Params::MIN_HEIGHT);
    let mut game = Game::default();
    // however the rallies go, every point is followed by one serve delay
    let polls = vec![Vec::new(); 2_000]
        .into_iter()
        .chain(std::iter::once(vec![Signal::Exit]))
        .collect();
    let mut rig = Rig::new(Script::polls(polls));

    play_match(
        &mut game,
        &rules,
        &mut rig.platform(),
        &mut StdRng::seed_from_u64(3),
    )
    .unwrap();

    let delays = rig
        .clock
        .0
        .iter()
        .filter(|d| **d == Params::SERVE_DELAY)
        .count() as u32;
    assert_eq!(game.points.0 + game.points.1, delays);
    assert_eq!(game.serve_left, delays % 2 == 1);
}
