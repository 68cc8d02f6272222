//! Deterministic paddle-ball duel simulation.
//!
//! A spinning rigid ball bounces between two laterally-moving paddles on a
//! normalized [0,1] x [0,1] field. Collisions use an impulse resolver with
//! a restitution law and Coulomb friction (stick or slip per contact);
//! rounds track lives and a freeze-frame; timed skills modify the paddle,
//! the clock, or take over ball physics entirely. Controllers sit behind
//! the `duel_agent` boundary and feed discrete actions into the tick.

pub mod components;
pub mod config;
pub mod params;
pub mod physics;
pub mod resources;
pub mod round;
pub mod skills;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use round::*;

use duel_agent::{Observation, OBS_LEN};
use glam::DVec2;
use hecs::{Entity, World};
use skills::{SkillKind, SkillLoadout};
use systems::*;

/// Spawn the ball entity.
pub fn create_ball(world: &mut World, pos: DVec2, vel: DVec2) -> Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn one player's paddle with its lives and skill loadout.
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> Entity {
    world.spawn((
        Paddle::new(side, 0.5),
        PaddleIntent::new(),
        Lives::new(config.round.lives),
        SkillLoadout::standard(&config.skills),
    ))
}

/// Set up a fresh match: one ball at rest at center, both paddles.
///
/// The first `step` serves the ball.
pub fn init_match(world: &mut World, config: &Config) {
    create_ball(world, DVec2::new(0.5, 0.5), DVec2::ZERO);
    create_paddle(world, Side::Bottom, config);
    create_paddle(world, Side::Top, config);
}

/// Run the deterministic duel simulation for one frame.
///
/// The frame is cut into fixed micro-steps for stable physics; within a
/// micro-step the pipeline is strictly sequential: round bookkeeping,
/// action ingestion, skill clocks, paddle movement, ball integration (or a
/// physics-override skill's replacement for it), contact resolution, goal
/// check, round transition.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    round: &mut RoundState,
    events: &mut Events,
    queue: &mut ActionQueue,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        events.clear();
        tick(world, step_dt, config, round, events, queue, rng);
    }

    time.now += clamped_dt;
}

fn tick(
    world: &mut World,
    dt: f64,
    config: &Config,
    round: &mut RoundState,
    events: &mut Events,
    queue: &mut ActionQueue,
    rng: &mut GameRng,
) {
    match round.phase {
        RoundPhase::MatchOver { .. } => {
            queue.clear();
        }
        RoundPhase::RoundOver { .. } => {
            queue.clear();
            if let Some(conceded) = round.tick_freeze(dt) {
                conclude_round(world, round, events, conceded);
            }
        }
        RoundPhase::Serving => {
            for (_entity, ball) in world.query_mut::<&mut Ball>() {
                ball.serve(
                    config.serve.speed,
                    config.serve.angle_rad,
                    round.serve_toward,
                    round.serve_count,
                );
            }
            round.serve_done();
            events.served = true;
            tracing::debug!(serve = round.serve_count, toward = ?round.serve_toward, "serve");
        }
        RoundPhase::InPlay => {
            ingest_actions(world, queue);
            tick_skill_clocks(world, dt);

            // Slow motion stretches physics time only; clocks above ran in
            // real time.
            let sim_dt = dt * time_scale(world);

            move_paddles(world, sim_dt, config);

            let overridden = physics_override_step(world, sim_dt, config, queue, rng);
            if !overridden {
                move_ball(world, sim_dt);
                check_walls(world, config, events);
                check_paddle_contacts(world, config, round, events, sim_dt);
            }

            check_goal(world, events);
            if let Some(conceded) = events.goal_against {
                round.goal_conceded(conceded, config.round.freeze_secs);
            }
        }
    }
}

/// Freeze elapsed: charge the conceder a life, then re-serve or finish.
fn conclude_round(world: &mut World, round: &mut RoundState, events: &mut Events, conceded: Side) {
    let mut out_of_lives = false;
    for (_entity, (paddle, lives)) in world.query_mut::<(&Paddle, &mut Lives)>() {
        if paddle.side == conceded {
            lives.lose_one();
            out_of_lives = lives.is_out();
        }
    }
    events.life_lost = Some(conceded);

    if out_of_lives {
        let winner = conceded.opponent();
        round.match_over(winner);
        events.match_over = Some(winner);
    } else {
        round.next_round(conceded);
    }
}

/// Remaining lives for one side.
pub fn lives_of(world: &World, side: Side) -> Option<u8> {
    for (_entity, (paddle, lives)) in world.query::<(&Paddle, &Lives)>().iter() {
        if paddle.side == side {
            return Some(lives.remaining);
        }
    }
    None
}

/// Activate a skill for one side; false if unknown, busy, or cooling down.
pub fn activate_skill(world: &mut World, side: Side, kind: SkillKind) -> bool {
    for (_entity, (paddle, loadout)) in world.query_mut::<(&Paddle, &mut SkillLoadout)>() {
        if paddle.side == side {
            return loadout.activate(kind);
        }
    }
    false
}

/// Build the observation vector a policy sees from one side's seat.
pub fn observe(world: &World, side: Side) -> Observation {
    let mut v = [0.0; OBS_LEN];

    for (_entity, ball) in world.query::<&Ball>().iter() {
        v[0] = ball.pos.x;
        v[1] = ball.pos.y;
        v[2] = ball.vel.x;
        v[3] = ball.vel.y;
        v[4] = ball.spin;
    }
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        if paddle.side == side {
            v[5] = paddle.x;
        } else {
            v[6] = paddle.x;
        }
    }
    v[7] = match side {
        Side::Bottom => 0.0,
        Side::Top => 1.0,
    };

    Observation(v)
}
