use glam::Vec2;

use crate::{Config, Events, GameRng, MatchState, Player, ServeRule, PADDLE_AXIS};

/// Award a point if the ball's leading edge reached either end of the
/// scoring axis, then re-serve from the center.
///
/// Returns the player who scored, if any.
pub fn check_scoring(
    state: &mut MatchState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<Player> {
    let axis = PADDLE_AXIS.other();
    let ball = &state.ball;
    let pos = axis.component(ball.pos);

    // Player 1 defends the low end, player 2 the high end
    let scorer = if pos + ball.radius >= axis.component(state.area.max()) {
        Player::One
    } else if pos - ball.radius <= axis.component(state.area.min()) {
        Player::Two
    } else {
        return None;
    };

    state.score.increment(scorer);
    events.scored(scorer);
    log::debug!(
        "player {} scored, score {}-{}",
        scorer.id(),
        state.score.player1,
        state.score.player2
    );

    reset_ball(state, config, rng, scorer.opponent());
    Some(scorer)
}

/// Put the ball back in the center and serve it.
///
/// `conceder` is the player who was just scored against.
pub fn reset_ball(state: &mut MatchState, config: &Config, rng: &mut GameRng, conceder: Player) {
    let scoring_axis = PADDLE_AXIS.other();
    let toward = match config.serve {
        ServeRule::TowardPlayer1 => Player::One,
        ServeRule::TowardConceder => conceder,
    };
    let along = match toward {
        Player::One => -config.ball_speed,
        Player::Two => config.ball_speed,
    };
    // Vertical pick spans the whole output surface, not just the playable area
    let across = rng.below(PADDLE_AXIS.component(state.surface));

    let vel = scoring_axis.with_component(PADDLE_AXIS.with_component(Vec2::ZERO, across), along);
    state.ball.reset(state.area.center(), vel);
    log::debug!("ball served toward player {} with velocity {:?}", toward.id(), vel);
}
