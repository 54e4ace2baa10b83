use crate::{Events, MatchState, PADDLE_AXIS};

/// Bounce the ball off the two walls parallel to the scoring axis.
///
/// Closed test: an edge exactly on the wall reflects. The ball is clamped
/// back inside so it never rests past the visual bound.
pub fn bounds_check_ball(state: &mut MatchState, events: &mut Events) {
    let axis = PADDLE_AXIS;
    let ball = &mut state.ball;
    let lo = axis.component(state.area.min()) + ball.radius;
    let hi = axis.component(state.area.max()) - ball.radius;

    if axis.component(ball.pos) <= lo {
        ball.pos = axis.with_component(ball.pos, lo);
        ball.vel = axis.with_component(ball.vel, -axis.component(ball.vel));
        events.ball_hit_wall = true;
        log::trace!("ball hit low wall at {:?}", ball.pos);
    }
    if axis.component(ball.pos) >= hi {
        ball.pos = axis.with_component(ball.pos, hi);
        ball.vel = axis.with_component(ball.vel, -axis.component(ball.vel));
        events.ball_hit_wall = true;
        log::trace!("ball hit high wall at {:?}", ball.pos);
    }
}

/// Reflect the ball's scoring-axis velocity for every paddle it overlaps.
///
/// No push-out: a ball still overlapping next step reflects again.
pub fn check_paddle_collisions(state: &mut MatchState, events: &mut Events) {
    let scoring_axis = PADDLE_AXIS.other();
    for paddle in [state.player2, state.player1] {
        let ball = &mut state.ball;
        if ball.aabb().intersects(&paddle.aabb()) {
            ball.vel = scoring_axis.with_component(ball.vel, -scoring_axis.component(ball.vel));
            events.ball_hit_paddle = true;
            log::trace!("ball hit paddle at {:?}", paddle.pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AspectRatio, Config};
    use glam::Vec2;

    fn setup() -> (MatchState, Events) {
        let mut config = Config::new();
        config.aspect_ratio = AspectRatio::new(16.0, 9.0);
        let state = MatchState::new(2048.0, 1536.0, &config).unwrap();
        (state, Events::new())
    }

    #[test]
    fn test_ball_bounces_off_high_wall() {
        let (mut state, mut events) = setup();
        state.ball.pos = Vec2::new(1024.0, 1344.0 - 20.0); // edge on the wall
        state.ball.vel = Vec2::new(500.0, 120.0);

        bounds_check_ball(&mut state, &mut events);

        assert_eq!(state.ball.vel, Vec2::new(500.0, -120.0));
        assert_eq!(state.ball.pos.y, 1324.0, "clamped to the wall");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_past_low_wall_is_clamped() {
        let (mut state, mut events) = setup();
        state.ball.pos = Vec2::new(1024.0, 150.0);
        state.ball.vel = Vec2::new(-500.0, -300.0);

        bounds_check_ball(&mut state, &mut events);

        assert_eq!(state.ball.pos.y, 212.0);
        assert_eq!(state.ball.vel, Vec2::new(-500.0, 300.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_bounce_inside_walls() {
        let (mut state, mut events) = setup();
        state.ball.pos = Vec2::new(1024.0, 888.0);
        let before = state.ball;

        bounds_check_ball(&mut state, &mut events);

        assert_eq!(state.ball, before);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_reflects_off_player1_paddle() {
        let (mut state, mut events) = setup();
        state.ball.pos = Vec2::new(70.0, 768.0); // left edge at 50, paddle spans 20..60
        state.ball.vel = Vec2::new(-500.0, 50.0);

        check_paddle_collisions(&mut state, &mut events);

        assert_eq!(state.ball.vel, Vec2::new(500.0, 50.0));
        assert_eq!(state.ball.pos, Vec2::new(70.0, 768.0), "no positional correction");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_reflects_off_player2_paddle() {
        let (mut state, mut events) = setup();
        state.ball.pos = Vec2::new(1975.0, 700.0);
        state.ball.vel = Vec2::new(500.0, 0.0);

        check_paddle_collisions(&mut state, &mut events);

        assert_eq!(state.ball.vel.x, -500.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_touching_paddle_is_not_a_hit() {
        let (mut state, mut events) = setup();
        state.ball.pos = Vec2::new(80.0, 768.0); // left edge exactly on paddle's right edge
        state.ball.vel = Vec2::new(-500.0, 0.0);

        check_paddle_collisions(&mut state, &mut events);

        assert_eq!(state.ball.vel.x, -500.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_beside_paddle_misses() {
        let (mut state, mut events) = setup();
        state.ball.pos = Vec2::new(40.0, 400.0); // well below the paddle span 688..848
        state.ball.vel = Vec2::new(-500.0, 0.0);

        check_paddle_collisions(&mut state, &mut events);

        assert_eq!(state.ball.vel.x, -500.0);
        assert!(!events.ball_hit_paddle);
    }
}
