use crate::Ball;

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_move_ball_integrates_velocity() {
        let mut ball = Ball::new(Vec2::new(1024.0, 768.0), Vec2::new(500.0, 120.0), 20.0);
        move_ball(&mut ball, 1.0);
        assert_eq!(ball.pos, Vec2::new(1524.0, 888.0));
        assert_eq!(ball.vel, Vec2::new(500.0, 120.0), "velocity untouched");
    }

    #[test]
    fn test_move_ball_zero_dt_is_noop() {
        let mut ball = Ball::new(Vec2::new(3.0, 4.0), Vec2::new(500.0, -120.0), 20.0);
        move_ball(&mut ball, 0.0);
        assert_eq!(ball.pos, Vec2::new(3.0, 4.0));
    }
}
