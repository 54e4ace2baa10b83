/// Reference tuning parameters for a match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playable area: widest aspect ratio kept on screen (width : height)
    pub const ASPECT_WIDTH: f32 = 4.0;
    pub const ASPECT_HEIGHT: f32 = 3.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 160.0;
    pub const PADDLE_EDGE_OFFSET: f32 = 40.0; // center distance from the side edge

    // Ball
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_SPEED: f32 = 500.0; // units per second along the scoring axis
    pub const BALL_INITIAL_VY: f32 = 120.0;

    // Rng
    pub const DEFAULT_SEED: u64 = 12345;
}
