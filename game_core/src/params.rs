/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const BG_COLOR: &'static str = "black";

    // Paddle
    pub const PADDLE_SPEED: f32 = 20.0; // units per move call
    pub const PADDLE_MARGIN: f32 = 40.0; // kept between paddle centre and screen edge
    pub const PADDLE_X: f32 = 350.0; // mirrored for the left paddle

    // Ball
    pub const BALL_SPEED: f32 = 0.1; // seconds between ticks
    pub const BALL_STEP: f32 = 10.0; // units per tick on each axis
    pub const BALL_SPEED_DECAY: f32 = 0.9; // applied to the tick delay on paddle hit
    pub const TRAIL_LEN: usize = 10;

    // Playfield (fixed, independent of screen size)
    pub const WALL_BOUND: f32 = 280.0;
    pub const ENGAGEMENT_LINE: f32 = 320.0;
    pub const SCORE_LINE: f32 = 380.0;
    pub const HIT_DISTANCE: f32 = 50.0;

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins
    pub const SCORE_HISTORY_LEN: usize = 10;
}
