pub mod cancellation;
pub mod chaos_game;
pub mod compute_field;
pub mod ports;
pub mod upsample_bilinear;
