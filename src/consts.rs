// Sprite size, must match the memory depth on the HDL side.
pub const WIDTH: u32 = 64;
pub const HEIGHT: u32 = 48;

// Upper bound on width x height, far above any block RAM sprite.
pub const MAX_PIXELS: usize = 1 << 25;

pub const MEM_FILE: &str = "sprite.mem";
pub const IMAGE_FILE: &str = "reconstructed_sprite.png";
