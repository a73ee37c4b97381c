pub mod mask;
pub mod palette;
pub mod pixel;
pub mod utils;
