//! Command handlers for the different command tags

mod indicator;
mod motion;
mod sensor;
mod sound;

pub use indicator::{handle_led_off, handle_led_on};
pub use motion::{
    handle_move_backward, handle_move_forward, handle_stop_motors, handle_turn_left,
    handle_turn_right, handle_wait,
};
pub use sensor::{handle_get_light, handle_get_temperature};
pub use sound::{handle_march, handle_play_beep, play_ok_chime, play_triplet_beep};

use super::EngineConfig;
use rover_shared::ExecutionParameters;

/// Context passed to command handlers
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext {
    pub params: ExecutionParameters,
    pub config: EngineConfig,
}
