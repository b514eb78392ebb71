//! Transport layer: wire-format details (payload encoding and response
//! normalization).

mod device;
mod outcome;
mod send;
mod user;

pub use device::{
    decode_check_number_outcome, decode_qr_outcome, encode_check_number, encode_create_device,
    encode_device_info, encode_disconnect_device, encode_generate_qr,
};
pub use outcome::decode_call_outcome;
pub use send::{
    encode_send_buttons, encode_send_media, encode_send_message, encode_send_poll,
    encode_send_sticker,
};
pub use user::{decode_user_info_outcome, encode_user_info};
