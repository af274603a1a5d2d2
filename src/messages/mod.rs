//! PCM message builders
//!
//! Every function here is a pure encoder: it takes semantic parameters and
//! returns a freshly allocated [`Message`](crate::Message). Builders named
//! `*_response` produce the exact reply a PCM is documented to send, so a
//! caller recognizes a reply by comparing it with `==`.

mod control;
mod read;
mod security;
mod upload;

pub use control::{
    begin_high_speed, clear_dtcs_ok_response, clear_dtcs_request, high_speed_check,
    high_speed_ok_response, silence_bus_ok_response, silence_bus_request, test_device_present,
};
pub use read::{
    bcc_request, calibration_id_request, hardware_id_request, mec_request,
    operating_system_id_request, read_request, serial1_request, serial2_request, serial3_request,
    vin1_request, vin2_request, vin3_request,
};
pub use security::{seed_request, unlock_accepted_response, unlock_request};
pub use upload::{block_message, upload_ok_response, upload_request};
