use std::path::Path;

use crate::{CodecOptions, PayloadType, StegoError};

/// What goes into the carrier, exactly one of them
#[derive(Debug, Clone)]
pub enum HidePayload<'a> {
    Text(String),
    File(PayloadType, &'a Path),
}

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    payload: HidePayload<'_>,
    options: CodecOptions,
) -> Result<(), StegoError> {
    let api = crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file);

    match payload {
        HidePayload::Text(message) => api.with_message(&message),
        HidePayload::File(payload_type, file) => api.with_payload_file(payload_type, file),
    }
    .execute()
}
