mod header;

pub use header::{
    decode_header, encode_header, ContainerHeader, PayloadType, UnknownPayloadType, HEADER_BITS,
    HEADER_BYTES,
};
