pub(crate) mod args;
mod payload;

pub(crate) use payload::parse_payload;
