pub(crate) mod categorizer;
pub(crate) mod hsv;
