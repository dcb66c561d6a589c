pub(crate) mod date;
pub(crate) mod photo_session;
