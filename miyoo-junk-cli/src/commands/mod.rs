pub(crate) mod config;
pub(crate) mod m3u;
pub(crate) mod missing_imgs;
pub(crate) mod thumbnail;
