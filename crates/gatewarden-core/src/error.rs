use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid MAC address: {0}")]
    InvalidMac(String),

    #[error("Invalid router host: {0}")]
    InvalidHost(String),
}

pub type Result<T> = std::result::Result<T, Error>;
