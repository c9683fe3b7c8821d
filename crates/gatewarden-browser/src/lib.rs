mod agent;
mod chrome_finder;
mod error;
mod pages;
mod scrape;
mod session;

pub use agent::{OperationOutcome, RouterAgent};
pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use session::BrowserSession;
