//! Banco Central do Brasil clients.

mod olinda;
pub use self::olinda::{CoinEmissionClient, ExpectationsClient, PtaxClient, OLINDA_BASE_URL};

mod sgs;
pub use self::sgs::SgsClient;
