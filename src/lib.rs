pub mod ledger;
pub mod session;
pub mod table;

/// Signed settlement amount. Stakes are integral by construction.
pub type Chips = i32;
/// Finishing position in a round, 1 (best) through 8 (worst).
pub type Rank = u8;
/// Seat index into the roster's stable order.
pub type Position = usize;

/// Fewest players that can settle against each other.
pub const MIN_SEATS: usize = 2;
/// Seats at the table; a roster never grows past this.
pub const MAX_SEATS: usize = 8;
/// Best possible finish. Winners at this rank collect double.
pub const RANK_FIRST: Rank = 1;
/// Worst possible finish. Losers at this rank pay double.
pub const RANK_LAST: Rank = 8;

/// Random instance generation for testing and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Initialize terminal logging.
pub fn log() {
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        simplelog::ConfigBuilder::new()
            .set_location_level(log::LevelFilter::Off)
            .set_target_level(log::LevelFilter::Off)
            .set_thread_level(log::LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
