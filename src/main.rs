//! Interactive deck shell.

use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pokerdeck::{Deck, DeckOptions, Shell, ShellError};

/// Seeds from the full nanosecond clock so sessions started within the same
/// second still shuffle differently.
const fn seed_from(elapsed: Duration) -> u64 {
    elapsed.as_nanos() as u64
}

fn main() -> Result<(), ShellError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let options = DeckOptions::default().with_shuffle_on_build(true);
    let deck = Deck::new(options, seed_from(elapsed));

    let mut shell = Shell::new(deck, io::stdin().lock(), io::stdout().lock());
    shell.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_changes_within_one_second() {
        let a = seed_from(Duration::new(1_700_000_000, 1));
        let b = seed_from(Duration::new(1_700_000_000, 500_000_000));
        assert_ne!(a, b);
    }
}
