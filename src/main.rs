use log::info;
use mastermind::cli::{parse_cli, select_variant};
use mastermind::game::{Variant, play};
use mastermind::messages;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

fn main() {
    env_logger::init();
    let cli = parse_cli();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    println!("{}", messages::WELCOME);
    let variant: Variant = match cli.game {
        Some(choice) => choice.into(),
        None => match select_variant(&mut reader) {
            Ok(variant) => variant,
            Err(e) => {
                eprintln!("Failed to read game selection: {e}");
                return;
            }
        },
    };
    info!("starting {variant:?}");

    if let Err(e) = play(variant, &mut reader, &mut rng) {
        eprintln!("Game aborted: {e}");
    }
}
