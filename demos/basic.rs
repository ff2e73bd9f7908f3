use anirec::{build_engine, EngineConfig};

fn main() {
    // build the engine from cleaned (name, feature text) pairs
    let engine = build_engine(
        [
            ("Cowboy Bebop", "Action Adventure Sci-Fi bounty hunters drifting through space"),
            ("Trigun", "Action Sci-Fi Adventure a gunman with a bounty on his head"),
            ("Space Dandy", "Comedy Sci-Fi Space alien hunter drifting through space"),
            ("Clannad", "Drama Romance School a delinquent meets a lonely girl"),
        ],
        &EngineConfig::default(),
    );

    match engine.recommend_scored("Cowboy Bebop", 3) {
        Ok(recs) => println!("Similar to Cowboy Bebop:\n{recs:#}"),
        Err(err) => println!("{err}"),
    }

    // unknown titles are reported, not panicked on
    if let Err(err) = engine.recommend("cowboy bebop", 3) {
        println!("{err}");
    }
}
