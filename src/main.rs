use roll_dice::{
    config::{run_env, Config},
    dice::{Die, RollRequest, TextPlotter, ThreadRngRoller},
    AppError,
};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), AppError> {
    let env: String = run_env();
    let config: Config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    tracing::info!(run_env = %env, sample_count = config.stats.sample_count, "Starting roll-dice...");

    let mut roller = ThreadRngRoller::new();

    Die::copy_paste_snippet();
    for die in Die::full_dice_set() {
        println!("{}", die);
        println!("{:?} rolled {}", die, die.roll_once(&mut roller)?);
    }

    let [.., d20, _] = Die::standard_set();
    let attack = d20.roll(&mut roller, RollRequest::new().times(3).bonus(2).show_each(true))?;
    println!("{:?} x3 +2 = {}", d20, attack);

    let d6 = Die::new(6);
    println!("{:?} + {:?} = {}", d6, d20, d6.combine(&d20, &mut roller)?);

    let coin = Die::with_faces(2, ["heads", "tails"])?;
    println!("{:?} flipped {}", coin, coin.roll(&mut roller, RollRequest::new().times(3))?);

    let mut plotter = TextPlotter::new(io::stdout().lock(), config.plot.bar_width);
    if let Err(e) = d6.plot_histogram(&mut roller, &config.stats, &mut plotter) {
        tracing::error!("histogram error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
