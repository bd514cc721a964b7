use anyhow::Context;
use clap::Parser;
use nullprobe::config::{self, RunConfig};
use nullprobe::report::Reporter;
use nullprobe::scenario::{self, Kind};
use nullprobe::{np_info, probe};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run only the named demonstrations (repeatable); all of them by default.
    #[arg(long, value_name = "KIND")]
    scenario: Vec<String>,

    /// Suppress progress logging, diagnostic lines are printed regardless.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::init();

    let scenarios = if args.scenario.is_empty() {
        Kind::all().to_vec()
    } else {
        args.scenario
            .iter()
            .map(|name| Kind::parse(name))
            .collect::<Result<Vec<_>, _>>()?
    };

    if args.quiet {
        nullprobe::log::disable();
    }
    config::set(RunConfig {
        quiet: args.quiet,
        scenarios,
    });

    probe::warmup(42);

    let mut reporter = Reporter::stdout();
    for &kind in &config::current().scenarios {
        let outcome = scenario::run(kind);
        reporter
            .report(&outcome)
            .with_context(|| format!("report scenario {kind}"))?;
    }

    np_info!("fixture run complete");

    Ok(())
}
