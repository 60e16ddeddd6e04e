use anyhow::Context;
use clap::Parser;
use greekosystem::conf::{Conf, Env, EnvConf};
use greekosystem::startup::Application;
use greekosystem::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Serves the Greekosystem login page")]
struct Args {
    /// Directory holding `default.yaml` and the per-environment overrides
    #[arg(long)]
    conf_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env = Env::derive().map_err(anyhow::Error::msg)?;
    let env_conf = EnvConf::derive(env, args.conf_dir).context("Failed to load configuration")?;

    let subscriber = telemetry::TracingSubscriber::new("greekosystem")
        .pretty(env_conf.log.pretty)
        .build(std::io::stdout);
    telemetry::init_global_default(subscriber);

    let conf = Conf::new(env, env_conf);

    let application = Application::build(&conf)?;

    application.server().await?;

    Ok(())
}
