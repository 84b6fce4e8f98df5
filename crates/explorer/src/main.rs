use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    let config = common::config::Config::load_or_default();

    let dispatch = common::observability::build_dispatch(&config.general.log_level);
    tracing::dispatcher::set_global_default(dispatch).map_err(anyhow::Error::msg)?;

    let cmd = cli::parse_args(std::env::args()).map_err(anyhow::Error::msg)?;
    cli::run_command(&config, cmd)
}
