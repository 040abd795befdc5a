use clap::Parser;
use texembed_utils::{ok, AnyResult};

fn main() -> AnyResult {
    let cli = match texembed::Cli::try_parse_from(wild::args()) {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            print!("{}", err.render());
            std::process::exit(1);
        }
    };

    pretty_env_logger::formatted_builder()
        .format_indent(None)
        .format_timestamp(None)
        .filter_level(cli.log_level())
        .init();

    texembed::run(cli)?;
    ok()
}
