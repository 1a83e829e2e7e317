use clap::Parser;
use miette::Result;

use mdt::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for readable diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::run(&cli.dir),
        Commands::Part(cmd) => commands::part::run(cmd, &cli.dir),
        Commands::Asm(cmd) => commands::asm::run(cmd, &cli.dir),
        Commands::Sup(cmd) => commands::sup::run(cmd, &cli.dir),
        Commands::Reload(cmd) => commands::reload::run(cmd, &cli.dir),
        Commands::Validate(args) => commands::validate::run(args, &cli.dir),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
