use clap::{Parser, Subcommand};

mod catalog;
mod run;

#[derive(Debug, Parser)]
#[command(name = "brandcast")]
#[command(about = "Brand analysis and marketing content generation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the full pipeline: analyze a website, generate content, export.
    Run(run::RunArgs),
    /// Print the selectable content types and platforms.
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run::run_pipeline(args).await,
        Commands::Catalog => {
            catalog::print_catalog();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_args_split_comma_separated_lists() {
        let cli = Cli::try_parse_from([
            "brandcast",
            "run",
            "--url",
            "https://example.com",
            "--vertical",
            "Retail",
            "--types",
            "post,thread",
            "--platforms",
            "linkedin,twitter",
            "--formats",
            "html,csv",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run subcommand");
        };
        assert_eq!(args.types, vec!["post", "thread"]);
        assert_eq!(args.platforms, vec!["linkedin", "twitter"]);
        assert_eq!(args.formats, vec!["html", "csv"]);
        assert_eq!(args.quantity, 5);
    }

    #[test]
    fn catalog_takes_no_flags() {
        let cli = Cli::try_parse_from(["brandcast", "catalog"]).unwrap();
        assert!(matches!(cli.command, Commands::Catalog));
    }
}
