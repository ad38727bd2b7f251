use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gem_compare::cli::{Cli, Commands, ValidateArgs};
use gem_compare::config::AnalysisConfig;
use gem_compare::ctx::Ctx;
use gem_compare::io::summary;
use gem_compare::pipeline::stage1_load::Stage1Load;
use gem_compare::pipeline::stage2_classify::Stage2Classify;
use gem_compare::pipeline::Pipeline;
use gem_compare::schema::Category;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = dispatch(cli) {
        eprintln!("analysis failed: {err:#}");
        eprintln!("Check:");
        eprintln!("  1. the input workbook path exists and is readable");
        eprintln!("  2. the sheet name matches a sheet in the workbook");
        eprintln!("  3. the identifier and metric columns are present in the header");
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => {
            let config = args.into_config();
            let mut ctx = Ctx::new(config);
            let pipeline = Pipeline::full();
            pipeline.run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let ctx = run_validate(args)?;
            print_validate_summary(&ctx);
        }
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<Ctx> {
    let mut config = AnalysisConfig::default();
    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(sheet) = args.sheet {
        config.sheet_name = sheet;
    }

    let mut ctx = Ctx::new(config);
    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Load::new()),
        Box::new(Stage2Classify::new()),
    ]);
    pipeline.run(&mut ctx)?;
    Ok(ctx)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("gem-compare validate ok");
    println!("models kept: {}", ctx.dataset.len());
    println!("discarded as Other: {}", ctx.discarded);
    for category in Category::RECOGNIZED {
        println!("{}\t{}", category, ctx.dataset.category_count(category));
    }
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
