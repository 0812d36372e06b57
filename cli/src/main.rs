use affiliate_matching_core::{
    build_instance, ExperimentConfig, ExperimentRunner, Instance, PreferenceScheme, RngManager,
    StabilityCriterion, StrategyConfig,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "affiliate-matching")]
#[command(about = "Stable matching with linked affiliates - experiment driver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search instances for stable matchings and report trial counts
    Run {
        /// Applicants (and employers) per instance
        #[arg(long, default_value_t = 5)]
        agents: usize,

        /// Number of independent instances to probe
        #[arg(long, default_value_t = 10)]
        instances: usize,

        /// Matching attempts per instance before giving up
        #[arg(long, default_value_t = 100_000)]
        trials: usize,

        /// RNG seed; a (config, seed) pair reproduces the full run
        #[arg(long, default_value_t = 12345)]
        seed: u64,

        #[arg(long, value_enum, default_value = "random")]
        scheme: SchemeArg,

        #[arg(long, value_enum, default_value = "random")]
        strategy: StrategyArg,

        #[arg(long, value_enum, default_value = "combined")]
        criterion: CriterionArg,

        /// Emit the full report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Build one instance and print its preference tables
    Show {
        #[arg(long, default_value_t = 5)]
        agents: usize,

        #[arg(long, default_value_t = 12345)]
        seed: u64,

        #[arg(long, value_enum, default_value = "random")]
        scheme: SchemeArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    Cyclic,
    Random,
}

impl From<SchemeArg> for PreferenceScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Cyclic => PreferenceScheme::Cyclic,
            SchemeArg::Random => PreferenceScheme::Random,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Random,
    DeferredAcceptance,
}

impl From<StrategyArg> for StrategyConfig {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => StrategyConfig::Random,
            StrategyArg::DeferredAcceptance => StrategyConfig::DeferredAcceptance,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CriterionArg {
    OwnPreferences,
    Combined,
}

impl From<CriterionArg> for StabilityCriterion {
    fn from(arg: CriterionArg) -> Self {
        match arg {
            CriterionArg::OwnPreferences => StabilityCriterion::OwnPreferences,
            CriterionArg::Combined => StabilityCriterion::Combined,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            agents,
            instances,
            trials,
            seed,
            scheme,
            strategy,
            criterion,
            json,
        } => run_experiment(
            ExperimentConfig {
                n_agents: agents,
                n_instances: instances,
                trials_per_instance: trials,
                rng_seed: seed,
                scheme: scheme.into(),
                strategy: strategy.into(),
                criterion: criterion.into(),
            },
            json,
        ),
        Commands::Show {
            agents,
            seed,
            scheme,
        } => show_instance(agents, seed, scheme.into()),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run_experiment(
    config: ExperimentConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut runner = ExperimentRunner::new(config)?;
    let report = runner.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for result in &report.instances {
        let tag = &result.digest[..12];
        if result.solved {
            println!(
                "Instance {} ({}): solved in {} trial(s)",
                result.instance, tag, result.trials_used
            );
            if let Some(assignment) = &result.assignment {
                for (employer, applicant) in assignment.iter().enumerate() {
                    println!("  Applicant {} is matched with employer {}", applicant, employer);
                }
            }
        } else {
            println!(
                "Instance {} ({}): unsolved in {} trials",
                result.instance, tag, result.trials_used
            );
        }
    }

    println!(
        "Solved {}/{} instances (run {})",
        report.solved_count,
        report.instances.len(),
        report.run_id
    );
    Ok(())
}

fn show_instance(
    agents: usize,
    seed: u64,
    scheme: PreferenceScheme,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = RngManager::new(seed);
    let instance = build_instance(agents, scheme, &mut rng)?;

    print_instance(&instance);
    Ok(())
}

fn print_instance(instance: &Instance) {
    println!("Instance digest: {}", instance.digest());

    for emp in instance.employers() {
        println!(
            "Applicant {} is affiliated with employer {}",
            emp.affiliate(),
            emp.id()
        );
    }

    for app in instance.applicants() {
        println!("Applicant {} prefers employers {:?}", app.id(), app.prefs());
    }

    for emp in instance.employers() {
        println!(
            "Employer {} prefers applicants {:?}",
            emp.id(),
            emp.own_prefs()
        );
        println!(
            "Employer {} prefers employers {:?} for its affiliate",
            emp.id(),
            emp.aff_prefs()
        );
        println!(
            "Employer {} combined order: {:?}",
            emp.id(),
            emp.combined_prefs()
        );
    }
}
